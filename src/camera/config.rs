use std::f32::consts::{FRAC_PI_2, FRAC_PI_6};

use bevy::{
    ecs::{reflect::ReflectResource, resource::Resource},
    reflect::Reflect,
};
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;

/// Pitch never leaves `[-PITCH_LIMIT, PITCH_LIMIT]`.
pub const PITCH_LIMIT: f32 = FRAC_PI_2;

/// Tuning knobs for the orbit camera. Every value can be changed live from the
/// settings inspector.
#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone, Copy)]
#[reflect(Resource, InspectorOptions)]
pub struct OrbitSettings {
    /// Closest allowed orbit radius.
    #[inspector(min = 1.0, max = 1000.0)]
    pub zoom_min: f32,
    /// Farthest allowed orbit radius.
    #[inspector(min = 1.0, max = 1000.0)]
    pub zoom_max: f32,
    /// Radians per pixel of drag, before the zoom damp is applied.
    #[inspector(min = 0.0001, max = 0.05)]
    pub drag_sensitivity: f32,
    /// Drag sensitivity scales with `distance / zoom_damp_divisor`.
    #[inspector(min = 1.0, max = 10000.0)]
    pub zoom_damp_divisor: f32,
    /// Distance units per wheel unit (legacy `wheelDeltaY` scale).
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub wheel_scale: f32,
    /// Wheel units per line-scrolled notch.
    #[inspector(min = 1.0, max = 500.0)]
    pub wheel_line_units: f32,
    /// Fraction of the remaining yaw/pitch gap closed each frame.
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub orientation_smoothing: f32,
    /// Fraction of the remaining distance gap closed each frame.
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub distance_smoothing: f32,
    pub initial_yaw: f32,
    pub initial_pitch: f32,
    pub initial_distance: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            zoom_min: 120.0,
            zoom_max: 300.0,
            drag_sensitivity: 0.005,
            zoom_damp_divisor: 1000.0,
            wheel_scale: 0.1,
            wheel_line_units: 120.0,
            orientation_smoothing: 0.1,
            distance_smoothing: 0.3,
            initial_yaw: 3.0 * FRAC_PI_2,
            initial_pitch: FRAC_PI_6,
            initial_distance: 300.0,
        }
    }
}

impl OrbitSettings {
    /// Zoom range as an ordered `(min, max)` pair, even if the inspector left
    /// the bounds swapped.
    pub fn zoom_range(&self) -> (f32, f32) {
        (self.zoom_min.min(self.zoom_max), self.zoom_min.max(self.zoom_max))
    }

    pub fn clamp_distance(&self, distance: f32) -> f32 {
        let (min, max) = self.zoom_range();
        distance.clamp(min, max)
    }
}
