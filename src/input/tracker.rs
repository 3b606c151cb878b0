// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Pointer, wheel and touch bookkeeping for the orbit camera.
//!
//! The tracker only ever writes the [`CameraTarget`]; the smoothed camera
//! state lives on [`OrbitCamera`](crate::camera::components::OrbitCamera).

use bevy::ecs::resource::Resource;
use bevy::math::Vec2;

use crate::camera::config::{OrbitSettings, PITCH_LIMIT};

/// Where the input wants the camera to be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl CameraTarget {
    pub fn new(settings: &OrbitSettings) -> Self {
        Self {
            yaw: settings.initial_yaw,
            pitch: settings.initial_pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            distance: settings.clamp_distance(settings.initial_distance),
        }
    }
}

/// One drag gesture, from press to release.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    /// Pointer at drag start with the horizontal axis inverted.
    last_pointer: Vec2,
    yaw_at_start: f32,
    pitch_at_start: f32,
}

#[derive(Resource, Debug, Clone)]
pub struct InputTracker {
    target: CameraTarget,
    session: Option<DragSession>,
    viewport: Vec2,
    pointer_ndc: Option<Vec2>,
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new(&OrbitSettings::default())
    }
}

impl InputTracker {
    pub fn new(settings: &OrbitSettings) -> Self {
        Self {
            target: CameraTarget::new(settings),
            session: None,
            viewport: Vec2::ONE,
            pointer_ndc: None,
        }
    }

    pub fn target(&self) -> &CameraTarget {
        &self.target
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Last pointer position in normalized device coordinates, if any.
    pub fn pointer_ndc(&self) -> Option<Vec2> {
        self.pointer_ndc
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if !width.is_finite() || !height.is_finite() {
            return;
        }
        self.viewport = Vec2::new(width.max(1.0), height.max(1.0));
    }

    /// Starts a drag at `pointer` (viewport pixels). Ignored while a drag is
    /// already running.
    pub fn on_drag_start(&mut self, pointer: Vec2) {
        if self.session.is_some() || !pointer.is_finite() {
            return;
        }
        self.session = Some(DragSession {
            last_pointer: Vec2::new(-pointer.x, pointer.y),
            yaw_at_start: self.target.yaw,
            pitch_at_start: self.target.pitch,
        });
    }

    /// Moves the target orientation relative to where the drag started.
    ///
    /// Sensitivity scales with `current_distance`, so a closer camera turns
    /// less per pixel. Yaw is left unbounded; pitch is clamped to the poles.
    pub fn on_drag_move(&mut self, pointer: Vec2, current_distance: f32, settings: &OrbitSettings) {
        let Some(session) = self.session else {
            return;
        };
        if !pointer.is_finite() || !current_distance.is_finite() {
            return;
        }

        let pointer = Vec2::new(-pointer.x, pointer.y);
        let zoom_damp = current_distance / settings.zoom_damp_divisor;
        let step = (pointer - session.last_pointer) * settings.drag_sensitivity * zoom_damp;
        if !step.is_finite() {
            return;
        }

        self.target.yaw = session.yaw_at_start + step.x;
        self.target.pitch = (session.pitch_at_start + step.y).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn on_drag_end(&mut self) {
        self.session = None;
    }

    /// Pointer left the surface mid-drag. Same effect as [`Self::on_drag_end`].
    pub fn on_drag_cancel(&mut self) {
        self.on_drag_end();
    }

    /// Positive deltas (scroll up) pull the camera closer.
    pub fn on_wheel(&mut self, delta_y: f32, settings: &OrbitSettings) {
        let distance = self.target.distance - delta_y * settings.wheel_scale;
        if !distance.is_finite() {
            return;
        }
        self.target.distance = settings.clamp_distance(distance);
    }

    /// Records the pointer in normalized device coordinates for picking.
    /// Never changes the camera target.
    pub fn on_touch_move(&mut self, pointer: Vec2) {
        if !pointer.is_finite() {
            return;
        }
        self.pointer_ndc = Some(Vec2::new(
            pointer.x / self.viewport.x * 2.0 - 1.0,
            -(pointer.y / self.viewport.y) * 2.0 + 1.0,
        ));
    }

    /// Pulls the target back inside the current zoom range and pitch limits,
    /// for when the settings change underneath it.
    pub fn reclamp(&mut self, settings: &OrbitSettings) {
        self.target.distance = settings.clamp_distance(self.target.distance);
        self.target.pitch = self.target.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer_ndc = None;
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_6};

    use super::*;

    fn tracker() -> (InputTracker, OrbitSettings) {
        let settings = OrbitSettings::default();
        (InputTracker::new(&settings), settings)
    }

    #[test]
    fn starts_at_initial_target() {
        let (tracker, _) = tracker();
        let target = tracker.target();
        assert!((target.yaw - 3.0 * FRAC_PI_2).abs() < 1e-6);
        assert!((target.pitch - FRAC_PI_6).abs() < 1e-6);
        assert_eq!(target.distance, 300.0);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn wheel_scenario_from_max_distance() {
        let (mut tracker, settings) = tracker();
        tracker.on_wheel(100.0, &settings);
        assert!((tracker.target().distance - 290.0).abs() < 1e-4);
    }

    #[test]
    fn wheel_distance_stays_in_zoom_range() {
        let (mut tracker, settings) = tracker();
        let deltas = [
            5000.0, -12.5, 1e9, -1e9, 240.0, 0.0, -3.0, 777.0, -2400.0, 33.3, f32::MAX, f32::MIN,
        ];
        for delta in deltas.iter().cycle().take(200) {
            tracker.on_wheel(*delta, &settings);
            let distance = tracker.target().distance;
            assert!((120.0..=300.0).contains(&distance), "distance {distance} out of range");
        }
    }

    #[test]
    fn drag_pitch_stays_within_poles() {
        let (mut tracker, settings) = tracker();
        tracker.on_drag_start(Vec2::new(0.0, 0.0));
        for step in -50..50 {
            let y = step as f32 * 1000.0;
            tracker.on_drag_move(Vec2::new(step as f32, y), 300.0, &settings);
            let pitch = tracker.target().pitch;
            assert!((-FRAC_PI_2..=FRAC_PI_2).contains(&pitch), "pitch {pitch} out of range");
        }
    }

    #[test]
    fn drag_without_movement_keeps_target() {
        let (mut tracker, settings) = tracker();
        let before = *tracker.target();
        tracker.on_drag_start(Vec2::new(42.0, 17.0));
        tracker.on_drag_move(Vec2::new(42.0, 17.0), 300.0, &settings);
        assert_eq!(*tracker.target(), before);
    }

    #[test]
    fn drag_scenario_yaw_uses_inverted_x() {
        let (mut tracker, settings) = tracker();
        let yaw_at_start = tracker.target().yaw;
        let pitch_at_start = tracker.target().pitch;

        tracker.on_drag_start(Vec2::new(100.0, 100.0));
        tracker.on_drag_move(Vec2::new(150.0, 100.0), 300.0, &settings);

        assert!((tracker.target().yaw - yaw_at_start - -0.075).abs() < 1e-5);
        assert!((tracker.target().pitch - pitch_at_start).abs() < 1e-6);
    }

    #[test]
    fn closer_camera_drags_less() {
        let (mut far, settings) = tracker();
        let mut near = far.clone();
        let start = far.target().yaw;

        for (tracker, distance) in [(&mut far, 300.0), (&mut near, 120.0)] {
            tracker.on_drag_start(Vec2::ZERO);
            tracker.on_drag_move(Vec2::new(-100.0, 0.0), distance, &settings);
        }

        assert!((far.target().yaw - start - 0.15).abs() < 1e-5);
        assert!((near.target().yaw - start - 0.06).abs() < 1e-5);
    }

    #[test]
    fn stray_move_is_ignored() {
        let (mut tracker, settings) = tracker();
        let before = *tracker.target();
        tracker.on_drag_move(Vec2::new(500.0, -300.0), 300.0, &settings);
        assert_eq!(*tracker.target(), before);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn second_drag_start_keeps_first_snapshot() {
        let (mut tracker, settings) = tracker();
        let yaw_at_start = tracker.target().yaw;

        tracker.on_drag_start(Vec2::new(0.0, 0.0));
        tracker.on_drag_move(Vec2::new(-200.0, 0.0), 1000.0, &settings);
        tracker.on_drag_start(Vec2::new(-200.0, 0.0));
        tracker.on_drag_move(Vec2::new(-200.0, 0.0), 1000.0, &settings);

        assert!((tracker.target().yaw - yaw_at_start - 1.0).abs() < 1e-5);
    }

    #[test]
    fn yaw_is_not_wrapped() {
        let (mut tracker, settings) = tracker();
        let start = tracker.target().yaw;
        tracker.on_drag_start(Vec2::ZERO);
        tracker.on_drag_move(Vec2::new(-10_000.0, 0.0), 1000.0, &settings);
        assert!((tracker.target().yaw - start - 50.0).abs() < 1e-3);
    }

    #[test]
    fn end_and_cancel_have_the_same_effect() {
        let (mut ended, settings) = tracker();
        ended.on_drag_start(Vec2::new(10.0, 10.0));
        ended.on_drag_move(Vec2::new(30.0, 50.0), 200.0, &settings);
        let mut cancelled = ended.clone();

        ended.on_drag_end();
        cancelled.on_drag_cancel();

        assert!(!ended.is_dragging());
        assert!(!cancelled.is_dragging());
        assert_eq!(ended.target(), cancelled.target());

        // moves after either are stray
        let frozen = *ended.target();
        ended.on_drag_move(Vec2::new(900.0, 900.0), 200.0, &settings);
        cancelled.on_drag_move(Vec2::new(900.0, 900.0), 200.0, &settings);
        assert_eq!(*ended.target(), frozen);
        assert_eq!(*cancelled.target(), frozen);
    }

    #[test]
    fn non_finite_input_is_dropped() {
        let (mut tracker, settings) = tracker();
        let before = *tracker.target();

        tracker.on_wheel(f32::NAN, &settings);
        tracker.on_wheel(f32::INFINITY, &settings);
        tracker.on_drag_start(Vec2::new(f32::NAN, 0.0));
        assert!(!tracker.is_dragging());

        tracker.on_drag_start(Vec2::ZERO);
        tracker.on_drag_move(Vec2::new(f32::NAN, 1.0), 300.0, &settings);
        tracker.on_drag_move(Vec2::new(1.0, 1.0), f32::NAN, &settings);
        tracker.on_touch_move(Vec2::new(f32::INFINITY, 0.0));

        assert_eq!(*tracker.target(), before);
        assert_eq!(tracker.pointer_ndc(), None);
    }

    #[test]
    fn touch_move_records_ndc_only() {
        let (mut tracker, _) = tracker();
        let before = *tracker.target();
        tracker.set_viewport(800.0, 600.0);

        tracker.on_touch_move(Vec2::new(400.0, 300.0));
        assert_eq!(tracker.pointer_ndc(), Some(Vec2::ZERO));

        tracker.on_touch_move(Vec2::new(0.0, 0.0));
        assert_eq!(tracker.pointer_ndc(), Some(Vec2::new(-1.0, 1.0)));

        tracker.on_touch_move(Vec2::new(800.0, 600.0));
        assert_eq!(tracker.pointer_ndc(), Some(Vec2::new(1.0, -1.0)));

        assert_eq!(*tracker.target(), before);
        tracker.clear_pointer();
        assert_eq!(tracker.pointer_ndc(), None);
    }

    #[test]
    fn reclamp_follows_new_zoom_range() {
        let (mut tracker, mut settings) = tracker();
        settings.zoom_max = 180.0;
        tracker.reclamp(&settings);
        assert_eq!(tracker.target().distance, 180.0);

        // swapped bounds still clamp into the range they describe
        settings.zoom_min = 260.0;
        settings.zoom_max = 200.0;
        tracker.reclamp(&settings);
        assert_eq!(tracker.target().distance, 200.0);
    }

    #[test]
    fn degenerate_viewport_is_raised_to_one_pixel() {
        let (mut tracker, _) = tracker();
        tracker.set_viewport(0.0, -5.0);
        assert_eq!(tracker.viewport(), Vec2::ONE);
    }
}
