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

use bevy::{
    ecs::{component::Component, reflect::ReflectComponent},
    math::Vec3,
    reflect::Reflect,
    transform::components::Transform,
};

use crate::camera::config::{OrbitSettings, PITCH_LIMIT};
use crate::input::tracker::CameraTarget;

/// Smoothed orbit state of the camera. Follows the [`CameraTarget`] a fixed
/// fraction per frame and keeps the camera facing `look_at`.
#[derive(Component, Reflect, Debug, Clone, PartialEq)]
#[reflect(Component)]
pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    distance: f32,
    look_at: Vec3,
}

impl OrbitCamera {
    pub fn new(look_at: Vec3, settings: &OrbitSettings) -> Self {
        Self {
            yaw: settings.initial_yaw,
            pitch: settings.initial_pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            distance: settings.clamp_distance(settings.initial_distance),
            look_at,
        }
    }

    /// Live orbit radius.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// `(yaw, pitch)` in radians.
    pub fn orientation(&self) -> (f32, f32) {
        (self.yaw, self.pitch)
    }

    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    /// Point on the orbit sphere for the current state.
    pub fn position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.look_at
            + self.distance * Vec3::new(sin_yaw * cos_pitch, sin_pitch, cos_yaw * cos_pitch)
    }

    /// Advances one frame. The step is a fixed fraction of the remaining gap,
    /// independent of frame time.
    pub fn tick(&mut self, target: &CameraTarget, settings: &OrbitSettings, transform: &mut Transform) {
        let turn = settings.orientation_smoothing.clamp(0.0, 1.0);
        let zoom = settings.distance_smoothing.clamp(0.0, 1.0);

        self.yaw += (target.yaw - self.yaw) * turn;
        self.pitch += (target.pitch - self.pitch) * turn;
        self.distance += (target.distance - self.distance) * zoom;

        self.place(transform);
    }

    /// Writes position and facing into `transform` without advancing.
    pub fn place(&self, transform: &mut Transform) {
        transform.translation = self.position();
        transform.look_at(self.look_at, Vec3::Y);
    }
}
