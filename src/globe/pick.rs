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
    math::{Dir3, Mat4, Vec2, Vec3},
    transform::components::Transform,
};

/// Nearest intersection of a ray with a sphere, in front of the origin.
/// `direction` must be normalized. A ray starting inside the sphere hits the
/// far side.
pub fn ray_sphere_hit(origin: Vec3, direction: Vec3, centre: Vec3, radius: f32) -> Option<Vec3> {
    let oc = origin - centre;
    let b = oc.dot(direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let near = -b - root;
    let t = if near >= 0.0 { near } else { -b + root };
    (t >= 0.0).then(|| origin + direction * t)
}

/// World-space ray from the camera through a point given in normalized device
/// coordinates. `clip_from_view` is the camera projection matrix.
pub fn pointer_ray(camera: &Transform, clip_from_view: Mat4, ndc: Vec2) -> Option<(Vec3, Dir3)> {
    let world_from_clip = camera.compute_matrix() * clip_from_view.inverse();
    // bevy uses reversed depth, the near plane sits at z = 1
    let near = world_from_clip.project_point3(ndc.extend(1.0));
    let direction = Dir3::new(near - camera.translation).ok()?;
    Some((camera.translation, direction))
}

/// `(latitude, longitude)` in degrees of a point relative to the globe
/// centre. Longitude follows the orbit yaw convention: 0° on +Z, 90° on +X.
pub fn lat_lon_degrees(point: Vec3, centre: Vec3) -> Vec2 {
    let local = (point - centre).normalize_or_zero();
    let lat = local.y.clamp(-1.0, 1.0).asin();
    let lon = local.x.atan2(local.z);
    Vec2::new(lat.to_degrees(), lon.to_degrees())
}
