use bevy::{
    ecs::system::{Query, Res},
    log::trace,
    transform::components::Transform,
};

use crate::camera::{components::OrbitCamera, config::OrbitSettings};
use crate::input::tracker::InputTracker;

// Per-frame orbit integration, runs once per rendered frame
pub fn orbit_camera_tick(
    tracker: Res<InputTracker>,
    settings: Res<OrbitSettings>,
    mut camera_query: Query<(&mut Transform, &mut OrbitCamera)>,
) {
    let Ok((mut transform, mut orbit)) = camera_query.single_mut() else {
        return;
    };

    orbit.tick(tracker.target(), &settings, &mut transform);

    let (yaw, pitch) = orbit.orientation();
    trace!(
        "Orbit yaw {yaw:.4} pitch {pitch:.4} distance {:.2}",
        orbit.distance()
    );
}
