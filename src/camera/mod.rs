pub mod components;
pub mod config;
pub mod systems;

use bevy::{
    app::{App, AppExit, Last, Plugin, Startup, Update},
    ecs::schedule::{IntoScheduleConfigs, common_conditions::resource_exists},
    window::WindowEvent,
};

use crate::globe::{
    components::{Globe, GlobeHover},
    systems::update_globe_hover,
};
use crate::input::{
    systems::{init_input_tracker, teardown_on_exit, track_pointer_input},
    tracker::InputTracker,
};
use components::OrbitCamera;
use config::OrbitSettings;
use systems::orbit_camera_tick;

/// Orbit controls for the globe: input tracking, per-frame camera integration
/// and pointer picking. Scene content is spawned elsewhere.
pub struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<OrbitSettings>()
            .register_type::<OrbitCamera>()
            .register_type::<Globe>()
            .init_resource::<OrbitSettings>()
            .init_resource::<GlobeHover>()
            .add_event::<WindowEvent>()
            .add_event::<AppExit>()
            .add_systems(Startup, init_input_tracker)
            .add_systems(
                Update,
                (track_pointer_input, orbit_camera_tick, update_globe_hover)
                    .chain()
                    .run_if(resource_exists::<InputTracker>),
            )
            .add_systems(Last, teardown_on_exit);
    }
}
