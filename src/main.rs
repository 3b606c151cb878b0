mod camera;
mod globe;
mod input;
mod lighting;

use bevy::input::common_conditions::input_toggle_active;
use bevy::prelude::*;
use bevy_inspector_egui::bevy_egui::EguiPlugin;
use bevy_inspector_egui::quick::{ResourceInspectorPlugin, WorldInspectorPlugin};

use camera::{OrbitCameraPlugin, config::OrbitSettings};
use globe::setup::spawn_globe;
use lighting::setup::setup_camera_light;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Globe Viewer".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .add_plugins(WorldInspectorPlugin::new().run_if(input_toggle_active(false, KeyCode::F1)))
        .add_plugins(
            ResourceInspectorPlugin::<OrbitSettings>::default()
                .run_if(input_toggle_active(false, KeyCode::F2)),
        )
        .add_plugins(OrbitCameraPlugin)
        .insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.04)))
        // the camera looks at wherever the globe was spawned
        .add_systems(Startup, (spawn_globe, setup_camera_light).chain())
        .run();
}
