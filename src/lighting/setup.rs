use bevy::{
    color::Color,
    core_pipeline::core_3d::Camera3d,
    ecs::{
        hierarchy::ChildOf,
        name::Name,
        query::With,
        system::{Commands, Query, Res},
    },
    log::info,
    math::{EulerRot, Quat, Vec3},
    pbr::{AmbientLight, DirectionalLight},
    render::camera::{PerspectiveProjection, Projection},
    transform::components::Transform,
    utils::default,
};

use crate::camera::{components::OrbitCamera, config::OrbitSettings};
use crate::globe::components::Globe;

pub fn setup_camera_light(
    mut commands: Commands,
    settings: Res<OrbitSettings>,
    globes: Query<&Transform, With<Globe>>,
) {
    let look_at = globes
        .single()
        .map(|transform| transform.translation)
        .unwrap_or(Vec3::ZERO);

    let orbit = OrbitCamera::new(look_at, &settings);
    let mut transform = Transform::default();
    orbit.place(&mut transform);

    info!(
        "Orbit camera looking at {} from distance {}",
        orbit.look_at(),
        orbit.distance()
    );

    let camera_entity = commands
        .spawn((
            Name::new("Orbit Camera"),
            Camera3d::default(),
            Projection::Perspective(PerspectiveProjection {
                fov: std::f32::consts::PI / 6.0, // 30 degrees
                near: 1.0,
                far: 10000.0,
                aspect_ratio: 1.0, // Will be adjusted automatically
            }),
            transform,
            orbit,
        ))
        .id();

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 150.0,
        affects_lightmapped_meshes: true,
    });

    // Key light rides with the camera so the visible hemisphere stays lit
    commands
        .spawn((
            DirectionalLight {
                color: Color::WHITE,
                illuminance: 3000.0,
                shadows_enabled: false,
                ..default()
            },
            Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.25, -0.25, 0.0)),
        ))
        .insert(ChildOf(camera_entity));
}
