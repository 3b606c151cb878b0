use bevy::{
    asset::Assets,
    color::Color,
    ecs::{
        name::Name,
        system::{Commands, ResMut},
    },
    log::info,
    math::primitives::Sphere,
    pbr::{MeshMaterial3d, StandardMaterial},
    render::mesh::{Mesh, Mesh3d, Meshable},
    transform::components::Transform,
    utils::default,
};

use crate::globe::components::Globe;

pub fn spawn_globe(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let globe = Globe::default();
    let mesh = meshes.add(Sphere::new(globe.radius).mesh().uv(64, 32));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.12, 0.28, 0.55),
        perceptual_roughness: 0.6,
        metallic: 0.0,
        ..default()
    });

    commands.spawn((
        Name::new("Globe"),
        globe,
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::default(),
    ));
    info!("Globe spawned (radius {})", globe.radius);
}
