use bevy::{
    ecs::{
        query::With,
        system::{Query, Res, ResMut},
    },
    log::debug,
    render::camera::{CameraProjection, Projection},
    transform::components::Transform,
};

use crate::camera::components::OrbitCamera;
use crate::globe::components::{Globe, GlobeHover};
use crate::globe::pick::{lat_lon_degrees, pointer_ray, ray_sphere_hit};
use crate::input::tracker::InputTracker;

// Casts the pointer into the scene and records which part of the globe it is over.
// Reads the camera Transform written by the tick this frame, not the propagated
// GlobalTransform, so picking never trails the camera.
pub fn update_globe_hover(
    tracker: Res<InputTracker>,
    cameras: Query<(&Transform, &Projection), With<OrbitCamera>>,
    globes: Query<(&Transform, &Globe)>,
    mut hover: ResMut<GlobeHover>,
) {
    let lat_lon = tracker.pointer_ndc().and_then(|ndc| {
        let (camera_transform, projection) = cameras.single().ok()?;
        let (globe_transform, globe) = globes.single().ok()?;

        let (origin, direction) =
            pointer_ray(camera_transform, projection.get_clip_from_view(), ndc)?;
        let centre = globe_transform.translation;
        ray_sphere_hit(origin, direction.as_vec3(), centre, globe.radius)
            .map(|point| lat_lon_degrees(point, centre))
    });

    if hover.lat_lon != lat_lon {
        match lat_lon {
            Some(lat_lon) => debug!("Hovering lat {:.2}, lon {:.2}", lat_lon.x, lat_lon.y),
            None => debug!("Pointer left the globe"),
        }
        hover.lat_lon = lat_lon;
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use bevy::prelude::*;
    use bevy::render::camera::PerspectiveProjection;

    use super::*;
    use crate::camera::config::OrbitSettings;

    fn app() -> App {
        let settings = OrbitSettings::default();
        let orbit = OrbitCamera::new(Vec3::ZERO, &settings);
        let mut transform = Transform::default();
        orbit.place(&mut transform);

        let mut tracker = InputTracker::new(&settings);
        tracker.set_viewport(800.0, 800.0);

        let mut app = App::new();
        app.insert_resource(tracker)
            .init_resource::<GlobeHover>()
            .add_systems(Update, update_globe_hover);
        app.world_mut().spawn((
            transform,
            Projection::Perspective(PerspectiveProjection {
                fov: PI / 6.0,
                aspect_ratio: 1.0,
                ..default()
            }),
            orbit,
        ));
        app.world_mut().spawn((Transform::default(), Globe::default()));
        app
    }

    fn hover(app: &App) -> Option<Vec2> {
        app.world().resource::<GlobeHover>().lat_lon
    }

    #[test]
    fn centre_of_view_hits_the_globe_facing_the_camera() {
        let mut app = app();
        app.world_mut()
            .resource_mut::<InputTracker>()
            .on_touch_move(Vec2::new(400.0, 400.0));
        app.update();

        // the default orbit sits at yaw 3π/2, pitch π/6
        let lat_lon = hover(&app);
        assert!(lat_lon.is_some_and(|ll| (ll.x - 30.0).abs() < 0.1 && (ll.y.abs() - 90.0).abs() < 0.1));
    }

    #[test]
    fn corner_of_view_misses_and_clears() {
        let mut app = app();
        app.world_mut()
            .resource_mut::<InputTracker>()
            .on_touch_move(Vec2::new(400.0, 400.0));
        app.update();
        assert!(hover(&app).is_some());

        app.world_mut()
            .resource_mut::<InputTracker>()
            .on_touch_move(Vec2::new(800.0, 0.0));
        app.update();
        assert_eq!(hover(&app), None);
    }

    #[test]
    fn cleared_pointer_clears_the_hover() {
        let mut app = app();
        app.world_mut()
            .resource_mut::<InputTracker>()
            .on_touch_move(Vec2::new(400.0, 400.0));
        app.update();
        assert!(hover(&app).is_some());

        app.world_mut().resource_mut::<InputTracker>().clear_pointer();
        app.update();
        assert_eq!(hover(&app), None);
    }

    #[test]
    fn hover_follows_the_camera_in_the_same_frame() {
        let mut app = app();
        app.world_mut()
            .resource_mut::<InputTracker>()
            .on_touch_move(Vec2::new(400.0, 400.0));
        app.update();

        let mut camera = app
            .world_mut()
            .query_filtered::<&mut Transform, With<OrbitCamera>>();
        if let Ok(mut transform) = camera.single_mut(app.world_mut()) {
            *transform = Transform::from_xyz(0.0, 0.0, 300.0).looking_at(Vec3::ZERO, Vec3::Y);
        }
        app.update();

        assert!(hover(&app).is_some_and(|ll| ll.abs_diff_eq(Vec2::ZERO, 0.1)));
    }
}
