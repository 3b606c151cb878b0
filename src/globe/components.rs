use bevy::{
    ecs::{component::Component, reflect::ReflectComponent, resource::Resource},
    math::Vec2,
    reflect::Reflect,
};

pub const GLOBE_RADIUS: f32 = 100.0;

#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct Globe {
    pub radius: f32,
}

impl Default for Globe {
    fn default() -> Self {
        Self { radius: GLOBE_RADIUS }
    }
}

/// Latitude/longitude (degrees) of the globe point under the pointer.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct GlobeHover {
    pub lat_lon: Option<Vec2>,
}
