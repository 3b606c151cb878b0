pub mod systems;
pub mod tracker;
