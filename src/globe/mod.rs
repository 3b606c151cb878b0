pub mod components;
pub mod pick;
pub mod setup;
pub mod systems;
