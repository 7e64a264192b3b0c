mod animation;
mod collision;
mod physics;
mod player;

pub use animation::animation_system;
pub use collision::{detection_system, ground_detected, wall_detected};
pub use physics::physics_step;
pub use player::{player_state_system, TransitionEvent};
