use crate::components::{Character, PlayerStateId};
use crate::fsm::{EntityState, StateCore};

use super::land_or_fall;

/// Fixed-speed horizontal burst with gravity suspended. Ends when the core
/// timer runs out or a wall is hit.
pub struct DashState {
    dash_dir: i32,
    original_gravity_scale: f32,
}

impl DashState {
    pub fn new() -> Self {
        Self {
            dash_dir: 1,
            original_gravity_scale: 1.0,
        }
    }
}

impl Default for DashState {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityState<Character, PlayerStateId> for DashState {
    fn enter(&mut self, core: &mut StateCore, ch: &mut Character) {
        self.dash_dir = ch.input_or_facing_dir();
        // Face the dash so the next wall probe looks where we are going.
        if self.dash_dir != ch.facing_dir() {
            ch.flip();
        }
        core.timer = ch.tuning.dash_duration;
        self.original_gravity_scale = ch.gravity_scale;
        ch.gravity_scale = 0.0;
    }

    fn update(&mut self, core: &mut StateCore, ch: &mut Character) -> Option<PlayerStateId> {
        if ch.wall_detected {
            return Some(land_or_fall(ch));
        }
        ch.set_velocity(ch.tuning.dash_speed * self.dash_dir as f32, 0.0);
        if core.timer < 0.0 {
            return Some(land_or_fall(ch));
        }
        None
    }

    fn exit(&mut self, _core: &mut StateCore, ch: &mut Character) {
        ch.set_velocity(0.0, 0.0);
        ch.gravity_scale = self.original_gravity_scale;
    }
}
