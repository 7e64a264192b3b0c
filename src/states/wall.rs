use crate::components::{Character, PlayerStateId};
use crate::fsm::{EntityState, StateCore};

use super::can_dash;

pub struct WallSlideState;

impl WallSlideState {
    /// Holding down slides at full speed; otherwise the fall is damped.
    fn handle_wall_slide(ch: &mut Character) {
        if ch.move_input.y < 0.0 {
            ch.set_velocity(ch.move_input.x, ch.velocity.y);
        } else {
            let slow = ch.tuning.wall_slide_slow_multiplier;
            ch.set_velocity(ch.move_input.x, ch.velocity.y * slow);
        }
    }
}

impl EntityState<Character, PlayerStateId> for WallSlideState {
    fn update(&mut self, _core: &mut StateCore, ch: &mut Character) -> Option<PlayerStateId> {
        Self::handle_wall_slide(ch);

        if ch.ground_detected {
            // Land facing away from the wall unless steering back into it.
            if ch.facing_dir() != ch.move_dir() {
                ch.flip();
            }
            return Some(PlayerStateId::Idle);
        }
        if ch.input.jump {
            return Some(PlayerStateId::WallJump);
        }
        if !ch.wall_detected {
            return Some(PlayerStateId::Fall);
        }
        None
    }
}

pub struct WallJumpState;

impl EntityState<Character, PlayerStateId> for WallJumpState {
    fn enter(&mut self, _core: &mut StateCore, ch: &mut Character) {
        let force = ch.tuning.wall_jump_force;
        ch.set_velocity(force.x * -ch.facing_dir() as f32, force.y);
    }

    fn update(&mut self, _core: &mut StateCore, ch: &mut Character) -> Option<PlayerStateId> {
        if ch.wall_detected {
            return Some(PlayerStateId::WallSlide);
        }
        if ch.velocity.y < 0.0 {
            return Some(PlayerStateId::Fall);
        }
        if can_dash(ch) {
            return Some(PlayerStateId::Dash);
        }
        None
    }
}
