use crate::components::{Character, PlayerStateId};
use crate::fsm::{EntityState, StateCore};

use super::can_dash;

/// Reduced horizontal steering while in the air. No input leaves velocity
/// untouched.
pub(super) fn apply_air_control(ch: &mut Character) {
    if ch.move_dir() != 0 {
        let speed = ch.tuning.move_speed * ch.tuning.in_air_move_multiplier;
        ch.set_velocity(ch.move_input.x * speed, ch.velocity.y);
    }
}

/// Input-driven rules shared by the airborne states.
pub(super) fn airborne_transition(ch: &Character) -> Option<PlayerStateId> {
    if ch.input.attack {
        return Some(PlayerStateId::JumpAttack);
    }
    if can_dash(ch) {
        return Some(PlayerStateId::Dash);
    }
    None
}

pub struct JumpState;

impl EntityState<Character, PlayerStateId> for JumpState {
    fn enter(&mut self, _core: &mut StateCore, ch: &mut Character) {
        ch.set_velocity(ch.velocity.x, ch.tuning.jump_force);
    }

    fn update(&mut self, _core: &mut StateCore, ch: &mut Character) -> Option<PlayerStateId> {
        apply_air_control(ch);
        if let Some(next) = airborne_transition(ch) {
            return Some(next);
        }
        if ch.velocity.y < 0.0 {
            return Some(PlayerStateId::Fall);
        }
        None
    }
}

pub struct FallState;

impl EntityState<Character, PlayerStateId> for FallState {
    fn update(&mut self, _core: &mut StateCore, ch: &mut Character) -> Option<PlayerStateId> {
        apply_air_control(ch);
        if ch.ground_detected {
            return Some(PlayerStateId::Idle);
        }
        if ch.wall_detected {
            return Some(PlayerStateId::WallSlide);
        }
        airborne_transition(ch)
    }
}
