use crate::components::{Character, PlayerStateId};
use crate::fsm::{EntityState, StateCore};

use super::can_dash;

/// Rules shared by every grounded state, checked before the state's own.
pub(super) fn grounded_transition(ch: &Character) -> Option<PlayerStateId> {
    if ch.input.jump {
        return Some(PlayerStateId::Jump);
    }
    // Walked off an edge.
    if ch.velocity.y < 0.0 && !ch.ground_detected {
        return Some(PlayerStateId::Fall);
    }
    if ch.input.attack {
        return Some(PlayerStateId::BasicAttack);
    }
    if can_dash(ch) {
        return Some(PlayerStateId::Dash);
    }
    None
}

/// Walls are only probed ahead, so input away from one is never blocked.
fn pushing_into_wall(ch: &Character) -> bool {
    ch.wall_detected && ch.move_dir() == ch.facing_dir()
}

pub struct IdleState;

impl EntityState<Character, PlayerStateId> for IdleState {
    fn enter(&mut self, _core: &mut StateCore, ch: &mut Character) {
        ch.set_velocity(0.0, ch.velocity.y);
    }

    fn update(&mut self, _core: &mut StateCore, ch: &mut Character) -> Option<PlayerStateId> {
        if let Some(next) = grounded_transition(ch) {
            return Some(next);
        }
        if pushing_into_wall(ch) {
            return None;
        }
        if ch.move_dir() != 0 {
            return Some(PlayerStateId::Move);
        }
        None
    }
}

pub struct MoveState;

impl EntityState<Character, PlayerStateId> for MoveState {
    fn update(&mut self, _core: &mut StateCore, ch: &mut Character) -> Option<PlayerStateId> {
        if let Some(next) = grounded_transition(ch) {
            return Some(next);
        }
        if ch.move_dir() == 0 || pushing_into_wall(ch) {
            return Some(PlayerStateId::Idle);
        }
        let speed = ch.tuning.move_speed;
        ch.set_velocity(ch.move_input.x * speed, ch.velocity.y);
        None
    }
}
