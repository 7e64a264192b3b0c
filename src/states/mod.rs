mod airborne;
mod basic_attack;
mod dash;
mod grounded;
mod jump_attack;
mod wall;

pub use airborne::{FallState, JumpState};
pub use basic_attack::BasicAttackState;
pub use dash::DashState;
pub use grounded::{IdleState, MoveState};
pub use jump_attack::JumpAttackState;
pub use wall::{WallJumpState, WallSlideState};

use crate::components::{Character, PlayerFsm, PlayerStateId};
use crate::config::PlayerConfig;
use crate::error::ConfigError;
use crate::fsm::StateMachine;

/// Animator parameter names.
pub mod anim {
    pub const IDLE: &str = "idle";
    pub const MOVE: &str = "move";
    /// Shared by jump, fall and wall jump.
    pub const JUMP_FALL: &str = "jumpFall";
    pub const WALL_SLIDE: &str = "wallSlide";
    pub const DASH: &str = "dash";
    pub const BASIC_ATTACK: &str = "basicAttack";
    pub const JUMP_ATTACK: &str = "jumpAttack";

    pub const BASIC_ATTACK_INDEX: &str = "basicAttackIndex";
    pub const JUMP_ATTACK_TRIGGER: &str = "jumpAttackTrigger";
}

/// Register every player state. Each is created once here and reused for
/// every activation; transition rules inside a state are evaluated top to
/// bottom and the first match wins.
pub fn build_player_fsm(tuning: &PlayerConfig) -> Result<PlayerFsm, ConfigError> {
    use PlayerStateId::*;

    Ok(StateMachine::new()
        .with_state(Idle, anim::IDLE, IdleState)
        .with_state(Move, anim::MOVE, MoveState)
        .with_state(Jump, anim::JUMP_FALL, JumpState)
        .with_state(Fall, anim::JUMP_FALL, FallState)
        .with_state(WallSlide, anim::WALL_SLIDE, WallSlideState)
        .with_state(WallJump, anim::JUMP_FALL, WallJumpState)
        .with_state(Dash, anim::DASH, DashState::new())
        .with_state(BasicAttack, anim::BASIC_ATTACK, BasicAttackState::new(&tuning.attack)?)
        .with_state(JumpAttack, anim::JUMP_ATTACK, JumpAttackState::new()))
}

/// Dash is available from any state that checks it, unless it would go
/// straight into the wall ahead.
fn can_dash(ch: &Character) -> bool {
    let into_wall = ch.wall_detected && ch.input_or_facing_dir() == ch.facing_dir();
    ch.input.dash && !into_wall
}

/// Where a state that ends on its own goes next.
fn land_or_fall(ch: &Character) -> PlayerStateId {
    if ch.ground_detected {
        PlayerStateId::Idle
    } else {
        PlayerStateId::Fall
    }
}
