use glam::Vec2;

use crate::config::PlayerConfig;
use crate::engine::animator::Animator;
use crate::engine::input::ActionEdges;
use crate::error::ConfigError;
use crate::fsm::{DeferredTransition, StateContext, StateMachine};
use crate::states;

// ---------------------------------------------------------------------------
// Player state machine
// ---------------------------------------------------------------------------

/// All discrete states the player can be in.
///
/// Per-state behavior lives in `src/states/`; this enum only names them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PlayerStateId {
    Idle,
    Move,
    Jump,
    Fall,
    WallSlide,
    WallJump,
    Dash,
    BasicAttack,
    JumpAttack,
}

impl PlayerStateId {
    pub const ALL: [PlayerStateId; 9] = [
        Self::Idle,
        Self::Move,
        Self::Jump,
        Self::Fall,
        Self::WallSlide,
        Self::WallJump,
        Self::Dash,
        Self::BasicAttack,
        Self::JumpAttack,
    ];
}

pub type PlayerFsm = StateMachine<Character, PlayerStateId>;

// ---------------------------------------------------------------------------
// Character
// ---------------------------------------------------------------------------

/// Everything player states read and write. The host fills the signals and
/// input before each tick; states write velocity and animator parameters.
pub struct Character {
    pub tuning: PlayerConfig,
    facing_dir: i32,
    pub velocity: Vec2,
    /// Multiplier on world gravity, read by the physics step.
    pub gravity_scale: f32,
    pub move_input: Vec2,
    pub ground_detected: bool,
    pub wall_detected: bool,
    pub input: ActionEdges,
    /// Timestamp of the current tick, in seconds.
    pub time: f32,
    pub dt: f32,
    pub anim: Animator,
    deferred: DeferredTransition<PlayerStateId>,
}

impl Character {
    pub fn new(tuning: PlayerConfig) -> Self {
        Self {
            tuning,
            facing_dir: 1,
            velocity: Vec2::ZERO,
            gravity_scale: 1.0,
            move_input: Vec2::ZERO,
            ground_detected: false,
            wall_detected: false,
            input: ActionEdges::default(),
            time: 0.0,
            dt: 0.0,
            anim: Animator::new(),
            deferred: DeferredTransition::new(),
        }
    }

    /// +1 facing right, -1 facing left.
    pub fn facing_dir(&self) -> i32 {
        self.facing_dir
    }

    /// Set velocity and turn to face horizontal motion.
    pub fn set_velocity(&mut self, x: f32, y: f32) {
        self.velocity = Vec2::new(x, y);
        self.handle_flip(x);
    }

    fn handle_flip(&mut self, x: f32) {
        if (x > 0.0 && self.facing_dir < 0) || (x < 0.0 && self.facing_dir > 0) {
            self.flip();
        }
    }

    pub fn flip(&mut self) {
        self.facing_dir = -self.facing_dir;
    }

    /// Sign of the horizontal move input: -1, 0 or 1.
    pub fn move_dir(&self) -> i32 {
        axis_sign(self.move_input.x)
    }

    /// Held horizontal direction, falling back to facing.
    pub fn input_or_facing_dir(&self) -> i32 {
        match self.move_dir() {
            0 => self.facing_dir,
            dir => dir,
        }
    }

    /// Queue an attack re-entry for the next tick boundary, replacing any
    /// entry still pending.
    pub fn enter_attack_state_with_delay(&mut self) {
        if let Some(cancelled) = self.deferred.schedule(PlayerStateId::BasicAttack) {
            log::debug!("[player_state] replaced pending {cancelled:?} entry");
        }
    }

    pub fn pending_transition(&self) -> Option<PlayerStateId> {
        self.deferred.pending()
    }

    fn apply_frame(&mut self, frame: &TickFrame) {
        self.time = frame.time;
        self.dt = frame.dt;
        self.move_input = frame.move_input;
        self.input = frame.actions;
    }
}

impl StateContext for Character {
    fn animator_mut(&mut self) -> &mut Animator {
        &mut self.anim
    }

    fn delta_time(&self) -> f32 {
        self.dt
    }
}

fn axis_sign(x: f32) -> i32 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Per-tick input to [`PlayerController::tick`]. Ground and wall flags are
/// written to the character directly by detection.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickFrame {
    pub time: f32,
    pub dt: f32,
    pub move_input: Vec2,
    pub actions: ActionEdges,
}

/// What happened during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickReport {
    /// State entered from the deferred slot at the start of the tick.
    pub deferred: Option<PlayerStateId>,
    /// State entered from the active state's update.
    pub transition: Option<PlayerStateId>,
}

/// Attached to the player entity. Owns the character and every state
/// instance for the player's lifetime.
pub struct PlayerController {
    pub character: Character,
    fsm: PlayerFsm,
}

impl PlayerController {
    /// Fails when the tuning can't drive a combo (empty attack table).
    pub fn new(tuning: PlayerConfig) -> Result<Self, ConfigError> {
        let fsm = states::build_player_fsm(&tuning)?;
        Ok(Self {
            character: Character::new(tuning),
            fsm,
        })
    }

    /// Enter `Idle`. Call once, before the first tick.
    pub fn initialize(&mut self) {
        self.fsm.initialize(PlayerStateId::Idle, &mut self.character);
    }

    /// Apply the frame, run a pending deferred entry, then update the active
    /// state. Detection must already be refreshed for this tick.
    pub fn tick(&mut self, frame: TickFrame) -> TickReport {
        self.character.apply_frame(&frame);

        let deferred = self.character.deferred.take();
        if let Some(key) = deferred {
            self.fsm.change_state(key, &mut self.character);
        }

        let transition = self.fsm.update_active_state(&mut self.character);
        TickReport { deferred, transition }
    }

    /// Animation-authored event: forwarded to the active state.
    pub fn call_animation_trigger(&mut self) {
        self.fsm.call_animation_trigger();
    }

    pub fn active_state(&self) -> Option<PlayerStateId> {
        self.fsm.active()
    }

    pub fn fsm(&self) -> &PlayerFsm {
        &self.fsm
    }
}
