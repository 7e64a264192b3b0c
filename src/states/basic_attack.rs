use glam::Vec2;

use crate::components::{Character, PlayerStateId};
use crate::config::AttackConfig;
use crate::error::ConfigError;
use crate::fsm::{EntityState, StateCore};

use super::anim;

const FIRST_COMBO_INDEX: usize = 1;

/// Grounded melee combo.
///
/// Each activation plays one combo step. The step's lunge vector comes from
/// the attack-velocity table and is held for `attack_velocity_duration`
/// before horizontal speed is dropped. Pressing attack during a step queues
/// the next one; when the clip reaches its trigger point a queued step
/// re-enters this state on the next tick, otherwise the player returns to
/// idle. Leaving the state advances the step, and an attack started more than
/// `combo_reset_time` after the previous one restarts from the first step.
pub struct BasicAttackState {
    attack_velocity: Vec<Vec2>,
    /// 1-based step of the current or next activation.
    combo_index: usize,
    combo_index_limit: usize,
    /// Stamped on exit; read by the next enter before being overwritten.
    last_time_attacked: Option<f32>,
    attack_velocity_timer: f32,
    combo_attack_queued: bool,
    attack_dir: i32,
}

impl BasicAttackState {
    /// The combo length is fixed here from the table; an empty table is
    /// rejected.
    pub fn new(tuning: &AttackConfig) -> Result<Self, ConfigError> {
        if tuning.attack_velocity.is_empty() {
            return Err(ConfigError::EmptyAttackTable);
        }
        Ok(Self {
            attack_velocity: tuning.attack_velocity.clone(),
            combo_index: FIRST_COMBO_INDEX,
            combo_index_limit: tuning.attack_velocity.len(),
            last_time_attacked: None,
            attack_velocity_timer: 0.0,
            combo_attack_queued: false,
            attack_dir: 1,
        })
    }

    pub fn combo_index(&self) -> usize {
        self.combo_index
    }

    pub fn combo_index_limit(&self) -> usize {
        self.combo_index_limit
    }

    pub fn combo_attack_queued(&self) -> bool {
        self.combo_attack_queued
    }

    pub fn attack_dir(&self) -> i32 {
        self.attack_dir
    }

    fn reset_combo_index(&mut self, now: f32, combo_reset_time: f32) {
        let expired = self
            .last_time_attacked
            .map_or(true, |last| now > last + combo_reset_time);
        if expired || self.combo_index > self.combo_index_limit {
            self.combo_index = FIRST_COMBO_INDEX;
        }
    }

    fn apply_attack_velocity(&mut self, ch: &mut Character) {
        let lunge = self.attack_velocity[self.combo_index - 1];
        self.attack_velocity_timer = ch.tuning.attack.attack_velocity_duration;
        ch.set_velocity(lunge.x * self.attack_dir as f32, lunge.y);
    }

    /// Once the lunge window is over, drop horizontal speed and leave the
    /// vertical component to gravity.
    fn handle_attack_velocity(&mut self, ch: &mut Character) {
        self.attack_velocity_timer -= ch.dt;
        if self.attack_velocity_timer < 0.0 {
            ch.set_velocity(0.0, ch.velocity.y);
        }
    }

    fn queue_next_attack(&mut self) {
        if self.combo_index < self.combo_index_limit {
            self.combo_attack_queued = true;
        }
    }

    fn handle_state_exit(&mut self, core: &StateCore, ch: &mut Character) -> Option<PlayerStateId> {
        if self.combo_attack_queued {
            // Re-entry happens next tick; drop the bool now so the clip can
            // restart when it is set again.
            ch.anim.set_bool(core.anim_bool(), false);
            ch.enter_attack_state_with_delay();
            None
        } else {
            Some(PlayerStateId::Idle)
        }
    }
}

impl EntityState<Character, PlayerStateId> for BasicAttackState {
    fn enter(&mut self, _core: &mut StateCore, ch: &mut Character) {
        self.combo_attack_queued = false;
        self.reset_combo_index(ch.time, ch.tuning.attack.combo_reset_time);

        ch.anim.set_integer(anim::BASIC_ATTACK_INDEX, self.combo_index as i32);
        self.attack_dir = ch.input_or_facing_dir();
        self.apply_attack_velocity(ch);
    }

    fn update(&mut self, core: &mut StateCore, ch: &mut Character) -> Option<PlayerStateId> {
        self.handle_attack_velocity(ch);

        // Only affects the next lunge; the current one is never re-aimed.
        self.attack_dir = ch.input_or_facing_dir();

        if ch.input.attack {
            self.queue_next_attack();
        }

        if core.trigger_called() {
            return self.handle_state_exit(core, ch);
        }
        None
    }

    fn exit(&mut self, _core: &mut StateCore, ch: &mut Character) {
        self.combo_index += 1;
        self.last_time_attacked = Some(ch.time);
    }
}
