use crate::components::{Character, PlayerStateId};
use crate::fsm::{EntityState, StateCore};

use super::anim;

/// Plunging air attack. Dives along `jump_attack_velocity`, starts the
/// landing clip on first ground contact and returns to idle once that clip's
/// trigger fires.
pub struct JumpAttackState {
    touched_ground: bool,
}

impl JumpAttackState {
    pub fn new() -> Self {
        Self { touched_ground: false }
    }
}

impl Default for JumpAttackState {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityState<Character, PlayerStateId> for JumpAttackState {
    fn enter(&mut self, _core: &mut StateCore, ch: &mut Character) {
        self.touched_ground = false;
        let dive = ch.tuning.attack.jump_attack_velocity;
        ch.set_velocity(dive.x * ch.facing_dir() as f32, dive.y);
    }

    fn update(&mut self, core: &mut StateCore, ch: &mut Character) -> Option<PlayerStateId> {
        if ch.ground_detected && !self.touched_ground {
            self.touched_ground = true;
            ch.anim.set_trigger(anim::JUMP_ATTACK_TRIGGER);
            ch.set_velocity(0.0, ch.velocity.y);
        }

        if ch.ground_detected && core.trigger_called() {
            return Some(PlayerStateId::Idle);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerConfig;
    use glam::Vec2;

    fn diving() -> (JumpAttackState, StateCore, Character) {
        let mut state = JumpAttackState::new();
        let mut core = StateCore::new(anim::JUMP_ATTACK);
        let mut ch = Character::new(PlayerConfig::default());
        state.enter(&mut core, &mut ch);
        (state, core, ch)
    }

    #[test]
    fn dive_follows_facing() {
        let (_, _, ch) = diving();
        let dive = ch.tuning.attack.jump_attack_velocity;
        assert_eq!(ch.velocity, dive);
    }

    #[test]
    fn landing_fires_the_trigger_once() {
        let (mut state, mut core, mut ch) = diving();

        assert_eq!(state.update(&mut core, &mut ch), None);
        assert!(!ch.anim.is_trigger_set(anim::JUMP_ATTACK_TRIGGER));

        ch.ground_detected = true;
        ch.velocity = Vec2::new(7.0, 0.0);
        assert_eq!(state.update(&mut core, &mut ch), None);
        assert!(ch.anim.reset_trigger(anim::JUMP_ATTACK_TRIGGER));
        assert_eq!(ch.velocity.x, 0.0);

        // Latched: a second grounded tick doesn't re-arm it.
        ch.velocity.x = 1.0;
        assert_eq!(state.update(&mut core, &mut ch), None);
        assert!(!ch.anim.is_trigger_set(anim::JUMP_ATTACK_TRIGGER));
        assert_eq!(ch.velocity.x, 1.0);
    }

    #[test]
    fn exits_only_when_grounded_and_triggered() {
        let (mut state, mut core, mut ch) = diving();

        // A trigger in the air is held until landing.
        core.call_animation_trigger();
        assert_eq!(state.update(&mut core, &mut ch), None);

        ch.ground_detected = true;
        assert_eq!(state.update(&mut core, &mut ch), Some(PlayerStateId::Idle));
    }

    #[test]
    fn reentry_clears_the_ground_latch() {
        let (mut state, mut core, mut ch) = diving();
        ch.ground_detected = true;
        state.update(&mut core, &mut ch);
        ch.anim.reset_trigger(anim::JUMP_ATTACK_TRIGGER);

        state.enter(&mut core, &mut ch);
        state.update(&mut core, &mut ch);
        assert!(ch.anim.is_trigger_set(anim::JUMP_ATTACK_TRIGGER));
    }
}
