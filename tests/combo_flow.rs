use glam::Vec2;
use lunge::components::{PlayerController, PlayerStateId, TickFrame};
use lunge::config::PlayerConfig;
use lunge::engine::input::ActionEdges;
use lunge::states::anim;

const DT: f32 = 1.0 / 60.0;

struct Rig {
    controller: PlayerController,
    tick: u64,
}

impl Rig {
    fn new() -> Self {
        let mut controller = PlayerController::new(PlayerConfig::default()).unwrap();
        controller.character.ground_detected = true;
        controller.initialize();
        Self { controller, tick: 0 }
    }

    fn time(&self) -> f32 {
        self.tick as f32 * DT
    }

    fn step(&mut self, actions: ActionEdges) -> lunge::components::TickReport {
        let frame = TickFrame {
            time: self.time(),
            dt: DT,
            move_input: Vec2::ZERO,
            actions,
        };
        let report = self.controller.tick(frame);
        self.tick += 1;
        report
    }

    fn idle(&mut self) -> lunge::components::TickReport {
        self.step(ActionEdges::default())
    }

    fn attack(&mut self) -> lunge::components::TickReport {
        self.step(ActionEdges {
            attack: true,
            ..Default::default()
        })
    }

    /// Let `seconds` pass without any tick running.
    fn wait(&mut self, seconds: f32) {
        self.tick += (seconds / DT).ceil() as u64;
    }

    fn combo_step(&self) -> Option<i32> {
        self.controller.character.anim.get_integer(anim::BASIC_ATTACK_INDEX)
    }
}

#[test]
fn full_combo_reenters_through_the_deferred_slot() {
    let mut rig = Rig::new();

    let report = rig.attack();
    assert_eq!(report.transition, Some(PlayerStateId::BasicAttack));
    assert_eq!(rig.combo_step(), Some(1));

    for step in 2..=3 {
        // Queue during the clip, then let the clip reach its trigger.
        assert_eq!(rig.attack().transition, None);
        rig.controller.call_animation_trigger();

        let report = rig.idle();
        assert_eq!(report, Default::default());
        assert_eq!(rig.controller.active_state(), Some(PlayerStateId::BasicAttack));
        assert!(!rig.controller.character.anim.get_bool(anim::BASIC_ATTACK));
        assert_eq!(
            rig.controller.character.pending_transition(),
            Some(PlayerStateId::BasicAttack)
        );

        // Next tick: exit and enter run before the update.
        let report = rig.idle();
        assert_eq!(report.deferred, Some(PlayerStateId::BasicAttack));
        assert_eq!(report.transition, None);
        assert_eq!(rig.combo_step(), Some(step));
        assert!(rig.controller.character.anim.get_bool(anim::BASIC_ATTACK));
    }

    // Last step: pressing again does nothing and the clip ends in idle.
    rig.attack();
    rig.controller.call_animation_trigger();
    let report = rig.idle();
    assert_eq!(report.transition, Some(PlayerStateId::Idle));
    assert_eq!(rig.controller.character.pending_transition(), None);
    assert!(rig.controller.character.anim.get_bool(anim::IDLE));
    assert!(!rig.controller.character.anim.get_bool(anim::BASIC_ATTACK));
}

#[test]
fn finished_combo_starts_over() {
    let mut rig = Rig::new();
    rig.attack();
    for _ in 0..2 {
        rig.attack();
        rig.controller.call_animation_trigger();
        rig.idle();
        rig.idle();
    }
    assert_eq!(rig.combo_step(), Some(3));
    rig.controller.call_animation_trigger();
    rig.idle();
    assert_eq!(rig.controller.active_state(), Some(PlayerStateId::Idle));

    rig.attack();
    assert_eq!(rig.combo_step(), Some(1));
}

#[test]
fn quick_follow_up_from_idle_continues_the_combo() {
    let mut rig = Rig::new();
    rig.attack();
    rig.controller.call_animation_trigger();
    assert_eq!(rig.idle().transition, Some(PlayerStateId::Idle));

    rig.wait(0.5);
    assert_eq!(rig.attack().transition, Some(PlayerStateId::BasicAttack));
    assert_eq!(rig.combo_step(), Some(2));
}

#[test]
fn slow_follow_up_restarts_the_combo() {
    let mut rig = Rig::new();
    rig.attack();
    rig.controller.call_animation_trigger();
    rig.idle();

    rig.wait(1.5);
    rig.attack();
    assert_eq!(rig.combo_step(), Some(1));
}

#[test]
fn second_schedule_replaces_the_first() {
    let mut rig = Rig::new();
    let entered_before = rig.controller.fsm().transition_count();

    rig.controller.character.enter_attack_state_with_delay();
    rig.controller.character.enter_attack_state_with_delay();

    let report = rig.idle();
    assert_eq!(report.deferred, Some(PlayerStateId::BasicAttack));
    assert_eq!(rig.controller.fsm().transition_count(), entered_before + 1);
    assert_eq!(rig.controller.character.pending_transition(), None);

    // Nothing left over for the tick after.
    assert_eq!(rig.idle().deferred, None);
}

#[test]
fn trigger_before_the_clip_is_ignored_by_the_next_activation() {
    let mut rig = Rig::new();
    // A trigger meant for idle is cleared when the attack enters.
    rig.controller.call_animation_trigger();
    rig.attack();
    assert_eq!(rig.idle().transition, None);
    assert_eq!(rig.controller.active_state(), Some(PlayerStateId::BasicAttack));
}

#[test]
fn exactly_one_state_is_active_throughout() {
    let mut rig = Rig::new();
    let script = [true, true, false, false, true, false, false, false];
    for (i, &press) in script.iter().enumerate() {
        if i % 3 == 2 {
            rig.controller.call_animation_trigger();
        }
        if press {
            rig.attack();
        } else {
            rig.idle();
        }
        let active = rig.controller.active_state();
        assert!(active.is_some());
        let count = PlayerStateId::ALL
            .iter()
            .filter(|&&s| rig.controller.fsm().is_active(s))
            .count();
        assert_eq!(count, 1);
    }
}
