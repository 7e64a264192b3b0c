use std::collections::BTreeMap;

use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{PlayerController, PlayerStateId, Position};
use crate::config::GameConfig;
use crate::engine::input::{InputScript, InputState};
use crate::engine::time::SimClock;
use crate::error::ConfigError;
use crate::scene::sandbox::load_sandbox;
use crate::systems::{
    animation_system, detection_system, physics_step, player_state_system, TransitionEvent,
};

/// Result of [`SandboxApp::run`].
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub ticks: u64,
    pub transitions: Vec<TransitionEvent>,
    pub final_state: Option<PlayerStateId>,
    pub final_position: Vec2,
    /// Ticks spent in each state, counted after the tick's update.
    pub ticks_in_state: BTreeMap<String, u64>,
    /// Highest combo step the animator was asked to play.
    pub max_combo_step: i32,
}

/// Headless host: owns the world and runs the fixed tick loop.
pub struct SandboxApp {
    world: World,
    player_entity: Entity,
    config: GameConfig,
    input: InputState,
    script: InputScript,
    clock: SimClock,
    history: Vec<TransitionEvent>,
}

impl SandboxApp {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut world = World::new();
        let player_entity = load_sandbox(&mut world, &config)?;
        Ok(Self {
            world,
            player_entity,
            input: InputState::new(),
            script: InputScript::new(config.input.clone()),
            clock: SimClock::new(config.simulation.tick_rate),
            config,
            history: Vec::new(),
        })
    }

    /// One tick: input, detection, state update, animation, physics.
    pub fn step(&mut self) -> Vec<TransitionEvent> {
        let (held, axis) = self.script.sample(self.clock.tick);
        self.input.update(held, axis);

        detection_system(&mut self.world, &self.config.detection);
        let events = player_state_system(&mut self.world, &self.input, &self.clock);
        animation_system(&mut self.world, &self.config.animation.trigger_times, self.clock.dt);
        physics_step(&mut self.world, &self.config.physics, self.clock.dt);

        self.clock.advance();
        self.history.extend_from_slice(&events);
        events
    }

    pub fn run(&mut self, ticks: u64) -> RunSummary {
        let mut ticks_in_state = BTreeMap::new();
        let mut max_combo_step = 0;

        for _ in 0..ticks {
            self.step();
            if let Ok(controller) = self.world.get::<&PlayerController>(self.player_entity) {
                if let Some(state) = controller.active_state() {
                    *ticks_in_state.entry(format!("{state:?}")).or_insert(0) += 1;
                }
                let step = controller
                    .character
                    .anim
                    .get_integer(crate::states::anim::BASIC_ATTACK_INDEX)
                    .unwrap_or(0);
                max_combo_step = max_combo_step.max(step);
            }
        }

        RunSummary {
            ticks,
            transitions: self.history.clone(),
            final_state: self.active_state(),
            final_position: self.player_position(),
            ticks_in_state,
            max_combo_step,
        }
    }

    pub fn active_state(&self) -> Option<PlayerStateId> {
        self.world
            .get::<&PlayerController>(self.player_entity)
            .ok()
            .and_then(|c| c.active_state())
    }

    pub fn player_position(&self) -> Vec2 {
        self.world
            .get::<&Position>(self.player_entity)
            .map(|p| p.0)
            .unwrap_or(Vec2::ZERO)
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }
}
