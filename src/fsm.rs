use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::engine::animator::Animator;

/// Anything usable as a state key.
pub trait StateKey: Copy + Eq + Hash + Debug + Send + Sync + 'static {}
impl<T: Copy + Eq + Hash + Debug + Send + Sync + 'static> StateKey for T {}

/// What the base lifecycle needs from the context.
pub trait StateContext {
    fn animator_mut(&mut self) -> &mut Animator;
    /// Seconds covered by the current tick.
    fn delta_time(&self) -> f32;
}

// ---------------------------------------------------------------------------
// Base state
// ---------------------------------------------------------------------------

/// The part of a state every concrete state shares: its animator bool, the
/// animation-trigger latch and a general countdown.
#[derive(Debug, Clone)]
pub struct StateCore {
    anim_bool: &'static str,
    trigger_called: bool,
    /// Decremented by the delta on every update. Concrete states arm it in
    /// `enter` when they need a timed exit.
    pub timer: f32,
}

impl StateCore {
    pub fn new(anim_bool: &'static str) -> Self {
        Self {
            anim_bool,
            trigger_called: false,
            timer: 0.0,
        }
    }

    pub fn anim_bool(&self) -> &'static str {
        self.anim_bool
    }

    /// True once the animation trigger fired during the current activation.
    pub fn trigger_called(&self) -> bool {
        self.trigger_called
    }

    pub fn call_animation_trigger(&mut self) {
        self.trigger_called = true;
    }

    fn enter<C: StateContext>(&mut self, ctx: &mut C) {
        ctx.animator_mut().set_bool(self.anim_bool, true);
        self.trigger_called = false;
    }

    fn update<C: StateContext>(&mut self, ctx: &mut C) {
        self.timer -= ctx.delta_time();
    }

    fn exit<C: StateContext>(&mut self, ctx: &mut C) {
        ctx.animator_mut().set_bool(self.anim_bool, false);
    }
}

/// Per-state hooks. The machine runs the [`StateCore`] part of each hook
/// first, then the concrete one.
///
/// `update` returns the key to transition to, if any. Only one transition can
/// be requested per update, so rules must be ordered first-match-wins.
pub trait EntityState<C, K>: Send + Sync {
    fn enter(&mut self, _core: &mut StateCore, _ctx: &mut C) {}

    fn update(&mut self, _core: &mut StateCore, _ctx: &mut C) -> Option<K> {
        None
    }

    fn exit(&mut self, _core: &mut StateCore, _ctx: &mut C) {}
}

struct Slot<C, K> {
    core: StateCore,
    state: Box<dyn EntityState<C, K>>,
}

// ---------------------------------------------------------------------------
// Machine
// ---------------------------------------------------------------------------

/// Runs per-state `enter` / `update` / `exit` hooks for one owner.
///
/// `K` is the state key (usually a fieldless enum) and `C` the context every
/// state reads and writes (usually the character). States are registered once
/// and reused; the machine never reallocates them on transition.
///
/// ```ignore
/// let mut fsm = StateMachine::new()
///     .with_state(Key::Idle, "idle", IdleState)
///     .with_state(Key::Move, "move", MoveState);
/// fsm.initialize(Key::Idle, &mut ctx);
/// // Each tick:
/// fsm.update_active_state(&mut ctx);
/// ```
pub struct StateMachine<C, K> {
    slots: HashMap<K, Slot<C, K>>,
    active: Option<K>,
    transitions: u64,
}

impl<C: StateContext, K: StateKey> StateMachine<C, K> {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            active: None,
            transitions: 0,
        }
    }

    /// Register `state` under `key`, animating through the bool `anim_bool`.
    pub fn with_state<S>(mut self, key: K, anim_bool: &'static str, state: S) -> Self
    where
        S: EntityState<C, K> + 'static,
    {
        let previous = self.slots.insert(
            key,
            Slot {
                core: StateCore::new(anim_bool),
                state: Box::new(state),
            },
        );
        assert!(previous.is_none(), "state {key:?} registered twice");
        self
    }

    /// Activate the first state. Must run exactly once, before any update.
    pub fn initialize(&mut self, key: K, ctx: &mut C) {
        assert!(
            self.active.is_none(),
            "state machine already initialized (active: {:?})",
            self.active
        );
        self.activate(key, ctx);
    }

    /// Exit the active state, then enter `key`. Re-entering the active key is
    /// a full exit/enter cycle.
    pub fn change_state(&mut self, key: K, ctx: &mut C) {
        if let Some(current) = self.active.take() {
            let slot = self.slot_mut(current);
            slot.core.exit(ctx);
            slot.state.exit(&mut slot.core, ctx);
        }
        self.activate(key, ctx);
    }

    /// Run one tick of the active state. A transition it requests is complete
    /// by the time this returns; the key entered is returned.
    ///
    /// # Panics
    /// When called before [`initialize`](Self::initialize).
    pub fn update_active_state(&mut self, ctx: &mut C) -> Option<K> {
        let Some(current) = self.active else {
            panic!("update_active_state called before initialize");
        };

        let slot = self.slot_mut(current);
        slot.core.update(ctx);
        let next = slot.state.update(&mut slot.core, ctx);

        if let Some(next) = next {
            self.change_state(next, ctx);
        }
        next
    }

    /// Deliver an animation-authored trigger to the active state.
    pub fn call_animation_trigger(&mut self) -> bool {
        let Some(current) = self.active else {
            log::warn!("animation trigger with no active state");
            return false;
        };
        log::trace!("animation trigger -> {current:?}");
        self.slot_mut(current).core.call_animation_trigger();
        true
    }

    pub fn active(&self) -> Option<K> {
        self.active
    }

    pub fn is_active(&self, key: K) -> bool {
        self.active == Some(key)
    }

    /// Base part of a registered state.
    pub fn core(&self, key: K) -> Option<&StateCore> {
        self.slots.get(&key).map(|slot| &slot.core)
    }

    /// Number of `enter` calls so far, the initial one included.
    pub fn transition_count(&self) -> u64 {
        self.transitions
    }

    fn activate(&mut self, key: K, ctx: &mut C) {
        self.active = Some(key);
        self.transitions += 1;
        let slot = self.slot_mut(key);
        slot.core.enter(ctx);
        slot.state.enter(&mut slot.core, ctx);
    }

    fn slot_mut(&mut self, key: K) -> &mut Slot<C, K> {
        match self.slots.get_mut(&key) {
            Some(slot) => slot,
            None => panic!("state {key:?} was never registered"),
        }
    }
}

impl<C: StateContext, K: StateKey> Default for StateMachine<C, K> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Deferred transition
// ---------------------------------------------------------------------------

/// A transition requested for the next tick boundary. Holds at most one
/// entry; scheduling again replaces the pending one.
#[derive(Debug, Clone)]
pub struct DeferredTransition<K> {
    pending: Option<K>,
}

impl<K: StateKey> DeferredTransition<K> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Schedule `key`, returning the entry it cancelled.
    pub fn schedule(&mut self, key: K) -> Option<K> {
        self.pending.replace(key)
    }

    pub fn take(&mut self) -> Option<K> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<K> {
        self.pending
    }
}

impl<K: StateKey> Default for DeferredTransition<K> {
    fn default() -> Self {
        Self::new()
    }
}
