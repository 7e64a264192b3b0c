use hecs::World;

use crate::components::{PlayerController, PlayerStateId, TickFrame};
use crate::engine::input::InputState;
use crate::engine::time::SimClock;

/// One state change observed by [`player_state_system`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionEvent {
    pub tick: u64,
    pub time: f32,
    pub from: PlayerStateId,
    pub to: PlayerStateId,
    /// Entered from the deferred slot rather than by the previous state.
    pub deferred: bool,
}

/// Drive every player controller one tick. Runs after detection so states
/// see this tick's ground/wall flags.
pub fn player_state_system(
    world: &mut World,
    input: &InputState,
    clock: &SimClock,
) -> Vec<TransitionEvent> {
    let frame = TickFrame {
        time: clock.elapsed,
        dt: clock.dt,
        move_input: input.move_axis,
        actions: input.edges(),
    };

    let mut events = Vec::new();
    for (_e, controller) in world.query_mut::<&mut PlayerController>() {
        let Some(before) = controller.active_state() else {
            continue;
        };

        let report = controller.tick(frame);

        let mut from = before;
        let mut record = |to: PlayerStateId, deferred: bool| {
            log::debug!(
                "[player_state] {:?} -> {:?}{}",
                from,
                to,
                if deferred { " (deferred)" } else { "" }
            );
            events.push(TransitionEvent {
                tick: clock.tick,
                time: clock.elapsed,
                from,
                to,
                deferred,
            });
            from = to;
        };
        if let Some(to) = report.deferred {
            record(to, true);
        }
        if let Some(to) = report.transition {
            record(to, false);
        }
    }
    events
}
