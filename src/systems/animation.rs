use std::collections::BTreeMap;

use hecs::World;

use crate::components::{AnimationPlayback, PlayerController};

/// Advance clip playback and deliver authored trigger points.
///
/// Runs after the state update. A clip restarts whenever the animator starts
/// a new one (new name or new generation); its trigger fires once, after the
/// configured time for that clip has elapsed. Clips without a configured time
/// never fire.
pub fn animation_system(world: &mut World, trigger_times: &BTreeMap<String, f32>, dt: f32) {
    for (_e, (playback, controller)) in
        world.query_mut::<(&mut AnimationPlayback, &mut PlayerController)>()
    {
        let current = controller.character.anim.current_clip();
        if current != playback.clip {
            playback.restart(current);
            // Starting the clip consumes its trigger parameter.
            if let Some((name, _)) = current {
                controller.character.anim.reset_trigger(name);
            }
        }

        let Some((name, _)) = playback.clip else {
            continue;
        };
        playback.elapsed += dt;

        if playback.trigger_fired {
            continue;
        }
        if let Some(&at) = trigger_times.get(name) {
            if playback.elapsed >= at {
                playback.trigger_fired = true;
                log::trace!("clip {name} reached its trigger at {:.3}s", playback.elapsed);
                controller.call_animation_trigger();
            }
        }
    }
}
