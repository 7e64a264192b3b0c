use glam::Vec2;
use hecs::World;

use crate::components::{Platform, PlayerController, Position, Wall};
use crate::config::DetectionConfig;

/// Ground probe: a platform spans the feet and sits at most
/// `ground_check_distance` below them.
pub fn ground_detected(feet: Vec2, platforms: &[Platform], cfg: &DetectionConfig) -> bool {
    platforms.iter().any(|p| {
        let gap = feet.y - p.y;
        p.spans(feet.x) && (0.0..=cfg.ground_check_distance).contains(&gap)
    })
}

/// Wall probe: both probes, cast from the configured heights in the facing
/// direction, reach the same wall within `wall_check_distance`.
pub fn wall_detected(feet: Vec2, facing_dir: i32, walls: &[Wall], cfg: &DetectionConfig) -> bool {
    let [low, high] = cfg.wall_probe_heights;
    walls.iter().any(|w| {
        let ahead = (w.x - feet.x) * facing_dir as f32;
        (0.0..=cfg.wall_check_distance).contains(&ahead)
            && w.covers(feet.y + low)
            && w.covers(feet.y + high)
    })
}

/// Refresh the ground and wall flags of every player. Must run before
/// `player_state_system` in the same tick.
pub fn detection_system(world: &mut World, cfg: &DetectionConfig) {
    let platforms: Vec<Platform> = world.query::<&Platform>().iter().map(|(_, p)| *p).collect();
    let walls: Vec<Wall> = world.query::<&Wall>().iter().map(|(_, w)| *w).collect();

    for (_e, (pos, controller)) in world.query_mut::<(&Position, &mut PlayerController)>() {
        let ch = &mut controller.character;
        ch.ground_detected = ground_detected(pos.0, &platforms, cfg);
        ch.wall_detected = wall_detected(pos.0, ch.facing_dir(), &walls, cfg);
        log::trace!(
            "detection at {:?}: ground={} wall={}",
            pos.0,
            ch.ground_detected,
            ch.wall_detected
        );
    }
}
