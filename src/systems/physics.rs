use hecs::World;

use crate::components::{Platform, PlayerController, Position, Wall};
use crate::config::PhysicsConfig;

/// Kinematic stand-in for the rigid body: gravity scaled by the character's
/// gravity scale, semi-implicit Euler, landing on platforms from above and
/// stopping against walls.
pub fn physics_step(world: &mut World, cfg: &PhysicsConfig, dt: f32) {
    let platforms: Vec<Platform> = world.query::<&Platform>().iter().map(|(_, p)| *p).collect();
    let walls: Vec<Wall> = world.query::<&Wall>().iter().map(|(_, w)| *w).collect();

    for (_e, (pos, controller)) in world.query_mut::<(&mut Position, &mut PlayerController)>() {
        let ch = &mut controller.character;
        ch.velocity.y -= cfg.gravity * ch.gravity_scale * dt;

        let prev = pos.0;
        let mut next = prev + ch.velocity * dt;

        // Walls block horizontal motion across their x.
        for w in &walls {
            if !w.covers(next.y) && !w.covers(prev.y) {
                continue;
            }
            let hw = cfg.body_half_width;
            if prev.x + hw <= w.x && next.x + hw > w.x {
                next.x = w.x - hw;
                ch.velocity.x = 0.0;
            } else if prev.x - hw >= w.x && next.x - hw < w.x {
                next.x = w.x + hw;
                ch.velocity.x = 0.0;
            }
        }

        // Platforms catch the feet when crossed from above.
        if ch.velocity.y <= 0.0 {
            let landing = platforms
                .iter()
                .filter(|p| p.spans(next.x) && prev.y >= p.y && next.y <= p.y)
                .map(|p| p.y)
                .reduce(f32::max);
            if let Some(y) = landing {
                next.y = y;
                ch.velocity.y = 0.0;
            }
        }

        pos.0 = next;
    }
}
