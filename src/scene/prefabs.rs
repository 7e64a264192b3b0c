use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{AnimationPlayback, Platform, Player, PlayerController, Position, Wall};
use crate::config::{PlatformConfig, PlayerConfig, WallConfig};
use crate::error::ConfigError;

/// Spawn the player at `feet` with an initialized controller.
pub fn spawn_player(world: &mut World, tuning: PlayerConfig, feet: Vec2) -> Result<Entity, ConfigError> {
    let mut controller = PlayerController::new(tuning)?;
    controller.initialize();
    Ok(world.spawn((Player, Position(feet), controller, AnimationPlayback::new())))
}

pub fn spawn_platform(world: &mut World, cfg: &PlatformConfig) -> Entity {
    world.spawn((Platform {
        left: cfg.left.min(cfg.right),
        right: cfg.left.max(cfg.right),
        y: cfg.y,
    },))
}

pub fn spawn_wall(world: &mut World, cfg: &WallConfig) -> Entity {
    world.spawn((Wall {
        x: cfg.x,
        bottom: cfg.bottom.min(cfg.top),
        top: cfg.bottom.max(cfg.top),
    },))
}
