use hecs::{Entity, World};

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::scene::prefabs::{spawn_platform, spawn_player, spawn_wall};

/// Build the level described by `config` and return the player entity.
pub fn load_sandbox(world: &mut World, config: &GameConfig) -> Result<Entity, ConfigError> {
    for platform in &config.level.platforms {
        spawn_platform(world, platform);
    }
    for wall in &config.level.walls {
        spawn_wall(world, wall);
    }
    spawn_player(world, config.player.clone(), config.level.spawn)
}
