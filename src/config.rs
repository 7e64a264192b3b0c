use std::collections::BTreeMap;
use std::path::Path;

use glam::Vec2;
use serde::Deserialize;

use crate::engine::input::InputSegment;
use crate::error::ConfigError;
use crate::states::anim;

/// Game configuration loaded from TOML.
///
/// Every section falls back to its defaults, so a config file only needs the
/// values it changes. Vectors are written as `[x, y]` arrays.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct GameConfig {
    pub simulation: SimulationConfig,
    pub player: PlayerConfig,
    pub physics: PhysicsConfig,
    pub detection: DetectionConfig,
    pub animation: AnimationConfig,
    pub level: LevelConfig,
    pub input: Vec<InputSegment>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SimulationConfig {
    /// Ticks per second.
    pub tick_rate: f32,
    /// Ticks to run when the CLI doesn't override it.
    pub ticks: u64,
}

/// Movement and attack tuning for the player controller.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PlayerConfig {
    pub move_speed: f32,
    pub jump_force: f32,
    pub wall_jump_force: Vec2,
    /// Fraction of `move_speed` available while airborne, in `[0, 1]`.
    pub in_air_move_multiplier: f32,
    /// Fall speed kept per tick while sliding down a wall, in `[0, 1]`.
    pub wall_slide_slow_multiplier: f32,
    pub dash_duration: f32,
    pub dash_speed: f32,
    pub attack: AttackConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AttackConfig {
    /// One lunge vector per combo step; its length is the combo length.
    pub attack_velocity: Vec<Vec2>,
    pub jump_attack_velocity: Vec2,
    /// How long a combo step's lunge lasts before horizontal velocity drops.
    pub attack_velocity_duration: f32,
    /// Idle time after which the next attack restarts the combo.
    pub combo_reset_time: f32,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub body_half_width: f32,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DetectionConfig {
    pub ground_check_distance: f32,
    pub wall_check_distance: f32,
    /// Heights above the feet of the two wall probes; both must hit.
    pub wall_probe_heights: [f32; 2],
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AnimationConfig {
    /// Seconds from a clip's start to its authored trigger point, keyed by
    /// the animator parameter that starts the clip.
    pub trigger_times: BTreeMap<String, f32>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct LevelConfig {
    pub spawn: Vec2,
    pub platforms: Vec<PlatformConfig>,
    pub walls: Vec<WallConfig>,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct PlatformConfig {
    pub left: f32,
    pub right: f32,
    pub y: f32,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct WallConfig {
    pub x: f32,
    pub bottom: f32,
    pub top: f32,
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60.0,
            ticks: 600,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 8.0,
            jump_force: 12.0,
            wall_jump_force: Vec2::new(6.0, 12.0),
            in_air_move_multiplier: 0.7,
            wall_slide_slow_multiplier: 0.7,
            dash_duration: 0.25,
            dash_speed: 20.0,
            attack: AttackConfig::default(),
        }
    }
}

impl Default for AttackConfig {
    fn default() -> Self {
        Self {
            attack_velocity: vec![
                Vec2::new(3.0, 1.5),
                Vec2::new(1.0, 2.5),
                Vec2::new(4.0, 2.5),
            ],
            jump_attack_velocity: Vec2::new(7.0, -7.0),
            attack_velocity_duration: 0.1,
            combo_reset_time: 1.0,
        }
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 30.0,
            body_half_width: 0.4,
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            ground_check_distance: 0.1,
            wall_check_distance: 0.6,
            wall_probe_heights: [0.3, 1.2],
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        let trigger_times = [("basicAttack", 0.3), ("jumpAttackTrigger", 0.2)]
            .into_iter()
            .map(|(name, at)| (name.to_string(), at))
            .collect();
        Self { trigger_times }
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            spawn: Vec2::ZERO,
            platforms: vec![PlatformConfig { left: -20.0, right: 20.0, y: 0.0 }],
            walls: vec![WallConfig { x: 6.0, bottom: 0.0, top: 8.0 }],
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl GameConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("simulation.tick_rate", self.simulation.tick_rate)?;
        self.player.validate()?;
        positive("physics.gravity", self.physics.gravity)?;
        positive("detection.ground_check_distance", self.detection.ground_check_distance)?;
        positive("detection.wall_check_distance", self.detection.wall_check_distance)?;
        for &at in self.animation.trigger_times.values() {
            positive("animation.trigger_times", at)?;
        }
        // Both attack states only leave on these clips' triggers.
        for clip in [anim::BASIC_ATTACK, anim::JUMP_ATTACK_TRIGGER] {
            if !self.animation.trigger_times.contains_key(clip) {
                return Err(ConfigError::MissingTriggerTime { clip });
            }
        }
        Ok(())
    }
}

impl PlayerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("player.move_speed", self.move_speed)?;
        positive("player.jump_force", self.jump_force)?;
        unit_range("player.in_air_move_multiplier", self.in_air_move_multiplier)?;
        unit_range("player.wall_slide_slow_multiplier", self.wall_slide_slow_multiplier)?;
        positive("player.dash_duration", self.dash_duration)?;
        positive("player.dash_speed", self.dash_speed)?;
        self.attack.validate()
    }
}

impl AttackConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.attack_velocity.is_empty() {
            return Err(ConfigError::EmptyAttackTable);
        }
        positive("player.attack.attack_velocity_duration", self.attack_velocity_duration)?;
        positive("player.attack.combo_reset_time", self.combo_reset_time)
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn unit_range(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, min: 0.0, max: 1.0, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config.player.attack.attack_velocity.len(), 3);
        assert_eq!(config.simulation.tick_rate, 60.0);
        assert!(config.input.is_empty());
    }

    #[test]
    fn vectors_parse_from_arrays() {
        let config = GameConfig::from_toml_str(
            r#"
            [player]
            wall_jump_force = [5.0, 10.0]

            [player.attack]
            attack_velocity = [[2.0, 1.0]]
            combo_reset_time = 0.5

            [[input]]
            from = 0
            to = 4
            move_x = -1.0
            hold = ["attack", "dash"]
            "#,
        )
        .unwrap();
        assert_eq!(config.player.wall_jump_force, Vec2::new(5.0, 10.0));
        assert_eq!(config.player.attack.attack_velocity, [Vec2::new(2.0, 1.0)]);
        assert_eq!(config.player.attack.combo_reset_time, 0.5);
        // Unset keys inside a present section keep their defaults.
        assert_eq!(config.player.attack.attack_velocity_duration, 0.1);
        assert_eq!(config.input[0].hold.len(), 2);
    }

    #[test]
    fn empty_attack_table_is_rejected() {
        let err = GameConfig::from_toml_str("[player.attack]\nattack_velocity = []\n").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyAttackTable));
    }

    #[test]
    fn multiplier_outside_unit_range_is_rejected() {
        let err = GameConfig::from_toml_str("[player]\nin_air_move_multiplier = 1.5\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange { field: "player.in_air_move_multiplier", .. }
        ));
    }

    #[test]
    fn attack_clips_need_trigger_times() {
        // A partial table replaces the defaults wholesale.
        let err = GameConfig::from_toml_str("[animation.trigger_times]\nbasicAttack = 0.3\n")
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingTriggerTime { clip: "jumpAttackTrigger" }
        ));

        let config = GameConfig::from_toml_str(
            "[animation.trigger_times]\nbasicAttack = 0.3\njumpAttackTrigger = 0.1\nidle = 1.0\n",
        )
        .unwrap();
        assert_eq!(config.animation.trigger_times.len(), 3);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = GameConfig::load("does/not/exist.toml").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
