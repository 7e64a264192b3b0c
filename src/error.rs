use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating the game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The combo engine needs at least one attack step.
    #[error("attack velocity table is empty")]
    EmptyAttackTable,

    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        min: f32,
        max: f32,
        value: f32,
    },

    #[error("animation.trigger_times has no entry for clip {clip}")]
    MissingTriggerTime { clip: &'static str },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
}
