mod character;
mod physics;

pub use character::{
    Character, PlayerController, PlayerFsm, PlayerStateId, TickFrame, TickReport,
};
pub use physics::{Platform, Position, Wall};

/// Marker: this entity is the player.
pub struct Player;

/// Attached to the player entity. Tracks the animator clip being played and
/// whether its authored trigger point has been reached.
#[derive(Default)]
pub struct AnimationPlayback {
    pub clip: Option<(&'static str, u64)>,
    /// Seconds since `clip` started.
    pub elapsed: f32,
    pub trigger_fired: bool,
}

impl AnimationPlayback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restart(&mut self, clip: Option<(&'static str, u64)>) {
        self.clip = clip;
        self.elapsed = 0.0;
        self.trigger_fired = false;
    }
}
