use glam::Vec2;
use serde::Deserialize;
use std::collections::HashSet;

/// Discrete player actions the controller reacts to on their press edge.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Jump,
    Attack,
    Dash,
}

/// Edge-triggered actions for one tick.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct ActionEdges {
    pub jump: bool,
    pub attack: bool,
    pub dash: bool,
}

/// Held actions and the move axis, plus which actions went down this tick.
pub struct InputState {
    held: HashSet<Action>,
    pressed: HashSet<Action>,
    pub move_axis: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
            pressed: HashSet::new(),
            move_axis: Vec2::ZERO,
        }
    }

    /// Replace the held set with this tick's; anything not held last tick is
    /// a press.
    pub fn update(&mut self, held_now: impl IntoIterator<Item = Action>, move_axis: Vec2) {
        let held_now: HashSet<Action> = held_now.into_iter().collect();
        self.pressed = held_now.difference(&self.held).copied().collect();
        self.held = held_now;
        self.move_axis = move_axis;
    }

    pub fn was_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    pub fn edges(&self) -> ActionEdges {
        ActionEdges {
            jump: self.was_pressed(Action::Jump),
            attack: self.was_pressed(Action::Attack),
            dash: self.was_pressed(Action::Dash),
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Scripted input
// ---------------------------------------------------------------------------

/// Input held over the half-open tick range `[from, to)`.
#[derive(Deserialize, Debug, Clone)]
pub struct InputSegment {
    pub from: u64,
    pub to: u64,
    #[serde(default)]
    pub move_x: f32,
    #[serde(default)]
    pub move_y: f32,
    #[serde(default)]
    pub hold: Vec<Action>,
}

/// Replays configured segments in place of a device. Overlapping segments
/// add their axes and union their held actions.
pub struct InputScript {
    segments: Vec<InputSegment>,
}

impl InputScript {
    pub fn new(segments: Vec<InputSegment>) -> Self {
        Self { segments }
    }

    pub fn sample(&self, tick: u64) -> (Vec<Action>, Vec2) {
        let mut held = Vec::new();
        let mut axis = Vec2::ZERO;
        for seg in self.segments.iter().filter(|s| (s.from..s.to).contains(&tick)) {
            axis += Vec2::new(seg.move_x, seg.move_y);
            for action in &seg.hold {
                if !held.contains(action) {
                    held.push(*action);
                }
            }
        }
        (held, axis.clamp(Vec2::NEG_ONE, Vec2::ONE))
    }
}
