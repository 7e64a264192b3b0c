use std::collections::{HashMap, HashSet};

/// Animator parameter block written by player states and read by playback.
///
/// Mirrors the three parameter kinds an animation controller exposes: bools
/// (one per state, selects the looping clip), integers (clip variants such as
/// the combo step) and triggers (one-shot clip starts).
///
/// The block also tracks which clip was most recently *started*, together with
/// a generation counter, so playback can tell a restart of the same clip apart
/// from a clip that simply kept running.
#[derive(Debug, Default, Clone)]
pub struct Animator {
    bools: HashMap<&'static str, bool>,
    ints: HashMap<&'static str, i32>,
    triggers: HashSet<&'static str>,
    clip: Option<&'static str>,
    generation: u64,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Setting a bool from false to true starts that clip.
    pub fn set_bool(&mut self, name: &'static str, value: bool) {
        let was = self.bools.insert(name, value).unwrap_or(false);
        if value && !was {
            self.start_clip(name);
        } else if !value && self.clip == Some(name) {
            self.clip = None;
        }
    }

    pub fn get_bool(&self, name: &str) -> bool {
        self.bools.get(name).copied().unwrap_or(false)
    }

    pub fn set_integer(&mut self, name: &'static str, value: i32) {
        self.ints.insert(name, value);
    }

    pub fn get_integer(&self, name: &str) -> Option<i32> {
        self.ints.get(name).copied()
    }

    /// Arms a one-shot trigger and starts its clip.
    pub fn set_trigger(&mut self, name: &'static str) {
        self.triggers.insert(name);
        self.start_clip(name);
    }

    pub fn is_trigger_set(&self, name: &str) -> bool {
        self.triggers.contains(name)
    }

    /// Consumes a trigger; returns whether it was armed.
    pub fn reset_trigger(&mut self, name: &str) -> bool {
        self.triggers.remove(name)
    }

    /// The clip most recently started and its generation, or `None` when the
    /// bool that started it has since been cleared.
    pub fn current_clip(&self) -> Option<(&'static str, u64)> {
        self.clip.map(|name| (name, self.generation))
    }

    fn start_clip(&mut self, name: &'static str) {
        self.clip = Some(name);
        self.generation += 1;
    }
}
