//! The injectable source of randomness.

use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::StdRng;

/// A uniform die roller. Combat takes one of these instead of reaching for a
/// global generator, so tests can replay exact sequences.
pub trait RollSource {
    /// Roll one die with `sides` faces: a value in `1..=sides`, or 0 for a
    /// zero-sided die.
    fn roll(&mut self, sides: u32) -> u32;

    /// Roll percentile (1-100).
    fn percent(&mut self) -> u32 {
        self.roll(100)
    }

    /// Pick an index in `0..len` uniformly. `len` must be non-zero.
    fn choose(&mut self, len: usize) -> usize {
        let sides = u32::try_from(len).unwrap_or(u32::MAX);
        self.roll(sides).saturating_sub(1) as usize
    }
}

impl RollSource for StdRng {
    fn roll(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        self.random_range(1..=sides)
    }
}

/// A fixed sequence of die faces, consumed front to back.
///
/// Each value is clamped into the range of the die being rolled. Once the
/// script runs out every roll comes up 1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    values: VecDeque<u32>,
}

impl ScriptedRolls {
    /// Script the given faces.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Rolls not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RollSource for ScriptedRolls {
    fn roll(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        let value = self.values.pop_front().unwrap_or(1).clamp(1, sides);
        tracing::debug!(sides, value, "scripted roll");
        value
    }
}
