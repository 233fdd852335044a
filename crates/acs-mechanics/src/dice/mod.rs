//! Dice expressions, results and the injectable roll source.

pub mod roll;
pub mod source;

pub use roll::{DieResult, RollResult};
pub use source::{RollSource, ScriptedRolls};

use acs_core::WeaponStats;
use serde::{Deserialize, Serialize};

/// A dice expression such as `2d6`: `count` dice with `sides` faces each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dice {
    /// Number of dice rolled.
    pub count: u32,
    /// Faces per die.
    pub sides: u32,
}

impl Dice {
    /// The to-hit die.
    pub const D20: Self = Self::new(1, 20);

    /// Damage dealt with bare hands.
    pub const UNARMED: Self = Self::new(1, 3);

    /// Create a dice expression.
    pub const fn new(count: u32, sides: u32) -> Self {
        Self { count, sides }
    }

    /// Roll every die once.
    pub fn roll(self, rolls: &mut dyn RollSource) -> RollResult {
        let dice = (0..self.count)
            .map(|_| DieResult {
                sides: self.sides,
                value: rolls.roll(self.sides),
            })
            .collect();
        RollResult { dice }
    }

    /// Smallest possible total.
    pub fn min(self) -> u32 {
        if self.sides == 0 { 0 } else { self.count }
    }

    /// Largest possible total, saturating at `u32::MAX`.
    pub fn max(self) -> u32 {
        self.count.saturating_mul(self.sides)
    }
}

impl From<&WeaponStats> for Dice {
    fn from(weapon: &WeaponStats) -> Self {
        Self::new(weapon.dice, weapon.sides)
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}
