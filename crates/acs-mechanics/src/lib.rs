//! Dice and combat resolution for the Adventure Construction Set.
//!
//! Every random decision goes through a [`RollSource`], so combat is
//! deterministic under a seeded generator or a scripted roll sequence.
//! The resolver mutates the [`acs_core::World`] directly and reports what
//! happened as [`CombatEvent`]s; turning those into prose is left to the
//! caller.

pub mod combat;
pub mod dice;
pub mod error;

pub use combat::{Combatant, CombatEvent, FleeOutcome};
pub use dice::{Dice, DieResult, RollResult, RollSource, ScriptedRolls};
pub use error::{MechError, MechResult};
