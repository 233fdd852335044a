//! Command interpreter and turn engine for the Adventure Construction Set.
//!
//! Turns a line of player input into a structured [`Action`], applies it to
//! a [`acs_core::World`] through the [`TurnEngine`], and narrates the result.
//! A [`Session`] bundles a world, an engine and a roll source for play.

/// Engine configuration.
pub mod config;
/// Applying actions to the world.
pub mod engine;
/// Error types for the fiction engine.
pub mod error;
/// Free-text command interpretation.
pub mod interpreter;
/// A play session over one loaded adventure.
pub mod session;

pub use config::EngineConfig;
pub use engine::{TurnEngine, TurnReport, narrate_event};
pub use error::{FictionError, FictionResult};
pub use interpreter::{Action, ActionKind, Direction, Interpretation, MoveTarget, interpret};
pub use session::{Session, Turn};
