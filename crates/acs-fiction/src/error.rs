//! Error types for the fiction engine.

use acs_core::{AdventureError, RoomId};
use acs_mechanics::MechError;
use thiserror::Error;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur while running an adventure.
///
/// Bad player input is never an error; it is answered with narration.
/// These are load failures and broken world invariants.
#[derive(Debug, Error)]
pub enum FictionError {
    /// The adventure could not be loaded.
    #[error(transparent)]
    Adventure(#[from] AdventureError),

    /// The combat resolver was handed a reference the world lacks.
    #[error(transparent)]
    Mechanics(#[from] MechError),

    /// The player stands in a room the world does not contain.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),
}
