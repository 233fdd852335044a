//! Error types for the mechanics engine.

use acs_core::{MonsterId, RoomId};

/// Errors that can occur during mechanics operations.
///
/// These indicate a caller bug (a reference the world does not contain);
/// game-level failures such as a miss are events, not errors.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A monster referenced as a combatant does not exist.
    #[error("unknown combatant: {0}")]
    UnknownCombatant(MonsterId),

    /// A combatant stands in a room the world does not contain.
    #[error("unknown room: {0}")]
    UnknownRoom(RoomId),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
