//! Core types for the Adventure Construction Set: rooms, items, monsters,
//! the player, and the world model that owns them.
//!
//! Adventures are declared as JSON documents ([`AdventureDef`]) and turned
//! into a playable [`World`] by a validating loader. The loader refuses
//! documents with dangling references, so everything downstream can rely on
//! referential integrity.

/// Declarative adventure documents and loading.
pub mod adventure;
/// Source-annotated rendering of load-time problems.
pub mod diagnostics;
/// Entity types: rooms, items, monsters, the player and companions.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Referential-integrity checks run before play starts.
pub mod validate;
/// The central world model that owns all entities.
pub mod world;

/// Re-export adventure definition types.
pub use adventure::{AdventureDef, MonsterDef, PlayerDef};
/// Re-export core entity types.
pub use entity::{
    ArmorStats, Companion, Disposition, Item, ItemCategory, ItemId, Location, Monster, MonsterId,
    Player, Room, RoomId, Stance, Stats, Tactic, WeaponClass, WeaponStats,
};
/// Re-export error types.
pub use error::{AdventureError, AdventureResult};
/// Re-export validation types.
pub use validate::{ValidationIssue, validate};
/// Re-export the world model.
pub use world::World;
