//! What the combat resolver reports back.

use acs_core::{ItemId, MonsterId, RoomId};
use serde::{Deserialize, Serialize};

use crate::dice::RollResult;

/// Either side of a fight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combatant {
    /// The player character.
    Player,
    /// A monster, NPC or companion.
    Monster(MonsterId),
}

impl Combatant {
    /// Whether this is the player.
    pub fn is_player(&self) -> bool {
        matches!(self, Self::Player)
    }
}

/// One thing that happened during an exchange, in the order it happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CombatEvent {
    /// The to-hit roll failed.
    Missed {
        /// Who swung.
        attacker: Combatant,
        /// Who was swung at.
        defender: Combatant,
        /// The d20 face.
        roll: u32,
        /// The highest face that would have hit.
        needed: i32,
    },
    /// The to-hit roll succeeded and damage was applied.
    Hit {
        /// Who swung.
        attacker: Combatant,
        /// Who was struck.
        defender: Combatant,
        /// The damage dice as rolled.
        damage: RollResult,
        /// Damage absorbed by armor.
        absorbed: u32,
        /// Damage actually taken.
        dealt: u32,
        /// Defender health afterwards.
        health: u32,
    },
    /// A combatant reached zero health.
    Died {
        /// Who died.
        who: Combatant,
        /// Items that fell to the floor.
        dropped: Vec<ItemId>,
        /// Gold that fell to the floor.
        gold: u32,
    },
    /// A combatant ran through an exit.
    Fled {
        /// Who ran.
        who: Combatant,
        /// The exit taken.
        exit: String,
        /// Where it leads.
        to: RoomId,
    },
}

/// Result of the player trying to flee.
#[derive(Debug, Clone, PartialEq)]
pub enum FleeOutcome {
    /// The room has no exits; the turn is not consumed.
    NoExits,
    /// The player got away.
    Escaped {
        /// The exit taken.
        exit: String,
        /// The room the player is now in.
        to: RoomId,
    },
    /// The player was caught and every hostile monster in the room struck.
    Caught {
        /// The failed d20 face.
        roll: u32,
        /// The strikes that followed.
        events: Vec<CombatEvent>,
    },
}
