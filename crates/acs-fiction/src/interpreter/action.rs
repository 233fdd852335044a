//! The structured form of one line of player input.

use serde::{Deserialize, Serialize};

/// A movement direction, including the pseudo-directions `in` and `out`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Northeast.
    Northeast,
    /// Northwest.
    Northwest,
    /// Southeast.
    Southeast,
    /// Southwest.
    Southwest,
    /// Up.
    Up,
    /// Down.
    Down,
    /// Into something.
    In,
    /// Out of something.
    Out,
}

impl Direction {
    /// Parse a direction word or abbreviation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            "ne" | "northeast" => Some(Self::Northeast),
            "nw" | "northwest" => Some(Self::Northwest),
            "se" | "southeast" => Some(Self::Southeast),
            "sw" | "southwest" => Some(Self::Southwest),
            "u" | "up" => Some(Self::Up),
            "d" | "down" => Some(Self::Down),
            "in" | "inside" => Some(Self::In),
            "out" | "outside" => Some(Self::Out),
            _ => None,
        }
    }

    /// The exit name this direction matches.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Northeast => "northeast",
            Self::Northwest => "northwest",
            Self::Southeast => "southeast",
            Self::Southwest => "southwest",
            Self::Up => "up",
            Self::Down => "down",
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

/// Where a Move action is headed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveTarget {
    /// A compass, vertical or in/out direction.
    Direction(Direction),
    /// A named place, matched against exit names and destination rooms.
    Place(String),
}

/// The canonical kind an input verb resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Go somewhere.
    Move,
    /// Pick something up.
    Take,
    /// Put something down.
    Drop,
    /// Fight.
    Attack,
    /// List what is carried.
    Inventory,
    /// Look around or examine.
    Look,
    /// Converse.
    Talk,
    /// Give a companion an order.
    PartyOrder,
    /// Run from danger.
    Flee,
    /// Show the player's condition.
    Status,
    /// Wield or wear.
    Equip,
    /// Stop wielding or wearing.
    Unequip,
    /// Ask someone to join the party.
    Recruit,
    /// List companions.
    Party,
    /// Call waiting companions back.
    Gather,
    /// Send a companion away.
    Dismiss,
    /// Hand an item to someone.
    Give,
    /// Eat something.
    Eat,
    /// Drink something.
    Drink,
    /// See what a merchant sells.
    Trade,
    /// Buy from a merchant.
    Buy,
    /// Sell to a merchant.
    Sell,
    /// Look for hidden things.
    Search,
    /// Show the command summary.
    Help,
    /// End the session.
    Quit,
}

/// One interpreted line of input.
///
/// Targets are kept exactly as typed (articles included); binding them to
/// world entities happens when the action is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Move through an exit.
    Move {
        /// Direction or place.
        to: MoveTarget,
    },
    /// Pick up an item (or loose gold).
    Take {
        /// The item reference.
        target: String,
    },
    /// Put down a carried item.
    Drop {
        /// The item reference.
        target: String,
    },
    /// Attack a monster.
    Attack {
        /// The monster reference.
        target: String,
    },
    /// List carried items.
    Inventory,
    /// Describe the room, or examine something.
    LookAt {
        /// What to examine; `None` describes the room.
        #[serde(default)]
        target: Option<String>,
    },
    /// Talk to someone, optionally about a topic.
    Talk {
        /// Who to talk to.
        target: String,
        /// What to talk about.
        #[serde(default)]
        topic: Option<String>,
    },
    /// Give a companion an order.
    PartyOrder {
        /// The companion reference.
        target: String,
        /// The order, verbatim.
        order: String,
    },
    /// Run through a random exit.
    Flee,
    /// Show health, stats and equipment.
    Status,
    /// Wield a weapon or wear armor.
    Equip {
        /// The item reference.
        target: String,
    },
    /// Stop wielding or wearing something.
    Unequip {
        /// The item reference.
        target: String,
    },
    /// Invite a friendly monster into the party.
    Recruit {
        /// The monster reference.
        target: String,
    },
    /// List companions.
    Party,
    /// Waiting companions here rejoin.
    Gather,
    /// Send a companion away for good.
    Dismiss {
        /// The companion reference.
        target: String,
    },
    /// Hand a carried item to someone in the room.
    Give {
        /// The item reference.
        target: String,
        /// Who receives it.
        recipient: String,
    },
    /// Eat a carried item.
    Eat {
        /// The item reference.
        target: String,
    },
    /// Drink a carried item.
    Drink {
        /// The item reference.
        target: String,
    },
    /// List a merchant's wares.
    Trade {
        /// The merchant reference; empty means whichever merchant is here.
        target: String,
    },
    /// Buy an item from the merchant here.
    Buy {
        /// The item reference.
        target: String,
    },
    /// Sell a carried item to the merchant here.
    Sell {
        /// The item reference.
        target: String,
    },
    /// Search the room for hidden items.
    Search,
    /// Show the command summary.
    Help,
    /// End the session.
    Quit,
    /// Input with no recognized verb.
    Unknown {
        /// The normalized input.
        raw: String,
    },
}

impl Action {
    /// The canonical kind, or `None` for unrecognized input.
    pub fn kind(&self) -> Option<ActionKind> {
        let kind = match self {
            Self::Move { .. } => ActionKind::Move,
            Self::Take { .. } => ActionKind::Take,
            Self::Drop { .. } => ActionKind::Drop,
            Self::Attack { .. } => ActionKind::Attack,
            Self::Inventory => ActionKind::Inventory,
            Self::LookAt { .. } => ActionKind::Look,
            Self::Talk { .. } => ActionKind::Talk,
            Self::PartyOrder { .. } => ActionKind::PartyOrder,
            Self::Flee => ActionKind::Flee,
            Self::Status => ActionKind::Status,
            Self::Equip { .. } => ActionKind::Equip,
            Self::Unequip { .. } => ActionKind::Unequip,
            Self::Recruit { .. } => ActionKind::Recruit,
            Self::Party => ActionKind::Party,
            Self::Gather => ActionKind::Gather,
            Self::Dismiss { .. } => ActionKind::Dismiss,
            Self::Give { .. } => ActionKind::Give,
            Self::Eat { .. } => ActionKind::Eat,
            Self::Drink { .. } => ActionKind::Drink,
            Self::Trade { .. } => ActionKind::Trade,
            Self::Buy { .. } => ActionKind::Buy,
            Self::Sell { .. } => ActionKind::Sell,
            Self::Search => ActionKind::Search,
            Self::Help => ActionKind::Help,
            Self::Quit => ActionKind::Quit,
            Self::Unknown { .. } => return None,
        };
        Some(kind)
    }

    /// Shorthand for a Move in a direction.
    pub fn go(direction: Direction) -> Self {
        Self::Move {
            to: MoveTarget::Direction(direction),
        }
    }

    /// Shorthand for a Move to a named place.
    pub fn go_to(place: impl Into<String>) -> Self {
        Self::Move {
            to: MoveTarget::Place(place.into()),
        }
    }

    /// Shorthand for describing the room.
    pub fn look() -> Self {
        Self::LookAt { target: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_directions() {
        assert_eq!(Direction::parse("N"), Some(Direction::North));
        assert_eq!(Direction::parse("sw"), Some(Direction::Southwest));
        assert_eq!(Direction::parse("inside"), Some(Direction::In));
        assert_eq!(Direction::parse("sideways"), None);
    }

    #[test]
    fn direction_names_round_trip() {
        for word in ["north", "up", "in", "out", "southeast"] {
            assert_eq!(Direction::parse(word).map(|d| d.name()), Some(word));
        }
    }

    #[test]
    fn serialized_shape() {
        let json = serde_json::to_value(Action::Take {
            target: "the lamp".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"action": "take", "target": "the lamp"}));

        let json = serde_json::to_value(Action::go(Direction::North)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"action": "move", "to": {"direction": "north"}})
        );

        let json = serde_json::to_value(Action::Inventory).unwrap();
        assert_eq!(json, serde_json::json!({"action": "inventory"}));
    }

    #[test]
    fn deserialize_party_order() {
        let action: Action = serde_json::from_str(
            r#"{"action": "party_order", "target": "alice", "order": "defend"}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            Action::PartyOrder {
                target: "alice".to_string(),
                order: "defend".to_string(),
            }
        );
        assert_eq!(action.kind(), Some(ActionKind::PartyOrder));
    }

    #[test]
    fn give_serializes_recipient() {
        let json = serde_json::to_value(Action::Give {
            target: "key".to_string(),
            recipient: "guard".to_string(),
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"action": "give", "target": "key", "recipient": "guard"})
        );
    }

    #[test]
    fn unknown_has_no_kind() {
        let action = Action::Unknown {
            raw: "xyzzy".to_string(),
        };
        assert_eq!(action.kind(), None);
    }
}
