use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create an identifier from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id!(
    /// Identifier of a room, as declared in the adventure document.
    RoomId
);
string_id!(
    /// Identifier of an item, as declared in the adventure document.
    ItemId
);
string_id!(
    /// Identifier of a monster or NPC, as declared in the adventure document.
    MonsterId
);

/// Leading articles ignored when matching player references against names.
const ARTICLES: &[&str] = &["the ", "a ", "an ", "some "];

/// Strip a single leading article ("the", "a", "an", "some") from a reference.
pub fn strip_article(reference: &str) -> &str {
    let trimmed = reference.trim();
    for article in ARTICLES {
        let head = trimmed.get(..article.len());
        if trimmed.len() > article.len() && head.is_some_and(|h| h.eq_ignore_ascii_case(article)) {
            return trimmed[article.len()..].trim_start();
        }
    }
    trimmed
}

/// Case-insensitive substring/keyword match of a player reference.
///
/// The reference matches when its article-stripped form is a substring of
/// the name or of any keyword. An empty reference matches nothing.
pub fn name_matches(name: &str, keywords: &[String], reference: &str) -> bool {
    let query = strip_article(reference).to_lowercase();
    if query.is_empty() {
        return false;
    }
    name.to_lowercase().contains(&query) || keywords.iter().any(|k| k.to_lowercase().contains(&query))
}

/// A location in the adventure map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier.
    pub id: RoomId,
    /// Display name.
    pub name: String,
    /// Full prose description, shown on the first visit.
    #[serde(default)]
    pub description: String,
    /// Exit name (usually a direction) to destination room. Exits need not be symmetric.
    #[serde(default)]
    pub exits: BTreeMap<String, RoomId>,
    /// Dark rooms hide their contents unless the player carries a light.
    #[serde(default)]
    pub dark: bool,
    /// Loose gold lying on the floor.
    #[serde(default)]
    pub gold: u32,
}

impl Room {
    /// Look up an exit by name, ignoring case.
    pub fn exit(&self, name: &str) -> Option<&RoomId> {
        self.exits
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, target)| target)
    }

    /// Exit names in display order.
    pub fn exit_names(&self) -> Vec<&str> {
        self.exits.keys().map(String::as_str).collect()
    }
}

/// Broad item category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// Something to hit things with.
    Weapon,
    /// Something to wear for protection.
    Armor,
    /// Valuables.
    Treasure,
    /// Something to eat.
    Food,
    /// Something to drink.
    Drink,
    /// Anything else.
    #[default]
    Generic,
}

/// Weapon family, used for per-class skill modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponClass {
    /// Axes.
    Axe,
    /// Bows.
    Bow,
    /// Clubs and maces.
    Club,
    /// Spears.
    Spear,
    /// Swords.
    #[default]
    Sword,
}

impl fmt::Display for WeaponClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Axe => write!(f, "axe"),
            Self::Bow => write!(f, "bow"),
            Self::Club => write!(f, "club"),
            Self::Spear => write!(f, "spear"),
            Self::Sword => write!(f, "sword"),
        }
    }
}

fn one() -> u32 {
    1
}

fn six() -> u32 {
    6
}

fn yes() -> bool {
    true
}

/// Offensive stats of a weapon: damage dice and hit modifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponStats {
    /// Number of damage dice.
    #[serde(default = "one")]
    pub dice: u32,
    /// Sides per damage die.
    #[serde(default = "six")]
    pub sides: u32,
    /// Weapon family.
    #[serde(default)]
    pub class: WeaponClass,
    /// Added to the wielder's agility when rolling to hit.
    #[serde(default)]
    pub accuracy: i32,
}

impl Default for WeaponStats {
    fn default() -> Self {
        Self {
            dice: one(),
            sides: six(),
            class: WeaponClass::default(),
            accuracy: 0,
        }
    }
}

/// Defensive stats of armor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmorStats {
    /// Subtracted from every damage roll against the wearer.
    #[serde(default)]
    pub reduction: u32,
}

/// Where an item currently is. Every item has exactly one location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// Lying in a room.
    Room(RoomId),
    /// Carried by the player.
    Player,
    /// Carried by a monster.
    Monster(MonsterId),
}

impl Location {
    /// True when the item is carried by someone rather than lying in a room.
    pub fn is_carried(&self) -> bool {
        !matches!(self, Self::Room(_))
    }
}

/// An object in the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Shown when the item is examined.
    #[serde(default)]
    pub description: String,
    /// Extra nouns the item answers to.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Broad category.
    #[serde(default)]
    pub category: ItemCategory,
    /// Weight in arbitrary units.
    #[serde(default = "one")]
    pub weight: u32,
    /// Value in gold pieces.
    #[serde(default)]
    pub value: u32,
    /// Current location.
    pub location: Location,
    /// Weapon stats, if the item can be wielded.
    #[serde(default)]
    pub weapon: Option<WeaponStats>,
    /// Armor stats, if the item can be worn.
    #[serde(default)]
    pub armor: Option<ArmorStats>,
    /// Light sources let the player see in dark rooms.
    #[serde(default)]
    pub light: bool,
    /// Whether the item can be picked up.
    #[serde(default = "yes")]
    pub takeable: bool,
    /// Health restored when eaten or drunk.
    #[serde(default)]
    pub heal: u32,
    /// Hidden items lie unseen in their room until it is searched.
    #[serde(default)]
    pub hidden: bool,
}

impl Item {
    /// Whether a player reference names this item.
    pub fn matches(&self, reference: &str) -> bool {
        name_matches(&self.name, &self.keywords, reference)
    }
}

/// A monster's attitude toward the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// Will talk and may join the party.
    Friendly,
    /// Minds its own business until provoked.
    #[default]
    Neutral,
    /// Fights back.
    Hostile,
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Friendly => write!(f, "friendly"),
            Self::Neutral => write!(f, "neutral"),
            Self::Hostile => write!(f, "hostile"),
        }
    }
}

/// Enemy behavior when wounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tactic {
    /// Always strikes back.
    #[default]
    Standard,
    /// May try to flee instead of striking back once badly hurt.
    Cowardly,
}

/// Stat block shared by the player and monsters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Maximum health.
    pub hardiness: u32,
    /// Governs hitting and fleeing.
    pub agility: u32,
    /// Willingness to stand and fight.
    pub courage: u32,
}

/// A monster or NPC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    /// Unique identifier.
    pub id: MonsterId,
    /// Display name.
    pub name: String,
    /// Shown when examined.
    pub description: String,
    /// Extra nouns the monster answers to.
    pub keywords: Vec<String>,
    /// Attitude toward the player.
    pub disposition: Disposition,
    /// Stat block.
    pub stats: Stats,
    /// Current health, never above hardiness.
    pub health: u32,
    /// Current room.
    pub room: RoomId,
    /// Wielded weapon, carried by this monster.
    pub weapon: Option<ItemId>,
    /// Worn armor, carried by this monster.
    pub armor: Option<ItemId>,
    /// Gold carried.
    pub gold: u32,
    /// Dead monsters stay in the world, inert, for later examination.
    pub alive: bool,
    /// Behavior when wounded.
    pub tactic: Tactic,
    /// Opening line when talked to.
    pub greeting: Option<String>,
    /// Replies keyed by topic.
    pub topics: BTreeMap<String, String>,
    /// Buys and sells the items it carries.
    pub merchant: bool,
}

impl Monster {
    /// Whether a player reference names this monster.
    pub fn matches(&self, reference: &str) -> bool {
        name_matches(&self.name, &self.keywords, reference)
    }
}

/// The player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Stat block.
    pub stats: Stats,
    /// Current health.
    pub health: u32,
    /// Current room.
    pub room: RoomId,
    /// Gold carried.
    pub gold: u32,
    /// Equipped weapon, always an item carried by the player.
    pub weapon: Option<ItemId>,
    /// Equipped armor, always an item carried by the player.
    pub armor: Option<ItemId>,
    /// Hit modifier per weapon class.
    pub weapon_skill: BTreeMap<WeaponClass, i32>,
    /// Rooms the player has entered.
    pub visited: BTreeSet<RoomId>,
    /// False once health reaches zero.
    pub alive: bool,
}

impl Player {
    /// The skill modifier for a weapon class (0 when untrained).
    pub fn skill(&self, class: WeaponClass) -> i32 {
        self.weapon_skill.get(&class).copied().unwrap_or(0)
    }
}

/// A companion's combat posture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    /// Joins every fight with a bonus to hit.
    Aggressive,
    /// Joins fights carefully.
    #[default]
    Defensive,
    /// Stays back and supports.
    Support,
    /// Avoids combat entirely.
    Passive,
}

impl Stance {
    /// Whether a companion in this stance joins the player's attacks.
    pub fn fights(self) -> bool {
        matches!(self, Self::Aggressive | Self::Defensive)
    }

    /// Hit modifier applied to the companion's attacks.
    pub fn hit_modifier(self) -> i32 {
        match self {
            Self::Aggressive => 2,
            Self::Defensive => -2,
            Self::Support | Self::Passive => 0,
        }
    }
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aggressive => write!(f, "aggressive"),
            Self::Defensive => write!(f, "defensive"),
            Self::Support => write!(f, "support"),
            Self::Passive => write!(f, "passive"),
        }
    }
}

/// Party membership of a recruited monster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Companion {
    /// The recruited monster.
    pub monster: MonsterId,
    /// Combat posture.
    pub stance: Stance,
    /// Set while the companion waits in a room instead of following.
    pub waiting_in: Option<RoomId>,
}

impl Companion {
    /// A newly recruited, following companion.
    pub fn new(monster: MonsterId) -> Self {
        Self {
            monster,
            stance: Stance::default(),
            waiting_in: None,
        }
    }

    /// Whether the companion currently follows the player.
    pub fn is_following(&self) -> bool {
        self.waiting_in.is_none()
    }
}
