//! Declarative adventure documents.
//!
//! An adventure is a JSON document listing rooms, items and monsters plus a
//! starting room. Rooms and items are declared in their runtime shape;
//! monsters and the player have a flat declaration shape with defaults that
//! is turned into the runtime stat blocks on load.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entity::{
    Disposition, Item, ItemId, Monster, MonsterId, Player, Room, RoomId, Stats, Tactic,
    WeaponClass,
};
use crate::error::{AdventureError, AdventureResult};
use crate::validate::validate;
use crate::world::World;

fn ten() -> u32 {
    10
}

fn twelve() -> u32 {
    12
}

fn hundred() -> u32 {
    100
}

fn starting_gold() -> u32 {
    200
}

fn adventurer() -> String {
    "Adventurer".to_string()
}

/// A complete adventure document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdventureDef {
    /// Adventure title.
    pub title: String,
    /// Text shown before the first turn.
    #[serde(default)]
    pub intro: String,
    /// Where the player starts.
    pub start_room: RoomId,
    /// The player's starting stats.
    #[serde(default)]
    pub player: PlayerDef,
    /// All rooms.
    pub rooms: Vec<Room>,
    /// All items, in declaration order (which breaks ties when matching).
    #[serde(default)]
    pub items: Vec<Item>,
    /// All monsters and NPCs, in declaration order.
    #[serde(default)]
    pub monsters: Vec<MonsterDef>,
}

/// Declaration of a monster or NPC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterDef {
    /// Unique identifier.
    pub id: MonsterId,
    /// Display name.
    pub name: String,
    /// Shown when examined.
    #[serde(default)]
    pub description: String,
    /// Extra nouns the monster answers to.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Attitude toward the player.
    #[serde(default)]
    pub disposition: Disposition,
    /// Maximum health.
    #[serde(default = "ten")]
    pub hardiness: u32,
    /// Hit and flee stat.
    #[serde(default = "ten")]
    pub agility: u32,
    /// Willingness to fight.
    #[serde(default = "hundred")]
    pub courage: u32,
    /// Starting health; defaults to hardiness.
    #[serde(default)]
    pub health: Option<u32>,
    /// Starting room.
    pub room: RoomId,
    /// Wielded weapon (must be carried by this monster).
    #[serde(default)]
    pub weapon: Option<ItemId>,
    /// Worn armor (must be carried by this monster).
    #[serde(default)]
    pub armor: Option<ItemId>,
    /// Gold carried.
    #[serde(default)]
    pub gold: u32,
    /// Behavior when wounded.
    #[serde(default)]
    pub tactic: Tactic,
    /// Opening line when talked to.
    #[serde(default)]
    pub greeting: Option<String>,
    /// Replies keyed by topic.
    #[serde(default)]
    pub topics: BTreeMap<String, String>,
    /// Buys and sells the items it carries.
    #[serde(default)]
    pub merchant: bool,
}

impl MonsterDef {
    fn into_monster(self) -> Monster {
        let health = self.health.unwrap_or(self.hardiness);
        Monster {
            id: self.id,
            name: self.name,
            description: self.description,
            keywords: self.keywords,
            disposition: self.disposition,
            stats: Stats {
                hardiness: self.hardiness,
                agility: self.agility,
                courage: self.courage,
            },
            health,
            room: self.room,
            weapon: self.weapon,
            armor: self.armor,
            gold: self.gold,
            alive: health > 0,
            tactic: self.tactic,
            greeting: self.greeting,
            topics: self.topics,
            merchant: self.merchant,
        }
    }
}

/// Declaration of the player's starting stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDef {
    /// Display name.
    #[serde(default = "adventurer")]
    pub name: String,
    /// Maximum health.
    #[serde(default = "twelve")]
    pub hardiness: u32,
    /// Hit and flee stat.
    #[serde(default = "twelve")]
    pub agility: u32,
    /// Willingness to fight.
    #[serde(default = "hundred")]
    pub courage: u32,
    /// Starting health; defaults to hardiness.
    #[serde(default)]
    pub health: Option<u32>,
    /// Starting gold.
    #[serde(default = "starting_gold")]
    pub gold: u32,
    /// Equipped weapon (must be an item located on the player).
    #[serde(default)]
    pub weapon: Option<ItemId>,
    /// Equipped armor (must be an item located on the player).
    #[serde(default)]
    pub armor: Option<ItemId>,
    /// Hit modifier per weapon class.
    #[serde(default)]
    pub weapon_skill: BTreeMap<WeaponClass, i32>,
}

impl Default for PlayerDef {
    fn default() -> Self {
        Self {
            name: adventurer(),
            hardiness: twelve(),
            agility: twelve(),
            courage: hundred(),
            health: None,
            gold: starting_gold(),
            weapon: None,
            armor: None,
            weapon_skill: BTreeMap::new(),
        }
    }
}

impl PlayerDef {
    fn into_player(self, room: RoomId) -> Player {
        let health = self.health.unwrap_or(self.hardiness);
        Player {
            name: self.name,
            stats: Stats {
                hardiness: self.hardiness,
                agility: self.agility,
                courage: self.courage,
            },
            health,
            room,
            gold: self.gold,
            weapon: self.weapon,
            armor: self.armor,
            weapon_skill: self.weapon_skill,
            visited: Default::default(),
            alive: health > 0,
        }
    }
}

impl AdventureDef {
    /// Parse an adventure document from JSON text.
    pub fn from_json(source: &str) -> AdventureResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Read and parse an adventure document from disk.
    pub fn load(path: &Path) -> AdventureResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| AdventureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&source)
    }

    /// Validate the document and build the playable world.
    ///
    /// Fails with [`AdventureError::Invalid`] when any validation issue is an
    /// error; warnings are logged and play proceeds.
    pub fn into_world(self) -> AdventureResult<World> {
        let issues = validate(&self);
        for issue in issues.iter().filter(|i| !i.is_error) {
            tracing::warn!("{issue}");
        }
        if issues.iter().any(|i| i.is_error) {
            return Err(AdventureError::Invalid(issues));
        }

        let player = self.player.into_player(self.start_room);
        let monsters = self
            .monsters
            .into_iter()
            .map(MonsterDef::into_monster)
            .collect();
        let world = World::assemble(
            self.title,
            self.intro,
            self.rooms,
            self.items,
            monsters,
            player,
        );
        tracing::info!(
            title = %world.title,
            rooms = world.rooms().count(),
            items = world.items().count(),
            monsters = world.monsters().count(),
            "adventure loaded"
        );
        Ok(world)
    }
}
