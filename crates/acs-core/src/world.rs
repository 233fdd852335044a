use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entity::{Companion, Item, ItemId, Location, Monster, MonsterId, Player, Room, RoomId};

/// The central world model. Owns every room, item and monster plus the
/// player and the party.
///
/// A `World` is only built through [`crate::AdventureDef::into_world`], so
/// every room, item and monster reference it holds resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// Adventure title.
    pub title: String,
    /// Text shown before the first turn.
    pub intro: String,
    rooms: BTreeMap<RoomId, Room>,
    // Declaration order is significant: it breaks ties when matching names.
    items: Vec<Item>,
    monsters: Vec<Monster>,
    /// The player character.
    pub player: Player,
    /// Recruited companions, in recruitment order.
    pub party: Vec<Companion>,
}

impl World {
    pub(crate) fn assemble(
        title: String,
        intro: String,
        rooms: Vec<Room>,
        items: Vec<Item>,
        monsters: Vec<Monster>,
        player: Player,
    ) -> Self {
        Self {
            title,
            intro,
            rooms: rooms.into_iter().map(|r| (r.id.clone(), r)).collect(),
            items,
            monsters,
            player,
            party: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Rooms
    // -----------------------------------------------------------------------

    /// Get a room by ID.
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Get a mutable room by ID.
    pub fn room_mut(&mut self, id: &RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    /// The room the player is in.
    pub fn current_room(&self) -> Option<&Room> {
        self.rooms.get(&self.player.room)
    }

    /// All rooms, ordered by ID.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    // -----------------------------------------------------------------------
    // Items
    // -----------------------------------------------------------------------

    /// Get an item by ID.
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Get a mutable item by ID. Use [`World::move_item`] to relocate it.
    pub fn item_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| &i.id == id)
    }

    /// All items in declaration order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Items at a location, in declaration order.
    pub fn items_at<'a>(&'a self, location: &'a Location) -> impl Iterator<Item = &'a Item> {
        self.items.iter().filter(move |i| &i.location == location)
    }

    /// Items lying in plain sight in a room.
    pub fn items_in_room(&self, room: &RoomId) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(move |i| !i.hidden && matches!(&i.location, Location::Room(r) if r == room))
    }

    /// Items in a room that nobody has found yet.
    pub fn hidden_items_in(&self, room: &RoomId) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(move |i| i.hidden && matches!(&i.location, Location::Room(r) if r == room))
    }

    /// The player's inventory, in declaration order.
    pub fn inventory(&self) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(|i| i.location == Location::Player)
    }

    /// Whether the player carries the item.
    pub fn player_has(&self, id: &ItemId) -> bool {
        self.item(id).is_some_and(|i| i.location == Location::Player)
    }

    /// Whether the player carries a light source.
    pub fn player_has_light(&self) -> bool {
        self.inventory().any(|i| i.light)
    }

    /// Move an item to a new location. Returns false if the item does not exist.
    ///
    /// The location field is the single record of ownership, so this is the
    /// only mutation needed. Equipment slots that pointed at the item are
    /// cleared when it leaves its owner, and a moved item is no longer hidden.
    pub fn move_item(&mut self, id: &ItemId, to: Location) -> bool {
        let Some(item) = self.items.iter_mut().find(|i| &i.id == id) else {
            return false;
        };
        let from = std::mem::replace(&mut item.location, to.clone());
        item.hidden = false;
        if from != to {
            self.unequip(id, &from);
        }
        true
    }

    /// Take an item out of the world for good (eaten, drunk, used up).
    pub fn remove_item(&mut self, id: &ItemId) -> Option<Item> {
        let index = self.items.iter().position(|i| &i.id == id)?;
        let item = self.items.remove(index);
        self.unequip(id, &item.location);
        Some(item)
    }

    /// Clear whichever equipment slot of `owner` holds the item.
    fn unequip(&mut self, id: &ItemId, owner: &Location) {
        let (weapon, armor) = match owner {
            Location::Player => (&mut self.player.weapon, &mut self.player.armor),
            Location::Monster(owner) => match self.monsters.iter_mut().find(|m| &m.id == owner) {
                Some(monster) => (&mut monster.weapon, &mut monster.armor),
                None => return,
            },
            Location::Room(_) => return,
        };
        if weapon.as_ref() == Some(id) {
            *weapon = None;
        }
        if armor.as_ref() == Some(id) {
            *armor = None;
        }
    }

    // -----------------------------------------------------------------------
    // Monsters
    // -----------------------------------------------------------------------

    /// Get a monster by ID.
    pub fn monster(&self, id: &MonsterId) -> Option<&Monster> {
        self.monsters.iter().find(|m| &m.id == id)
    }

    /// Get a mutable monster by ID.
    pub fn monster_mut(&mut self, id: &MonsterId) -> Option<&mut Monster> {
        self.monsters.iter_mut().find(|m| &m.id == id)
    }

    /// All monsters in declaration order, living and dead.
    pub fn monsters(&self) -> impl Iterator<Item = &Monster> {
        self.monsters.iter()
    }

    /// Monsters in a room, living and dead.
    pub fn monsters_in(&self, room: &RoomId) -> impl Iterator<Item = &Monster> {
        self.monsters.iter().filter(move |m| &m.room == room)
    }

    /// Living monsters in a room.
    pub fn living_monsters_in(&self, room: &RoomId) -> impl Iterator<Item = &Monster> {
        self.monsters_in(room).filter(|m| m.alive)
    }

    // -----------------------------------------------------------------------
    // Party
    // -----------------------------------------------------------------------

    /// The party entry for a monster, if it has been recruited.
    pub fn companion(&self, id: &MonsterId) -> Option<&Companion> {
        self.party.iter().find(|c| &c.monster == id)
    }

    /// Mutable party entry for a monster.
    pub fn companion_mut(&mut self, id: &MonsterId) -> Option<&mut Companion> {
        self.party.iter_mut().find(|c| &c.monster == id)
    }

    /// Remove a monster from the party. Returns true if it was a member.
    pub fn dismiss(&mut self, id: &MonsterId) -> bool {
        let before = self.party.len();
        self.party.retain(|c| &c.monster != id);
        self.party.len() != before
    }

    /// Companions that follow the player (not waiting elsewhere).
    pub fn following_companions(&self) -> Vec<MonsterId> {
        self.party
            .iter()
            .filter(|c| c.is_following())
            .map(|c| c.monster.clone())
            .collect()
    }
}
