//! Applying actions to the world.
//!
//! The [`TurnEngine`] owns no game state: the caller passes the world and
//! the roll source in on every call, and gets back a [`TurnReport`] with the
//! narration. Player mistakes (a missing exit, an absent target) are
//! answered in narration and leave the world untouched.

mod combat;
mod describe;
mod inventory;
mod movement;
mod party;
mod trade;

use acs_core::{Room, World};
use acs_mechanics::RollSource;

use crate::config::EngineConfig;
use crate::error::{FictionError, FictionResult};
use crate::interpreter::Action;

pub use combat::narrate_event;
pub(crate) use describe::room_lines;
use inventory::Consumption;

/// Everything that came of one action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnReport {
    /// Narration, in order.
    pub lines: Vec<String>,
    /// Informational notes about how the input was read.
    pub notes: Vec<String>,
    /// A target reference matched more than one entity; the first declared
    /// one was used.
    pub ambiguous: bool,
    /// Game time passed. Looking around and failed attempts are free.
    pub consumed: bool,
    /// The session is over (the player died or quit).
    pub ended: bool,
}

impl TurnReport {
    fn say(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn extend(&mut self, lines: impl IntoIterator<Item = String>) {
        self.lines.extend(lines);
    }
}

/// Applies actions to a world.
#[derive(Debug, Clone, Default)]
pub struct TurnEngine {
    config: EngineConfig,
}

impl TurnEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Apply one action. The action is fully applied before this returns.
    pub fn apply(
        &self,
        world: &mut World,
        action: &Action,
        rolls: &mut dyn RollSource,
    ) -> FictionResult<TurnReport> {
        let mut report = TurnReport::default();
        if !world.player.alive {
            report.say("You are dead. The adventure is over.");
            report.ended = true;
            return Ok(report);
        }

        match action {
            Action::Move { to } => self.do_move(world, to, &mut report)?,
            Action::Take { target } => self.do_take(world, target, &mut report)?,
            Action::Drop { target } => self.do_drop(world, target, &mut report)?,
            Action::Attack { target } => self.do_attack(world, target, rolls, &mut report)?,
            Action::Inventory => self.do_inventory(world, &mut report),
            Action::LookAt { target } => self.do_look_at(world, target.as_deref(), &mut report)?,
            Action::Talk { target, topic } => {
                self.do_talk(world, target, topic.as_deref(), &mut report)?;
            }
            Action::PartyOrder { target, order } => self.do_order(world, target, order, &mut report),
            Action::Flee => self.do_flee(world, rolls, &mut report)?,
            Action::Status => self.do_status(world, &mut report),
            Action::Equip { target } => self.do_equip(world, target, &mut report),
            Action::Unequip { target } => self.do_unequip(world, target, &mut report),
            Action::Recruit { target } => self.do_recruit(world, target, &mut report)?,
            Action::Party => self.do_party(world, &mut report),
            Action::Gather => self.do_gather(world, &mut report),
            Action::Dismiss { target } => self.do_dismiss(world, target, &mut report),
            Action::Give { target, recipient } => {
                self.do_give(world, target, recipient, &mut report)?;
            }
            Action::Eat { target } => self.do_consume(world, target, Consumption::Eat, &mut report),
            Action::Drink { target } => {
                self.do_consume(world, target, Consumption::Drink, &mut report);
            }
            Action::Trade { target } => self.do_trade(world, target, &mut report)?,
            Action::Buy { target } => self.do_buy(world, target, &mut report)?,
            Action::Sell { target } => self.do_sell(world, target, &mut report)?,
            Action::Search => self.do_search(world, &mut report)?,
            Action::Help => report.extend(describe::help()),
            Action::Quit => {
                report.say("Farewell, adventurer.");
                report.ended = true;
            }
            Action::Unknown { raw } => {
                let target = examine_fallback(raw);
                let target = (!target.is_empty()).then_some(target.as_str());
                self.do_look_at(world, target, &mut report)?;
            }
        }

        if !world.player.alive {
            report.ended = true;
        }
        Ok(report)
    }
}

/// The words of unrecognized input treated as something to examine: the
/// second word onward, or the only word.
fn examine_fallback(raw: &str) -> String {
    let words: Vec<&str> = raw.split_whitespace().collect();
    match words.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [_, rest @ ..] => rest.join(" "),
    }
}

/// The room the player is in.
fn here(world: &World) -> FictionResult<&Room> {
    world
        .current_room()
        .ok_or_else(|| FictionError::RoomNotFound(world.player.room.clone()))
}

/// The first candidate (in declaration order) that matches, noting on the
/// report when more than one did.
fn pick<'a, T: 'a>(
    candidates: impl Iterator<Item = &'a T>,
    matches: impl Fn(&T) -> bool,
    report: &mut TurnReport,
) -> Option<&'a T> {
    let mut found = candidates.filter(|c| matches(*c));
    let first = found.next()?;
    if found.next().is_some() {
        report.ambiguous = true;
    }
    Some(first)
}

/// A name with "the" in front, unless it is a proper name.
pub(crate) fn the(name: &str) -> String {
    if name.chars().next().is_some_and(char::is_uppercase) {
        name.to_string()
    } else {
        format!("the {name}")
    }
}

/// First letter upper-cased.
pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Join names as "a", "a and b" or "a, b and c".
pub(crate) fn and_list(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [one] => one.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use acs_core::{AdventureDef, ItemId, Location, RoomId};
    use acs_mechanics::ScriptedRolls;

    /// A small keep: a courtyard with a gatehouse to the north, a dark cellar
    /// below, and a tower you can enter.
    pub(crate) const KEEP: &str = r#"{
        "title": "The Keep",
        "intro": "Wind howls over the battlements.",
        "start_room": "courtyard",
        "rooms": [
            {"id": "courtyard", "name": "Courtyard", "description": "Flagstones slick with rain.",
             "exits": {"north": "gatehouse", "down": "cellar", "in": "tower"}},
            {"id": "gatehouse", "name": "Gatehouse", "description": "A portcullis hangs overhead.",
             "exits": {"south": "courtyard"}},
            {"id": "cellar", "name": "Cellar", "description": "Barrels line the walls.",
             "exits": {"up": "courtyard"}, "dark": true},
            {"id": "tower", "name": "Wizard's Tower", "description": "Shelves of dusty tomes.",
             "exits": {"out": "courtyard"}}
        ],
        "items": [
            {"id": "sword", "name": "short sword", "category": "weapon",
             "location": {"room": "courtyard"}, "weight": 3,
             "weapon": {"dice": 1, "sides": 6, "accuracy": 20}},
            {"id": "shield", "name": "oak shield", "category": "armor",
             "location": {"room": "courtyard"}, "weight": 4, "armor": {"reduction": 1}},
            {"id": "statue", "name": "stone statue", "location": {"room": "courtyard"},
             "takeable": false, "description": "A knight, weathered smooth."},
            {"id": "lamp", "name": "brass lamp", "location": {"room": "gatehouse"}, "light": true},
            {"id": "key", "name": "iron key", "keywords": ["key"], "location": {"room": "cellar"}},
            {"id": "club", "name": "spiked club", "location": {"monster": "goblin"},
             "weapon": {"sides": 4}}
        ],
        "monsters": [
            {"id": "goblin", "name": "goblin", "description": "Green and mean.",
             "disposition": "hostile", "hardiness": 6, "health": 1, "room": "gatehouse",
             "weapon": "club", "gold": 12},
            {"id": "ghoul", "name": "ghoul", "disposition": "hostile", "room": "gatehouse",
             "alive": false, "health": 0},
            {"id": "wren", "name": "Wren", "disposition": "friendly", "room": "courtyard",
             "greeting": "Well met, traveller.",
             "topics": {"tower": "The wizard left years ago."}},
            {"id": "guard", "name": "guard", "room": "courtyard"}
        ]
    }"#;

    pub(crate) fn keep() -> World {
        AdventureDef::from_json(KEEP).unwrap().into_world().unwrap()
    }

    pub(crate) fn apply(world: &mut World, action: Action) -> TurnReport {
        apply_with(world, action, &mut ScriptedRolls::default())
    }

    pub(crate) fn apply_with(
        world: &mut World,
        action: Action,
        rolls: &mut ScriptedRolls,
    ) -> TurnReport {
        TurnEngine::default().apply(world, &action, rolls).unwrap()
    }

    #[test]
    fn fallback_words() {
        assert_eq!(examine_fallback("poke stick"), "stick");
        assert_eq!(examine_fallback("xyzzy"), "xyzzy");
        assert_eq!(examine_fallback("poke the old stick"), "the old stick");
        assert_eq!(examine_fallback(""), "");
    }

    #[test]
    fn text_helpers() {
        assert_eq!(the("goblin"), "the goblin");
        assert_eq!(the("Wren"), "Wren");
        assert_eq!(capitalize("the goblin"), "The goblin");
        assert_eq!(capitalize(""), "");
        let names = |n: &[&str]| n.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(and_list(&names(&["a"])), "a");
        assert_eq!(and_list(&names(&["a", "b", "c"])), "a, b and c");
    }

    #[test]
    fn unknown_input_examines() {
        let mut world = keep();
        let report = apply(
            &mut world,
            Action::Unknown {
                raw: "poke statue".to_string(),
            },
        );
        assert_eq!(report.lines, vec!["A knight, weathered smooth."]);
        assert!(!report.consumed);
    }

    #[test]
    fn dead_player_can_do_nothing() {
        let mut world = keep();
        world.player.alive = false;
        let before = world.clone();
        let report = apply(&mut world, Action::go(crate::Direction::North));
        assert!(report.ended);
        assert_eq!(world, before);
    }

    #[test]
    fn quit_ends_the_session() {
        let mut world = keep();
        let report = apply(&mut world, Action::Quit);
        assert!(report.ended);
    }

    #[test]
    fn ties_pick_first_declared_and_flag() {
        let mut world = keep();
        // "s" is in both "short sword" and "oak shield".
        let report = apply(
            &mut world,
            Action::Take {
                target: "s".to_string(),
            },
        );
        assert!(report.ambiguous);
        assert!(world.player_has(&ItemId::new("sword")));
        assert_eq!(
            world.item(&ItemId::new("shield")).unwrap().location,
            Location::Room(RoomId::new("courtyard"))
        );
    }
}
