//! Picking things up, putting them down, wielding and wearing, handing
//! things over, eating and drinking, and searching for hidden things.

use acs_core::entity::strip_article;
use acs_core::{ItemCategory, ItemId, Location, World};

use super::{TurnEngine, TurnReport, capitalize, here, pick, the};
use crate::error::{FictionError, FictionResult};

const GOLD_WORDS: &[&str] = &["gold", "coins", "gold coins", "gold pieces", "money"];

/// Eating or drinking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Consumption {
    Eat,
    Drink,
}

impl Consumption {
    fn verb(self) -> &'static str {
        match self {
            Self::Eat => "eat",
            Self::Drink => "drink",
        }
    }

    fn category(self) -> ItemCategory {
        match self {
            Self::Eat => ItemCategory::Food,
            Self::Drink => ItemCategory::Drink,
        }
    }
}

impl TurnEngine {
    pub(super) fn do_take(
        &self,
        world: &mut World,
        target: &str,
        report: &mut TurnReport,
    ) -> FictionResult<()> {
        let reference = strip_article(target);
        if reference.is_empty() {
            report.say("Take what?");
            return Ok(());
        }
        let room = here(world)?;
        let room_id = room.id.clone();

        if room.gold > 0 && GOLD_WORDS.contains(&reference.to_lowercase().as_str()) {
            let gold = std::mem::take(
                &mut world
                    .room_mut(&room_id)
                    .ok_or_else(|| FictionError::RoomNotFound(room_id.clone()))?
                    .gold,
            );
            world.player.gold = world.player.gold.saturating_add(gold);
            report.consumed = true;
            report.say(match gold {
                1 => "You pick up a gold piece.".to_string(),
                n => format!("You pick up {n} gold pieces."),
            });
            return Ok(());
        }

        let found = pick(world.items_in_room(&room_id), |i| i.matches(reference), report)
            .map(|i| (i.id.clone(), the(&i.name), i.takeable));
        let Some((id, name, takeable)) = found else {
            report.say("You don't see that here.");
            return Ok(());
        };
        if !takeable {
            report.say(format!("You can't take {name}."));
            return Ok(());
        }
        world.move_item(&id, Location::Player);
        tracing::debug!(item = %id, "taken");
        report.consumed = true;
        report.say(format!("You take {name}."));
        Ok(())
    }

    pub(super) fn do_drop(
        &self,
        world: &mut World,
        target: &str,
        report: &mut TurnReport,
    ) -> FictionResult<()> {
        if strip_article(target).is_empty() {
            report.say("Drop what?");
            return Ok(());
        }
        let room_id = here(world)?.id.clone();
        let found =
            pick(world.inventory(), |i| i.matches(target), report).map(|i| (i.id.clone(), the(&i.name)));
        let Some((id, name)) = found else {
            report.say("You aren't carrying that.");
            return Ok(());
        };
        world.move_item(&id, Location::Room(room_id));
        tracing::debug!(item = %id, "dropped");
        report.consumed = true;
        report.say(format!("You drop {name}."));
        Ok(())
    }

    pub(super) fn do_equip(&self, world: &mut World, target: &str, report: &mut TurnReport) {
        if strip_article(target).is_empty() {
            report.say("Equip what?");
            return;
        }
        let found = pick(world.inventory(), |i| i.matches(target), report).map(|i| {
            let weapon = i.weapon.is_some() || i.category == ItemCategory::Weapon;
            let armor = i.armor.is_some() || i.category == ItemCategory::Armor;
            (i.id.clone(), the(&i.name), weapon, armor)
        });
        let Some((id, name, is_weapon, is_armor)) = found else {
            report.say("You aren't carrying that.");
            return;
        };

        let player = &mut world.player;
        if is_weapon {
            if player.weapon.as_ref() == Some(&id) {
                report.say(format!("You are already wielding {name}."));
            } else {
                player.weapon = Some(id);
                report.consumed = true;
                report.say(format!("You wield {name}."));
            }
        } else if is_armor {
            if player.armor.as_ref() == Some(&id) {
                report.say(format!("You are already wearing {name}."));
            } else {
                player.armor = Some(id);
                report.consumed = true;
                report.say(format!("You put on {name}."));
            }
        } else {
            report.say(format!("You can't equip {name}."));
        }
    }

    pub(super) fn do_unequip(&self, world: &mut World, target: &str, report: &mut TurnReport) {
        if strip_article(target).is_empty() {
            report.say("Unequip what?");
            return;
        }
        let slots = [world.player.weapon.clone(), world.player.armor.clone()];
        let equipped = slots.iter().flatten().filter_map(|id| world.item(id));
        let Some((id, name)) =
            pick(equipped, |i| i.matches(target), report).map(|i| (i.id.clone(), the(&i.name)))
        else {
            report.say("You don't have that equipped.");
            return;
        };

        let player = &mut world.player;
        report.consumed = true;
        if player.weapon.as_ref() == Some(&id) {
            player.weapon = None;
            report.say(format!("You stop wielding {name}."));
        } else {
            player.armor = None;
            report.say(format!("You take off {name}."));
        }
    }

    pub(super) fn do_give(
        &self,
        world: &mut World,
        target: &str,
        recipient: &str,
        report: &mut TurnReport,
    ) -> FictionResult<()> {
        if strip_article(target).is_empty() || strip_article(recipient).is_empty() {
            report.say("Give what to whom?");
            return Ok(());
        }
        let found =
            pick(world.inventory(), |i| i.matches(target), report).map(|i| (i.id.clone(), the(&i.name)));
        let Some((id, name)) = found else {
            report.say("You aren't carrying that.");
            return Ok(());
        };
        let room = here(world)?.id.clone();
        let found = pick(world.living_monsters_in(&room), |m| m.matches(recipient), report)
            .map(|m| (m.id.clone(), the(&m.name)));
        let Some((monster, who)) = found else {
            report.say("You don't see that here.");
            return Ok(());
        };

        world.move_item(&id, Location::Monster(monster.clone()));
        tracing::debug!(item = %id, %monster, "given");
        report.consumed = true;
        report.say(format!("You give {name} to {who}."));
        Ok(())
    }

    pub(super) fn do_consume(
        &self,
        world: &mut World,
        target: &str,
        how: Consumption,
        report: &mut TurnReport,
    ) {
        if strip_article(target).is_empty() {
            report.say(format!("{} what?", capitalize(how.verb())));
            return;
        }
        let found = pick(world.inventory(), |i| i.matches(target), report)
            .map(|i| (i.id.clone(), the(&i.name), i.category, i.heal));
        let Some((id, name, category, heal)) = found else {
            report.say("You aren't carrying that.");
            return;
        };
        if category != how.category() {
            report.say(format!("You can't {} {name}.", how.verb()));
            return;
        }

        world.remove_item(&id);
        report.consumed = true;
        report.say(format!("You {} {name}.", how.verb()));

        let player = &mut world.player;
        let restored = heal.min(player.stats.hardiness.saturating_sub(player.health));
        if restored > 0 {
            player.health += restored;
            report.say(format!("You feel refreshed! Health restored by {restored}."));
        }
        tracing::debug!(item = %id, restored, "consumed");
    }

    pub(super) fn do_search(&self, world: &mut World, report: &mut TurnReport) -> FictionResult<()> {
        let room = here(world)?;
        if room.dark && !world.player_has_light() {
            report.say("It is too dark to search here.");
            return Ok(());
        }
        let found: Vec<ItemId> = world.hidden_items_in(&room.id).map(|i| i.id.clone()).collect();
        report.consumed = true;
        if found.is_empty() {
            report.say("You search carefully but find nothing hidden.");
            return Ok(());
        }

        report.say("Your careful search reveals:");
        for id in &found {
            if let Some(item) = world.item_mut(id) {
                item.hidden = false;
                report.say(format!("  - {}", item.name));
            }
        }
        tracing::debug!(found = found.len(), "searched");
        Ok(())
    }
}
