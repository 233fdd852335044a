//! Read-only narration: rooms, examining things, inventory, status, help.

use acs_core::entity::strip_article;
use acs_core::{Disposition, Item, ItemId, Location, Monster, World};
use acs_mechanics::Dice;
use acs_mechanics::combat::health_percent;

use super::{TurnEngine, TurnReport, capitalize, here, pick, the};
use crate::error::FictionResult;

/// Narrate the player's room. `full` includes the long description.
pub(crate) fn room_lines(world: &World, full: bool) -> FictionResult<Vec<String>> {
    let room = here(world)?;
    let mut lines = vec![room.name.clone()];

    let exits = if room.exits.is_empty() {
        "No obvious exits.".to_string()
    } else {
        format!("Obvious exits: {}", room.exit_names().join(", "))
    };

    if room.dark && !world.player_has_light() {
        lines.push("It is too dark to see anything here.".to_string());
        lines.push(exits);
        return Ok(lines);
    }

    if full && !room.description.is_empty() {
        lines.push(room.description.clone());
    }
    lines.push(exits);

    let items: Vec<&Item> = world.items_in_room(&room.id).collect();
    if !items.is_empty() {
        lines.push("You see:".to_string());
        lines.extend(items.iter().map(|i| format!("  - {}", i.name)));
    }
    match room.gold {
        0 => {}
        1 => lines.push("A single gold piece glints on the floor.".to_string()),
        n => lines.push(format!("There are {n} gold pieces here.")),
    }

    let present: Vec<&Monster> = world.living_monsters_in(&room.id).collect();
    if !present.is_empty() {
        lines.push("Present:".to_string());
        for monster in present {
            let marker = if world.companion(&monster.id).is_some() {
                " (companion)"
            } else {
                match monster.disposition {
                    Disposition::Friendly => " (friendly)",
                    Disposition::Hostile => " (hostile)",
                    Disposition::Neutral => "",
                }
            };
            lines.push(format!("  - {}{marker}", monster.name));
        }
    }
    for body in world.monsters_in(&room.id).filter(|m| !m.alive) {
        lines.push(format!("The body of {} lies here.", the(&body.name)));
    }
    Ok(lines)
}

/// How hurt something looks.
pub(crate) fn condition(health: u32, hardiness: u32) -> &'static str {
    match health_percent(health, hardiness) {
        100.. => "unharmed",
        75..=99 => "lightly wounded",
        50..=74 => "wounded",
        25..=49 => "badly wounded",
        _ => "near death",
    }
}

fn item_lines(item: &Item) -> Vec<String> {
    let mut lines = Vec::new();
    if item.description.is_empty() {
        lines.push(format!("You see nothing special about {}.", the(&item.name)));
    } else {
        lines.push(item.description.clone());
    }
    if let Some(weapon) = &item.weapon {
        lines.push(format!(
            "It is a {} dealing {} damage.",
            weapon.class,
            Dice::from(weapon)
        ));
    }
    if let Some(armor) = &item.armor {
        lines.push(format!("It absorbs {} damage per blow.", armor.reduction));
    }
    lines
}

fn monster_lines(monster: &Monster) -> Vec<String> {
    let mut lines = Vec::new();
    if !monster.description.is_empty() {
        lines.push(monster.description.clone());
    }
    let name = capitalize(&the(&monster.name));
    if monster.alive {
        lines.push(format!(
            "{name} looks {}.",
            condition(monster.health, monster.stats.hardiness)
        ));
    } else {
        lines.push(format!("{name} is dead."));
    }
    lines
}

/// The command summary.
pub(crate) fn help() -> Vec<String> {
    [
        "Movement:",
        "  n, s, e, w, ne, nw, se, sw, u, d, in, out",
        "  go <direction or place>, enter <place>, exit",
        "Actions:",
        "  look (l), examine (x) <thing>",
        "  take <item>, drop <item>, take gold",
        "  equip <item>, unequip <item>",
        "  give <item> to <someone>, eat <item>, drink <item>",
        "  search, trade, buy <item>, sell <item>",
        "  attack <monster>, flee",
        "  talk to <someone> [about <topic>]",
        "Party:",
        "  recruit <someone>, dismiss <companion>, party, gather",
        "  tell <companion> to <order>",
        "  orders: wait, follow, aggressive, defensive, support, passive",
        "Info:",
        "  inventory (i), status, help (?)",
        "  quit (q)",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl TurnEngine {
    /// Describe the room, or examine one thing.
    pub(super) fn do_look_at(
        &self,
        world: &World,
        target: Option<&str>,
        report: &mut TurnReport,
    ) -> FictionResult<()> {
        let Some(target) = target else {
            report.extend(room_lines(world, true)?);
            return Ok(());
        };

        let room = here(world)?;
        if let Some(item) = pick(world.inventory(), |i| i.matches(target), report) {
            report.extend(item_lines(item));
            return Ok(());
        }
        // Without light only what is carried and the way out can be made out.
        let lit = !room.dark || world.player_has_light();
        if lit {
            if let Some(item) = pick(world.items_in_room(&room.id), |i| i.matches(target), report) {
                report.extend(item_lines(item));
                return Ok(());
            }
            if let Some(monster) = pick(world.monsters_in(&room.id), |m| m.matches(target), report)
            {
                report.extend(monster_lines(monster));
                return Ok(());
            }
        }
        let exit = strip_article(target);
        if let Some(to) = room.exit(exit) {
            let name = world.room(to).map_or(to.as_str(), |r| r.name.as_str());
            report.say(format!("The {} exit leads to {name}.", exit.to_lowercase()));
            return Ok(());
        }
        if lit {
            report.say("You don't see that here.");
        } else {
            report.say("It is too dark to see that.");
        }
        Ok(())
    }

    pub(super) fn do_inventory(&self, world: &World, report: &mut TurnReport) {
        let carried: Vec<&Item> = world.inventory().collect();
        if carried.is_empty() {
            report.say("You are empty-handed.");
        } else {
            report.say("You are carrying:");
            for item in &carried {
                let equipped = if world.player.weapon.as_ref() == Some(&item.id) {
                    " (weapon)"
                } else if world.player.armor.as_ref() == Some(&item.id) {
                    " (armor)"
                } else {
                    ""
                };
                report.say(format!("  - {}{equipped}", item.name));
            }
            let weight = carried.iter().map(|i| i.weight).fold(0, u32::saturating_add);
            report.say(format!("Total weight: {weight}"));
        }
        report.say(format!("Gold: {}", world.player.gold));
    }

    pub(super) fn do_status(&self, world: &World, report: &mut TurnReport) {
        let player = &world.player;
        let stats = &player.stats;
        report.say(player.name.clone());
        report.say(format!(
            "Health: {}/{} ({})",
            player.health,
            stats.hardiness,
            condition(player.health, stats.hardiness)
        ));
        report.say(format!(
            "Hardiness: {}  Agility: {}  Courage: {}",
            stats.hardiness, stats.agility, stats.courage
        ));
        report.say(format!("Gold: {}", player.gold));

        let equipped = |id: Option<&ItemId>| {
            id.and_then(|id| world.item(id))
                .filter(|i| i.location == Location::Player)
        };
        match equipped(player.weapon.as_ref()) {
            Some(weapon) => {
                let dice = weapon.weapon.as_ref().map_or(Dice::UNARMED, Dice::from);
                report.say(format!("Weapon: {} ({dice})", weapon.name));
            }
            None => report.say(format!("Weapon: bare hands ({})", Dice::UNARMED)),
        }
        if let Some(armor) = equipped(player.armor.as_ref()) {
            report.say(format!("Armor: {}", armor.name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tests::{apply, keep};
    use crate::interpreter::Action;
    use acs_core::RoomId;

    fn look_at(world: &mut World, target: &str) -> Vec<String> {
        apply(
            world,
            Action::LookAt {
                target: Some(target.to_string()),
            },
        )
        .lines
    }

    #[test]
    fn full_room_description() {
        let world = keep();
        insta::assert_snapshot!(room_lines(&world, true).unwrap().join("\n"), @r"
        Courtyard
        Flagstones slick with rain.
        Obvious exits: down, in, north
        You see:
          - short sword
          - oak shield
          - stone statue
        Present:
          - Wren (friendly)
          - guard
        ");
    }

    #[test]
    fn brief_description_skips_prose() {
        let world = keep();
        let lines = room_lines(&world, false).unwrap();
        assert_eq!(lines[0], "Courtyard");
        assert_eq!(lines[1], "Obvious exits: down, in, north");
    }

    #[test]
    fn dark_room_hides_contents_but_not_exits() {
        let mut world = keep();
        world.player.room = RoomId::new("cellar");
        assert_eq!(
            room_lines(&world, true).unwrap(),
            vec![
                "Cellar",
                "It is too dark to see anything here.",
                "Obvious exits: up",
            ]
        );

        world.move_item(&ItemId::new("lamp"), Location::Player);
        let lines = room_lines(&world, true).unwrap();
        assert!(lines.contains(&"  - iron key".to_string()));
    }

    #[test]
    fn dark_room_hides_things_from_examine() {
        let mut world = keep();
        world.player.room = RoomId::new("cellar");
        world.move_item(&ItemId::new("sword"), Location::Player);

        assert_eq!(look_at(&mut world, "key"), vec!["It is too dark to see that."]);
        let report = apply(
            &mut world,
            Action::Unknown {
                raw: "poke key".to_string(),
            },
        );
        assert_eq!(report.lines, vec!["It is too dark to see that."]);
        assert_eq!(look_at(&mut world, "up"), vec!["The up exit leads to Courtyard."]);
        assert_eq!(
            look_at(&mut world, "sword")[0],
            "You see nothing special about the short sword."
        );

        world.move_item(&ItemId::new("lamp"), Location::Player);
        assert_ne!(look_at(&mut world, "key"), vec!["It is too dark to see that."]);
    }

    #[test]
    fn bodies_and_gold_are_shown() {
        let mut world = keep();
        world.player.room = RoomId::new("gatehouse");
        world.room_mut(&RoomId::new("gatehouse")).unwrap().gold = 7;
        let lines = room_lines(&world, false).unwrap();
        assert!(lines.contains(&"There are 7 gold pieces here.".to_string()));
        assert!(lines.contains(&"  - goblin (hostile)".to_string()));
        assert!(lines.contains(&"The body of the ghoul lies here.".to_string()));
    }

    #[test]
    fn examine_weapon_shows_dice() {
        let mut world = keep();
        assert_eq!(
            look_at(&mut world, "the sword"),
            vec![
                "You see nothing special about the short sword.",
                "It is a sword dealing 1d6 damage.",
            ]
        );
    }

    #[test]
    fn examine_monsters_living_and_dead() {
        let mut world = keep();
        world.player.room = RoomId::new("gatehouse");
        assert_eq!(
            look_at(&mut world, "goblin"),
            vec!["Green and mean.", "The goblin looks near death."]
        );
        assert_eq!(look_at(&mut world, "ghoul"), vec!["The ghoul is dead."]);
    }

    #[test]
    fn examine_exit() {
        let mut world = keep();
        assert_eq!(
            look_at(&mut world, "north"),
            vec!["The north exit leads to Gatehouse."]
        );
        assert_eq!(look_at(&mut world, "chimney"), vec!["You don't see that here."]);
    }

    #[test]
    fn inventory_listing() {
        let mut world = keep();
        let report = apply(&mut world, Action::Inventory);
        assert_eq!(report.lines, vec!["You are empty-handed.", "Gold: 200"]);

        world.move_item(&ItemId::new("sword"), Location::Player);
        world.move_item(&ItemId::new("shield"), Location::Player);
        world.player.weapon = Some(ItemId::new("sword"));
        let report = apply(&mut world, Action::Inventory);
        insta::assert_snapshot!(report.lines.join("\n"), @r"
        You are carrying:
          - short sword (weapon)
          - oak shield
        Total weight: 7
        Gold: 200
        ");
        assert!(!report.consumed);
    }

    #[test]
    fn status_report() {
        let mut world = keep();
        world.player.health = 5;
        let report = apply(&mut world, Action::Status);
        insta::assert_snapshot!(report.lines.join("\n"), @r"
        Adventurer
        Health: 5/12 (badly wounded)
        Hardiness: 12  Agility: 12  Courage: 100
        Gold: 200
        Weapon: bare hands (1d3)
        ");
    }

    #[test]
    fn conditions() {
        assert_eq!(condition(12, 12), "unharmed");
        assert_eq!(condition(10, 12), "lightly wounded");
        assert_eq!(condition(0, 12), "near death");
        assert_eq!(condition(3, 0), "near death");
    }

    #[test]
    fn help_is_not_a_turn() {
        let mut world = keep();
        let report = apply(&mut world, Action::Help);
        assert!(report.lines.iter().any(|l| l.contains("recruit")));
        assert!(!report.consumed);
    }
}
