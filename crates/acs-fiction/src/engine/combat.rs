//! Attacking, and putting combat events into words.

use acs_core::entity::strip_article;
use acs_core::{Disposition, World};
use acs_mechanics::combat;
use acs_mechanics::{CombatEvent, Combatant, RollSource};

use super::{TurnEngine, TurnReport, and_list, capitalize, here, pick, the};
use crate::error::FictionResult;

fn name_of(world: &World, who: &Combatant) -> String {
    match who {
        Combatant::Player => "you".to_string(),
        Combatant::Monster(id) => world
            .monster(id)
            .map_or_else(|| id.to_string(), |m| the(&m.name)),
    }
}

/// Pick the verb form agreeing with the subject.
fn verb<'a>(who: &Combatant, second: &'a str, third: &'a str) -> &'a str {
    if who.is_player() { second } else { third }
}

/// One line of narration for a combat event.
pub fn narrate_event(world: &World, event: &CombatEvent) -> String {
    match event {
        CombatEvent::Missed {
            attacker, defender, ..
        } => format!(
            "{} {} {}.",
            capitalize(&name_of(world, attacker)),
            verb(attacker, "miss", "misses"),
            name_of(world, defender)
        ),
        CombatEvent::Hit {
            attacker,
            defender,
            absorbed,
            dealt,
            ..
        } => {
            let blow = format!(
                "{} {} {}",
                capitalize(&name_of(world, attacker)),
                verb(attacker, "hit", "hits"),
                name_of(world, defender)
            );
            match (dealt, absorbed) {
                (0, _) => format!("{blow}, but the blow does no harm."),
                (n, 0) => format!("{blow} for {n} damage."),
                (n, a) => format!("{blow} for {n} damage ({a} absorbed by armor)."),
            }
        }
        CombatEvent::Died { who, dropped, gold } => {
            if who.is_player() {
                return "You have died!".to_string();
            }
            let mut loot: Vec<String> = dropped
                .iter()
                .map(|id| world.item(id).map_or_else(|| id.to_string(), |i| the(&i.name)))
                .collect();
            match gold {
                0 => {}
                1 => loot.push("a gold piece".to_string()),
                n => loot.push(format!("{n} gold pieces")),
            }
            let name = capitalize(&name_of(world, who));
            if loot.is_empty() {
                format!("{name} dies!")
            } else {
                format!("{name} dies, dropping {}.", and_list(&loot))
            }
        }
        CombatEvent::Fled { who, exit, .. } => format!(
            "{} {} {exit}!",
            capitalize(&name_of(world, who)),
            verb(who, "flee", "flees")
        ),
    }
}

impl TurnEngine {
    pub(super) fn do_attack(
        &self,
        world: &mut World,
        target: &str,
        rolls: &mut dyn RollSource,
        report: &mut TurnReport,
    ) -> FictionResult<()> {
        if strip_article(target).is_empty() {
            report.say("Attack what?");
            return Ok(());
        }
        let room = here(world)?.id.clone();
        let found = pick(world.living_monsters_in(&room), |m| m.matches(target), report)
            .map(|m| (m.id.clone(), m.disposition, capitalize(&the(&m.name))));
        let Some((id, disposition, name)) = found else {
            report.say("You don't see that here.");
            return Ok(());
        };

        if disposition != Disposition::Hostile {
            if let Some(monster) = world.monster_mut(&id) {
                monster.disposition = Disposition::Hostile;
            }
            if world.dismiss(&id) {
                report.say(format!("{name} leaves your party!"));
            }
            tracing::info!(monster = %id, "provoked");
        }
        report.consumed = true;

        let defender = Combatant::Monster(id.clone());
        let events = combat::resolve_exchange(world, &Combatant::Player, &defender, rolls)?;
        for event in &events {
            report.say(narrate_event(world, event));
        }

        let helpers: Vec<Combatant> = world
            .party
            .iter()
            .filter(|c| c.is_following() && c.stance.fights())
            .map(|c| Combatant::Monster(c.monster.clone()))
            .collect();
        for helper in helpers {
            let target_stands = world
                .monster(&id)
                .is_some_and(|m| m.alive && m.room == room);
            if !target_stands || !world.player.alive {
                break;
            }
            let events = combat::strike(world, &helper, &defender, rolls)?;
            for event in &events {
                report.say(narrate_event(world, event));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tests::{apply, apply_with, keep};
    use crate::interpreter::{Action, Direction};
    use acs_core::{Companion, ItemId, Location, MonsterId, RoomId, Stance};
    use acs_mechanics::ScriptedRolls;

    fn attack(world: &mut World, target: &str, rolls: &mut ScriptedRolls) -> TurnReport {
        apply_with(
            world,
            Action::Attack {
                target: target.to_string(),
            },
            rolls,
        )
    }

    /// Armed with the sword, standing in the gatehouse.
    fn armed() -> World {
        let mut world = keep();
        world.move_item(&ItemId::new("sword"), Location::Player);
        world.player.weapon = Some(ItemId::new("sword"));
        apply(&mut world, Action::go(Direction::North));
        world
    }

    #[test]
    fn slay_the_goblin() {
        let mut world = armed();
        let report = attack(&mut world, "goblin", &mut ScriptedRolls::new([1, 1]));
        insta::assert_snapshot!(report.lines.join("\n"), @r"
        You hit the goblin for 1 damage.
        The goblin dies, dropping the spiked club and 12 gold pieces.
        ");
        let goblin = world.monster(&MonsterId::new("goblin")).unwrap();
        assert!(!goblin.alive);
        assert_eq!(goblin.health, 0);
        let gatehouse = RoomId::new("gatehouse");
        assert_eq!(world.room(&gatehouse).unwrap().gold, 12);
        assert_eq!(
            world.item(&ItemId::new("club")).unwrap().location,
            Location::Room(gatehouse)
        );

        let again = attack(&mut world, "goblin", &mut ScriptedRolls::default());
        assert_eq!(again.lines, vec!["You don't see that here."]);
        assert!(!again.consumed);
    }

    #[test]
    fn miss_and_strike_back() {
        let mut world = armed();
        world.monster_mut(&MonsterId::new("goblin")).unwrap().health = 6;
        // The sword's accuracy makes a miss impossible.
        world.player.weapon = None;
        let report = attack(&mut world, "goblin", &mut ScriptedRolls::new([20, 3, 4]));
        assert_eq!(
            report.lines,
            vec!["You miss the goblin.", "The goblin hits you for 4 damage."]
        );
        assert_eq!(world.player.health, 8);
    }

    #[test]
    fn attacking_a_bystander_makes_an_enemy() {
        let mut world = keep();
        let guard = MonsterId::new("guard");
        // Unarmed hit for 1, then the guard misses.
        attack(&mut world, "guard", &mut ScriptedRolls::new([1, 1, 20]));
        let guard = world.monster(&guard).unwrap();
        assert_eq!(guard.disposition, Disposition::Hostile);
        assert_eq!(guard.health, 9);
    }

    #[test]
    fn attacking_a_companion_ends_the_friendship() {
        let mut world = keep();
        let wren = MonsterId::new("wren");
        world.party.push(Companion::new(wren.clone()));
        let report = attack(&mut world, "wren", &mut ScriptedRolls::new([20, 20]));
        assert_eq!(report.lines[0], "Wren leaves your party!");
        assert!(world.companion(&wren).is_none());
    }

    #[test]
    fn fighting_companions_join_in() {
        let mut world = keep();
        let wren = MonsterId::new("wren");
        let mut companion = Companion::new(wren.clone());
        companion.stance = Stance::Aggressive;
        world.party.push(companion);
        apply(&mut world, Action::go(Direction::North));
        world.monster_mut(&MonsterId::new("goblin")).unwrap().health = 10;

        // Player hits for 1, goblin misses, Wren hits for 3.
        let mut rolls = ScriptedRolls::new([1, 1, 20, 1, 3]);
        let report = attack(&mut world, "goblin", &mut rolls);
        assert_eq!(report.lines.last().unwrap(), "Wren hits the goblin for 3 damage.");
        assert_eq!(world.monster(&MonsterId::new("goblin")).unwrap().health, 6);
    }

    #[test]
    fn passive_companions_stay_out_of_it() {
        let mut world = keep();
        let wren = MonsterId::new("wren");
        let mut companion = Companion::new(wren.clone());
        companion.stance = Stance::Passive;
        world.party.push(companion);
        apply(&mut world, Action::go(Direction::North));
        world.monster_mut(&MonsterId::new("goblin")).unwrap().health = 10;

        let report = attack(&mut world, "goblin", &mut ScriptedRolls::new([1, 1, 20]));
        assert_eq!(report.lines.len(), 2);
    }

    #[test]
    fn player_death_ends_the_session() {
        let mut world = armed();
        world.player.weapon = None;
        world.player.health = 1;
        world.monster_mut(&MonsterId::new("goblin")).unwrap().health = 6;
        let report = attack(&mut world, "goblin", &mut ScriptedRolls::new([20, 1, 4]));
        assert_eq!(report.lines.last().unwrap(), "You have died!");
        assert!(report.ended);
        assert!(!world.player.alive);

        let after = apply(&mut world, Action::look());
        assert_eq!(after.lines, vec!["You are dead. The adventure is over."]);
    }

    #[test]
    fn attack_needs_a_target() {
        let mut world = keep();
        let report = attack(&mut world, "", &mut ScriptedRolls::default());
        assert_eq!(report.lines, vec!["Attack what?"]);
    }

    #[test]
    fn narrate_glancing_and_armored_blows() {
        let world = keep();
        let goblin = Combatant::Monster(MonsterId::new("goblin"));
        let damage = acs_mechanics::Dice::new(1, 4).roll(&mut ScriptedRolls::new([3]));
        let glance = CombatEvent::Hit {
            attacker: goblin.clone(),
            defender: Combatant::Player,
            damage: damage.clone(),
            absorbed: 3,
            dealt: 0,
            health: 12,
        };
        assert_eq!(
            narrate_event(&world, &glance),
            "The goblin hits you, but the blow does no harm."
        );
        let armored = CombatEvent::Hit {
            attacker: Combatant::Player,
            defender: goblin.clone(),
            damage,
            absorbed: 1,
            dealt: 2,
            health: 4,
        };
        assert_eq!(
            narrate_event(&world, &armored),
            "You hit the goblin for 2 damage (1 absorbed by armor)."
        );
        let fled = CombatEvent::Fled {
            who: goblin,
            exit: "south".to_string(),
            to: RoomId::new("courtyard"),
        };
        assert_eq!(narrate_event(&world, &fled), "The goblin flees south!");
    }
}
