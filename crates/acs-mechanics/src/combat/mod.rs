//! Attack exchanges, death and fleeing.
//!
//! One exchange is a strike by the attacker followed, if the defender is a
//! surviving hostile monster, by its response: a strike back, or for a
//! badly hurt cowardly monster possibly a dash through a random exit.
//!
//! To hit, roll 1d20 at or under the attacker's agility plus weapon
//! accuracy, plus the player's weapon-class skill or a companion's stance
//! modifier. Damage is the weapon dice (bare hands: 1d3) less the
//! defender's armor, never below zero.

pub mod event;

pub use event::{CombatEvent, Combatant, FleeOutcome};

use acs_core::{Disposition, Location, RoomId, Tactic, World};

use crate::dice::{Dice, RollSource};
use crate::error::{MechError, MechResult};

/// Health, in percent of hardiness, below which a cowardly monster may flee.
const COWARDICE_THRESHOLD: u32 = 50;

/// Everything about a combatant that a strike needs.
#[derive(Debug, Clone)]
struct Profile {
    room: RoomId,
    alive: bool,
    health: u32,
    to_hit: i32,
    damage: Dice,
    armor: u32,
}

fn profile(world: &World, who: &Combatant) -> MechResult<Profile> {
    let weapon_of = |id: Option<&acs_core::ItemId>| {
        id.and_then(|id| world.item(id))
            .and_then(|item| item.weapon.as_ref())
    };
    let armor_of = |id: Option<&acs_core::ItemId>| {
        id.and_then(|id| world.item(id))
            .and_then(|item| item.armor.as_ref())
            .map_or(0, |a| a.reduction)
    };

    match who {
        Combatant::Player => {
            let player = &world.player;
            let weapon = weapon_of(player.weapon.as_ref());
            let bonus = weapon.map_or(0, |w| w.accuracy.saturating_add(player.skill(w.class)));
            Ok(Profile {
                room: player.room.clone(),
                alive: player.alive,
                health: player.health,
                to_hit: agility(player.stats.agility).saturating_add(bonus),
                damage: weapon.map_or(Dice::UNARMED, Dice::from),
                armor: armor_of(player.armor.as_ref()),
            })
        }
        Combatant::Monster(id) => {
            let monster = world
                .monster(id)
                .ok_or_else(|| MechError::UnknownCombatant(id.clone()))?;
            let weapon = weapon_of(monster.weapon.as_ref());
            let stance = world.companion(id).map_or(0, |c| c.stance.hit_modifier());
            Ok(Profile {
                room: monster.room.clone(),
                alive: monster.alive,
                health: monster.health,
                to_hit: agility(monster.stats.agility)
                    .saturating_add(weapon.map_or(0, |w| w.accuracy))
                    .saturating_add(stance),
                damage: weapon.map_or(Dice::UNARMED, Dice::from),
                armor: armor_of(monster.armor.as_ref()),
            })
        }
    }
}

fn agility(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn set_health(world: &mut World, who: &Combatant, health: u32) {
    match who {
        Combatant::Player => world.player.health = health,
        Combatant::Monster(id) => {
            if let Some(monster) = world.monster_mut(id) {
                monster.health = health;
            }
        }
    }
}

/// Mark a combatant dead. A monster's belongings and gold fall to the floor
/// of its room and it leaves the party; the body stays for examination.
fn kill(world: &mut World, who: &Combatant) -> MechResult<CombatEvent> {
    match who {
        Combatant::Player => {
            world.player.alive = false;
            world.player.health = 0;
            tracing::info!("player died");
            Ok(CombatEvent::Died {
                who: who.clone(),
                dropped: Vec::new(),
                gold: 0,
            })
        }
        Combatant::Monster(id) => {
            let monster = world
                .monster_mut(id)
                .ok_or_else(|| MechError::UnknownCombatant(id.clone()))?;
            monster.alive = false;
            monster.health = 0;
            let gold = std::mem::take(&mut monster.gold);
            let room = monster.room.clone();

            let owner = Location::Monster(id.clone());
            let dropped: Vec<_> = world.items_at(&owner).map(|i| i.id.clone()).collect();
            for item in &dropped {
                world.move_item(item, Location::Room(room.clone()));
            }
            let floor = world
                .room_mut(&room)
                .ok_or_else(|| MechError::UnknownRoom(room.clone()))?;
            floor.gold = floor.gold.saturating_add(gold);
            world.dismiss(id);

            tracing::info!(monster = %id, gold, dropped = dropped.len(), "monster died");
            Ok(CombatEvent::Died {
                who: who.clone(),
                dropped,
                gold,
            })
        }
    }
}

/// A single attack: to-hit roll, damage roll, death check.
///
/// Nothing happens if either side is already dead.
pub fn strike(
    world: &mut World,
    attacker: &Combatant,
    defender: &Combatant,
    rolls: &mut dyn RollSource,
) -> MechResult<Vec<CombatEvent>> {
    let a = profile(world, attacker)?;
    let d = profile(world, defender)?;
    if !a.alive || !d.alive {
        return Ok(Vec::new());
    }

    let roll = rolls.roll(Dice::D20.sides);
    tracing::debug!(?attacker, ?defender, roll, needed = a.to_hit, "to-hit roll");
    if agility(roll) > a.to_hit {
        return Ok(vec![CombatEvent::Missed {
            attacker: attacker.clone(),
            defender: defender.clone(),
            roll,
            needed: a.to_hit,
        }]);
    }

    let damage = a.damage.roll(rolls);
    let dealt = damage.total().saturating_sub(d.armor);
    let health = d.health.saturating_sub(dealt);
    tracing::debug!(%damage, dealt, health, "damage roll");
    set_health(world, defender, health);

    let mut events = vec![CombatEvent::Hit {
        attacker: attacker.clone(),
        defender: defender.clone(),
        absorbed: damage.total() - dealt,
        damage,
        dealt,
        health,
    }];
    if health == 0 {
        events.push(kill(world, defender)?);
    }
    Ok(events)
}

/// One full exchange: the attacker strikes, then a surviving hostile
/// monster responds.
pub fn resolve_exchange(
    world: &mut World,
    attacker: &Combatant,
    defender: &Combatant,
    rolls: &mut dyn RollSource,
) -> MechResult<Vec<CombatEvent>> {
    let mut events = strike(world, attacker, defender, rolls)?;
    events.extend(respond(world, defender, attacker, rolls)?);
    Ok(events)
}

/// A monster's answer to being attacked.
fn respond(
    world: &mut World,
    monster: &Combatant,
    target: &Combatant,
    rolls: &mut dyn RollSource,
) -> MechResult<Vec<CombatEvent>> {
    let Combatant::Monster(id) = monster else {
        return Ok(Vec::new());
    };
    let m = world
        .monster(id)
        .ok_or_else(|| MechError::UnknownCombatant(id.clone()))?;
    if !m.alive || m.disposition != Disposition::Hostile {
        return Ok(Vec::new());
    }

    if m.tactic == Tactic::Cowardly {
        let health_pct = health_percent(m.health, m.stats.hardiness);
        if health_pct < COWARDICE_THRESHOLD {
            let chance = 100 - health_pct;
            let roll = rolls.percent();
            tracing::debug!(monster = %id, roll, chance, "cowardice check");
            if roll <= chance {
                if let Some(fled) = escape(world, monster, rolls)? {
                    return Ok(vec![fled]);
                }
            }
        }
    }

    strike(world, monster, target, rolls)
}

/// Move a combatant through a uniformly chosen exit of its room.
/// Returns `None` when the room has no exits.
fn escape(
    world: &mut World,
    who: &Combatant,
    rolls: &mut dyn RollSource,
) -> MechResult<Option<CombatEvent>> {
    let here = profile(world, who)?.room;
    let room = world
        .room(&here)
        .ok_or_else(|| MechError::UnknownRoom(here.clone()))?;
    if room.exits.is_empty() {
        return Ok(None);
    }
    let index = rolls.choose(room.exits.len());
    let Some((exit, to)) = room.exits.iter().nth(index) else {
        return Ok(None);
    };
    let (exit, to) = (exit.clone(), to.clone());

    match who {
        Combatant::Player => world.player.room = to.clone(),
        Combatant::Monster(id) => {
            if let Some(monster) = world.monster_mut(id) {
                monster.room = to.clone();
            }
        }
    }
    tracing::debug!(?who, %exit, "fled");
    Ok(Some(CombatEvent::Fled {
        who: who.clone(),
        exit,
        to,
    }))
}

/// Every living hostile monster in the player's room strikes the player,
/// in declaration order, until the player falls.
pub fn hostile_strikes(world: &mut World, rolls: &mut dyn RollSource) -> MechResult<Vec<CombatEvent>> {
    let hostiles: Vec<_> = world
        .living_monsters_in(&world.player.room)
        .filter(|m| m.disposition == Disposition::Hostile)
        .map(|m| Combatant::Monster(m.id.clone()))
        .collect();

    let mut events = Vec::new();
    for monster in hostiles {
        if !world.player.alive {
            break;
        }
        events.extend(strike(world, &monster, &Combatant::Player, rolls)?);
    }
    Ok(events)
}

/// The player tries to run: 1d20 at or under agility escapes through a
/// random exit; otherwise the hostiles in the room get their strikes.
pub fn flee(world: &mut World, rolls: &mut dyn RollSource) -> MechResult<FleeOutcome> {
    let here = world.player.room.clone();
    let room = world
        .room(&here)
        .ok_or_else(|| MechError::UnknownRoom(here.clone()))?;
    if room.exits.is_empty() {
        return Ok(FleeOutcome::NoExits);
    }

    let roll = rolls.roll(Dice::D20.sides);
    tracing::debug!(roll, agility = world.player.stats.agility, "flee roll");
    if roll <= world.player.stats.agility {
        if let Some(CombatEvent::Fled { exit, to, .. }) = escape(world, &Combatant::Player, rolls)? {
            return Ok(FleeOutcome::Escaped { exit, to });
        }
    }

    let events = hostile_strikes(world, rolls)?;
    Ok(FleeOutcome::Caught { roll, events })
}

/// Health as a share of hardiness, for status displays.
pub fn health_percent(health: u32, hardiness: u32) -> u32 {
    if hardiness == 0 {
        0
    } else {
        health.saturating_mul(100) / hardiness
    }
}
