//! Conversation and companions.

use acs_core::entity::strip_article;
use acs_core::{Companion, Disposition, MonsterId, Stance, World};

use super::describe::condition;
use super::{TurnEngine, TurnReport, and_list, capitalize, here, pick, the};
use crate::error::FictionResult;

/// What an order word asks of a companion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    Wait,
    Follow,
    Stance(Stance),
}

const ORDERS: &[(&[&str], Order)] = &[
    (&["wait", "stay"], Order::Wait),
    (&["follow", "come"], Order::Follow),
    (&["aggressive", "attack"], Order::Stance(Stance::Aggressive)),
    (&["defensive", "defend"], Order::Stance(Stance::Defensive)),
    (&["support", "help"], Order::Stance(Stance::Support)),
    (&["passive", "rest"], Order::Stance(Stance::Passive)),
];

fn parse_order(order: &str) -> Option<Order> {
    let words: Vec<&str> = order.split_whitespace().collect();
    ORDERS
        .iter()
        .find(|(synonyms, _)| words.iter().any(|w| synonyms.contains(w)))
        .map(|(_, order)| *order)
}

fn display_name(world: &World, id: &MonsterId) -> String {
    world
        .monster(id)
        .map_or_else(|| id.to_string(), |m| capitalize(&the(&m.name)))
}

impl TurnEngine {
    pub(super) fn do_talk(
        &self,
        world: &World,
        target: &str,
        topic: Option<&str>,
        report: &mut TurnReport,
    ) -> FictionResult<()> {
        if strip_article(target).is_empty() {
            report.say("Talk to whom?");
            return Ok(());
        }
        let room = here(world)?;
        let Some(monster) = pick(world.living_monsters_in(&room.id), |m| m.matches(target), report)
        else {
            report.say("You don't see that here.");
            return Ok(());
        };
        let name = capitalize(&the(&monster.name));

        if let Some(topic) = topic.map(strip_article).filter(|t| !t.is_empty()) {
            let query = topic.to_lowercase();
            let answer = monster
                .topics
                .iter()
                .find(|(key, _)| {
                    let key = key.to_lowercase();
                    key.contains(&query) || query.contains(&key)
                })
                .map(|(_, answer)| answer);
            match answer {
                Some(answer) => report.say(format!("{name} says, \"{answer}\"")),
                None => report.say(format!("{name} has nothing to say about {topic}.")),
            }
            return Ok(());
        }

        if let Some(greeting) = &monster.greeting {
            report.say(format!("{name} says, \"{greeting}\""));
            return Ok(());
        }
        report.say(match monster.disposition {
            Disposition::Friendly => format!("{name} smiles warmly at you."),
            Disposition::Neutral => format!("{name} regards you silently."),
            Disposition::Hostile => format!("{name} snarls at you!"),
        });
        Ok(())
    }

    pub(super) fn do_recruit(
        &self,
        world: &mut World,
        target: &str,
        report: &mut TurnReport,
    ) -> FictionResult<()> {
        if strip_article(target).is_empty() {
            report.say("Recruit whom?");
            return Ok(());
        }
        let room = here(world)?.id.clone();
        let found = pick(world.living_monsters_in(&room), |m| m.matches(target), report)
            .map(|m| (m.id.clone(), m.disposition, capitalize(&the(&m.name))));
        let Some((id, disposition, name)) = found else {
            report.say("You don't see that here.");
            return Ok(());
        };

        if world.companion(&id).is_some() {
            report.say(format!("{name} is already in your party."));
        } else if disposition != Disposition::Friendly {
            report.say(format!("{name} doesn't seem interested in joining you."));
        } else if world.party.len() >= self.config.max_party {
            report.say(format!(
                "Your party is full! (Maximum {} companions)",
                self.config.max_party
            ));
        } else {
            world.party.push(Companion::new(id.clone()));
            tracing::info!(monster = %id, "recruited");
            report.consumed = true;
            report.say(format!("{name} joins your party!"));
        }
        Ok(())
    }

    pub(super) fn do_party(&self, world: &World, report: &mut TurnReport) {
        if world.party.is_empty() {
            report.say("You are traveling alone.");
            return;
        }
        report.say("Your party:");
        for companion in &world.party {
            let Some(monster) = world.monster(&companion.monster) else {
                continue;
            };
            let mut line = format!(
                "  - {} ({}, {})",
                monster.name,
                condition(monster.health, monster.stats.hardiness),
                companion.stance
            );
            if let Some(room) = &companion.waiting_in {
                let room = world.room(room).map_or(room.as_str(), |r| r.name.as_str());
                line.push_str(&format!(", waiting in {room}"));
            }
            report.say(line);
        }
    }

    pub(super) fn do_order(
        &self,
        world: &mut World,
        target: &str,
        order: &str,
        report: &mut TurnReport,
    ) {
        let who = strip_article(target);
        if who.is_empty() {
            report.say("Order whom?");
            return;
        }
        let found = pick(
            world.party.iter(),
            |c| world.monster(&c.monster).is_some_and(|m| m.matches(who)),
            report,
        )
        .map(|c| c.monster.clone());
        let Some(id) = found else {
            report.say(format!("{who} is not in your party."));
            return;
        };
        let name = display_name(world, &id);
        let here = world.player.room.clone();
        if world.monster(&id).is_none_or(|m| m.room != here) {
            report.say(format!("{name} is not here."));
            return;
        }

        let order = order.trim().to_lowercase();
        if order.is_empty() {
            report.say(format!("{name} awaits your instructions."));
            return;
        }
        let Some(parsed) = parse_order(&order) else {
            report.say(format!("You tell {name}: {order}"));
            report.say(format!("{name} nods in understanding."));
            return;
        };
        let Some(companion) = world.companion_mut(&id) else {
            return;
        };
        report.consumed = true;
        let reply = match parsed {
            Order::Wait => {
                companion.waiting_in = Some(here);
                "will wait here."
            }
            Order::Follow => {
                companion.waiting_in = None;
                "resumes following you."
            }
            Order::Stance(stance) => {
                companion.stance = stance;
                match stance {
                    Stance::Aggressive => "will fight aggressively.",
                    Stance::Defensive => "will focus on defense.",
                    Stance::Support => "will support the party.",
                    Stance::Passive => "will avoid combat.",
                }
            }
        };
        tracing::debug!(companion = %id, ?parsed, "order given");
        report.say(format!("{name} {reply}"));
    }

    pub(super) fn do_dismiss(&self, world: &mut World, target: &str, report: &mut TurnReport) {
        let who = strip_article(target);
        if who.is_empty() {
            report.say("Dismiss whom?");
            return;
        }
        let found = pick(
            world.party.iter(),
            |c| world.monster(&c.monster).is_some_and(|m| m.matches(who)),
            report,
        )
        .map(|c| c.monster.clone());
        let Some(id) = found else {
            report.say(format!("{who} is not in your party."));
            return;
        };
        let name = display_name(world, &id);
        world.dismiss(&id);
        tracing::info!(monster = %id, "dismissed");
        report.consumed = true;
        report.say(format!("{name} has left your party."));
    }

    pub(super) fn do_gather(&self, world: &mut World, report: &mut TurnReport) {
        if world.party.is_empty() {
            report.say("You are traveling alone.");
            return;
        }
        let here = world.player.room.clone();
        let mut gathered = Vec::new();
        for companion in world
            .party
            .iter_mut()
            .filter(|c| c.waiting_in.as_ref() == Some(&here))
        {
            companion.waiting_in = None;
            gathered.push(companion.monster.clone());
        }

        if gathered.is_empty() {
            if world.party.iter().all(Companion::is_following) {
                report.say("All companions are already following you.");
            } else {
                report.say("No one is waiting for you here.");
            }
            return;
        }
        let names: Vec<String> = gathered.iter().map(|id| display_name(world, id)).collect();
        let verb = if names.len() == 1 { "rejoins" } else { "rejoin" };
        report.consumed = true;
        report.say(format!("{} {verb} your party.", and_list(&names)));
    }
}
