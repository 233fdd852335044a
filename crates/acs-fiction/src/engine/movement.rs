//! Moving between rooms and running from fights.

use acs_core::entity::strip_article;
use acs_core::{RoomId, World};
use acs_mechanics::combat;
use acs_mechanics::{FleeOutcome, RollSource};

use super::describe::room_lines;
use super::{TurnEngine, TurnReport, here, narrate_event, pick};
use crate::error::FictionResult;
use crate::interpreter::MoveTarget;

/// Bring following companions from `from` to wherever the player now is.
fn bring_companions(world: &mut World, from: &RoomId) {
    let to = world.player.room.clone();
    for id in world.following_companions() {
        let monster = world
            .monster_mut(&id)
            .filter(|m| m.alive && &m.room == from);
        if let Some(monster) = monster {
            monster.room = to.clone();
        }
    }
}

impl TurnEngine {
    pub(super) fn do_move(
        &self,
        world: &mut World,
        to: &MoveTarget,
        report: &mut TurnReport,
    ) -> FictionResult<()> {
        let room = here(world)?;
        let destination = match to {
            MoveTarget::Direction(direction) => room.exit(direction.name()).cloned(),
            MoveTarget::Place(place) => {
                let place = strip_article(place);
                if place.is_empty() {
                    report.say("Go where?");
                    return Ok(());
                }
                let query = place.to_lowercase();
                room.exit(place)
                    .or_else(|| {
                        pick(
                            room.exits.values(),
                            |id| {
                                world
                                    .room(id)
                                    .is_some_and(|r| r.name.to_lowercase().contains(&query))
                            },
                            report,
                        )
                    })
                    .cloned()
            }
        };
        let Some(destination) = destination else {
            report.say("You can't go that way.");
            return Ok(());
        };

        let from = std::mem::replace(&mut world.player.room, destination);
        self.arrive(world, &from, report)?;
        report.consumed = true;
        Ok(())
    }

    /// The player has just left `from`: companions catch up and the new room
    /// is described, in full on the first visit.
    fn arrive(&self, world: &mut World, from: &RoomId, report: &mut TurnReport) -> FictionResult<()> {
        bring_companions(world, from);
        let to = world.player.room.clone();
        let first_visit = world.player.visited.insert(to.clone());
        tracing::debug!(%from, %to, first_visit, "player moved");
        report.extend(room_lines(world, first_visit || self.config.verbose_rooms)?);
        Ok(())
    }

    pub(super) fn do_flee(
        &self,
        world: &mut World,
        rolls: &mut dyn RollSource,
        report: &mut TurnReport,
    ) -> FictionResult<()> {
        let from = world.player.room.clone();
        match combat::flee(world, rolls)? {
            FleeOutcome::NoExits => report.say("There's nowhere to flee!"),
            FleeOutcome::Escaped { exit, .. } => {
                report.consumed = true;
                report.say(format!("You flee {exit}!"));
                self.arrive(world, &from, report)?;
            }
            FleeOutcome::Caught { events, .. } => {
                report.consumed = true;
                report.say("You try to flee but can't get away!");
                for event in &events {
                    report.say(narrate_event(world, event));
                }
            }
        }
        Ok(())
    }
}
