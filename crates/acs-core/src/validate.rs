//! Referential-integrity checks for adventure documents.
//!
//! Every exit, item location, monster room and equipment reference must
//! resolve before play starts. Problems are collected rather than returned
//! on the first failure, so an author sees all of them at once.

use std::collections::{BTreeSet, VecDeque};

use strsim::jaro_winkler;

use crate::adventure::AdventureDef;
use crate::entity::{ItemId, Location, RoomId};

/// Minimum similarity for a "did you mean" suggestion (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.8;

/// Most damage dice a weapon may roll.
pub const MAX_WEAPON_DICE: u32 = 100;
/// Most faces a damage die may have.
pub const MAX_WEAPON_SIDES: u32 = 1000;
/// Largest weapon accuracy modifier, either way.
pub const MAX_ACCURACY: i32 = 100;

/// A warning or error found while validating an adventure.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    /// What the issue is about, e.g. `room 'hall'`.
    pub subject: String,
    /// A human-readable description of the problem.
    pub message: String,
    /// The offending reference as written in the document, if any.
    pub reference: Option<String>,
    /// A close existing identifier, if one exists.
    pub suggestion: Option<String>,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(subject: String, message: String) -> Self {
        Self {
            subject,
            message,
            reference: None,
            suggestion: None,
            is_error: true,
        }
    }

    fn warning(subject: String, message: String) -> Self {
        Self {
            is_error: false,
            ..Self::error(subject, message)
        }
    }

    fn dangling<'a>(
        subject: String,
        message: String,
        reference: &str,
        known: impl Iterator<Item = &'a str>,
    ) -> Self {
        Self {
            reference: Some(reference.to_string()),
            suggestion: suggest(reference, known),
            ..Self::error(subject, message)
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.subject, self.message)?;
        if let Some(s) = &self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

/// Find the closest known identifier to an unresolved reference.
fn suggest<'a>(reference: &str, known: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut best: Option<(&str, f64)> = None;
    for candidate in known {
        let score = jaro_winkler(reference, candidate);
        if score >= SUGGEST_THRESHOLD && best.is_none_or(|(_, s)| score > s) {
            best = Some((candidate, score));
        }
    }
    best.map(|(c, _)| c.to_string())
}

/// Validate an adventure document. Returns every issue found; the document
/// is playable when none of them is an error.
pub fn validate(def: &AdventureDef) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if def.rooms.is_empty() {
        issues.push(ValidationIssue::error(
            "adventure".to_string(),
            "no rooms defined".to_string(),
        ));
        return issues;
    }

    let room_ids = unique_ids(
        def.rooms.iter().map(|r| r.id.as_str()),
        "room",
        &mut issues,
    );
    let item_ids = unique_ids(
        def.items.iter().map(|i| i.id.as_str()),
        "item",
        &mut issues,
    );
    let monster_ids = unique_ids(
        def.monsters.iter().map(|m| m.id.as_str()),
        "monster",
        &mut issues,
    );

    if !room_ids.contains(def.start_room.as_str()) {
        issues.push(ValidationIssue::dangling(
            "adventure".to_string(),
            format!("start room '{}' does not exist", def.start_room),
            def.start_room.as_str(),
            room_ids.iter().copied(),
        ));
    }

    for room in &def.rooms {
        for (exit, target) in &room.exits {
            if !room_ids.contains(target.as_str()) {
                issues.push(ValidationIssue::dangling(
                    format!("room '{}'", room.id),
                    format!("exit '{exit}' leads to unknown room '{target}'"),
                    target.as_str(),
                    room_ids.iter().copied(),
                ));
            }
        }
    }

    for item in &def.items {
        let subject = format!("item '{}'", item.id);
        match &item.location {
            Location::Room(room) if !room_ids.contains(room.as_str()) => {
                issues.push(ValidationIssue::dangling(
                    subject.clone(),
                    format!("located in unknown room '{room}'"),
                    room.as_str(),
                    room_ids.iter().copied(),
                ));
            }
            Location::Monster(owner) if !monster_ids.contains(owner.as_str()) => {
                issues.push(ValidationIssue::dangling(
                    subject.clone(),
                    format!("carried by unknown monster '{owner}'"),
                    owner.as_str(),
                    monster_ids.iter().copied(),
                ));
            }
            _ => {}
        }
        if let Some(weapon) = &item.weapon {
            if weapon.dice == 0 || weapon.sides == 0 {
                issues.push(ValidationIssue::error(
                    subject.clone(),
                    format!("weapon dice {}d{} roll nothing", weapon.dice, weapon.sides),
                ));
            } else if weapon.dice > MAX_WEAPON_DICE || weapon.sides > MAX_WEAPON_SIDES {
                issues.push(ValidationIssue::error(
                    subject.clone(),
                    format!(
                        "weapon dice {}d{} exceed the limit of {MAX_WEAPON_DICE}d{MAX_WEAPON_SIDES}",
                        weapon.dice, weapon.sides
                    ),
                ));
            }
            if weapon.accuracy.unsigned_abs() > MAX_ACCURACY.unsigned_abs() {
                issues.push(ValidationIssue::error(
                    subject,
                    format!(
                        "weapon accuracy {} is outside -{MAX_ACCURACY}..={MAX_ACCURACY}",
                        weapon.accuracy
                    ),
                ));
            }
        }
    }

    for monster in &def.monsters {
        let subject = format!("monster '{}'", monster.id);
        if !room_ids.contains(monster.room.as_str()) {
            issues.push(ValidationIssue::dangling(
                subject.clone(),
                format!("placed in unknown room '{}'", monster.room),
                monster.room.as_str(),
                room_ids.iter().copied(),
            ));
        }
        let owner = Location::Monster(monster.id.clone());
        check_equipment(def, &subject, "weapon", monster.weapon.as_ref(), &owner, &mut issues);
        check_equipment(def, &subject, "armor", monster.armor.as_ref(), &owner, &mut issues);
    }

    let player = &def.player;
    check_equipment(def, "player", "weapon", player.weapon.as_ref(), &Location::Player, &mut issues);
    check_equipment(def, "player", "armor", player.armor.as_ref(), &Location::Player, &mut issues);

    if room_ids.contains(def.start_room.as_str()) {
        for room in unreachable_rooms(def) {
            issues.push(ValidationIssue::warning(
                format!("room '{room}'"),
                "cannot be reached from the start room".to_string(),
            ));
        }
    }

    issues
}

fn unique_ids<'a>(
    ids: impl Iterator<Item = &'a str>,
    kind: &str,
    issues: &mut Vec<ValidationIssue>,
) -> BTreeSet<&'a str> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            issues.push(ValidationIssue {
                reference: Some(id.to_string()),
                ..ValidationIssue::error(format!("{kind} '{id}'"), "declared more than once".to_string())
            });
        }
    }
    seen
}

/// Check a wielded/worn reference: the item must exist, be carried by its
/// owner and have the matching stats.
fn check_equipment(
    def: &AdventureDef,
    subject: &str,
    slot: &str,
    reference: Option<&ItemId>,
    owner: &Location,
    issues: &mut Vec<ValidationIssue>,
) {
    let Some(id) = reference else {
        return;
    };
    let Some(item) = def.items.iter().find(|i| &i.id == id) else {
        issues.push(ValidationIssue::dangling(
            subject.to_string(),
            format!("{slot} '{id}' does not exist"),
            id.as_str(),
            def.items.iter().map(|i| i.id.as_str()),
        ));
        return;
    };
    if &item.location != owner {
        issues.push(ValidationIssue {
            reference: Some(id.to_string()),
            ..ValidationIssue::error(
                subject.to_string(),
                format!("{slot} '{id}' is not carried by its owner"),
            )
        });
    }
    let has_stats = match slot {
        "weapon" => item.weapon.is_some(),
        _ => item.armor.is_some(),
    };
    if !has_stats {
        issues.push(ValidationIssue::warning(
            subject.to_string(),
            format!("{slot} '{id}' has no {slot} stats"),
        ));
    }
}

/// Rooms with no path from the start room, in ID order.
fn unreachable_rooms(def: &AdventureDef) -> Vec<RoomId> {
    let mut reached: BTreeSet<&RoomId> = BTreeSet::new();
    let mut queue = VecDeque::from([&def.start_room]);
    while let Some(id) = queue.pop_front() {
        if !reached.insert(id) {
            continue;
        }
        if let Some(room) = def.rooms.iter().find(|r| &r.id == id) {
            queue.extend(room.exits.values());
        }
    }
    let mut unreachable: Vec<RoomId> = def
        .rooms
        .iter()
        .filter(|r| !reached.contains(&r.id))
        .map(|r| r.id.clone())
        .collect();
    unreachable.sort();
    unreachable
}
