//! Integration tests for the `acs` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const ADVENTURE: &str = r#"{
    "title": "The Sunken Vault",
    "intro": "Water drips somewhere in the dark.",
    "start_room": "landing",
    "rooms": [
        {"id": "landing", "name": "Stone Landing", "description": "Steps lead down into the vault.",
         "exits": {"north": "vault"}},
        {"id": "vault", "name": "Flooded Vault", "description": "Knee-deep water covers the floor.",
         "exits": {"south": "landing"}}
    ],
    "items": [
        {"id": "sword", "name": "sword", "location": {"room": "vault"},
         "weapon": {"dice": 1, "sides": 6, "accuracy": 20}},
        {"id": "dagger", "name": "dagger", "location": {"monster": "goblin"},
         "weapon": {"sides": 4}}
    ],
    "monsters": [
        {"id": "goblin", "name": "goblin", "disposition": "hostile", "room": "vault",
         "hardiness": 4, "health": 1, "weapon": "dagger", "gold": 5}
    ]
}"#;

/// Write an adventure file into a fresh temp directory.
fn adventure(source: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("adventure.json");
    fs::write(&path, source).unwrap();
    (dir, path)
}

fn acs() -> Command {
    let mut cmd = Command::cargo_bin("acs").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_valid_adventure() {
    let (_dir, path) = adventure(ADVENTURE);
    acs()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed for 'The Sunken Vault'"))
        .stdout(predicate::str::contains("2 rooms, 2 items, 1 monsters"));
}

#[test]
fn check_bundled_adventure() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../adventures/lost_keep.json");
    acs()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed for 'The Lost Keep'"));
}

#[test]
fn check_reports_dangling_exit() {
    let broken = ADVENTURE.replace(r#""north": "vault""#, r#""north": "vaul""#);
    let (_dir, path) = adventure(&broken);
    acs()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("leads to unknown room 'vaul'"))
        .stderr(predicate::str::contains("error: adventure failed validation"));
}

#[test]
fn check_reports_bad_json() {
    let (_dir, path) = adventure(r#"{"title": "Broken", "rooms": [}"#);
    acs()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("adventure is not valid JSON"));
}

#[test]
fn check_missing_file() {
    acs()
        .args(["check", "/nonexistent/adventure.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// ---------------------------------------------------------------------------
// parse
// ---------------------------------------------------------------------------

#[test]
fn parse_party_order() {
    acs()
        .args(["parse", "tell", "alice", "to", "defend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PartyOrder"))
        .stdout(predicate::str::contains("defend"));
}

#[test]
fn parse_json_schema() {
    acs()
        .args(["parse", "--json", "take", "the", "lamp"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""action": "take""#))
        .stdout(predicate::str::contains(r#""target": "the lamp""#));
}

#[test]
fn parse_shows_corrections() {
    acs()
        .args(["parse", "atack", "goblin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Attack"))
        .stdout(predicate::str::contains("corrected 'atack' to 'attack'"));
}

// ---------------------------------------------------------------------------
// inspect
// ---------------------------------------------------------------------------

#[test]
fn inspect_lists_rooms_and_contents() {
    let (_dir, path) = adventure(ADVENTURE);
    acs()
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Stone Landing"))
        .stdout(predicate::str::contains("north -> vault"))
        .stdout(predicate::str::contains("goblin (hostile)"))
        .stdout(predicate::str::contains("sword"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_scripted_session() {
    let (_dir, path) = adventure(ADVENTURE);
    acs()
        .arg("play")
        .arg(&path)
        .args(["--seed", "1"])
        .write_stdin("n\nget sword\ni\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Water drips somewhere in the dark."))
        .stdout(predicate::str::contains("Knee-deep water covers the floor."))
        .stdout(predicate::str::contains("You take the sword."))
        .stdout(predicate::str::contains("  - sword"))
        .stdout(predicate::str::contains("Farewell, adventurer."));
}

#[test]
fn play_ends_at_end_of_input() {
    let (_dir, path) = adventure(ADVENTURE);
    acs()
        .arg("play")
        .arg(&path)
        .write_stdin("look\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 turns played"));
}

#[test]
fn play_echoes_corrections_unless_disabled() {
    let (_dir, path) = adventure(ADVENTURE);
    acs()
        .arg("play")
        .arg(&path)
        .write_stdin("nort\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"(reading "nort" as "north")"#));

    acs()
        .arg("play")
        .arg(&path)
        .arg("--no-corrections")
        .write_stdin("nort\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("reading").not());
}

#[test]
fn play_refuses_invalid_adventure() {
    let broken = ADVENTURE.replace(r#""start_room": "landing""#, r#""start_room": "lobby""#);
    let (_dir, path) = adventure(&broken);
    acs()
        .arg("play")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("start room 'lobby' does not exist"));
}
