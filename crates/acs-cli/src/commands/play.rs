use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use acs_fiction::{EngineConfig, Session};

/// Print narration, highlighting the name of the room the player is in.
fn print_lines(lines: &[String], room_name: Option<&str>) {
    for line in lines {
        if Some(line.as_str()) == room_name {
            println!("\n{}", line.bold());
        } else {
            println!("{line}");
        }
    }
}

pub fn run(file: &Path, config: EngineConfig) -> Result<(), String> {
    let world = super::load_world(file)?;
    let mut session = Session::new(world, config);

    let intro = session.intro().map_err(|e| e.to_string())?;
    let room = session.world().current_room().map(|r| r.name.clone());
    print_lines(&intro, room.as_deref());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    while !session.is_over() {
        print!("\n> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        if input.read_line(&mut line).map_err(|e| e.to_string())? == 0 {
            println!();
            break;
        }

        tracing::debug!(input = line.trim(), "read input");
        let turn = session.process(&line).map_err(|e| e.to_string())?;
        for note in &turn.report.notes {
            println!("{}", note.dimmed());
        }
        let room = session.world().current_room().map(|r| r.name.clone());
        print_lines(&turn.report.lines, room.as_deref());
    }

    println!("\n  {} turns played.", session.turns());
    Ok(())
}
