use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(file: &Path) -> Result<(), String> {
    let world = super::load_world(file)?;
    let start = &world.player.room;

    println!("  {} {}", world.title.bold(), format!("(start: {start})").dimmed());

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Room", "Name", "Exits", "Items", "Monsters"]);

    for room in world.rooms() {
        let mut name = room.name.clone();
        if room.dark {
            name.push_str(" (dark)");
        }
        let exits = room
            .exits
            .iter()
            .map(|(dir, to)| format!("{dir} -> {to}"))
            .collect::<Vec<_>>()
            .join("\n");
        let mut items: Vec<String> = world.items_in_room(&room.id).map(|i| i.name.clone()).collect();
        items.extend(world.hidden_items_in(&room.id).map(|i| format!("{} (hidden)", i.name)));
        if room.gold > 0 {
            items.push(format!("{} gold", room.gold));
        }
        let monsters = world
            .monsters_in(&room.id)
            .map(|m| {
                if m.alive && m.merchant {
                    format!("{} ({}, merchant)", m.name, m.disposition)
                } else if m.alive {
                    format!("{} ({})", m.name, m.disposition)
                } else {
                    format!("{} (dead)", m.name)
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        table.add_row(vec![
            room.id.to_string(),
            name,
            exits,
            items.join("\n"),
            monsters,
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} rooms, {} items, {} monsters",
        world.rooms().count(),
        world.items().count(),
        world.monsters().count()
    );

    Ok(())
}
