use std::path::Path;

pub fn run(file: &Path) -> Result<(), String> {
    let world = super::load_world(file)?;

    println!("  All checks passed for '{}'.", world.title);
    println!(
        "  {} rooms, {} items, {} monsters",
        world.rooms().count(),
        world.items().count(),
        world.monsters().count()
    );

    Ok(())
}
