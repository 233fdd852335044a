use colored::Colorize;

use acs_fiction::interpret;

pub fn run(words: &[String], json: bool) -> Result<(), String> {
    let sentence = words.join(" ");
    let interpretation = interpret(&sentence);

    if json {
        let text = serde_json::to_string_pretty(&interpretation)
            .map_err(|e| format!("failed to serialize action: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    println!("  {:?}", interpretation.action);
    for correction in &interpretation.corrections {
        println!(
            "  {}",
            format!("corrected '{}' to '{}'", correction.from, correction.to).dimmed()
        );
    }
    Ok(())
}
