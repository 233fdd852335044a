pub mod check;
pub mod inspect;
pub mod parse;
pub mod play;

use std::fs;
use std::path::Path;

use acs_core::diagnostics::{render_issues, render_json_error};
use acs_core::{AdventureDef, AdventureError, World, validate};

/// Read, parse and validate an adventure file, printing diagnostics to
/// stderr. Returns the world if there are no errors.
fn load_world(path: &Path) -> Result<World, String> {
    let source =
        fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let filename = path.display().to_string();

    let def = match AdventureDef::from_json(&source) {
        Ok(def) => def,
        Err(AdventureError::Json(err)) => {
            eprint!("{}", render_json_error(&source, &filename, &err));
            return Err("adventure is not valid JSON".into());
        }
        Err(e) => return Err(e.to_string()),
    };

    let issues = validate(&def);
    if !issues.is_empty() {
        eprint!("{}", render_issues(&source, &filename, &issues));
        let errors = issues.iter().filter(|i| i.is_error).count();
        let warnings = issues.len() - errors;
        eprintln!(
            "  {} error{}, {} warning{}",
            errors,
            if errors == 1 { "" } else { "s" },
            warnings,
            if warnings == 1 { "" } else { "s" },
        );
        if errors > 0 {
            return Err("adventure failed validation".into());
        }
    }

    def.into_world().map_err(|e| e.to_string())
}
