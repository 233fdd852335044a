//! Free text to [`Action`].
//!
//! Interpretation is a pure function of the input line. The line is
//! normalized and spell-corrected, checked against a few whole-phrase
//! patterns, then split into a verb and the rest and run through an ordered
//! list of rules. The first rule that claims the line decides the action;
//! a line no rule claims becomes [`Action::Unknown`].

mod action;
mod lexicon;
mod typo;

pub use action::{Action, ActionKind, Direction, MoveTarget};
pub use lexicon::{LEXICON, canonical};
pub use typo::{Correction, correct};

use serde::Serialize;

use lexicon::{ENTER_VERBS, EXIT_VERBS, MOVE_VERBS, ORDER_VERBS, TELL_VERBS, is_one_of};

/// The interpreter's output for one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    /// What the line asks for.
    #[serde(flatten)]
    pub action: Action,
    /// Spelling corrections applied on the way.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub corrections: Vec<Correction>,
}

/// A normalized line split into its verb and the remainder.
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    text: &'a str,
    verb: &'a str,
    rest: &'a str,
}

impl<'a> Line<'a> {
    fn new(text: &'a str) -> Self {
        let (verb, rest) = text.split_once(' ').unwrap_or((text, ""));
        Self { text, verb, rest }
    }
}

type Rule = fn(&Line<'_>) -> Option<Action>;

/// Structural rules in precedence order. Earlier rules shadow later ones,
/// which is how "leave" beats movement and "tell X to Y" beats talk.
const RULES: &[(&str, Rule)] = &[
    ("phrase", phrase),
    ("bare direction", bare_direction),
    ("enter/exit", enter_exit),
    ("movement", movement),
    ("leave", leave),
    ("tell", tell),
    ("order", order),
    ("lexicon", by_lexicon),
];

/// Interpret one line of player input. Never fails: every input yields
/// exactly one action, and empty input means "look".
pub fn interpret(input: &str) -> Interpretation {
    let normalized = normalize(input);
    let (text, corrections) = correct(&normalized);
    let line = Line::new(&text);

    let action = if text.is_empty() {
        Action::look()
    } else {
        RULES
            .iter()
            .find_map(|(name, rule)| {
                let action = rule(&line)?;
                tracing::debug!(rule = name, ?action, "input interpreted");
                Some(action)
            })
            .unwrap_or_else(|| {
                tracing::debug!(input = %text, "no rule matched");
                Action::Unknown { raw: text.clone() }
            })
    };

    Interpretation {
        action,
        corrections,
    }
}

/// Lower-case, collapse whitespace and strip trailing punctuation. Input
/// that is nothing but punctuation is kept, so "?" still asks for help.
fn normalize(input: &str) -> String {
    let collapsed = input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let stripped = collapsed
        .trim_end_matches(|c: char| c.is_ascii_punctuation())
        .trim_end();
    if stripped.is_empty() {
        collapsed
    } else {
        stripped.to_string()
    }
}

/// Drop a leading word from `text` if it is one of `words`.
fn skip_leading<'a>(text: &'a str, words: &[&str]) -> &'a str {
    match text.split_once(' ') {
        Some((first, rest)) if words.contains(&first) => rest,
        None if words.contains(&text) => "",
        _ => text,
    }
}

fn phrase(line: &Line<'_>) -> Option<Action> {
    let words: Vec<&str> = line.text.split(' ').collect();
    if let ["what", "am" | "do", "i", "carrying" | "have" | "holding" | "hold"] = words[..] {
        return Some(Action::Inventory);
    }
    match line.text {
        "where am i" | "look around" | "who is here" | "what is here" => {
            return Some(Action::look());
        }
        "run away" => return Some(Action::Flee),
        _ => {}
    }
    if line.text == "look for" || line.text.starts_with("look for ") {
        return Some(Action::Search);
    }
    if let Some(target) = line.text.strip_prefix("take off ") {
        return Some(Action::Unequip {
            target: target.to_string(),
        });
    }
    if let Some(target) = line.text.strip_prefix("pick up ") {
        return Some(Action::Take {
            target: target.to_string(),
        });
    }
    line.text.strip_prefix("put down ").map(|target| Action::Drop {
        target: target.to_string(),
    })
}

fn bare_direction(line: &Line<'_>) -> Option<Action> {
    if !line.rest.is_empty() {
        return None;
    }
    Direction::parse(line.verb).map(Action::go)
}

fn enter_exit(line: &Line<'_>) -> Option<Action> {
    let bare = if is_one_of(line.verb, ENTER_VERBS) {
        Direction::In
    } else if is_one_of(line.verb, EXIT_VERBS) {
        Direction::Out
    } else {
        return None;
    };
    if line.rest.is_empty() {
        Some(Action::go(bare))
    } else {
        Some(Action::go_to(line.rest))
    }
}

fn movement(line: &Line<'_>) -> Option<Action> {
    if !is_one_of(line.verb, MOVE_VERBS) {
        return None;
    }
    let rest = skip_leading(line.rest, &["to"]);
    let first = rest.split(' ').next().unwrap_or_default();
    Some(match Direction::parse(first) {
        Some(direction) => Action::go(direction),
        None => Action::go_to(rest),
    })
}

fn leave(line: &Line<'_>) -> Option<Action> {
    (line.verb == "leave").then(|| Action::Drop {
        target: line.rest.to_string(),
    })
}

fn tell(line: &Line<'_>) -> Option<Action> {
    if !is_one_of(line.verb, TELL_VERBS) {
        return None;
    }
    if let Some((target, order)) = line.rest.split_once(" to ") {
        return Some(Action::PartyOrder {
            target: target.to_string(),
            order: order.to_string(),
        });
    }
    Some(talk(line.rest))
}

fn order(line: &Line<'_>) -> Option<Action> {
    if !is_one_of(line.verb, ORDER_VERBS) {
        return None;
    }
    let (target, order) = line
        .rest
        .split_once(" to ")
        .or_else(|| line.rest.split_once(' '))
        .unwrap_or((line.rest, ""));
    Some(Action::PartyOrder {
        target: target.to_string(),
        order: order.to_string(),
    })
}

fn talk(rest: &str) -> Action {
    let rest = skip_leading(rest, &["to", "with"]);
    let (target, topic) = match rest.split_once(" about ") {
        Some((target, topic)) => (target, Some(topic.to_string())),
        None => match rest.strip_prefix("about ") {
            Some(topic) => ("", Some(topic.to_string())),
            None => (rest, None),
        },
    };
    Action::Talk {
        target: target.to_string(),
        topic,
    }
}

/// Split "give X to Y" into the item and the recipient.
fn give(rest: &str) -> Action {
    let (target, recipient) = rest.split_once(" to ").unwrap_or((rest, ""));
    Action::Give {
        target: target.to_string(),
        recipient: recipient.to_string(),
    }
}

/// Strip "to (the|my)? party" from "invite X to the party".
fn recruit_target(rest: &str) -> &str {
    for suffix in [" to the party", " to my party", " to party"] {
        if let Some(target) = rest.strip_suffix(suffix) {
            return target;
        }
    }
    rest
}

fn by_lexicon(line: &Line<'_>) -> Option<Action> {
    let kind = canonical(line.verb)?;
    let target = line.rest.to_string();
    Some(match kind {
        // Movement verbs are claimed by earlier rules.
        ActionKind::Move => Action::go_to(line.rest),
        ActionKind::Take => Action::Take {
            target: skip_leading(line.rest, &["up"]).to_string(),
        },
        ActionKind::Drop => Action::Drop { target },
        ActionKind::Attack => Action::Attack { target },
        ActionKind::Inventory => Action::Inventory,
        ActionKind::Look => {
            let target = skip_leading(line.rest, &["at"]);
            Action::LookAt {
                target: (!target.is_empty()).then(|| target.to_string()),
            }
        }
        ActionKind::Talk => talk(line.rest),
        ActionKind::PartyOrder => Action::PartyOrder {
            target,
            order: String::new(),
        },
        ActionKind::Flee => Action::Flee,
        ActionKind::Status => Action::Status,
        ActionKind::Equip => Action::Equip { target },
        ActionKind::Unequip => Action::Unequip { target },
        ActionKind::Recruit => Action::Recruit {
            target: recruit_target(line.rest).to_string(),
        },
        ActionKind::Party => Action::Party,
        ActionKind::Gather => Action::Gather,
        ActionKind::Dismiss => Action::Dismiss { target },
        ActionKind::Give => give(line.rest),
        ActionKind::Eat => Action::Eat { target },
        ActionKind::Drink => Action::Drink { target },
        ActionKind::Trade => Action::Trade {
            target: skip_leading(line.rest, &["with"]).to_string(),
        },
        ActionKind::Buy => Action::Buy { target },
        ActionKind::Sell => Action::Sell { target },
        ActionKind::Search => Action::Search,
        ActionKind::Help => Action::Help,
        ActionKind::Quit => Action::Quit,
    })
}
