//! Word-level spelling correction from a fixed table.

use serde::Serialize;

/// Common misspellings and the word they stand for. No right-hand word
/// appears on the left, so correcting twice changes nothing.
const TYPOS: &[(&str, &str)] = &[
    // directions
    ("nort", "north"),
    ("noth", "north"),
    ("nroth", "north"),
    ("soth", "south"),
    ("souht", "south"),
    ("esat", "east"),
    ("eats", "east"),
    ("wset", "west"),
    ("wets", "west"),
    // verbs
    ("atack", "attack"),
    ("attak", "attack"),
    ("attck", "attack"),
    ("atttack", "attack"),
    ("exmaine", "examine"),
    ("examin", "examine"),
    ("examne", "examine"),
    ("lok", "look"),
    ("loko", "look"),
    ("teh", "the"),
    ("tkae", "take"),
    ("taek", "take"),
    ("drpo", "drop"),
    ("dorp", "drop"),
    ("inventroy", "inventory"),
    ("invetory", "inventory"),
    ("inventry", "inventory"),
    ("tlak", "talk"),
    ("takl", "talk"),
    ("recuit", "recruit"),
    ("recriut", "recruit"),
    ("equp", "equip"),
    ("eqiup", "equip"),
    ("fele", "flee"),
    ("hlep", "help"),
    ("dimiss", "dismiss"),
    ("dismis", "dismiss"),
    ("serach", "search"),
    ("saerch", "search"),
    ("drnik", "drink"),
    ("staus", "status"),
    ("stauts", "status"),
    // nouns
    ("swrod", "sword"),
    ("sowrd", "sword"),
    ("goblen", "goblin"),
    ("gobiln", "goblin"),
    ("torhc", "torch"),
    ("shiled", "shield"),
];

/// A spelling correction applied while interpreting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Correction {
    /// The word as typed.
    pub from: String,
    /// The word it was read as.
    pub to: String,
}

/// The correction for a single word, if the table has one.
pub fn correct_word(word: &str) -> Option<&'static str> {
    TYPOS
        .iter()
        .find(|(typo, _)| *typo == word)
        .map(|(_, fixed)| *fixed)
}

/// Correct every word of already-normalized text. Returns the corrected text
/// and the corrections made, in word order.
pub fn correct(text: &str) -> (String, Vec<Correction>) {
    let mut corrections = Vec::new();
    let words: Vec<&str> = text
        .split(' ')
        .map(|word| match correct_word(word) {
            Some(fixed) => {
                corrections.push(Correction {
                    from: word.to_string(),
                    to: fixed.to_string(),
                });
                fixed
            }
            None => word,
        })
        .collect();
    (words.join(" "), corrections)
}
