//! Verb synonyms grouped by the action kind they stand for.

use super::action::ActionKind;

/// Movement verbs that take a direction or a place.
pub const MOVE_VERBS: &[&str] = &["go", "walk", "run", "head", "travel", "move"];

/// Verbs that take a place and otherwise mean in/out.
pub const ENTER_VERBS: &[&str] = &["enter"];
/// See [`ENTER_VERBS`].
pub const EXIT_VERBS: &[&str] = &["exit"];

/// Verbs that split `X to Y` into a party order and otherwise mean talk.
pub const TELL_VERBS: &[&str] = &["tell"];

/// Verbs that always give a party order.
pub const ORDER_VERBS: &[&str] = &["order", "command"];

const TAKE_VERBS: &[&str] = &["take", "get", "grab", "pick", "collect"];
const DROP_VERBS: &[&str] = &["drop", "discard", "leave"];
const ATTACK_VERBS: &[&str] = &["attack", "fight", "kill", "hit", "strike", "slay"];
const INVENTORY_VERBS: &[&str] = &["inventory", "inv", "i", "items"];
const LOOK_VERBS: &[&str] = &["look", "l", "examine", "ex", "x", "inspect", "check", "describe"];
const TALK_VERBS: &[&str] = &["talk", "speak", "ask", "chat", "converse", "greet", "tell"];
const FLEE_VERBS: &[&str] = &["flee", "escape", "retreat"];
const STATUS_VERBS: &[&str] = &["status", "stats", "condition", "health"];
const EQUIP_VERBS: &[&str] = &["equip", "wield", "wear", "don"];
const UNEQUIP_VERBS: &[&str] = &["unequip", "remove", "doff", "unwield"];
const RECRUIT_VERBS: &[&str] = &["recruit", "hire", "invite"];
const PARTY_VERBS: &[&str] = &["party", "companions", "group"];
const GATHER_VERBS: &[&str] = &["gather", "regroup", "rally"];
const DISMISS_VERBS: &[&str] = &["dismiss", "fire"];
const GIVE_VERBS: &[&str] = &["give", "offer", "hand"];
const EAT_VERBS: &[&str] = &["eat", "consume", "devour"];
const DRINK_VERBS: &[&str] = &["drink", "sip", "quaff"];
const TRADE_VERBS: &[&str] = &["trade", "barter", "shop"];
const BUY_VERBS: &[&str] = &["buy", "purchase"];
const SELL_VERBS: &[&str] = &["sell"];
const SEARCH_VERBS: &[&str] = &["search", "rummage"];
const HELP_VERBS: &[&str] = &["help", "h", "?", "commands"];
const QUIT_VERBS: &[&str] = &["quit", "q", "bye"];

/// Every synonym group with the kind it resolves to.
pub const LEXICON: &[(ActionKind, &[&str])] = &[
    (ActionKind::Move, MOVE_VERBS),
    (ActionKind::Move, ENTER_VERBS),
    (ActionKind::Move, EXIT_VERBS),
    (ActionKind::Take, TAKE_VERBS),
    (ActionKind::Drop, DROP_VERBS),
    (ActionKind::Attack, ATTACK_VERBS),
    (ActionKind::Inventory, INVENTORY_VERBS),
    (ActionKind::Look, LOOK_VERBS),
    (ActionKind::Talk, TALK_VERBS),
    (ActionKind::PartyOrder, ORDER_VERBS),
    (ActionKind::Flee, FLEE_VERBS),
    (ActionKind::Status, STATUS_VERBS),
    (ActionKind::Equip, EQUIP_VERBS),
    (ActionKind::Unequip, UNEQUIP_VERBS),
    (ActionKind::Recruit, RECRUIT_VERBS),
    (ActionKind::Party, PARTY_VERBS),
    (ActionKind::Gather, GATHER_VERBS),
    (ActionKind::Dismiss, DISMISS_VERBS),
    (ActionKind::Give, GIVE_VERBS),
    (ActionKind::Eat, EAT_VERBS),
    (ActionKind::Drink, DRINK_VERBS),
    (ActionKind::Trade, TRADE_VERBS),
    (ActionKind::Buy, BUY_VERBS),
    (ActionKind::Sell, SELL_VERBS),
    (ActionKind::Search, SEARCH_VERBS),
    (ActionKind::Help, HELP_VERBS),
    (ActionKind::Quit, QUIT_VERBS),
];

/// Resolve a verb to its canonical kind.
pub fn canonical(verb: &str) -> Option<ActionKind> {
    LEXICON
        .iter()
        .find(|(_, verbs)| verbs.contains(&verb))
        .map(|(kind, _)| *kind)
}

/// Whether the word is one of the given verbs.
pub fn is_one_of(word: &str, verbs: &[&str]) -> bool {
    verbs.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn canonical_kinds() {
        assert_eq!(canonical("fight"), Some(ActionKind::Attack));
        assert_eq!(canonical("kill"), Some(ActionKind::Attack));
        assert_eq!(canonical("strike"), Some(ActionKind::Attack));
        assert_eq!(canonical("grab"), Some(ActionKind::Take));
        assert_eq!(canonical("x"), Some(ActionKind::Look));
        assert_eq!(canonical("?"), Some(ActionKind::Help));
        assert_eq!(canonical("fire"), Some(ActionKind::Dismiss));
        assert_eq!(canonical("quaff"), Some(ActionKind::Drink));
        assert_eq!(canonical("purchase"), Some(ActionKind::Buy));
        assert_eq!(canonical("dance"), None);
    }

    #[test]
    fn each_verb_belongs_to_one_kind() {
        let mut seen: HashMap<&str, ActionKind> = HashMap::new();
        for (kind, verbs) in LEXICON {
            for verb in *verbs {
                if let Some(previous) = seen.insert(*verb, *kind) {
                    panic!("'{verb}' is both {previous:?} and {kind:?}");
                }
            }
        }
    }

    #[test]
    fn structural_verbs_are_in_the_lexicon() {
        for verb in MOVE_VERBS.iter().chain(TELL_VERBS).chain(ORDER_VERBS) {
            assert!(canonical(verb).is_some(), "{verb}");
        }
        assert!(is_one_of("enter", ENTER_VERBS));
    }
}
