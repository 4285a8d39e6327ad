use std::collections::HashSet;

use crate::models::Decklist;

use super::{Finding, RuleId};

/// Each card name may occupy one entry across main deck and sideboard.
///
/// Scans the main deck first, then the sideboard, and stops at the first
/// repeated name.
pub fn check_unique_cards(decklist: &Decklist) -> Option<Finding> {
    let mut seen: HashSet<&str> = HashSet::new();

    for card in &decklist.main_deck {
        if !seen.insert(card.card_name.as_str()) {
            return Some(Finding::new(
                RuleId::UniqueCards,
                format!("Card {} appears more than once in the MainDeck.", card.card_name),
            ));
        }
    }

    for card in decklist.sideboard_cards() {
        if !seen.insert(card.card_name.as_str()) {
            return Some(Finding::new(
                RuleId::UniqueCards,
                format!(
                    "Card {} appears more than once across MainDeck and Sideboard.",
                    card.card_name
                ),
            ));
        }
    }

    None
}
