use crate::config;
use crate::models::Decklist;

use super::{Finding, RuleId};

/// Main deck must reach the minimum for its format (60, or 100 for Commander).
pub fn check_minimum_deck_size(decklist: &Decklist) -> Option<Finding> {
    let min_size = config::minimum_deck_size(&decklist.deck_format);
    if decklist.main_deck_length() < min_size {
        return Some(Finding::new(
            RuleId::MinimumDeckSize,
            format!(
                "Decklist must have at least {} cards for {} format.",
                min_size, decklist.deck_format
            ),
        ));
    }
    None
}
