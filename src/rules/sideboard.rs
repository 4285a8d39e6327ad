use crate::config;
use crate::models::Decklist;

use super::{Finding, RuleId};

/// Sideboard must be allowed by the format and hold at most 15 cards.
///
/// The format check triggers on the presence of the `Sideboard` key, so an
/// empty sideboard in Commander still fails.
pub fn check_sideboard_allowed(decklist: &Decklist) -> Option<Finding> {
    if decklist.has_sideboard() && !config::allows_sideboard(&decklist.deck_format) {
        return Some(Finding::new(
            RuleId::SideboardAllowed,
            format!(
                "Sideboards are not allowed in {} format.",
                decklist.deck_format
            ),
        ));
    }

    check_sideboard_size(decklist)
}

/// Sideboard holds at most 15 cards, regardless of format.
pub fn check_sideboard_size(decklist: &Decklist) -> Option<Finding> {
    let length = decklist.sideboard_length();
    if length > config::MAX_SIDEBOARD_SIZE {
        return Some(Finding::new(
            RuleId::SideboardSize,
            format!(
                "Sideboard must have at most {} cards. Current sideboard has {} cards.",
                config::MAX_SIDEBOARD_SIZE,
                length
            ),
        ));
    }
    None
}
