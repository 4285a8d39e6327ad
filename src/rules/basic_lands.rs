use crate::config;
use crate::models::Decklist;

use super::{Finding, RuleId};

/// Only basic lands may exceed four copies in the main deck.
pub fn check_basic_lands(decklist: &Decklist) -> Option<Finding> {
    decklist
        .main_deck
        .iter()
        .find(|c| c.quantity > config::MAX_NON_BASIC_COPIES && !config::is_basic_land(&c.card_name))
        .map(|c| {
            Finding::new(
                RuleId::BasicLands,
                format!(
                    "Non-basic land {} has more than {} copies.",
                    c.card_name,
                    config::MAX_NON_BASIC_COPIES
                ),
            )
        })
}
