//! Deck construction rules.
//!
//! Each rule inspects a [`Decklist`] and returns `Some(Finding)` describing
//! the first violation it hits, or `None` when the deck passes. The
//! `validate_*` wrappers collapse that to a boolean and emit the finding as
//! a `tracing` warning.

pub mod basic_lands;
pub mod deck_size;
pub mod sideboard;
pub mod unique_cards;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Decklist;

pub use basic_lands::check_basic_lands;
pub use deck_size::check_minimum_deck_size;
pub use sideboard::{check_sideboard_allowed, check_sideboard_size};
pub use unique_cards::check_unique_cards;

// ---------------------------------------------------------------------------
// Finding
// ---------------------------------------------------------------------------

/// Identifies which check produced a [`Finding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    MinimumDeckSize,
    SideboardAllowed,
    SideboardSize,
    BasicLands,
    CardLegality,
    CommanderRules,
    UniqueCards,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::MinimumDeckSize => "minimum_deck_size",
            RuleId::SideboardAllowed => "sideboard_allowed",
            RuleId::SideboardSize => "sideboard_size",
            RuleId::BasicLands => "basic_lands",
            RuleId::CardLegality => "card_legality",
            RuleId::CommanderRules => "commander_rules",
            RuleId::UniqueCards => "unique_cards",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rule violation with its human-readable diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub rule: RuleId,
    pub message: String,
}

impl Finding {
    pub fn new(rule: RuleId, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }

    pub(crate) fn emit(&self) {
        tracing::warn!(rule = %self.rule, "{}", self.message);
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// ---------------------------------------------------------------------------
// Boolean forms
// ---------------------------------------------------------------------------

fn passes(finding: Option<Finding>) -> bool {
    match finding {
        Some(f) => {
            f.emit();
            false
        }
        None => true,
    }
}

/// `true` if the main deck reaches the format's minimum size.
pub fn validate_minimum_deck_size(decklist: &Decklist) -> bool {
    passes(check_minimum_deck_size(decklist))
}

/// `true` if no card name appears twice across main deck and sideboard.
pub fn validate_unique_cards(decklist: &Decklist) -> bool {
    passes(check_unique_cards(decklist))
}

/// `true` if the sideboard is permitted for the format and within size.
pub fn validate_sideboard_allowed(decklist: &Decklist) -> bool {
    passes(check_sideboard_allowed(decklist))
}

/// `true` if only basic lands exceed the per-card copy limit.
pub fn validate_basic_lands(decklist: &Decklist) -> bool {
    passes(check_basic_lands(decklist))
}
