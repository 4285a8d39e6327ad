//! Pluggable checks that need knowledge outside the decklist itself.
//!
//! Card legality needs a card database and Commander rules need card
//! metadata (colour identity, commander designation). Neither is available
//! here, so the defaults accept every deck. Callers substitute their own
//! implementations through [`DecklistValidatorBuilder`](crate::DecklistValidatorBuilder);
//! any `Fn(&Decklist) -> Verdict` closure works.

use crate::models::Decklist;

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// Outcome of an external check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    /// The deck failed; the string becomes the finding's message.
    Fail(String),
}

impl Verdict {
    pub fn fail(message: impl Into<String>) -> Self {
        Verdict::Fail(message.into())
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// Decides whether every card in a deck is legal in the deck's format.
pub trait CardLegality: Send + Sync {
    fn check(&self, decklist: &Decklist) -> Verdict;
}

/// Decides whether a deck satisfies Commander-specific construction rules.
pub trait CommanderRules: Send + Sync {
    fn check(&self, decklist: &Decklist) -> Verdict;
}

impl<F> CardLegality for F
where
    F: Fn(&Decklist) -> Verdict + Send + Sync,
{
    fn check(&self, decklist: &Decklist) -> Verdict {
        self(decklist)
    }
}

impl<F> CommanderRules for F
where
    F: Fn(&Decklist) -> Verdict + Send + Sync,
{
    fn check(&self, decklist: &Decklist) -> Verdict {
        self(decklist)
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Treats every card as legal.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllCardsLegal;

impl CardLegality for AllCardsLegal {
    fn check(&self, _decklist: &Decklist) -> Verdict {
        Verdict::Pass
    }
}

/// Accepts every deck without inspecting Commander constraints.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCommanderRules;

impl CommanderRules for NoCommanderRules {
    fn check(&self, _decklist: &Decklist) -> Verdict {
        Verdict::Pass
    }
}
