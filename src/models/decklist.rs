use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DeckFormat
// ---------------------------------------------------------------------------

/// The ruleset a deck is built for.
///
/// Unrecognised names are kept verbatim in [`DeckFormat::Other`] so they can
/// be reported back and serialised unchanged. Names match case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeckFormat {
    Standard,
    Modern,
    Legacy,
    Commander,
    Other(String),
}

impl DeckFormat {
    pub fn as_str(&self) -> &str {
        match self {
            DeckFormat::Standard => "Standard",
            DeckFormat::Modern => "Modern",
            DeckFormat::Legacy => "Legacy",
            DeckFormat::Commander => "Commander",
            DeckFormat::Other(name) => name,
        }
    }
}

impl From<String> for DeckFormat {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Standard" => DeckFormat::Standard,
            "Modern" => DeckFormat::Modern,
            "Legacy" => DeckFormat::Legacy,
            "Commander" => DeckFormat::Commander,
            _ => DeckFormat::Other(name),
        }
    }
}

impl From<&str> for DeckFormat {
    fn from(name: &str) -> Self {
        DeckFormat::from(name.to_string())
    }
}

impl From<DeckFormat> for String {
    fn from(format: DeckFormat) -> Self {
        match format {
            DeckFormat::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for DeckFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CardEntry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CardEntry {
    pub card_name: String,
    pub quantity: u64,
}

impl CardEntry {
    pub fn new(card_name: impl Into<String>, quantity: u64) -> Self {
        Self {
            card_name: card_name.into(),
            quantity,
        }
    }
}

// ---------------------------------------------------------------------------
// Decklist — A submitted deck
// ---------------------------------------------------------------------------

/// A deck submission as read from a decklist document.
///
/// `sideboard` distinguishes a missing `Sideboard` key (`None`) from an
/// explicit empty array (`Some(vec![])`); the sideboard eligibility rule
/// depends on that difference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Decklist {
    pub deck_name: String,
    pub deck_owner: String,
    pub deck_format: DeckFormat,
    pub main_deck: Vec<CardEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sideboard: Option<Vec<CardEntry>>,
}

impl Decklist {
    /// Total number of cards in the main deck.
    pub fn main_deck_length(&self) -> u64 {
        total_quantity(&self.main_deck)
    }

    /// Total number of cards in the sideboard, or 0 when there is none.
    pub fn sideboard_length(&self) -> u64 {
        total_quantity(self.sideboard_cards())
    }

    pub fn has_sideboard(&self) -> bool {
        self.sideboard.is_some()
    }

    /// Sideboard entries, empty when the key was absent.
    pub fn sideboard_cards(&self) -> &[CardEntry] {
        self.sideboard.as_deref().unwrap_or(&[])
    }
}

/// Sum of quantities, saturating at `u64::MAX` instead of wrapping.
fn total_quantity(cards: &[CardEntry]) -> u64 {
    cards
        .iter()
        .fold(0u64, |total, c| total.saturating_add(c.quantity))
}

/// Number of cards in the main deck of `decklist`.
pub fn get_decklist_length(decklist: &Decklist) -> u64 {
    decklist.main_deck_length()
}

/// Number of cards in the sideboard of `decklist`.
pub fn get_sideboard_length(decklist: &Decklist) -> u64 {
    decklist.sideboard_length()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_pascal_case_document() {
        let deck: Decklist = serde_json::from_value(json!({
            "DeckName": "Elves",
            "DeckOwner": "Sam",
            "DeckFormat": "Modern",
            "MainDeck": [{"CardName": "Llanowar Elves", "Quantity": 4}],
            "Sideboard": [{"CardName": "Nature's Claim", "Quantity": 3}]
        }))
        .unwrap();

        assert_eq!(deck.deck_format, DeckFormat::Modern);
        assert_eq!(deck.main_deck[0], CardEntry::new("Llanowar Elves", 4));
        assert_eq!(deck.sideboard_length(), 3);
    }

    #[test]
    fn absent_and_empty_sideboard_differ() {
        let base = json!({
            "DeckName": "d",
            "DeckOwner": "o",
            "DeckFormat": "Commander",
            "MainDeck": []
        });
        let absent: Decklist = serde_json::from_value(base.clone()).unwrap();
        assert!(!absent.has_sideboard());

        let mut with_empty = base;
        with_empty["Sideboard"] = json!([]);
        let empty: Decklist = serde_json::from_value(with_empty).unwrap();
        assert!(empty.has_sideboard());
        assert_eq!(empty.sideboard_length(), 0);
    }

    #[test]
    fn unknown_format_round_trips_verbatim() {
        let format: DeckFormat = serde_json::from_value(json!("Pauper")).unwrap();
        assert_eq!(format, DeckFormat::Other("Pauper".into()));
        assert_eq!(serde_json::to_value(&format).unwrap(), json!("Pauper"));
    }

    #[test]
    fn format_names_are_case_sensitive() {
        assert_eq!(DeckFormat::from("modern"), DeckFormat::Other("modern".into()));
    }
}
