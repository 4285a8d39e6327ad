use std::collections::HashMap;

use crate::models::DeckFormat;

pub const DEFAULT_SCHEMA_FILE: &str = "decklist_schema.json";
pub const EXAMPLE_DECKLIST_FILE: &str = "example_decklist.json";

pub const DEFAULT_MINIMUM_DECK_SIZE: u64 = 60;
pub const MAX_SIDEBOARD_SIZE: u64 = 15;
pub const MAX_NON_BASIC_COPIES: u64 = 4;

pub const BASIC_LANDS: [&str; 6] = ["Plains", "Island", "Swamp", "Mountain", "Forest", "Wastes"];

/// Formats in which a `Sideboard` key may appear at all.
pub const SIDEBOARD_FORMATS: [&str; 3] = ["Standard", "Modern", "Legacy"];

pub fn format_minimums() -> HashMap<&'static str, u64> {
    HashMap::from([("Standard", 60), ("Modern", 60), ("Commander", 100)])
}

/// Minimum main-deck size for a format; unlisted formats fall back to 60.
pub fn minimum_deck_size(format: &DeckFormat) -> u64 {
    format_minimums()
        .get(format.as_str())
        .copied()
        .unwrap_or(DEFAULT_MINIMUM_DECK_SIZE)
}

pub fn is_basic_land(card_name: &str) -> bool {
    BASIC_LANDS.contains(&card_name)
}

pub fn allows_sideboard(format: &DeckFormat) -> bool {
    SIDEBOARD_FORMATS.contains(&format.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimums_follow_format_table() {
        assert_eq!(minimum_deck_size(&DeckFormat::Standard), 60);
        assert_eq!(minimum_deck_size(&DeckFormat::Modern), 60);
        assert_eq!(minimum_deck_size(&DeckFormat::Commander), 100);
    }

    #[test]
    fn unlisted_formats_default_to_sixty() {
        assert_eq!(minimum_deck_size(&DeckFormat::Legacy), 60);
        assert_eq!(minimum_deck_size(&DeckFormat::from("Pauper")), 60);
    }

    #[test]
    fn basic_lands_are_case_sensitive() {
        assert!(is_basic_land("Wastes"));
        assert!(!is_basic_land("forest"));
        assert!(!is_basic_land("Snow-Covered Forest"));
    }

    #[test]
    fn sideboards_only_in_constructed_formats() {
        assert!(allows_sideboard(&DeckFormat::Legacy));
        assert!(!allows_sideboard(&DeckFormat::Commander));
        assert!(!allows_sideboard(&DeckFormat::from("Vintage")));
    }
}
