//! Shared decklist fixtures for the integration tests.
//!
//! Fixtures are built as raw JSON documents (the form the validator
//! receives) and converted to typed `Decklist`s where a test only needs the
//! rule functions.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use decklist_validator::Decklist;
use serde_json::{json, Value};

/// Standard deck with exactly 60 main-deck cards and a 5-card sideboard.
pub fn valid_document() -> Value {
    json!({
        "DeckName": "Test Deck",
        "DeckOwner": "John Doe",
        "DeckFormat": "Standard",
        "MainDeck": [
            {"CardName": "Llanowar Elves", "Quantity": 4},
            {"CardName": "Forest", "Quantity": 54},
            {"CardName": "Tarmogoyf", "Quantity": 2}
        ],
        "Sideboard": [
            {"CardName": "Nature's Claim", "Quantity": 3},
            {"CardName": "Pithing Needle", "Quantity": 2}
        ]
    })
}

/// "Llanowar Elves" in both main deck and sideboard.
pub fn duplicate_document() -> Value {
    json!({
        "DeckName": "Test Deck",
        "DeckOwner": "John Doe",
        "DeckFormat": "Standard",
        "MainDeck": [
            {"CardName": "Llanowar Elves", "Quantity": 4},
            {"CardName": "Forest", "Quantity": 24}
        ],
        "Sideboard": [
            {"CardName": "Llanowar Elves", "Quantity": 1}
        ]
    })
}

/// Modern deck with a 16-card sideboard.
pub fn oversized_sideboard_document() -> Value {
    json!({
        "DeckName": "Test Deck",
        "DeckOwner": "John Doe",
        "DeckFormat": "Modern",
        "MainDeck": [
            {"CardName": "Llanowar Elves", "Quantity": 4},
            {"CardName": "Forest", "Quantity": 24}
        ],
        "Sideboard": [
            {"CardName": "Nature's Claim", "Quantity": 16}
        ]
    })
}

/// Five copies of a non-basic land.
pub fn non_basic_document() -> Value {
    json!({
        "DeckName": "Test Deck",
        "DeckOwner": "John Doe",
        "DeckFormat": "Standard",
        "MainDeck": [
            {"CardName": "Non-basic Land", "Quantity": 5},
            {"CardName": "Forest", "Quantity": 24}
        ]
    })
}

/// 100-card Commander deck carrying a one-card sideboard.
pub fn commander_with_sideboard_document() -> Value {
    json!({
        "DeckName": "Commander Deck",
        "DeckOwner": "John Doe",
        "DeckFormat": "Commander",
        "MainDeck": [
            {"CardName": "Llanowar Elves", "Quantity": 1},
            {"CardName": "Forest", "Quantity": 99}
        ],
        "Sideboard": [
            {"CardName": "Nature's Claim", "Quantity": 1}
        ]
    })
}

pub fn decklist(document: Value) -> Decklist {
    serde_json::from_value(document).unwrap()
}

/// Path to the schema document shipped at the crate root.
pub fn schema_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("decklist_schema.json")
}

/// Write `value` as JSON into `dir` and return the file path.
pub fn write_json(dir: &tempfile::TempDir, name: &str, value: &Value) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}
