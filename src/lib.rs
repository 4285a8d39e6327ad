//! Decklist validation for Magic: The Gathering.
//!
//! Checks a JSON decklist against the construction rules of its format:
//! minimum deck size, sideboard size and eligibility, card uniqueness, and
//! the four-copy limit for everything except basic lands.
//!
//! # Quick start
//!
//! ```no_run
//! use decklist_validator::DecklistValidator;
//!
//! let validator = DecklistValidator::builder()
//!     .schema_path("decklist_schema.json")
//!     .build()
//!     .unwrap();
//!
//! let report = validator.validate_file("example_decklist.json").unwrap();
//! for finding in report.findings() {
//!     println!("{}: {}", finding.rule, finding.message);
//! }
//! ```

pub mod config;
pub mod error;
pub mod legality;
pub mod loader;
pub mod models;
pub mod rules;
pub mod schema;
pub mod validator;

pub use error::{DecklistError, Result, Violation, Violations};
pub use legality::{AllCardsLegal, CardLegality, CommanderRules, NoCommanderRules, Verdict};
pub use models::{get_decklist_length, get_sideboard_length, CardEntry, DeckFormat, Decklist};
pub use rules::{
    validate_basic_lands, validate_minimum_deck_size, validate_sideboard_allowed,
    validate_unique_cards, Finding, RuleId,
};
pub use schema::SchemaValidator;
pub use validator::{validate_decklist, DecklistValidator, DecklistValidatorBuilder, ValidationReport};
