//! The shape-validation boundary.
//!
//! Raw JSON goes in; a typed [`Decklist`] comes out only if the document
//! matches the decklist JSON Schema and deserialises cleanly. Everything
//! downstream of this module may assume the required fields exist.

use std::path::Path;

use jsonschema::Validator;
use serde_json::Value;

use crate::error::{DecklistError, Result, Violation, Violations};
use crate::loader;
use crate::models::Decklist;

const BUNDLED_SCHEMA: &str = include_str!("../decklist_schema.json");

/// A compiled decklist schema.
pub struct SchemaValidator {
    validator: Validator,
}

impl SchemaValidator {
    /// Compile a schema from an already-parsed JSON value.
    pub fn from_value(schema: &Value) -> Result<Self> {
        let validator = jsonschema::validator_for(schema)
            .map_err(|e| DecklistError::SchemaBuild(e.to_string()))?;
        Ok(Self { validator })
    }

    /// Load and compile the schema document at `path`.
    ///
    /// Any failure to read or parse the file is reported as
    /// [`DecklistError::SchemaLoad`].
    pub fn from_file(path: &Path) -> Result<Self> {
        let schema = loader::load_json(path).map_err(|e| DecklistError::SchemaLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_value(&schema)
    }

    /// The schema shipped with this crate.
    pub fn bundled() -> Result<Self> {
        let schema: Value = serde_json::from_str(BUNDLED_SCHEMA)?;
        Self::from_value(&schema)
    }

    /// Collect every schema violation in `instance`.
    pub fn violations(&self, instance: &Value) -> Violations {
        Violations(
            self.validator
                .iter_errors(instance)
                .map(|e| Violation {
                    instance_path: e.instance_path.to_string(),
                    message: e.to_string(),
                })
                .collect(),
        )
    }

    /// Validate `instance` and convert it into a [`Decklist`].
    ///
    /// Fails with [`DecklistError::Malformed`] if the schema rejects the
    /// document, or if it passes a looser schema but still cannot be
    /// deserialised into the typed model.
    pub fn parse(&self, instance: &Value) -> Result<Decklist> {
        let violations = self.violations(instance);
        if !violations.is_empty() {
            return Err(DecklistError::Malformed(violations));
        }

        serde_json::from_value(instance.clone())
            .map_err(|e| DecklistError::Malformed(Violations::single("", e.to_string())))
    }
}
