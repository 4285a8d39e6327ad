//! Running every rule against a decklist document.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config;
use crate::error::Result;
use crate::legality::{AllCardsLegal, CardLegality, CommanderRules, NoCommanderRules, Verdict};
use crate::loader;
use crate::models::Decklist;
use crate::rules::{self, Finding, RuleId};
use crate::schema::SchemaValidator;

// ---------------------------------------------------------------------------
// ValidationReport
// ---------------------------------------------------------------------------

/// Everything one validation run found wrong with a decklist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    findings: Vec<Finding>,
}

impl ValidationReport {
    /// `true` when no rule reported a violation.
    pub fn is_valid(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Whether the given rule produced a finding.
    pub fn failed(&self, rule: RuleId) -> bool {
        self.findings.iter().any(|f| f.rule == rule)
    }

    fn record(&mut self, finding: Option<Finding>) {
        if let Some(f) = finding {
            f.emit();
            self.findings.push(f);
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for finding in &self.findings {
            writeln!(f, "{finding}")?;
        }
        if self.is_valid() {
            write!(f, "Decklist passed validation.")
        } else {
            write!(f, "Decklist failed validation.")
        }
    }
}

// ---------------------------------------------------------------------------
// DecklistValidatorBuilder
// ---------------------------------------------------------------------------

enum SchemaSource {
    Path(PathBuf),
    Value(Value),
    Bundled,
}

/// Builder for configuring and constructing a [`DecklistValidator`].
///
/// Use [`DecklistValidator::builder()`] to obtain a builder, chain
/// configuration methods, and call [`build()`](DecklistValidatorBuilder::build).
pub struct DecklistValidatorBuilder {
    schema: SchemaSource,
    card_legality: Box<dyn CardLegality>,
    commander_rules: Box<dyn CommanderRules>,
    strict_sideboard: bool,
}

impl Default for DecklistValidatorBuilder {
    fn default() -> Self {
        Self {
            schema: SchemaSource::Path(PathBuf::from(config::DEFAULT_SCHEMA_FILE)),
            card_legality: Box::new(AllCardsLegal),
            commander_rules: Box::new(NoCommanderRules),
            strict_sideboard: false,
        }
    }
}

impl DecklistValidatorBuilder {
    /// Read the schema from this file instead of `decklist_schema.json`
    /// in the working directory.
    pub fn schema_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.schema = SchemaSource::Path(path.as_ref().to_path_buf());
        self
    }

    /// Use an in-memory schema document.
    pub fn schema_value(mut self, schema: Value) -> Self {
        self.schema = SchemaSource::Value(schema);
        self
    }

    /// Use the schema bundled with the crate.
    pub fn bundled_schema(mut self) -> Self {
        self.schema = SchemaSource::Bundled;
        self
    }

    /// Replace the card legality check. Defaults to [`AllCardsLegal`].
    pub fn card_legality(mut self, check: impl CardLegality + 'static) -> Self {
        self.card_legality = Box::new(check);
        self
    }

    /// Replace the Commander rules check. Defaults to [`NoCommanderRules`].
    pub fn commander_rules(mut self, check: impl CommanderRules + 'static) -> Self {
        self.commander_rules = Box::new(check);
        self
    }

    /// Run the full sideboard eligibility rule instead of the bare size check.
    ///
    /// Off by default: the standard run only caps the sideboard at 15 cards
    /// and does not reject sideboards in formats that disallow them.
    pub fn strict_sideboard(mut self, strict: bool) -> Self {
        self.strict_sideboard = strict;
        self
    }

    /// Load and compile the schema, producing a reusable validator.
    pub fn build(self) -> Result<DecklistValidator> {
        let schema = match self.schema {
            SchemaSource::Path(path) => SchemaValidator::from_file(&path)?,
            SchemaSource::Value(value) => SchemaValidator::from_value(&value)?,
            SchemaSource::Bundled => SchemaValidator::bundled()?,
        };
        Ok(DecklistValidator {
            schema,
            card_legality: self.card_legality,
            commander_rules: self.commander_rules,
            strict_sideboard: self.strict_sideboard,
        })
    }
}

// ---------------------------------------------------------------------------
// DecklistValidator
// ---------------------------------------------------------------------------

/// Checks decklist documents against the schema and every construction rule.
pub struct DecklistValidator {
    schema: SchemaValidator,
    card_legality: Box<dyn CardLegality>,
    commander_rules: Box<dyn CommanderRules>,
    strict_sideboard: bool,
}

impl DecklistValidator {
    /// Create a new builder for configuring the validator.
    pub fn builder() -> DecklistValidatorBuilder {
        DecklistValidatorBuilder::default()
    }

    /// Validate a raw decklist document.
    ///
    /// A document that fails the schema is an error; rule violations are
    /// not, and show up as findings in the report.
    pub fn validate(&self, document: &Value) -> Result<ValidationReport> {
        let decklist = self.schema.parse(document)?;
        Ok(self.check(&decklist))
    }

    /// Load a decklist file and validate it.
    pub fn validate_file<P: AsRef<Path>>(&self, path: P) -> Result<ValidationReport> {
        let document = loader::load_json(path.as_ref())?;
        self.validate(&document)
    }

    /// Run every rule against an already-validated decklist.
    ///
    /// All rules run; a failing rule does not stop later ones.
    pub fn check(&self, decklist: &Decklist) -> ValidationReport {
        tracing::debug!(
            deck = %decklist.deck_name,
            format = %decklist.deck_format,
            "checking decklist"
        );
        let mut report = ValidationReport::default();

        report.record(rules::check_minimum_deck_size(decklist));
        if self.strict_sideboard {
            report.record(rules::check_sideboard_allowed(decklist));
        } else {
            report.record(rules::check_sideboard_size(decklist));
        }
        report.record(rules::check_basic_lands(decklist));
        report.record(verdict_finding(
            RuleId::CardLegality,
            self.card_legality.check(decklist),
        ));
        report.record(verdict_finding(
            RuleId::CommanderRules,
            self.commander_rules.check(decklist),
        ));
        report.record(rules::check_unique_cards(decklist));

        report
    }
}

fn verdict_finding(rule: RuleId, verdict: Verdict) -> Option<Finding> {
    match verdict {
        Verdict::Pass => None,
        Verdict::Fail(message) => Some(Finding::new(rule, message)),
    }
}

/// Validate `document` against the schema at `schema_path` with the default
/// collaborators, returning a single pass/fail flag.
///
/// A missing schema or a malformed document is logged and counts as a
/// failure.
pub fn validate_decklist<P: AsRef<Path>>(document: &Value, schema_path: P) -> bool {
    let result = DecklistValidator::builder()
        .schema_path(schema_path)
        .build()
        .and_then(|v| v.validate(document));

    match result {
        Ok(report) => report.is_valid(),
        Err(e) => {
            tracing::warn!("{}", e);
            false
        }
    }
}
