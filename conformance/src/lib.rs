//! Gatewheel docking validator.
//!
//! Content authors attach knowledge documents to the root coordinate
//! system. This crate audits those documents against the derived geometry
//! and against the structural invariants of their shape, and returns every
//! problem at once.
//!
//! # Shapes
//!
//! | Shape | Entries | Key |
//! |-------|---------|-----|
//! | gate-level | 64 | `gate` |
//! | line-level | 384 | `gate`, `line` |
//! | grouping | 4 / 16 / 8 | `name`, cross-checked `gates` |
//! | connection | 36 | `gates: [a, b]`, unordered |
//! | partition | 9 | `name`, `gates` covering 1..=64 once |
//!
//! # Entry Point
//!
//! ```
//! use gatewheel_conformance::{fixtures, validate, DocumentShape, ValidationOptions};
//!
//! let document = fixtures::connection_document();
//! let report = validate(&document, DocumentShape::Connection, &ValidationOptions::default());
//! assert!(report.passed());
//! ```
//!
//! Document problems are data, not errors: [`validate`] never fails, it
//! returns a [`ValidationReport`] whose violations name the invariant, the
//! offending keys and expected vs actual.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod fixtures;
pub mod report;
pub mod shape;
pub mod validators;

use std::path::Path;

use anyhow::{Context, Result};
use gatewheel::IdentityTable;
use gatewheel_spec::tables::reference::{CONNECTIONS, CONTAINERS};
use serde_json::Value;

pub use report::{Invariant, ValidationReport, Violation};
pub use shape::{DocumentShape, GroupingKind, UnknownShape};

/// Caller-supplied validation settings.
#[derive(Debug, Clone)]
pub struct ValidationOptions {
    /// Content fields every entry must carry (absent or `null` is missing).
    pub required_fields: Vec<String>,
    /// Reference connections as gate pairs, in either orientation. They name
    /// absent and unknown pairs; a connection document always has 36
    /// entries.
    pub connections: Vec<(u8, u8)>,
    /// Reference container names, used to name absent containers; a
    /// partition document always has 9 entries.
    pub containers: Vec<String>,
    /// Identity table for grouping membership; the canonical table when
    /// `None`.
    pub identity: Option<IdentityTable>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            required_fields: Vec::new(),
            connections: CONNECTIONS.to_vec(),
            containers: CONTAINERS
                .iter()
                .map(|(name, _)| (*name).to_string())
                .collect(),
            identity: None,
        }
    }
}

impl ValidationOptions {
    /// Replaces the required field list.
    #[must_use]
    pub fn with_required_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_fields = fields.into_iter().map(Into::into).collect();
        self
    }
}

/// Validates a document of the given shape.
///
/// Accepts either an array of entries or an object with an `entries` array.
/// An empty report means the document passed.
#[must_use]
pub fn validate(
    document: &Value,
    shape: DocumentShape,
    options: &ValidationOptions,
) -> ValidationReport {
    let entries = match validators::entries(document) {
        Ok(entries) => entries,
        Err(violation) => {
            let mut report = ValidationReport::new();
            report.push(violation);
            return report;
        }
    };

    let report = match shape {
        DocumentShape::GateLevel => validators::gate::validate(entries, options),
        DocumentShape::LineLevel => validators::line::validate(entries, options),
        DocumentShape::Grouping(kind) => validators::grouping::validate(entries, kind, options),
        DocumentShape::Connection => validators::connection::validate(entries, options),
        DocumentShape::Partition => validators::partition::validate(entries, options),
    };
    tracing::debug!(
        shape = %shape,
        entries = entries.len(),
        violations = report.len(),
        "document validated"
    );
    report
}

/// Reads a JSON document from disk and validates it.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn validate_file(
    path: &Path,
    shape: DocumentShape,
    options: &ValidationOptions,
) -> Result<ValidationReport> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let document: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))?;
    Ok(validate(&document, shape, options))
}
