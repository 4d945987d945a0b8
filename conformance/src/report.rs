//! Validation report types: violated invariants and report aggregation.

use core::fmt;

/// Invariant a document entry can violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Invariant {
    /// The document is not an array of entries (or an object with `entries`).
    DocumentStructure,
    /// Entry count differs from the shape's cardinality.
    EntryCount,
    /// An entry's key is absent, malformed or out of range.
    InvalidKey,
    /// A canonical key has no entry.
    MissingKey,
    /// A key occurs in more than one entry.
    DuplicateKey,
    /// A key is not part of the reference set.
    UnknownKey,
    /// A caller-required content field is absent or null.
    MissingField,
    /// A group's claimed gates differ from the derived membership.
    MembershipMismatch,
    /// Reference data could not be loaded.
    ReferenceData,
}

impl Invariant {
    /// Stable kebab-case label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DocumentStructure => "document-structure",
            Self::EntryCount => "entry-count",
            Self::InvalidKey => "invalid-key",
            Self::MissingKey => "missing-key",
            Self::DuplicateKey => "duplicate-key",
            Self::UnknownKey => "unknown-key",
            Self::MissingField => "missing-field",
            Self::MembershipMismatch => "membership-mismatch",
            Self::ReferenceData => "reference-data",
        }
    }
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single violated invariant.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Violation {
    /// Which invariant failed.
    pub invariant: Invariant,
    /// Offending keys (gate numbers, `gate.line`, `a-b` pairs, group names,
    /// or `entries[i]` when the entry has no usable key).
    pub keys: Vec<String>,
    /// What the invariant requires.
    pub expected: String,
    /// What the document contains.
    pub actual: String,
}

impl Violation {
    /// Creates a violation.
    pub fn new(
        invariant: Invariant,
        keys: Vec<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            invariant,
            keys,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Creates a violation about one key.
    pub fn keyed(
        invariant: Invariant,
        key: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::new(invariant, vec![key.into()], expected, actual)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] expected {}, found {}",
            self.invariant, self.expected, self.actual
        )?;
        if !self.keys.is_empty() {
            write!(f, " ({})", self.keys.join(", "))?;
        }
        Ok(())
    }
}

/// Every violation found in one document. Empty means the document passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ValidationReport {
    /// Violations in discovery order.
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Extends this report with violations from another report.
    pub fn extend(&mut self, other: ValidationReport) {
        self.violations.extend(other.violations);
    }

    /// Number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// True when nothing was violated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Alias of [`is_empty`](Self::is_empty).
    #[must_use]
    pub fn passed(&self) -> bool {
        self.is_empty()
    }

    /// Violations of one invariant.
    pub fn of(&self, invariant: Invariant) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(move |v| v.invariant == invariant)
    }

    /// Iterates violations.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter()
    }
}
