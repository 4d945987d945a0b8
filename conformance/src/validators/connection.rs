//! Connection documents: unordered gate pairs checked against the reference
//! connection set.
//!
//! Pairs are canonicalized to `(min, max)` before comparison, so `[20, 10]`
//! and `[10, 20]` are the same pair and a document listing both has a
//! duplicate.

use std::collections::{BTreeMap, BTreeSet};

use gatewheel::Gate;
use gatewheel_spec::tables::reference::CONNECTION_COUNT;
use serde_json::Value;

use super::{
    check_required_fields, describe, entry_label, gate_value, report_coverage, report_duplicates,
};
use crate::report::{Invariant, ValidationReport, Violation};
use crate::ValidationOptions;

/// Canonical `(min, max)` gate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GatePair(Gate, Gate);

impl GatePair {
    /// Orders two distinct gates.
    #[must_use]
    pub fn new(a: Gate, b: Gate) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    /// Lower gate.
    #[must_use]
    pub fn low(self) -> Gate {
        self.0
    }

    /// Higher gate.
    #[must_use]
    pub fn high(self) -> Gate {
        self.1
    }
}

impl std::fmt::Display for GatePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.0, self.1)
    }
}

fn pair_of(entry: &Value) -> Result<GatePair, String> {
    let value = entry.get("gates");
    let items = value
        .and_then(Value::as_array)
        .ok_or_else(|| describe(value))?;
    let [a, b] = items.as_slice() else {
        return Err(format!("{} gates", items.len()));
    };
    let (a, b) = (gate_value(a)?, gate_value(b)?);
    if a == b {
        return Err(format!("{a}-{b}"));
    }
    Ok(GatePair::new(a, b))
}

/// Reference pairs from the options. Pairs that are not two distinct gates
/// in range, and a set that is not exactly [`CONNECTION_COUNT`] pairs, are
/// reported as reference-data violations.
fn reference_pairs(
    options: &ValidationOptions,
    report: &mut ValidationReport,
) -> BTreeSet<GatePair> {
    let mut pairs = BTreeSet::new();
    for &(a, b) in &options.connections {
        match (Gate::new(i64::from(a)), Gate::new(i64::from(b))) {
            (Ok(a), Ok(b)) if a != b => {
                pairs.insert(GatePair::new(a, b));
            }
            _ => report.push(Violation::keyed(
                Invariant::ReferenceData,
                format!("{a}-{b}"),
                "reference pair of two distinct gates in 1..=64",
                "malformed",
            )),
        }
    }
    if pairs.len() != CONNECTION_COUNT {
        report.push(Violation::keyed(
            Invariant::ReferenceData,
            "reference connections",
            format!("{CONNECTION_COUNT} distinct pairs"),
            pairs.len().to_string(),
        ));
    }
    pairs
}

/// Validates a connection document.
pub fn validate(entries: &[Value], options: &ValidationOptions) -> ValidationReport {
    let mut report = ValidationReport::new();
    let reference = reference_pairs(options, &mut report);
    let mut seen: BTreeMap<GatePair, usize> = BTreeMap::new();

    for (index, entry) in entries.iter().enumerate() {
        let label = match pair_of(entry) {
            Ok(pair) => {
                *seen.entry(pair).or_default() += 1;
                pair.to_string()
            }
            Err(actual) => {
                let label = entry_label(index);
                report.push(Violation::keyed(
                    Invariant::InvalidKey,
                    &label,
                    "two distinct gates in 1..=64",
                    actual,
                ));
                label
            }
        };
        check_required_fields(&mut report, entry, &label, options);
    }

    report_duplicates(&mut report, &seen);
    for pair in seen.keys().filter(|pair| !reference.contains(pair)) {
        report.push(Violation::keyed(
            Invariant::UnknownKey,
            pair.to_string(),
            "pair in reference connections",
            "not a reference pair",
        ));
    }
    let absent = reference
        .iter()
        .filter(|pair| !seen.contains_key(pair))
        .map(GatePair::to_string)
        .collect();
    report_coverage(&mut report, CONNECTION_COUNT, entries.len(), absent);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatewheel_spec::tables::reference::CONNECTIONS;
    use serde_json::json;

    fn document() -> Vec<Value> {
        CONNECTIONS
            .iter()
            .map(|(a, b)| json!({ "gates": [a, b] }))
            .collect()
    }

    #[test]
    fn reference_document_passes() {
        assert!(validate(&document(), &ValidationOptions::default()).passed());
    }

    #[test]
    fn orientation_does_not_matter() {
        let doc: Vec<Value> = CONNECTIONS
            .iter()
            .map(|(a, b)| json!({ "gates": [b, a] }))
            .collect();
        assert!(validate(&doc, &ValidationOptions::default()).passed());
    }

    #[test]
    fn both_orientations_are_a_duplicate() {
        let mut doc = document();
        let (a, b) = CONNECTIONS[0];
        doc[1] = json!({ "gates": [b, a] });
        let report = validate(&doc, &ValidationOptions::default());
        assert_eq!(report.of(Invariant::DuplicateKey).count(), 1);
        assert_eq!(report.of(Invariant::MissingKey).count(), 1);
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn self_pair_is_invalid() {
        let mut doc = document();
        doc.push(json!({ "gates": [5, 5] }));
        let report = validate(&doc, &ValidationOptions::default());
        let invalid: Vec<_> = report.of(Invariant::InvalidKey).collect();
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].actual, "5-5");
    }

    #[test]
    fn unknown_pair_is_flagged() {
        let mut doc = document();
        doc[0] = json!({ "gates": [1, 2] });
        let report = validate(&doc, &ValidationOptions::default());
        let unknown: Vec<_> = report.of(Invariant::UnknownKey).collect();
        assert_eq!(unknown.len(), 1);
        assert_eq!(unknown[0].keys, vec!["1-2".to_string()]);
    }

    #[test]
    fn count_is_fixed_regardless_of_reference() {
        let options = ValidationOptions {
            connections: vec![(1, 2), (3, 4)],
            ..ValidationOptions::default()
        };
        let doc = vec![json!({ "gates": [2, 1] }), json!({ "gates": [4, 3] })];
        let report = validate(&doc, &options);
        let count: Vec<_> = report.of(Invariant::EntryCount).collect();
        assert_eq!(count.len(), 1);
        assert_eq!((count[0].expected.as_str(), count[0].actual.as_str()), ("36", "2"));
        assert_eq!(report.of(Invariant::ReferenceData).count(), 1);
        assert!(!report.passed());
    }

    #[test]
    fn malformed_reference_pair_is_reported() {
        let mut connections = CONNECTIONS.to_vec();
        connections[0] = (7, 7);
        connections.push((0, 65));
        let options = ValidationOptions {
            connections,
            ..ValidationOptions::default()
        };
        let report = validate(&document(), &options);
        let keys: Vec<_> = report
            .of(Invariant::ReferenceData)
            .flat_map(|v| v.keys.clone())
            .collect();
        assert_eq!(keys, vec!["7-7", "0-65", "reference connections"]);
        // The document pair missing from the damaged reference is unknown.
        assert_eq!(report.of(Invariant::UnknownKey).count(), 1);
    }

    #[test]
    fn pair_shape_errors() {
        assert_eq!(pair_of(&json!({ "gates": [1] })), Err("1 gates".to_string()));
        assert_eq!(pair_of(&json!({})), Err("absent".to_string()));
        assert_eq!(pair_of(&json!({ "gates": [1, 99] })), Err("99".to_string()));
    }
}
