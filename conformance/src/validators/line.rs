//! Line-level documents: exactly one entry per (gate, line) pair.

use std::collections::BTreeMap;

use gatewheel::{Gate, Line};
use gatewheel_spec::LINE_POSITIONS;
use serde_json::Value;

use super::{
    check_required_fields, entry_label, integer_field, report_coverage, report_duplicates,
};
use crate::report::{Invariant, ValidationReport, Violation};
use crate::ValidationOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct LineKey(Gate, Line);

impl std::fmt::Display for LineKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0, self.1)
    }
}

fn key_of(entry: &Value) -> Result<LineKey, (&'static str, String)> {
    let gate = integer_field(entry, "gate")
        .and_then(|n| Gate::new(n).map_err(|_| n.to_string()))
        .map_err(|actual| ("gate in 1..=64", actual))?;
    let line = integer_field(entry, "line")
        .and_then(|n| Line::new(n).map_err(|_| n.to_string()))
        .map_err(|actual| ("line in 1..=6", actual))?;
    Ok(LineKey(gate, line))
}

/// Validates a line-level document.
pub fn validate(entries: &[Value], options: &ValidationOptions) -> ValidationReport {
    let mut report = ValidationReport::new();
    let mut seen: BTreeMap<LineKey, usize> = BTreeMap::new();

    for (index, entry) in entries.iter().enumerate() {
        let label = match key_of(entry) {
            Ok(key) => {
                *seen.entry(key).or_default() += 1;
                key.to_string()
            }
            Err((expected, actual)) => {
                let label = entry_label(index);
                report.push(Violation::keyed(
                    Invariant::InvalidKey,
                    &label,
                    expected,
                    actual,
                ));
                label
            }
        };
        check_required_fields(&mut report, entry, &label, options);
    }

    report_duplicates(&mut report, &seen);
    let absent = Gate::all()
        .flat_map(|gate| Line::ALL.into_iter().map(move |line| LineKey(gate, line)))
        .filter(|key| !seen.contains_key(key))
        .map(|key| key.to_string())
        .collect();
    report_coverage(&mut report, LINE_POSITIONS, entries.len(), absent);
    report
}
