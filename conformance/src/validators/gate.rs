//! Gate-level documents: exactly one entry per gate 1..=64.

use std::collections::BTreeMap;

use gatewheel::Gate;
use gatewheel_spec::GATE_COUNT;
use serde_json::Value;

use super::{
    check_required_fields, entry_label, integer_field, report_coverage, report_duplicates,
};
use crate::report::{Invariant, ValidationReport, Violation};
use crate::ValidationOptions;

/// Validates a gate-level document.
pub fn validate(entries: &[Value], options: &ValidationOptions) -> ValidationReport {
    let mut report = ValidationReport::new();
    let mut seen: BTreeMap<Gate, usize> = BTreeMap::new();

    for (index, entry) in entries.iter().enumerate() {
        let label = match integer_field(entry, "gate")
            .and_then(|n| Gate::new(n).map_err(|_| n.to_string()))
        {
            Ok(gate) => {
                *seen.entry(gate).or_default() += 1;
                gate.to_string()
            }
            Err(actual) => {
                let label = entry_label(index);
                report.push(Violation::keyed(
                    Invariant::InvalidKey,
                    &label,
                    "gate in 1..=64",
                    actual,
                ));
                label
            }
        };
        check_required_fields(&mut report, entry, &label, options);
    }

    report_duplicates(&mut report, &seen);
    let absent = Gate::all()
        .filter(|gate| !seen.contains_key(gate))
        .map(|gate| gate.to_string())
        .collect();
    report_coverage(&mut report, GATE_COUNT, entries.len(), absent);
    report
}
