//! Partition documents: containers whose gate lists cover 1..=64 with every
//! gate in exactly one container.

use std::collections::BTreeMap;

use gatewheel::Gate;
use gatewheel_spec::tables::reference::CONTAINER_COUNT;
use serde_json::Value;

use super::{check_required_fields, entry_label, gate_list, name_field, report_duplicates};
use crate::report::{Invariant, ValidationReport, Violation};
use crate::ValidationOptions;

/// Validates a partition document.
pub fn validate(entries: &[Value], options: &ValidationOptions) -> ValidationReport {
    let mut report = ValidationReport::new();
    let mut names: BTreeMap<String, usize> = BTreeMap::new();
    let mut owners: BTreeMap<Gate, Vec<String>> = BTreeMap::new();

    for (index, entry) in entries.iter().enumerate() {
        let label = match name_field(entry) {
            Ok(name) => {
                *names.entry(name.to_string()).or_default() += 1;
                name.to_string()
            }
            Err(actual) => {
                let label = entry_label(index);
                report.push(Violation::keyed(
                    Invariant::InvalidKey,
                    &label,
                    "`name` string",
                    actual,
                ));
                label
            }
        };
        if let Some(gates) = gate_list(&mut report, entry, &label) {
            for gate in gates {
                owners.entry(gate).or_default().push(label.clone());
            }
        }
        check_required_fields(&mut report, entry, &label, options);
    }

    report_duplicates(&mut report, &names);

    if entries.len() != CONTAINER_COUNT {
        let absent = options
            .containers
            .iter()
            .filter(|name| !names.contains_key(name.as_str()))
            .cloned()
            .collect();
        report.push(Violation::new(
            Invariant::EntryCount,
            absent,
            CONTAINER_COUNT.to_string(),
            entries.len().to_string(),
        ));
    }

    for gate in Gate::all() {
        match owners.get(&gate).map(Vec::as_slice) {
            None | Some([]) => report.push(Violation::keyed(
                Invariant::MissingKey,
                gate.to_string(),
                "gate in exactly one container",
                "in none",
            )),
            Some([_]) => {}
            Some(containers) => report.push(Violation::keyed(
                Invariant::DuplicateKey,
                gate.to_string(),
                "gate in exactly one container",
                format!("in {}", containers.join(", ")),
            )),
        }
    }
    report
}
