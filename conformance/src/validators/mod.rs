//! One validation strategy per document shape, plus the entry parsing they
//! share.
//!
//! Every strategy collects all violations instead of stopping at the first,
//! so an author can fix a document in one pass.

pub mod connection;
pub mod gate;
pub mod grouping;
pub mod line;
pub mod partition;

use std::collections::BTreeMap;
use std::fmt::Display;

use gatewheel::Gate;
use serde_json::Value;

use crate::report::{Invariant, ValidationReport, Violation};
use crate::ValidationOptions;

/// Entry array of a document: the document itself, or its `entries` field.
pub(crate) fn entries(document: &Value) -> Result<&[Value], Violation> {
    let list = match document {
        Value::Array(items) => Some(items),
        Value::Object(map) => map.get("entries").and_then(Value::as_array),
        _ => None,
    };
    list.map(Vec::as_slice).ok_or_else(|| {
        Violation::keyed(
            Invariant::DocumentStructure,
            "$",
            "array of entries or object with `entries` array",
            json_kind(document),
        )
    })
}

/// Label for an entry without a usable key.
pub(crate) fn entry_label(index: usize) -> String {
    format!("entries[{index}]")
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Field value as text for `actual`; `absent` when missing or null.
pub(crate) fn describe(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "absent".to_string(),
        Some(v) => v.to_string(),
    }
}

/// Integer field of an entry.
pub(crate) fn integer_field(entry: &Value, field: &str) -> Result<i64, String> {
    let value = entry.get(field);
    value
        .and_then(Value::as_i64)
        .ok_or_else(|| describe(value))
}

/// Gate number held by a JSON value.
pub(crate) fn gate_value(value: &Value) -> Result<Gate, String> {
    let number = value.as_i64().ok_or_else(|| value.to_string())?;
    Gate::new(number).map_err(|_| number.to_string())
}

/// Non-empty string field of an entry.
pub(crate) fn name_field(entry: &Value) -> Result<&str, String> {
    let value = entry.get("name");
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| describe(value))
}

/// `gates` list of an entry. Elements that are not gates are reported and
/// skipped.
pub(crate) fn gate_list(
    report: &mut ValidationReport,
    entry: &Value,
    label: &str,
) -> Option<Vec<Gate>> {
    let value = entry.get("gates");
    let Some(items) = value.and_then(Value::as_array) else {
        report.push(Violation::keyed(
            Invariant::InvalidKey,
            label,
            "`gates` array",
            describe(value),
        ));
        return None;
    };
    let mut gates = Vec::with_capacity(items.len());
    for item in items {
        match gate_value(item) {
            Ok(gate) => gates.push(gate),
            Err(actual) => report.push(Violation::keyed(
                Invariant::InvalidKey,
                label,
                "gate in 1..=64",
                actual,
            )),
        }
    }
    Some(gates)
}

/// One `MissingField` per required field that is absent or null.
pub(crate) fn check_required_fields(
    report: &mut ValidationReport,
    entry: &Value,
    label: &str,
    options: &ValidationOptions,
) {
    for field in &options.required_fields {
        if matches!(entry.get(field), None | Some(Value::Null)) {
            report.push(Violation::keyed(
                Invariant::MissingField,
                label,
                format!("field `{field}`"),
                "absent",
            ));
        }
    }
}

/// One `DuplicateKey` per key seen more than once.
pub(crate) fn report_duplicates<K: Display>(
    report: &mut ValidationReport,
    counts: &BTreeMap<K, usize>,
) {
    for (key, count) in counts {
        if *count > 1 {
            report.push(Violation::keyed(
                Invariant::DuplicateKey,
                key.to_string(),
                "1 entry",
                format!("{count} entries"),
            ));
        }
    }
}

/// Count check with absent keys attached.
///
/// A wrong count is one `EntryCount` violation listing every absent key.
/// With the right count, each absent key is its own `MissingKey`.
pub(crate) fn report_coverage(
    report: &mut ValidationReport,
    expected: usize,
    actual: usize,
    absent: Vec<String>,
) {
    if actual != expected {
        report.push(Violation::new(
            Invariant::EntryCount,
            absent,
            expected.to_string(),
            actual.to_string(),
        ));
        return;
    }
    for key in absent {
        report.push(Violation::keyed(
            Invariant::MissingKey,
            key,
            "entry present",
            "absent",
        ));
    }
}

/// Comma-separated gate numbers.
pub(crate) fn gate_names(gates: &[Gate]) -> String {
    gates
        .iter()
        .map(Gate::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
