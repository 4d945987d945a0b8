//! Known-good documents for every shape.
//!
//! Built from the reference tables and the positioning algorithm, they pass
//! validation as-is. Tests mutate them to provoke single violations; the
//! `gatewheel-validate --template` client prints them as starting points
//! for authors.

use gatewheel::{DockingError, IdentityTable, Positioning, WheelConfiguration, WheelOptions};
use gatewheel_spec::serializer::json;
use gatewheel_spec::RootTables;
use serde_json::{json, Value};

use crate::shape::{DocumentShape, GroupingKind};
use crate::validators::grouping::derived_groups;

/// Gate-level document with each named field set to a placeholder string.
#[must_use]
pub fn gate_document(fields: &[&str]) -> Value {
    let entries: Vec<Value> = (1..=64u8)
        .map(|gate| with_fields(json!({ "gate": gate }), fields, &gate.to_string()))
        .collect();
    json!({ "entries": entries })
}

/// Line-level document with each named field set to a placeholder string.
#[must_use]
pub fn line_document(fields: &[&str]) -> Value {
    let entries: Vec<Value> = (1..=64u8)
        .flat_map(|gate| (1..=6u8).map(move |line| (gate, line)))
        .map(|(gate, line)| {
            with_fields(
                json!({ "gate": gate, "line": line }),
                fields,
                &format!("{gate}.{line}"),
            )
        })
        .collect();
    json!({ "entries": entries })
}

/// Grouping document listing the derived members of every group.
///
/// # Errors
///
/// Returns an error if the canonical tables fail their load checks.
pub fn grouping_document(kind: GroupingKind) -> Result<Value, DockingError> {
    let identity = IdentityTable::canonical()?;
    let wheel = WheelConfiguration::new(WheelOptions::default())?;
    let entries: Vec<Value> = derived_groups(&Positioning::new(identity, &wheel), kind)
        .into_iter()
        .map(|group| {
            let gates: Vec<u8> = group.gates.iter().map(|g| g.number()).collect();
            json!({ "name": group.name, "gates": gates })
        })
        .collect();
    Ok(json!({ "entries": entries }))
}

/// The reference connections as a connection document.
#[must_use]
pub fn connection_document() -> Value {
    json::connections_document(RootTables::canonical())
}

/// The reference containers as a partition document.
#[must_use]
pub fn partition_document() -> Value {
    json::partition_document(RootTables::canonical())
}

/// Known-good document for any shape.
///
/// # Errors
///
/// Returns an error only for grouping shapes, when the canonical tables
/// fail their load checks.
pub fn document(shape: DocumentShape, fields: &[&str]) -> Result<Value, DockingError> {
    Ok(match shape {
        DocumentShape::GateLevel => gate_document(fields),
        DocumentShape::LineLevel => line_document(fields),
        DocumentShape::Grouping(kind) => grouping_document(kind)?,
        DocumentShape::Connection => connection_document(),
        DocumentShape::Partition => partition_document(),
    })
}

fn with_fields(mut entry: Value, fields: &[&str], key: &str) -> Value {
    if let Value::Object(map) = &mut entry {
        for field in fields {
            map.insert((*field).to_string(), json!(format!("{field} {key}")));
        }
    }
    entry
}
