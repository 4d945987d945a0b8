//! JSON serializer for the root tables.
//!
//! The identity table is written as an object keyed by the gate number as a
//! string (`{"1": "111111", ...}`), the wheel sequence as a plain array of
//! 64 integers. Both forms are read back by the loaders in the `gatewheel`
//! crate.

use serde_json::{json, Map, Value};

use crate::RootTables;

/// Serializes the identity table to a JSON object.
#[must_use]
pub fn identity_table(tables: &RootTables) -> Value {
    let mut map = Map::new();
    for (gate, binary) in tables.binaries {
        map.insert(gate.to_string(), json!(binary));
    }
    Value::Object(map)
}

/// Serializes the wheel sequence to a JSON array.
#[must_use]
pub fn wheel_sequence(tables: &RootTables) -> Value {
    json!(tables.wheel_sequence)
}

/// Serializes the reference connections as a connection-shaped document.
#[must_use]
pub fn connections_document(tables: &RootTables) -> Value {
    let entries: Vec<Value> = tables
        .connections
        .iter()
        .map(|(a, b)| json!({ "gates": [a, b] }))
        .collect();
    json!({ "entries": entries })
}

/// Serializes the reference containers as a partition-shaped document.
#[must_use]
pub fn partition_document(tables: &RootTables) -> Value {
    let entries: Vec<Value> = tables
        .containers
        .iter()
        .map(|(name, gates)| json!({ "name": name, "gates": gates }))
        .collect();
    json!({ "entries": entries })
}

/// Serializes every table into a single bundle.
#[must_use]
pub fn to_json(tables: &RootTables) -> Value {
    json!({
        "version": tables.version,
        "identity": identity_table(tables),
        "wheelSequence": wheel_sequence(tables),
        "connections": connections_document(tables)["entries"],
        "partition": partition_document(tables)["entries"],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_keys_are_gate_numbers() {
        let value = identity_table(RootTables::canonical());
        let map = value.as_object().expect("object");
        assert_eq!(map.len(), 64);
        assert_eq!(map["2"], "000000");
        assert_eq!(map["64"], "010101");
    }

    #[test]
    fn wheel_sequence_is_ordered_list() {
        let value = wheel_sequence(RootTables::canonical());
        let list = value.as_array().expect("array");
        assert_eq!(list.len(), 64);
        assert_eq!(list[0], 41);
        assert_eq!(list[63], 60);
    }

    #[test]
    fn bundle_contains_all_sections() {
        let value = to_json(RootTables::canonical());
        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value["connections"].as_array().map(Vec::len), Some(36));
        assert_eq!(value["partition"].as_array().map(Vec::len), Some(9));
    }
}
