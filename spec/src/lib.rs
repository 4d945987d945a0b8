//! Gatewheel root tables encoded as typed Rust data.
//!
//! The `gatewheel-spec` crate holds the ground truth every other gatewheel
//! crate derives from: the 64-entry binary identity table, the default
//! wheel sequence, the fixed symbol tables (quarter, letter, trigram, face)
//! and the reference relational datasets used when auditing documents.
//! Nothing here is computed at runtime.
//!
//! # Entry Point
//!
//! ```
//! let tables = gatewheel_spec::RootTables::canonical();
//! assert_eq!(tables.binaries.len(), 64);
//! assert_eq!(tables.wheel_sequence[0], 41);
//! ```
//!
//! # Serialization
//!
//! ```
//! let tables = gatewheel_spec::RootTables::canonical();
//! let identity = gatewheel_spec::serializer::json::identity_table(tables);
//! assert_eq!(identity["1"], "111111");
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod model;
#[cfg(feature = "serializers")]
pub mod serializer;
pub mod tables;

pub use model::{Base, Face, Polarity, Quarter, Trigram, TrigramPosition};
pub use tables::identity::{GATE_COUNT, LINES_PER_GATE};
pub use tables::wheel::{DEGREES_PER_GATE, DEGREES_PER_LINE, LINE_POSITIONS};

/// The complete set of root tables.
#[derive(Debug)]
pub struct RootTables {
    /// Table format version.
    pub version: &'static str,
    /// Gate number to 6-character binary, ordered by gate.
    pub binaries: &'static [(u8, &'static str)],
    /// Default cyclic ordering of gates around the wheel.
    pub wheel_sequence: &'static [u8],
    /// Canonical connection pairs, `(min, max)`.
    pub connections: &'static [(u8, u8)],
    /// Canonical partition containers.
    pub containers: &'static [(&'static str, &'static [u8])],
}

impl RootTables {
    /// Returns the canonical root tables.
    #[must_use]
    pub fn canonical() -> &'static RootTables {
        static TABLES: RootTables = RootTables {
            version: "1.0.0",
            binaries: &tables::identity::GATE_BINARIES,
            wheel_sequence: &tables::wheel::DEFAULT_WHEEL_SEQUENCE,
            connections: &tables::reference::CONNECTIONS,
            containers: &tables::reference::CONTAINERS,
        };
        &TABLES
    }

    /// Returns the binary string for a gate number, or `None` if unknown.
    #[must_use]
    pub fn binary_of(&self, gate: u8) -> Option<&'static str> {
        self.binaries
            .iter()
            .find(|(g, _)| *g == gate)
            .map(|(_, binary)| *binary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_counts() {
        let tables = RootTables::canonical();
        assert_eq!(tables.binaries.len(), GATE_COUNT);
        assert_eq!(tables.wheel_sequence.len(), GATE_COUNT);
        assert_eq!(tables.connections.len(), 36);
        assert_eq!(tables.containers.len(), 9);
    }

    #[test]
    fn binary_lookup() {
        let tables = RootTables::canonical();
        assert_eq!(tables.binary_of(1), Some("111111"));
        assert_eq!(tables.binary_of(2), Some("000000"));
        assert_eq!(tables.binary_of(0), None);
        assert_eq!(tables.binary_of(65), None);
    }
}
