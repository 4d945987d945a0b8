//! Error taxonomy.
//!
//! Every error here is local, synchronous and non-retryable. `InvalidGate`
//! and `InvalidLine` mean the caller passed an out-of-range value;
//! `Configuration` and `DataIntegrity` mean a table or option set is
//! malformed. Problems found in external documents are not errors; the
//! validator reports them as data.

use thiserror::Error;

/// Result alias for gatewheel operations.
pub type Result<T> = core::result::Result<T, DockingError>;

/// Errors raised by table loading, configuration and lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DockingError {
    /// Gate number outside `1..=64`.
    #[error("invalid gate {0}: expected 1..=64")]
    InvalidGate(i64),

    /// Line number outside `1..=6`.
    #[error("invalid line {0}: expected 1..=6")]
    InvalidLine(i64),

    /// Malformed wheel configuration.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A ground-truth table invariant is broken.
    #[error("data integrity error: {0}")]
    DataIntegrity(String),
}

/// Construction-time failures of a wheel configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// The sequence does not hold exactly 64 entries.
    #[error("wheel sequence has {0} entries, expected 64")]
    SequenceLength(usize),

    /// A sequence entry is not a gate number.
    #[error("wheel sequence entry {value} at index {index} is not a gate")]
    SequenceGateOutOfRange {
        /// Position in the sequence.
        index: usize,
        /// Offending value.
        value: i64,
    },

    /// A gate occurs more than once.
    #[error("gate {gate} appears at wheel indices {first} and {second}")]
    DuplicateGate {
        /// Repeated gate.
        gate: u8,
        /// First index it was seen at.
        first: usize,
        /// Second index it was seen at.
        second: usize,
    },

    /// A gate is absent from the sequence.
    #[error("gate {0} is missing from the wheel sequence")]
    MissingGate(u8),

    /// Cardinal progression token outside the eight allowed values.
    #[error("unknown cardinal progression {0:?}: expected one of NESW, ESWN, SWNE, WNES, NWSE, WSEN, SENW, ENWS")]
    UnknownCardinalProgression(String),

    /// North position index outside `0..64`.
    #[error("north position index {0} is outside 0..64")]
    NorthIndexOutOfRange(usize),

    /// Straddle indices are not neighbours on the wheel.
    #[error("straddle indices {0} and {1} are not adjacent in the wheel sequence")]
    NonAdjacentStraddle(usize, usize),

    /// Rotation offset is NaN or infinite.
    #[error("rotation offset {0} is not a finite number of degrees")]
    NonFiniteOffset(f64),

    /// Explicit rotation offset disagrees with the north alignment.
    #[error("rotation offset {given}° does not place the north position at north (alignment requires {required}°)")]
    InconsistentNorth {
        /// Offset supplied by the caller.
        given: f64,
        /// Offset implied by the north position.
        required: f64,
    },
}
