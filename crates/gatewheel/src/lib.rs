//! Gatewheel root positioning.
//!
//! Every element of the 64×6 gate/line space gets one consistent set of
//! derived coordinates. Meaning layers dock onto those coordinates instead
//! of recomputing them, so everything here is a pure function of two
//! read-only inputs: the binary identity table and the wheel configuration.
//!
//! # Data flow
//!
//! ```text
//! IdentityTable ─┐
//!                ├─► Positioning ─► DockingData ─► consumers
//! WheelConfiguration ┘                 │
//!                                      └─► DockingTable / DockingCache
//! ```
//!
//! # Example
//!
//! ```
//! use gatewheel::{IdentityTable, Positioning, WheelConfiguration, WheelOptions};
//! use gatewheel_spec::{Quarter, Trigram};
//!
//! let identity = IdentityTable::canonical().unwrap();
//! let wheel = WheelConfiguration::new(WheelOptions::default()).unwrap();
//! let data = Positioning::new(identity, &wheel).lookup(1, 1).unwrap();
//!
//! assert_eq!(data.wheel_index, 50);
//! assert_eq!(data.base_angle, 50.0 * 6.0 * 0.9375);
//! assert_eq!(data.quarter, Quarter::Mutation);
//! assert_eq!(data.trigrams.lower, Trigram::Heaven);
//! assert_eq!(data.trigrams.upper, Trigram::Heaven);
//! assert_eq!(data.codon.to_string(), "AAA");
//! ```
//!
//! # Errors
//!
//! Range and configuration problems are returned as [`DockingError`] at the
//! call that caused them. Nothing is retried; every error is a caller bug
//! or corrupted static data.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

mod docking;
mod error;
mod gate;
mod identity;
mod positioning;
mod wheel;

pub use docking::{DockingCache, DockingData, DockingKey, DockingTable};
pub use error::{ConfigurationError, DockingError, Result};
pub use gate::{Binary, Gate, Line};
pub use identity::{IdentityId, IdentityTable};
pub use gatewheel_spec::{Base, Face, Polarity, Quarter, Trigram, TrigramPosition};
pub use positioning::{codon_of, face_of, quarter_of, trigrams_of, Codon, Positioning, TrigramPair};
pub use wheel::{
    convert_angle, Cardinal, CardinalProgression, ConfigId, NorthPosition, RotationSense, Turn,
    WheelAngle, WheelConfiguration, WheelOptions, WheelSequence,
};

// FNV-1a, 64-bit.
pub(crate) fn fnv1a(bytes: impl IntoIterator<Item = u8>) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x100_0000_01b3;

    bytes.into_iter().fold(OFFSET_BASIS, |state, byte| {
        (state ^ u64::from(byte)).wrapping_mul(PRIME)
    })
}
