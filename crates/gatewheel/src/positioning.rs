//! Positioning algorithm.
//!
//! Pure derivations from a gate's binary and the wheel configuration. The
//! symbol maps are read from `gatewheel_spec::tables::symbols`; this module
//! only decides which bits feed which table:
//!
//! | Derivation | Bits | Table |
//! |------------|------|-------|
//! | quarter | 0-1 | `QUARTER_BY_PAIR` |
//! | face | 0-1, 2-3 | `BASE_BY_PAIR` ×2 → `FACE_NAMES` |
//! | lower trigram | 0-2 (lines 1-3) | `TRIGRAM_BY_PATTERN` |
//! | upper trigram | 3-5 (lines 4-6) | `TRIGRAM_BY_PATTERN` |
//! | codon | 0-1, 2-3, 4-5 | `BASE_BY_PAIR` ×3 |
//! | opposite | complement of all 6 | reverse identity lookup |

use core::fmt;

use gatewheel_spec::tables::symbols::{BASE_BY_PAIR, QUARTER_BY_PAIR, TRIGRAM_BY_PATTERN};
use gatewheel_spec::{Base, Face, Polarity, Quarter, Trigram, TrigramPosition};

use crate::docking::DockingData;
use crate::error::Result;
use crate::gate::{Binary, Gate, Line};
use crate::identity::IdentityTable;
use crate::wheel::{WheelAngle, WheelConfiguration};

/// Lower and upper trigram of a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrigramPair {
    /// Lines 1-3.
    pub lower: Trigram,
    /// Lines 4-6.
    pub upper: Trigram,
}

impl TrigramPair {
    /// Trigram at one position.
    #[must_use]
    pub const fn at(self, position: TrigramPosition) -> Trigram {
        match position {
            TrigramPosition::Lower => self.lower,
            TrigramPosition::Upper => self.upper,
        }
    }
}

/// Three-letter codon derived from the three 2-bit groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codon(pub [Base; 3]);

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in self.0 {
            write!(f, "{base}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Codon {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Letter of the 2-bit group starting at `start`.
#[inline]
fn base_at(binary: Binary, start: usize) -> Base {
    BASE_BY_PAIR[binary.group(start, 2)]
}

/// Quarter from bits 0-1.
#[must_use]
pub fn quarter_of(binary: Binary) -> Quarter {
    QUARTER_BY_PAIR[binary.group(0, 2)]
}

/// Face from bits 0-3.
#[must_use]
pub fn face_of(binary: Binary) -> Face {
    Face::new(base_at(binary, 0), base_at(binary, 2))
}

/// Trigram pair: lower from lines 1-3, upper from lines 4-6.
#[must_use]
pub fn trigrams_of(binary: Binary) -> TrigramPair {
    TrigramPair {
        lower: TRIGRAM_BY_PATTERN[binary.group(0, 3)],
        upper: TRIGRAM_BY_PATTERN[binary.group(3, 3)],
    }
}

/// Codon from all three 2-bit groups, in order.
#[must_use]
pub fn codon_of(binary: Binary) -> Codon {
    Codon([base_at(binary, 0), base_at(binary, 2), base_at(binary, 4)])
}

/// Derivation front end over an identity table and one wheel configuration.
///
/// Holds borrows only; any number of `Positioning` values may share the
/// same tables across threads.
///
/// # Example
///
/// ```
/// use gatewheel::{IdentityTable, Positioning, WheelConfiguration, WheelOptions};
///
/// let identity = IdentityTable::canonical().unwrap();
/// let wheel = WheelConfiguration::new(WheelOptions::default()).unwrap();
/// let positioning = Positioning::new(identity, &wheel);
///
/// let data = positioning.lookup(1, 1).unwrap();
/// assert_eq!(data.binary.to_string(), "111111");
/// assert_eq!(data.codon.to_string(), "AAA");
/// assert_eq!(data.opposite_gate.number(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Positioning<'a> {
    identity: &'a IdentityTable,
    wheel: &'a WheelConfiguration,
}

impl<'a> Positioning<'a> {
    /// Binds the two input tables.
    #[must_use]
    pub fn new(identity: &'a IdentityTable, wheel: &'a WheelConfiguration) -> Self {
        Self { identity, wheel }
    }

    /// The identity table in use.
    #[must_use]
    pub fn identity(&self) -> &'a IdentityTable {
        self.identity
    }

    /// The wheel configuration in use.
    #[must_use]
    pub fn wheel(&self) -> &'a WheelConfiguration {
        self.wheel
    }

    /// Binary of a gate.
    #[must_use]
    pub fn binary(&self, gate: Gate) -> Binary {
        self.identity.binary(gate)
    }

    /// Quarter of a gate.
    #[must_use]
    pub fn quarter(&self, gate: Gate) -> Quarter {
        quarter_of(self.binary(gate))
    }

    /// Face of a gate.
    #[must_use]
    pub fn face(&self, gate: Gate) -> Face {
        face_of(self.binary(gate))
    }

    /// Trigram pair of a gate.
    #[must_use]
    pub fn trigrams(&self, gate: Gate) -> TrigramPair {
        trigrams_of(self.binary(gate))
    }

    /// Codon of a gate.
    #[must_use]
    pub fn codon(&self, gate: Gate) -> Codon {
        codon_of(self.binary(gate))
    }

    /// Polarity of one line.
    #[must_use]
    pub fn polarity(&self, gate: Gate, line: Line) -> Polarity {
        self.binary(gate).polarity(line)
    }

    /// Gate whose binary is the complement of this gate's binary.
    ///
    /// # Errors
    ///
    /// Returns [`DockingError::DataIntegrity`](crate::DockingError::DataIntegrity)
    /// if no gate owns the complement.
    pub fn opposite_gate(&self, gate: Gate) -> Result<Gate> {
        self.identity.gate_for(self.binary(gate).complement())
    }

    /// Wheel index of a gate.
    #[must_use]
    pub fn wheel_index(&self, gate: Gate) -> usize {
        self.wheel.wheel_index(gate)
    }

    /// Angles of a gate line.
    #[must_use]
    pub fn angle(&self, gate: Gate, line: Line) -> WheelAngle {
        self.wheel.angle(gate, line)
    }

    /// Every derived coordinate of a gate line.
    ///
    /// # Errors
    ///
    /// Returns [`DockingError::DataIntegrity`](crate::DockingError::DataIntegrity)
    /// if the opposite-gate lookup fails.
    pub fn docking_data(&self, gate: Gate, line: Line) -> Result<DockingData> {
        let binary = self.binary(gate);
        let angle = self.angle(gate, line);
        Ok(DockingData {
            gate,
            line,
            binary,
            codon: codon_of(binary),
            wheel_index: self.wheel_index(gate),
            line_position: self.wheel.line_position(gate, line),
            base_angle: angle.base,
            visual_angle: angle.visual,
            quarter: quarter_of(binary),
            face: face_of(binary),
            trigrams: trigrams_of(binary),
            opposite_gate: self.opposite_gate(gate)?,
            polarity: binary.polarity(line),
        })
    }

    /// [`docking_data`](Self::docking_data) for raw numbers.
    ///
    /// # Errors
    ///
    /// Returns [`DockingError::InvalidGate`](crate::DockingError::InvalidGate)
    /// or [`DockingError::InvalidLine`](crate::DockingError::InvalidLine) for
    /// out-of-range input, plus anything `docking_data` returns.
    pub fn lookup(&self, gate: i64, line: i64) -> Result<DockingData> {
        self.docking_data(Gate::new(gate)?, Line::new(line)?)
    }

    /// Gates in a quarter, in gate order.
    #[must_use]
    pub fn gates_in_quarter(&self, quarter: Quarter) -> Vec<Gate> {
        self.gates_where(|b| quarter_of(b) == quarter)
    }

    /// Gates with a face, in gate order.
    #[must_use]
    pub fn gates_with_face(&self, face: Face) -> Vec<Gate> {
        self.gates_where(|b| face_of(b) == face)
    }

    /// Gates carrying `trigram` at `position`, in gate order.
    #[must_use]
    pub fn gates_with_trigram(&self, position: TrigramPosition, trigram: Trigram) -> Vec<Gate> {
        self.gates_where(|b| trigrams_of(b).at(position) == trigram)
    }

    fn gates_where(&self, keep: impl Fn(Binary) -> bool) -> Vec<Gate> {
        self.identity
            .iter()
            .filter(|(_, binary)| keep(*binary))
            .map(|(gate, _)| gate)
            .collect()
    }
}
