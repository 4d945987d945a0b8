//! Wheel sequencing and rotation.
//!
//! A [`WheelSequence`] places the 64 gates around the circle; a
//! [`WheelConfiguration`] adds the orientation model (rotation offset,
//! cardinal progression, north alignment). Several configurations can live
//! side by side in one process: each is an owned, read-only value.
//!
//! # Angle formulas
//!
//! ```text
//! wheel_index   = index of gate in sequence            (0..63)
//! line_position = wheel_index × 6 + (line − 1)         (0..383)
//! base_angle    = line_position × 360/384
//! visual_angle  = (base_angle + rotation_offset) mod 360
//! ```

mod orientation;

pub use orientation::{
    convert_angle, Cardinal, CardinalProgression, NorthPosition, RotationSense, Turn,
};

use gatewheel_spec::{
    RootTables, DEGREES_PER_GATE, DEGREES_PER_LINE, GATE_COUNT, LINES_PER_GATE,
};

use crate::error::{ConfigurationError, Result};
use crate::gate::{Gate, Line};

/// Tolerance when comparing an explicit offset with the north alignment.
const OFFSET_TOLERANCE: f64 = 1e-9;

/// A verified permutation of the 64 gates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WheelSequence {
    gates: [Gate; GATE_COUNT],
    index_of: [u8; GATE_COUNT],
}

impl WheelSequence {
    /// Builds a sequence from gate numbers in wheel order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] (wrapped in
    /// [`DockingError::Configuration`](crate::DockingError::Configuration))
    /// unless `gates` is a permutation of `1..=64`.
    pub fn new(gates: &[i64]) -> Result<Self> {
        if gates.len() != GATE_COUNT {
            return Err(ConfigurationError::SequenceLength(gates.len()).into());
        }

        let mut placed = [Gate::MIN; GATE_COUNT];
        let mut index_of = [u8::MAX; GATE_COUNT];
        for (index, &value) in gates.iter().enumerate() {
            let gate = Gate::new(value)
                .map_err(|_| ConfigurationError::SequenceGateOutOfRange { index, value })?;
            let slot = &mut index_of[gate.slot()];
            if *slot != u8::MAX {
                return Err(ConfigurationError::DuplicateGate {
                    gate: gate.number(),
                    first: usize::from(*slot),
                    second: index,
                }
                .into());
            }
            *slot = index as u8;
            placed[index] = gate;
        }

        // Length 64 with no duplicates already implies no gaps; kept as a
        // direct check so the error names the gate.
        if let Some(missing) = index_of.iter().position(|i| *i == u8::MAX) {
            return Err(ConfigurationError::MissingGate(missing as u8 + 1).into());
        }

        Ok(Self {
            gates: placed,
            index_of,
        })
    }

    /// The default sequence from the root tables.
    ///
    /// # Errors
    ///
    /// Returns a configuration error only if the compiled-in table is not a
    /// permutation.
    pub fn canonical() -> Result<Self> {
        let gates: Vec<i64> = RootTables::canonical()
            .wheel_sequence
            .iter()
            .map(|g| i64::from(*g))
            .collect();
        Self::new(&gates)
    }

    /// Wheel index (0..=63) of a gate.
    #[inline]
    #[must_use]
    pub fn index_of(&self, gate: Gate) -> usize {
        usize::from(self.index_of[gate.slot()])
    }

    /// Gate at a wheel index, or `None` past 63.
    #[must_use]
    pub fn gate_at(&self, index: usize) -> Option<Gate> {
        self.gates.get(index).copied()
    }

    /// Gates in wheel order.
    #[must_use]
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }
}

/// Angles of one line position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WheelAngle {
    /// `line_position × 360/384`, before rotation.
    pub base: f64,
    /// `(base + rotation_offset) mod 360`.
    pub visual: f64,
}

/// Construction-time options for a [`WheelConfiguration`].
///
/// Leaving `rotation_offset` and `north_position` both unset selects the
/// documented default: offset `0.0`, north at [`NorthPosition::Index(0)`]
/// (gate 41, line 1 at 0°). Setting only one derives the other; setting
/// both requires them to agree.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct WheelOptions {
    /// How increasing angle maps to compass direction.
    pub cardinal_progression: CardinalProgression,
    /// Degrees added to every base angle.
    pub rotation_offset: Option<f64>,
    /// Part of the wheel aligned to north.
    pub north_position: Option<NorthPosition>,
    /// Full permutation replacing the default sequence.
    pub custom_sequence: Option<Vec<i64>>,
}

/// Stable fingerprint of a configuration, for cache keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct ConfigId(pub u64);

impl core::fmt::Display for ConfigId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Wheel sequence plus orientation model.
///
/// # Example
///
/// ```
/// use gatewheel::{Gate, Line, WheelConfiguration, WheelOptions};
///
/// let wheel = WheelConfiguration::new(WheelOptions::default()).unwrap();
/// let gate = Gate::new(41).unwrap();
/// assert_eq!(wheel.wheel_index(gate), 0);
/// let angle = wheel.angle(gate, Line::ALL[1]);
/// assert_eq!(angle.base, 0.9375);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WheelConfiguration {
    sequence: WheelSequence,
    rotation_offset: f64,
    cardinal_progression: CardinalProgression,
    north_position: Option<NorthPosition>,
    id: ConfigId,
}

impl WheelConfiguration {
    /// Validates options and builds a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DockingError::Configuration`](crate::DockingError::Configuration)
    /// for a custom sequence that is not a permutation of `1..=64`, a north
    /// position out of range or not adjacent, a non-finite offset, or an
    /// explicit offset that disagrees with the north alignment.
    pub fn new(options: WheelOptions) -> Result<Self> {
        let sequence = match &options.custom_sequence {
            Some(gates) => WheelSequence::new(gates)?,
            None => WheelSequence::canonical()?,
        };
        let progression = options.cardinal_progression;

        if let Some(offset) = options.rotation_offset {
            if !offset.is_finite() {
                return Err(ConfigurationError::NonFiniteOffset(offset).into());
            }
        }

        let north = match (options.rotation_offset, options.north_position) {
            (None, None) => Some(NorthPosition::Index(0)),
            (_, north) => north,
        };

        let rotation_offset = match (options.rotation_offset, north) {
            (given, Some(north)) => {
                let required = alignment_offset(north, progression)?;
                if let Some(given) = given {
                    if angular_distance(given, required) > OFFSET_TOLERANCE {
                        return Err(ConfigurationError::InconsistentNorth { given, required }.into());
                    }
                }
                required
            }
            (Some(given), None) => normalize_degrees(given),
            (None, None) => 0.0,
        };

        let id = fingerprint(&sequence, rotation_offset, progression, north);
        tracing::debug!(
            config = %id,
            rotation_offset,
            progression = %progression,
            custom_sequence = options.custom_sequence.is_some(),
            "wheel configuration built"
        );

        Ok(Self {
            sequence,
            rotation_offset,
            cardinal_progression: progression,
            north_position: north,
            id,
        })
    }

    /// The gate ordering.
    #[must_use]
    pub fn sequence(&self) -> &WheelSequence {
        &self.sequence
    }

    /// Resolved rotation offset in `[0, 360)`.
    #[must_use]
    pub fn rotation_offset(&self) -> f64 {
        self.rotation_offset
    }

    /// Compass progression.
    #[must_use]
    pub fn cardinal_progression(&self) -> CardinalProgression {
        self.cardinal_progression
    }

    /// North alignment, if one was given or defaulted.
    #[must_use]
    pub fn north_position(&self) -> Option<NorthPosition> {
        self.north_position
    }

    /// Fingerprint of this configuration.
    #[must_use]
    pub fn config_id(&self) -> ConfigId {
        self.id
    }

    /// Wheel index (0..=63) of a gate.
    #[inline]
    #[must_use]
    pub fn wheel_index(&self, gate: Gate) -> usize {
        self.sequence.index_of(gate)
    }

    /// Line position (0..=383) of a gate line.
    #[inline]
    #[must_use]
    pub fn line_position(&self, gate: Gate, line: Line) -> usize {
        self.wheel_index(gate) * LINES_PER_GATE + line.bit_index()
    }

    /// Base and visual angle of a gate line.
    #[must_use]
    pub fn angle(&self, gate: Gate, line: Line) -> WheelAngle {
        self.angle_at(self.line_position(gate, line))
    }

    /// Base and visual angle of a raw line position.
    #[must_use]
    pub fn angle_at(&self, line_position: usize) -> WheelAngle {
        let base = line_position as f64 * DEGREES_PER_LINE;
        WheelAngle {
            base,
            visual: (base + self.rotation_offset).rem_euclid(360.0),
        }
    }

    /// Direction of increasing angle, in the stated sense.
    ///
    /// In [`RotationSense::Mathematical`] this is always
    /// [`Turn::CounterClockwise`]. In [`RotationSense::ClockFace`] it
    /// follows the cardinal progression.
    #[must_use]
    pub fn turn(&self, sense: RotationSense) -> Turn {
        match sense {
            RotationSense::Mathematical => Turn::CounterClockwise,
            RotationSense::ClockFace => self.cardinal_progression.clock_face_turn(),
        }
    }

    /// Nearest cardinal direction to a visual angle.
    #[must_use]
    pub fn compass(&self, visual_angle: f64) -> Cardinal {
        self.cardinal_progression.compass(visual_angle)
    }

    /// Options that rebuild this configuration.
    #[must_use]
    pub fn options(&self) -> WheelOptions {
        let canonical = WheelSequence::canonical().ok();
        let custom_sequence = (canonical.as_ref() != Some(&self.sequence)).then(|| {
            self.sequence
                .gates()
                .iter()
                .map(|g| i64::from(g.number()))
                .collect()
        });
        WheelOptions {
            cardinal_progression: self.cardinal_progression,
            rotation_offset: Some(self.rotation_offset),
            north_position: self.north_position,
            custom_sequence,
        }
    }
}

/// Offset that puts the north marker on the progression's north angle.
fn alignment_offset(
    north: NorthPosition,
    progression: CardinalProgression,
) -> core::result::Result<f64, ConfigurationError> {
    let marker = north.marker_index(GATE_COUNT)? as f64 * DEGREES_PER_GATE;
    Ok(normalize_degrees(progression.angle_of(Cardinal::North) - marker))
}

// `rem_euclid` rounds tiny negative inputs up to exactly 360.0.
fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

fn angular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

// Fingerprint over every field that influences a derived value.
fn fingerprint(
    sequence: &WheelSequence,
    rotation_offset: f64,
    progression: CardinalProgression,
    north: Option<NorthPosition>,
) -> ConfigId {
    let north_bytes: [u8; 3] = match north {
        None => [0, 0, 0],
        Some(NorthPosition::Index(i)) => [1, i as u8, 0],
        Some(NorthPosition::Straddle(a, b)) => [2, a as u8, b as u8],
    };

    let bytes = sequence
        .gates()
        .iter()
        .map(|g| g.number())
        .chain(rotation_offset.to_bits().to_le_bytes())
        .chain(progression.token().bytes())
        .chain(north_bytes);

    ConfigId(crate::fnv1a(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DockingError;

    fn canonical_numbers() -> Vec<i64> {
        RootTables::canonical()
            .wheel_sequence
            .iter()
            .map(|g| i64::from(*g))
            .collect()
    }

    fn gate(n: i64) -> Gate {
        Gate::new(n).unwrap()
    }

    #[test]
    fn canonical_sequence_indices() {
        let seq = WheelSequence::canonical().unwrap();
        assert_eq!(seq.index_of(gate(41)), 0);
        assert_eq!(seq.index_of(gate(60)), 63);
        assert_eq!(seq.gate_at(50), Some(gate(1)));
        assert_eq!(seq.gate_at(64), None);
    }

    #[test]
    fn sequence_rejects_duplicate() {
        let mut gates = canonical_numbers();
        gates[10] = gates[0];
        assert_eq!(
            WheelSequence::new(&gates),
            Err(DockingError::Configuration(ConfigurationError::DuplicateGate {
                gate: 41,
                first: 0,
                second: 10
            }))
        );
    }

    #[test]
    fn sequence_rejects_short_and_out_of_range() {
        let gates = canonical_numbers();
        assert_eq!(
            WheelSequence::new(&gates[..63]),
            Err(ConfigurationError::SequenceLength(63).into())
        );
        let mut bad = gates.clone();
        bad[3] = 65;
        assert_eq!(
            WheelSequence::new(&bad),
            Err(ConfigurationError::SequenceGateOutOfRange { index: 3, value: 65 }.into())
        );
    }

    #[test]
    fn default_configuration() {
        let wheel = WheelConfiguration::new(WheelOptions::default()).unwrap();
        assert_eq!(wheel.rotation_offset(), 0.0);
        assert_eq!(wheel.north_position(), Some(NorthPosition::Index(0)));
        assert_eq!(wheel.cardinal_progression(), CardinalProgression::Nesw);
    }

    #[test]
    fn line_position_and_angles() {
        let wheel = WheelConfiguration::new(WheelOptions::default()).unwrap();
        let g = gate(1);
        let idx = wheel.wheel_index(g);
        assert_eq!(idx, 50);
        for line in Line::ALL {
            let pos = wheel.line_position(g, line);
            assert_eq!(pos, idx * 6 + line.bit_index());
            let angle = wheel.angle(g, line);
            assert_eq!(angle.base, pos as f64 * 0.9375);
            assert_eq!(angle.visual, angle.base);
        }
    }

    #[test]
    fn explicit_offset_wraps() {
        let wheel = WheelConfiguration::new(WheelOptions {
            rotation_offset: Some(358.0),
            ..WheelOptions::default()
        })
        .unwrap();
        assert_eq!(wheel.north_position(), None);
        let angle = wheel.angle(gate(19), Line::ALL[0]);
        assert_eq!(angle.base, 5.625);
        assert_eq!(angle.visual, 3.625);
        let angle = wheel.angle(gate(41), Line::ALL[0]);
        assert_eq!(angle.visual, 358.0);
    }

    #[test]
    fn tiny_negative_offset_stays_below_full_turn() {
        for offset in [-1e-14, -0.0, -360.0, 720.0] {
            let wheel = WheelConfiguration::new(WheelOptions {
                rotation_offset: Some(offset),
                ..WheelOptions::default()
            })
            .unwrap();
            let r = wheel.rotation_offset();
            assert!((0.0..360.0).contains(&r), "offset {offset} became {r}");
            assert!(wheel.angle(gate(41), Line::ALL[0]).visual < 360.0);
        }
    }

    #[test]
    fn north_straddle_derives_offset() {
        let wheel = WheelConfiguration::new(WheelOptions {
            north_position: Some(NorthPosition::Straddle(31, 32)),
            ..WheelOptions::default()
        })
        .unwrap();
        // Boundary into index 32 sits at 0°.
        assert_eq!(wheel.rotation_offset(), 180.0);
        let first_after = wheel.sequence().gate_at(32).unwrap();
        assert_eq!(wheel.angle(first_after, Line::ALL[0]).visual, 0.0);
    }

    #[test]
    fn north_follows_progression() {
        let wheel = WheelConfiguration::new(WheelOptions {
            cardinal_progression: CardinalProgression::Eswn,
            north_position: Some(NorthPosition::Index(0)),
            ..WheelOptions::default()
        })
        .unwrap();
        assert_eq!(wheel.rotation_offset(), 270.0);
        assert_eq!(
            wheel.compass(wheel.angle(gate(41), Line::ALL[0]).visual),
            Cardinal::North
        );
    }

    #[test]
    fn inconsistent_offset_rejected() {
        let err = WheelConfiguration::new(WheelOptions {
            rotation_offset: Some(10.0),
            north_position: Some(NorthPosition::Index(0)),
            ..WheelOptions::default()
        })
        .unwrap_err();
        assert_eq!(
            err,
            DockingError::Configuration(ConfigurationError::InconsistentNorth {
                given: 10.0,
                required: 0.0
            })
        );
    }

    #[test]
    fn consistent_offset_accepted() {
        let wheel = WheelConfiguration::new(WheelOptions {
            rotation_offset: Some(-180.0),
            north_position: Some(NorthPosition::Index(32)),
            ..WheelOptions::default()
        })
        .unwrap();
        assert_eq!(wheel.rotation_offset(), 180.0);
    }

    #[test]
    fn non_adjacent_straddle_rejected() {
        let err = WheelConfiguration::new(WheelOptions {
            north_position: Some(NorthPosition::Straddle(3, 9)),
            ..WheelOptions::default()
        })
        .unwrap_err();
        assert_eq!(
            err,
            DockingError::Configuration(ConfigurationError::NonAdjacentStraddle(3, 9))
        );
    }

    #[test]
    fn non_finite_offset_rejected() {
        let err = WheelConfiguration::new(WheelOptions {
            rotation_offset: Some(f64::NAN),
            ..WheelOptions::default()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            DockingError::Configuration(ConfigurationError::NonFiniteOffset(_))
        ));
    }

    #[test]
    fn turn_requires_a_sense() {
        let wheel = WheelConfiguration::new(WheelOptions::default()).unwrap();
        assert_eq!(wheel.turn(RotationSense::Mathematical), Turn::CounterClockwise);
        assert_eq!(wheel.turn(RotationSense::ClockFace), Turn::Clockwise);
    }

    #[test]
    fn config_id_distinguishes_configurations() {
        let a = WheelConfiguration::new(WheelOptions::default()).unwrap();
        let b = WheelConfiguration::new(WheelOptions::default()).unwrap();
        let c = WheelConfiguration::new(WheelOptions {
            rotation_offset: Some(90.0),
            ..WheelOptions::default()
        })
        .unwrap();
        assert_eq!(a.config_id(), b.config_id());
        assert_ne!(a.config_id(), c.config_id());
    }

    #[test]
    fn options_rebuild_same_configuration() {
        let mut gates = canonical_numbers();
        gates.swap(0, 1);
        let wheel = WheelConfiguration::new(WheelOptions {
            custom_sequence: Some(gates),
            north_position: Some(NorthPosition::Straddle(63, 0)),
            ..WheelOptions::default()
        })
        .unwrap();
        let rebuilt = WheelConfiguration::new(wheel.options()).unwrap();
        assert_eq!(rebuilt, wheel);
    }
}
