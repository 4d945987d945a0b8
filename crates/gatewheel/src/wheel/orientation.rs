//! Orientation model: compass progression, north alignment and turn sense.
//!
//! # Angle convention
//!
//! All angles produced by this crate are plain degrees in `[0, 360)` that
//! increase with the wheel index. Whether an increasing angle reads as
//! "clockwise" depends on who is asking:
//!
//! - [`RotationSense::Mathematical`]: increasing angle is counter-clockwise,
//!   always. This is the sense of the numbers themselves.
//! - [`RotationSense::ClockFace`]: the turn seen on a physical dial with
//!   north at the top. It is decided by the [`CardinalProgression`]: passing
//!   N→E→S→W as the angle grows is clockwise on a dial, N→W→S→E is
//!   counter-clockwise.
//!
//! Call sites that talk about direction must say which sense they mean;
//! [`WheelConfiguration::turn`](super::WheelConfiguration::turn) takes the
//! sense as an argument and [`convert_angle`] mirrors an angle between the
//! two.

use core::fmt;
use core::str::FromStr;

use crate::error::ConfigurationError;

/// A compass direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cardinal {
    /// North.
    North,
    /// East.
    East,
    /// South.
    South,
    /// West.
    West,
}

impl Cardinal {
    /// Single-letter abbreviation.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }
}

/// Direction of travel around the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    /// Clockwise.
    Clockwise,
    /// Counter-clockwise.
    CounterClockwise,
}

/// The sense in which a caller uses "clockwise".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotationSense {
    /// Increasing angle values; counter-clockwise by definition.
    Mathematical,
    /// Appearance on a dial with north at the top.
    ClockFace,
}

/// How increasing visual angle maps onto compass directions.
///
/// The token lists the direction found at 0°, 90°, 180° and 270°.
///
/// # Example
///
/// ```
/// use gatewheel::{CardinalProgression, Cardinal};
///
/// let p: CardinalProgression = "ESWN".parse().unwrap();
/// assert_eq!(p.angle_of(Cardinal::North), 270.0);
/// assert!("NNNN".parse::<CardinalProgression>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum CardinalProgression {
    /// N, E, S, W.
    #[default]
    Nesw,
    /// E, S, W, N.
    Eswn,
    /// S, W, N, E.
    Swne,
    /// W, N, E, S.
    Wnes,
    /// N, W, S, E.
    Nwse,
    /// W, S, E, N.
    Wsen,
    /// S, E, N, W.
    Senw,
    /// E, N, W, S.
    Enws,
}

impl CardinalProgression {
    /// All eight progressions.
    pub const ALL: [Self; 8] = [
        Self::Nesw,
        Self::Eswn,
        Self::Swne,
        Self::Wnes,
        Self::Nwse,
        Self::Wsen,
        Self::Senw,
        Self::Enws,
    ];

    /// Directions at 0°, 90°, 180°, 270°.
    #[must_use]
    pub const fn directions(self) -> [Cardinal; 4] {
        use Cardinal::{East as E, North as N, South as S, West as W};
        match self {
            Self::Nesw => [N, E, S, W],
            Self::Eswn => [E, S, W, N],
            Self::Swne => [S, W, N, E],
            Self::Wnes => [W, N, E, S],
            Self::Nwse => [N, W, S, E],
            Self::Wsen => [W, S, E, N],
            Self::Senw => [S, E, N, W],
            Self::Enws => [E, N, W, S],
        }
    }

    /// The 4-letter token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Nesw => "NESW",
            Self::Eswn => "ESWN",
            Self::Swne => "SWNE",
            Self::Wnes => "WNES",
            Self::Nwse => "NWSE",
            Self::Wsen => "WSEN",
            Self::Senw => "SENW",
            Self::Enws => "ENWS",
        }
    }

    /// Visual angle at which `direction` lies.
    #[must_use]
    pub fn angle_of(self, direction: Cardinal) -> f64 {
        let quadrant = self
            .directions()
            .iter()
            .position(|d| *d == direction)
            .unwrap_or(0);
        90.0 * quadrant as f64
    }

    /// Turn seen on a north-up dial as the angle increases.
    #[must_use]
    pub const fn clock_face_turn(self) -> Turn {
        match self {
            Self::Nesw | Self::Eswn | Self::Swne | Self::Wnes => Turn::Clockwise,
            Self::Nwse | Self::Wsen | Self::Senw | Self::Enws => Turn::CounterClockwise,
        }
    }

    /// Nearest cardinal direction to a visual angle.
    #[must_use]
    pub fn compass(self, visual_angle: f64) -> Cardinal {
        let quadrant = ((visual_angle.rem_euclid(360.0) + 45.0) / 90.0).floor() as usize % 4;
        self.directions()[quadrant]
    }
}

impl fmt::Display for CardinalProgression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for CardinalProgression {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.token().eq_ignore_ascii_case(token))
            .ok_or_else(|| ConfigurationError::UnknownCardinalProgression(s.to_owned()))
    }
}

impl TryFrom<String> for CardinalProgression {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CardinalProgression> for String {
    fn from(value: CardinalProgression) -> Self {
        value.token().to_owned()
    }
}

/// Which part of the wheel is aligned to north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum NorthPosition {
    /// The start of this wheel index lies at north.
    Index(usize),
    /// The boundary between these two adjacent wheel indices lies at north.
    /// Adjacency wraps: `(63, 0)` is a valid straddle.
    Straddle(usize, usize),
}

impl NorthPosition {
    /// Wheel index whose leading edge is the north marker.
    ///
    /// For a straddle this is the later of the two indices in wheel order.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if an index is outside `0..slots`
    /// or a straddle's indices are not neighbours.
    pub fn marker_index(self, slots: usize) -> Result<usize, ConfigurationError> {
        match self {
            Self::Index(i) if i < slots => Ok(i),
            Self::Index(i) => Err(ConfigurationError::NorthIndexOutOfRange(i)),
            Self::Straddle(a, b) => {
                for i in [a, b] {
                    if i >= slots {
                        return Err(ConfigurationError::NorthIndexOutOfRange(i));
                    }
                }
                if (a + 1) % slots == b {
                    Ok(b)
                } else if (b + 1) % slots == a {
                    Ok(a)
                } else {
                    Err(ConfigurationError::NonAdjacentStraddle(a, b))
                }
            }
        }
    }
}

/// Mirrors an angle measured in one rotation sense into the other.
///
/// Angles in the same sense are returned normalised but otherwise
/// unchanged.
///
/// ```
/// use gatewheel::{convert_angle, RotationSense};
///
/// let a = convert_angle(90.0, RotationSense::Mathematical, RotationSense::ClockFace);
/// assert_eq!(a, 270.0);
/// ```
#[must_use]
pub fn convert_angle(angle: f64, from: RotationSense, to: RotationSense) -> f64 {
    let angle = super::normalize_degrees(angle);
    if from == to {
        angle
    } else {
        (360.0 - angle).rem_euclid(360.0)
    }
}
