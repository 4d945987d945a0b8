//! Gate, line and binary value types.
//!
//! `Gate` and `Line` are range-checked newtypes: once constructed they are
//! always valid, so everything downstream is infallible with respect to
//! range. `Binary` is the 6-bit identity of a gate.

use core::fmt;

use gatewheel_spec::{Polarity, GATE_COUNT, LINES_PER_GATE};

use crate::error::{DockingError, Result};

/// One of the 64 gates.
///
/// # Example
///
/// ```
/// use gatewheel::Gate;
///
/// let g = Gate::new(41).unwrap();
/// assert_eq!(g.number(), 41);
/// assert!(Gate::new(0).is_err());
/// assert!(Gate::new(65).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
#[repr(transparent)]
pub struct Gate(u8);

impl Gate {
    /// Gate 1.
    pub const MIN: Self = Self(1);

    /// Gate 64.
    pub const MAX: Self = Self(GATE_COUNT as u8);

    /// Creates a gate from its number.
    ///
    /// # Errors
    ///
    /// Returns [`DockingError::InvalidGate`] if `number` is outside `1..=64`.
    pub fn new(number: i64) -> Result<Self> {
        if (1..=GATE_COUNT as i64).contains(&number) {
            Ok(Self(number as u8))
        } else {
            Err(DockingError::InvalidGate(number))
        }
    }

    /// Returns the gate number (1..=64).
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Zero-based slot used by internal tables.
    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self.0 as usize - 1
    }

    /// Iterates gates 1 through 64.
    pub fn all() -> impl Iterator<Item = Gate> {
        (1..=GATE_COUNT as u8).map(Gate)
    }
}

impl TryFrom<i64> for Gate {
    type Error = DockingError;

    fn try_from(number: i64) -> Result<Self> {
        Self::new(number)
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the six lines of a gate, 1 (bottom) to 6 (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
#[repr(transparent)]
pub struct Line(u8);

impl Line {
    /// All six lines, bottom to top.
    pub const ALL: [Self; LINES_PER_GATE] =
        [Self(1), Self(2), Self(3), Self(4), Self(5), Self(6)];

    /// Creates a line from its number.
    ///
    /// # Errors
    ///
    /// Returns [`DockingError::InvalidLine`] if `number` is outside `1..=6`.
    pub fn new(number: i64) -> Result<Self> {
        if (1..=LINES_PER_GATE as i64).contains(&number) {
            Ok(Self(number as u8))
        } else {
            Err(DockingError::InvalidLine(number))
        }
    }

    /// Returns the line number (1..=6).
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Bit index of this line within a binary (0..=5).
    #[inline]
    #[must_use]
    pub const fn bit_index(self) -> usize {
        self.0 as usize - 1
    }
}

impl TryFrom<i64> for Line {
    type Error = DockingError;

    fn try_from(number: i64) -> Result<Self> {
        Self::new(number)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The 6-bit identity of a gate.
///
/// Stored so that bit `i` of the inner byte is character `i` of the
/// string form; character 0 is line 1.
///
/// # Example
///
/// ```
/// use gatewheel::Binary;
///
/// let b = Binary::parse("100010").unwrap();
/// assert_eq!(b.to_string(), "100010");
/// assert_eq!(b.complement().to_string(), "011101");
/// assert_eq!(b.group(0, 3), 0b100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Binary(u8);

impl Binary {
    const MASK: u8 = (1 << LINES_PER_GATE) - 1;

    /// Parses a 6-character string over `{0, 1}`.
    ///
    /// # Errors
    ///
    /// Returns [`DockingError::DataIntegrity`] if the string has the wrong
    /// length or contains any other character.
    pub fn parse(text: &str) -> Result<Self> {
        if text.len() != LINES_PER_GATE {
            return Err(DockingError::DataIntegrity(format!(
                "binary {text:?} has length {}, expected {LINES_PER_GATE}",
                text.len()
            )));
        }
        let mut bits = 0u8;
        for (i, c) in text.chars().enumerate() {
            match c {
                '1' => bits |= 1 << i,
                '0' => {}
                other => {
                    return Err(DockingError::DataIntegrity(format!(
                        "binary {text:?} contains {other:?} at index {i}"
                    )))
                }
            }
        }
        Ok(Self(bits))
    }

    #[inline]
    pub(crate) const fn from_raw(raw: u8) -> Self {
        Self(raw & Self::MASK)
    }

    /// Raw 6-bit value (character `i` in bit `i`), used as a table index.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Returns character `index` of the string form as a bool.
    #[inline]
    #[must_use]
    pub const fn bit(self, index: usize) -> bool {
        self.0 & (1 << index) != 0
    }

    /// Reads `len` characters starting at `start` as a binary numeral,
    /// first character most significant: `"100"` reads as 4.
    #[must_use]
    pub fn group(self, start: usize, len: usize) -> usize {
        (start..start + len).fold(0, |acc, i| (acc << 1) | usize::from(self.bit(i)))
    }

    /// Bitwise complement over the six lines.
    #[inline]
    #[must_use]
    pub const fn complement(self) -> Self {
        Self(!self.0 & Self::MASK)
    }

    /// Polarity of one line.
    #[must_use]
    pub const fn polarity(self, line: Line) -> Polarity {
        if self.bit(line.bit_index()) {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..LINES_PER_GATE {
            f.write_str(if self.bit(i) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Binary {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_range() {
        assert_eq!(Gate::new(1).map(Gate::number), Ok(1));
        assert_eq!(Gate::new(64).map(Gate::number), Ok(64));
        assert_eq!(Gate::new(0), Err(DockingError::InvalidGate(0)));
        assert_eq!(Gate::new(-3), Err(DockingError::InvalidGate(-3)));
        assert_eq!(Gate::all().count(), 64);
    }

    #[test]
    fn line_range() {
        assert_eq!(Line::new(6).map(Line::number), Ok(6));
        assert_eq!(Line::new(7), Err(DockingError::InvalidLine(7)));
        assert_eq!(Line::ALL[0].bit_index(), 0);
    }

    #[test]
    fn binary_round_trip_string() {
        for text in ["000000", "111111", "100010", "010101"] {
            assert_eq!(Binary::parse(text).map(|b| b.to_string()).as_deref(), Ok(text));
        }
    }

    #[test]
    fn binary_rejects_malformed() {
        assert!(Binary::parse("10101").is_err());
        assert!(Binary::parse("1010101").is_err());
        assert!(Binary::parse("10a010").is_err());
    }

    #[test]
    fn polarity_follows_line_bit() {
        let b = Binary::parse("100000").unwrap();
        assert_eq!(b.polarity(Line::ALL[0]), Polarity::Yang);
        assert_eq!(b.polarity(Line::ALL[5]), Polarity::Yin);
    }

    #[test]
    fn group_reads_first_char_most_significant() {
        let b = Binary::parse("011100").unwrap();
        assert_eq!(b.group(0, 2), 0b01);
        assert_eq!(b.group(0, 3), 0b011);
        assert_eq!(b.group(3, 3), 0b100);
    }
}
