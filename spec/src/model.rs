//! Symbol model types.
//!
//! These types name the fixed symbolic vocabulary that the positioning
//! algorithm derives from a gate's binary. Each type is a closed set; the
//! lookup tables that map bit patterns onto them live in
//! [`tables::symbols`](crate::tables::symbols) and nowhere else.

use core::fmt;

use crate::tables::symbols::FACE_NAMES;

/// Letter assigned to a 2-bit group of a binary.
///
/// `11 → A`, `00 → U`, `10 → C`, `01 → G`. The same map builds both the
/// two-letter face code and the three-letter codon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Base {
    /// Pair `11`.
    A,
    /// Pair `00`.
    U,
    /// Pair `10`.
    C,
    /// Pair `01`.
    G,
}

impl Base {
    /// All four letters in table order.
    pub const ALL: [Self; 4] = [Self::A, Self::U, Self::C, Self::G];

    /// Returns the single-character letter.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::U => 'U',
            Self::C => 'C',
            Self::G => 'G',
        }
    }

    /// Parses a single letter. Returns `None` for anything outside `AUCG`.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'A' => Some(Self::A),
            'U' => Some(Self::U),
            'C' => Some(Self::C),
            'G' => Some(Self::G),
            _ => None,
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One of the four quarters of the wheel, keyed by the first two bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quarter {
    /// Bits `11`.
    Mutation,
    /// Bits `10`.
    Initiation,
    /// Bits `01`.
    Duality,
    /// Bits `00`.
    Civilisation,
}

impl Quarter {
    /// All quarters.
    pub const ALL: [Self; 4] = [
        Self::Mutation,
        Self::Initiation,
        Self::Duality,
        Self::Civilisation,
    ];

    /// Returns the display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Initiation => "Initiation",
            Self::Duality => "Duality",
            Self::Civilisation => "Civilisation",
        }
    }

    /// Looks a quarter up by its display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.name() == name)
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the eight named 3-bit patterns.
///
/// The pattern string is read bottom line first: Thunder (`100`) has a
/// single yang line at the bottom, Mountain (`001`) a single yang line at
/// the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trigram {
    /// `111`, all yang.
    Heaven,
    /// `000`, all yin.
    Earth,
    /// `100`.
    Thunder,
    /// `010`.
    Water,
    /// `001`.
    Mountain,
    /// `011`.
    Wind,
    /// `101`.
    Fire,
    /// `110`.
    Lake,
}

impl Trigram {
    /// All trigrams.
    pub const ALL: [Self; 8] = [
        Self::Heaven,
        Self::Earth,
        Self::Thunder,
        Self::Water,
        Self::Mountain,
        Self::Wind,
        Self::Fire,
        Self::Lake,
    ];

    /// Returns the display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Heaven => "Heaven",
            Self::Earth => "Earth",
            Self::Thunder => "Thunder",
            Self::Water => "Water",
            Self::Mountain => "Mountain",
            Self::Wind => "Wind",
            Self::Fire => "Fire",
            Self::Lake => "Lake",
        }
    }

    /// Returns the 3-character pattern, bottom line first.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Heaven => "111",
            Self::Earth => "000",
            Self::Thunder => "100",
            Self::Water => "010",
            Self::Mountain => "001",
            Self::Wind => "011",
            Self::Fire => "101",
            Self::Lake => "110",
        }
    }

    /// Looks a trigram up by its display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which half of a gate a trigram occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrigramPosition {
    /// Lines 1-3.
    Lower,
    /// Lines 4-6.
    Upper,
}

/// Polarity of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum Polarity {
    /// Bit `1`.
    Yang,
    /// Bit `0`.
    Yin,
}

/// One of the sixteen faces, identified by its two-letter code.
///
/// The first letter comes from bits 0-1 (so it also fixes the quarter),
/// the second from bits 2-3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Face {
    outer: Base,
    inner: Base,
}

impl Face {
    /// Builds a face from its two code letters.
    #[must_use]
    pub const fn new(outer: Base, inner: Base) -> Self {
        Self { outer, inner }
    }

    /// First code letter (bits 0-1).
    #[must_use]
    pub const fn outer(self) -> Base {
        self.outer
    }

    /// Second code letter (bits 2-3).
    #[must_use]
    pub const fn inner(self) -> Base {
        self.inner
    }

    /// Two-letter code, e.g. `"AC"`.
    #[must_use]
    pub fn code(self) -> String {
        let mut code = String::with_capacity(2);
        code.push(self.outer.letter());
        code.push(self.inner.letter());
        code
    }

    /// Archetype name from the static face table.
    #[must_use]
    pub fn name(self) -> &'static str {
        FACE_NAMES
            .iter()
            .find(|(outer, inner, _)| *outer == self.outer && *inner == self.inner)
            .map_or("", |(_, _, name)| name)
    }

    /// All sixteen faces in table order.
    pub fn all() -> impl Iterator<Item = Face> {
        FACE_NAMES
            .iter()
            .map(|(outer, inner, _)| Face::new(*outer, *inner))
    }

    /// Looks a face up by its archetype name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        FACE_NAMES
            .iter()
            .find(|(_, _, n)| *n == name)
            .map(|(outer, inner, _)| Face::new(*outer, *inner))
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Face {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_letters_round_trip() {
        for base in Base::ALL {
            assert_eq!(Base::from_letter(base.letter()), Some(base));
        }
        assert_eq!(Base::from_letter('T'), None);
    }

    #[test]
    fn trigram_patterns_unique() {
        let mut seen = std::collections::HashSet::new();
        for t in Trigram::ALL {
            assert!(seen.insert(t.pattern()), "Duplicate pattern {}", t.pattern());
        }
    }

    #[test]
    fn sixteen_distinct_faces() {
        let faces: std::collections::HashSet<_> = Face::all().collect();
        assert_eq!(faces.len(), 16);
        let names: std::collections::HashSet<_> = Face::all().map(Face::name).collect();
        assert_eq!(names.len(), 16);
        assert!(!names.contains(""));
    }

    #[test]
    fn face_name_lookup() {
        let face = Face::new(Base::A, Base::A);
        assert_eq!(Face::from_name(face.name()), Some(face));
        assert_eq!(face.code(), "AA");
    }
}
