//! Fixed symbol tables.
//!
//! Every bit-pattern-to-symbol map used by the positioning algorithm is
//! declared here exactly once. Pair tables are indexed by the value of a
//! 2-character group read as a binary numeral (`"10"` → 2); the trigram
//! table by a 3-character group read the same way (`"100"` → 4).
//!
//! The trigram table is applied to bits 0-2 for the lower trigram and to
//! bits 3-5 for the upper trigram. Swapping the two halves still yields a
//! consistent-looking table, so the reference compositions in the
//! `gatewheel` tests pin the orientation.

use crate::model::{Base, Quarter, Trigram};

/// Quarter by the value of bits 0-1.
pub const QUARTER_BY_PAIR: [Quarter; 4] = [
    Quarter::Civilisation, // 00
    Quarter::Duality,      // 01
    Quarter::Initiation,   // 10
    Quarter::Mutation,     // 11
];

/// Letter by the value of a 2-bit group.
pub const BASE_BY_PAIR: [Base; 4] = [
    Base::U, // 00
    Base::G, // 01
    Base::C, // 10
    Base::A, // 11
];

/// Trigram by the value of a 3-bit group.
pub const TRIGRAM_BY_PATTERN: [Trigram; 8] = [
    Trigram::Earth,    // 000
    Trigram::Mountain, // 001
    Trigram::Water,    // 010
    Trigram::Wind,     // 011
    Trigram::Thunder,  // 100
    Trigram::Fire,     // 101
    Trigram::Lake,     // 110
    Trigram::Heaven,   // 111
];

/// Face archetype by two-letter code, grouped by quarter.
pub const FACE_NAMES: [(Base, Base, &str); 16] = [
    // Mutation
    (Base::A, Base::A, "Prometheus"),
    (Base::A, Base::C, "Vishnu"),
    (Base::A, Base::G, "Keepers of the Wheel"),
    (Base::A, Base::U, "Kali"),
    // Initiation
    (Base::C, Base::A, "Mitra"),
    (Base::C, Base::C, "Michael"),
    (Base::C, Base::G, "Janus"),
    (Base::C, Base::U, "Maia"),
    // Duality
    (Base::G, Base::A, "Harmonia"),
    (Base::G, Base::C, "Christ Consciousness"),
    (Base::G, Base::G, "Minerva"),
    (Base::G, Base::U, "Hades"),
    // Civilisation
    (Base::U, Base::A, "Lakshmi"),
    (Base::U, Base::C, "Parvati"),
    (Base::U, Base::G, "Ma'at"),
    (Base::U, Base::U, "Thoth"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn value(bits: &str) -> usize {
        bits.chars()
            .fold(0, |acc, c| (acc << 1) | usize::from(c == '1'))
    }

    #[test]
    fn trigram_table_matches_patterns() {
        for t in Trigram::ALL {
            assert_eq!(TRIGRAM_BY_PATTERN[value(t.pattern())], t);
        }
    }

    #[test]
    fn quarter_table() {
        assert_eq!(QUARTER_BY_PAIR[value("11")], Quarter::Mutation);
        assert_eq!(QUARTER_BY_PAIR[value("10")], Quarter::Initiation);
        assert_eq!(QUARTER_BY_PAIR[value("01")], Quarter::Duality);
        assert_eq!(QUARTER_BY_PAIR[value("00")], Quarter::Civilisation);
    }

    #[test]
    fn base_table() {
        assert_eq!(BASE_BY_PAIR[value("11")], Base::A);
        assert_eq!(BASE_BY_PAIR[value("00")], Base::U);
        assert_eq!(BASE_BY_PAIR[value("10")], Base::C);
        assert_eq!(BASE_BY_PAIR[value("01")], Base::G);
    }

    #[test]
    fn face_first_letter_matches_quarter() {
        for (i, (outer, _, name)) in FACE_NAMES.iter().enumerate() {
            let pair = BASE_BY_PAIR
                .iter()
                .position(|b| b == outer)
                .expect("every letter has a pair");
            assert_eq!(QUARTER_BY_PAIR[pair], Quarter::ALL[i / 4], "{name}");
        }
    }
}
