//! Binary identity table.
//!
//! Hand-curated ground truth: gate number to 6-character binary string.
//! Index 0 of each string is line 1 (bottom), index 5 is line 6 (top).
//! The strings are not computed; the loader in the `gatewheel` crate
//! re-verifies length, alphabet and distinctness once at startup.

/// Number of gates.
pub const GATE_COUNT: usize = 64;

/// Number of lines per gate.
pub const LINES_PER_GATE: usize = 6;

/// Gate number paired with its binary, ordered by gate number.
pub const GATE_BINARIES: [(u8, &str); GATE_COUNT] = [
    (1, "111111"),
    (2, "000000"),
    (3, "100010"),
    (4, "010001"),
    (5, "111010"),
    (6, "010111"),
    (7, "010000"),
    (8, "000010"),
    (9, "111011"),
    (10, "110111"),
    (11, "111000"),
    (12, "000111"),
    (13, "101111"),
    (14, "111101"),
    (15, "001000"),
    (16, "000100"),
    (17, "100110"),
    (18, "011001"),
    (19, "110000"),
    (20, "000011"),
    (21, "100101"),
    (22, "101001"),
    (23, "000001"),
    (24, "100000"),
    (25, "100111"),
    (26, "111001"),
    (27, "100001"),
    (28, "011110"),
    (29, "010010"),
    (30, "101101"),
    (31, "001110"),
    (32, "011100"),
    (33, "001111"),
    (34, "111100"),
    (35, "000101"),
    (36, "101000"),
    (37, "101011"),
    (38, "110101"),
    (39, "001010"),
    (40, "010100"),
    (41, "110001"),
    (42, "100011"),
    (43, "111110"),
    (44, "011111"),
    (45, "000110"),
    (46, "011000"),
    (47, "010110"),
    (48, "011010"),
    (49, "101110"),
    (50, "011101"),
    (51, "100100"),
    (52, "001001"),
    (53, "001011"),
    (54, "110100"),
    (55, "101100"),
    (56, "001101"),
    (57, "011011"),
    (58, "110110"),
    (59, "010011"),
    (60, "110010"),
    (61, "110011"),
    (62, "001100"),
    (63, "101010"),
    (64, "010101"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_by_gate_number() {
        for (i, (gate, _)) in GATE_BINARIES.iter().enumerate() {
            assert_eq!(usize::from(*gate), i + 1);
        }
    }

    #[test]
    fn all_binaries_well_formed() {
        for (gate, binary) in GATE_BINARIES {
            assert_eq!(binary.len(), LINES_PER_GATE, "gate {gate}");
            assert!(
                binary.chars().all(|c| c == '0' || c == '1'),
                "gate {gate} has non-binary character"
            );
        }
    }

    #[test]
    fn all_binaries_unique() {
        let mut seen = std::collections::HashSet::new();
        for (gate, binary) in GATE_BINARIES {
            assert!(seen.insert(binary), "Duplicate binary {binary} at gate {gate}");
        }
    }
}
