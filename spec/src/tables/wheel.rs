//! Default wheel sequence.
//!
//! Physical placement of the 64 gates around the circle before any rotation
//! is applied. Wheel index 0 is gate 41; angle increases with the index.

use super::identity::{GATE_COUNT, LINES_PER_GATE};

/// Number of line positions on the wheel (64 × 6).
pub const LINE_POSITIONS: usize = GATE_COUNT * LINES_PER_GATE;

/// Angular width of a single line position in degrees (360 / 384).
pub const DEGREES_PER_LINE: f64 = 360.0 / LINE_POSITIONS as f64;

/// Angular width of a gate in degrees (6 lines).
pub const DEGREES_PER_GATE: f64 = DEGREES_PER_LINE * LINES_PER_GATE as f64;

/// The canonical cyclic ordering of the 64 gates.
#[rustfmt::skip]
pub const DEFAULT_WHEEL_SEQUENCE: [u8; GATE_COUNT] = [
    41, 19, 13, 49, 30, 55, 37, 63,
    22, 36, 25, 17, 21, 51, 42, 3,
    27, 24, 2, 23, 8, 20, 16, 35,
    45, 12, 15, 52, 39, 53, 62, 56,
    31, 33, 7, 4, 29, 59, 40, 64,
    47, 6, 46, 18, 48, 57, 32, 50,
    28, 44, 1, 43, 14, 34, 9, 5,
    26, 11, 10, 58, 38, 54, 61, 60,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_a_permutation() {
        let mut sorted = DEFAULT_WHEEL_SEQUENCE;
        sorted.sort_unstable();
        for (i, gate) in sorted.iter().enumerate() {
            assert_eq!(usize::from(*gate), i + 1);
        }
    }

    #[test]
    fn line_step() {
        assert_eq!(LINE_POSITIONS, 384);
        assert!((DEGREES_PER_LINE - 0.9375).abs() < f64::EPSILON);
        assert!((DEGREES_PER_GATE - 5.625).abs() < f64::EPSILON);
    }
}
