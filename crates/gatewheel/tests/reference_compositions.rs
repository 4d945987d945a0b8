//! Known hexagram compositions pin the trigram orientation.
//!
//! The lower trigram must come from lines 1-3 and the upper from lines
//! 4-6. A swapped reading still partitions cleanly, so only fixed reference
//! pairs catch it.

use gatewheel::{
    Base, Gate, IdentityTable, Line, Polarity, Positioning, Quarter, Trigram, WheelConfiguration,
    WheelOptions,
};

use Trigram::{Earth, Fire, Heaven, Lake, Mountain, Thunder, Water, Wind};

/// (gate, lower, upper)
const REFERENCE: &[(i64, Trigram, Trigram)] = &[
    (1, Heaven, Heaven),
    (2, Earth, Earth),
    (3, Thunder, Water),
    (4, Water, Mountain),
    (5, Heaven, Water),
    (6, Water, Heaven),
    (11, Heaven, Earth),
    (12, Earth, Heaven),
    (17, Thunder, Lake),
    (18, Wind, Mountain),
    (29, Water, Water),
    (30, Fire, Fire),
    (31, Mountain, Lake),
    (32, Wind, Thunder),
    (51, Thunder, Thunder),
    (52, Mountain, Mountain),
    (57, Wind, Wind),
    (58, Lake, Lake),
    (63, Fire, Water),
    (64, Water, Fire),
];

fn positioning_parts() -> (&'static IdentityTable, WheelConfiguration) {
    (
        IdentityTable::canonical().unwrap(),
        WheelConfiguration::new(WheelOptions::default()).unwrap(),
    )
}

#[test]
fn reference_compositions_match() {
    let (identity, wheel) = positioning_parts();
    let p = Positioning::new(identity, &wheel);
    for &(n, lower, upper) in REFERENCE {
        let pair = p.trigrams(Gate::new(n).unwrap());
        assert_eq!(pair.lower, lower, "gate {n} lower");
        assert_eq!(pair.upper, upper, "gate {n} upper");
    }
}

#[test]
fn asymmetric_pairs_are_not_swapped() {
    let (identity, wheel) = positioning_parts();
    let p = Positioning::new(identity, &wheel);
    // 11 and 12 are mirror images; a swapped reading would exchange them.
    let eleven = p.trigrams(Gate::new(11).unwrap());
    let twelve = p.trigrams(Gate::new(12).unwrap());
    assert_eq!((eleven.lower, eleven.upper), (Heaven, Earth));
    assert_eq!((twelve.lower, twelve.upper), (Earth, Heaven));
}

#[test]
fn gate_one_line_one() {
    let (identity, wheel) = positioning_parts();
    let p = Positioning::new(identity, &wheel);
    let data = p.lookup(1, 1).unwrap();

    assert_eq!(data.binary.to_string(), "111111");
    assert_eq!(data.wheel_index, wheel.wheel_index(Gate::new(1).unwrap()));
    assert_eq!(data.base_angle, data.wheel_index as f64 * 6.0 * 0.9375);
    assert_eq!(data.quarter, Quarter::Mutation);
    assert_eq!(data.trigrams.lower, Heaven);
    assert_eq!(data.trigrams.upper, Heaven);
    let a = Base::A.letter();
    assert_eq!(data.codon.to_string(), [a, a, a].iter().collect::<String>());
    assert_eq!(data.opposite_gate, Gate::new(2).unwrap());
    assert_eq!(data.polarity, Polarity::Yang);
}

#[test]
fn gate_two_is_all_yin() {
    let (identity, wheel) = positioning_parts();
    let p = Positioning::new(identity, &wheel);
    let data = p.lookup(2, 6).unwrap();
    assert_eq!(data.trigrams.lower, Earth);
    assert_eq!(data.trigrams.upper, Earth);
    assert_eq!(data.quarter, Quarter::Civilisation);
    assert_eq!(data.codon.to_string(), "UUU");
    assert_eq!(data.polarity, Polarity::Yin);
    assert_eq!(data.line, Line::new(6).unwrap());
}

#[test]
fn serialized_record_shape() {
    let (identity, wheel) = positioning_parts();
    let data = Positioning::new(identity, &wheel).lookup(3, 2).unwrap();
    let value = serde_json::to_value(data).unwrap();
    assert_eq!(value["gate"], 3);
    assert_eq!(value["line"], 2);
    assert_eq!(value["binary"], "100010");
    assert_eq!(value["codon"], "CUC");
    assert_eq!(value["quarter"], "Initiation");
    assert_eq!(value["face"], "Maia");
    assert_eq!(value["trigrams"]["lower"], "Thunder");
    assert_eq!(value["trigrams"]["upper"], "Water");
    assert_eq!(value["oppositeGate"], 50);
    assert_eq!(value["polarity"], "YIN");
}
