//! Reference relational datasets.
//!
//! The canonical connection list (36 unordered gate pairs, stored as
//! `(min, max)`) and the canonical partition of the 64 gates into 9
//! containers. The docking validator uses them to name what an incomplete
//! document is missing.

/// Number of connections.
pub const CONNECTION_COUNT: usize = 36;

/// Number of partition containers.
pub const CONTAINER_COUNT: usize = 9;

/// Canonical connections, each pair ordered `(min, max)`.
pub const CONNECTIONS: [(u8, u8); CONNECTION_COUNT] = [
    (1, 8),
    (2, 14),
    (3, 60),
    (4, 63),
    (5, 15),
    (6, 59),
    (7, 31),
    (9, 52),
    (10, 20),
    (10, 34),
    (10, 57),
    (11, 56),
    (12, 22),
    (13, 33),
    (16, 48),
    (17, 62),
    (18, 58),
    (19, 49),
    (20, 34),
    (20, 57),
    (21, 45),
    (23, 43),
    (24, 61),
    (25, 51),
    (26, 44),
    (27, 50),
    (28, 38),
    (29, 46),
    (30, 41),
    (32, 54),
    (34, 57),
    (35, 36),
    (37, 40),
    (39, 55),
    (42, 53),
    (47, 64),
];

/// Canonical containers: name and member gates.
pub const CONTAINERS: [(&str, &[u8]); CONTAINER_COUNT] = [
    ("Head", &[64, 61, 63]),
    ("Ajna", &[47, 24, 4, 17, 43, 11]),
    (
        "Throat",
        &[62, 23, 56, 35, 12, 45, 33, 8, 31, 20, 16],
    ),
    ("G", &[7, 1, 13, 10, 25, 46, 2, 15]),
    ("Heart", &[21, 40, 26, 51]),
    ("Sacral", &[5, 14, 29, 59, 9, 3, 42, 27, 34]),
    ("Solar Plexus", &[6, 37, 22, 36, 30, 55, 49]),
    ("Spleen", &[48, 57, 44, 50, 32, 28, 18]),
    ("Root", &[53, 60, 52, 19, 39, 41, 58, 38, 54]),
];
