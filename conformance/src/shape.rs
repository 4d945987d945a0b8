//! Document shapes accepted by the validator.

use core::fmt;
use core::str::FromStr;

/// Derived grouping a grouping-shaped document claims to describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupingKind {
    /// 4 quarters of 16 gates.
    Quarter,
    /// 16 faces of 4 gates.
    Face,
    /// 8 lower trigrams of 8 gates.
    LowerTrigram,
    /// 8 upper trigrams of 8 gates.
    UpperTrigram,
}

impl GroupingKind {
    /// Number of groups.
    #[must_use]
    pub const fn cardinality(self) -> usize {
        match self {
            Self::Quarter => 4,
            Self::Face => 16,
            Self::LowerTrigram | Self::UpperTrigram => 8,
        }
    }

    const fn token(self) -> &'static str {
        match self {
            Self::Quarter => "quarter",
            Self::Face => "face",
            Self::LowerTrigram => "lower-trigram",
            Self::UpperTrigram => "upper-trigram",
        }
    }
}

/// Shape of a knowledge document. Each variant has its own validation
/// strategy in [`crate::validators`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentShape {
    /// One entry per gate, keyed by `gate`.
    GateLevel,
    /// One entry per gate line, keyed by `gate` and `line`.
    LineLevel,
    /// One entry per group, keyed by `name`, listing member `gates`.
    Grouping(GroupingKind),
    /// One entry per unordered gate pair, `gates: [a, b]`.
    Connection,
    /// One entry per container, keyed by `name`, listing member `gates`.
    Partition,
}

impl DocumentShape {
    /// Every shape, groupings included.
    pub const ALL: [DocumentShape; 8] = [
        Self::GateLevel,
        Self::LineLevel,
        Self::Grouping(GroupingKind::Quarter),
        Self::Grouping(GroupingKind::Face),
        Self::Grouping(GroupingKind::LowerTrigram),
        Self::Grouping(GroupingKind::UpperTrigram),
        Self::Connection,
        Self::Partition,
    ];

    /// Command-line token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::GateLevel => "gate",
            Self::LineLevel => "line",
            Self::Grouping(kind) => kind.token(),
            Self::Connection => "connection",
            Self::Partition => "partition",
        }
    }
}

impl fmt::Display for DocumentShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Unrecognized shape token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown document shape `{0}` (expected one of: gate, line, quarter, face, lower-trigram, upper-trigram, connection, partition)")]
pub struct UnknownShape(pub String);

impl FromStr for DocumentShape {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|shape| shape.token() == wanted)
            .ok_or_else(|| UnknownShape(s.to_string()))
    }
}
