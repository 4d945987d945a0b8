//! Docking records and the per-configuration docking table.
//!
//! [`DockingData`] is the one record consumers read. [`DockingTable`]
//! precomputes all 384 records for one identity table and wheel
//! configuration; it is an optional
//! memo, and every entry equals what [`Positioning::docking_data`] returns
//! for the same input.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use gatewheel_spec::{Face, Polarity, Quarter, LINE_POSITIONS, LINES_PER_GATE};

use crate::error::Result;
use crate::gate::{Binary, Gate, Line};
use crate::identity::IdentityId;
use crate::positioning::{Codon, Positioning, TrigramPair};
use crate::wheel::ConfigId;

/// Every derived coordinate of one gate line.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct DockingData {
    /// Gate number.
    pub gate: Gate,
    /// Line number.
    pub line: Line,
    /// 6-bit identity.
    pub binary: Binary,
    /// Three-letter codon.
    pub codon: Codon,
    /// Index of the gate in the wheel sequence (0..=63).
    pub wheel_index: usize,
    /// `wheel_index × 6 + (line − 1)` (0..=383).
    pub line_position: usize,
    /// Angle before rotation.
    pub base_angle: f64,
    /// Angle after rotation, in `[0, 360)`.
    pub visual_angle: f64,
    /// Quarter.
    pub quarter: Quarter,
    /// Face.
    pub face: Face,
    /// Lower and upper trigram.
    pub trigrams: TrigramPair,
    /// Gate with the complementary binary.
    pub opposite_gate: Gate,
    /// Polarity of this line.
    pub polarity: Polarity,
}

/// Identifies the inputs a [`DockingTable`] was derived from.
pub type DockingKey = (IdentityId, ConfigId);

/// All 384 docking records of one configuration, indexed by gate and line.
#[derive(Debug, Clone)]
pub struct DockingTable {
    identity: IdentityId,
    config: ConfigId,
    records: Vec<DockingData>,
}

impl DockingTable {
    /// Derives every record for the positioning's configuration.
    ///
    /// # Errors
    ///
    /// Propagates the first derivation error.
    pub fn build(positioning: &Positioning<'_>) -> Result<Self> {
        let mut records = Vec::with_capacity(LINE_POSITIONS);
        for gate in Gate::all() {
            for line in Line::ALL {
                records.push(positioning.docking_data(gate, line)?);
            }
        }
        let (identity, config) = key_of(positioning);
        tracing::trace!(
            identity = %identity,
            config = %config,
            records = records.len(),
            "docking table built"
        );
        Ok(Self {
            identity,
            config,
            records,
        })
    }

    /// Identity table this table was built from.
    #[must_use]
    pub fn identity_id(&self) -> IdentityId {
        self.identity
    }

    /// Configuration this table was built for.
    #[must_use]
    pub fn config_id(&self) -> ConfigId {
        self.config
    }

    /// Both input fingerprints.
    #[must_use]
    pub fn key(&self) -> DockingKey {
        (self.identity, self.config)
    }

    /// Record for a gate line.
    #[must_use]
    pub fn get(&self, gate: Gate, line: Line) -> &DockingData {
        &self.records[gate.slot() * LINES_PER_GATE + line.bit_index()]
    }

    /// Records in gate-then-line order.
    pub fn iter(&self) -> impl Iterator<Item = &DockingData> {
        self.records.iter()
    }

    /// Records in wheel order (ascending line position).
    #[must_use]
    pub fn in_wheel_order(&self) -> Vec<&DockingData> {
        let mut ordered: Vec<&DockingData> = self.records.iter().collect();
        ordered.sort_by_key(|d| d.line_position);
        ordered
    }
}

fn key_of(positioning: &Positioning<'_>) -> DockingKey {
    (
        positioning.identity().identity_id(),
        positioning.wheel().config_id(),
    )
}

/// Docking tables shared across callers, keyed by identity table and
/// configuration.
///
/// Results never depend on whether a table is cached: a miss builds the
/// same table a hit would have returned.
#[derive(Debug, Default)]
pub struct DockingCache {
    tables: RwLock<HashMap<DockingKey, Arc<DockingTable>>>,
}

impl DockingCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the table for the positioning's identity table and
    /// configuration, building it on first use.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`DockingTable::build`].
    pub fn table(&self, positioning: &Positioning<'_>) -> Result<Arc<DockingTable>> {
        let id = key_of(positioning);
        if let Some(table) = self
            .tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
        {
            return Ok(Arc::clone(table));
        }
        let table = Arc::new(DockingTable::build(positioning)?);
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(tables.entry(id).or_insert(table)))
    }

    /// Cached record for a gate line.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`DockingTable::build`].
    pub fn docking_data(
        &self,
        positioning: &Positioning<'_>,
        gate: Gate,
        line: Line,
    ) -> Result<DockingData> {
        Ok(*self.table(positioning)?.get(gate, line))
    }

    /// Number of cached tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True when nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
