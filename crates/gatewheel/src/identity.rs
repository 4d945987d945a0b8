//! Binary identity table.
//!
//! Immutable lookup from gate to its 6-bit binary, plus the reverse index
//! used to find a gate by binary. Invariants are verified once when the
//! table is built; lookups afterwards are plain array reads.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use gatewheel_spec::{RootTables, GATE_COUNT};

use crate::error::{DockingError, Result};
use crate::gate::{Binary, Gate};

/// Stable fingerprint of an identity table, for cache keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct IdentityId(pub u64);

impl core::fmt::Display for IdentityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Verified gate → binary table.
///
/// # Example
///
/// ```
/// use gatewheel::{Gate, IdentityTable};
///
/// let table = IdentityTable::canonical().unwrap();
/// let gate = Gate::new(1).unwrap();
/// assert_eq!(table.binary(gate).to_string(), "111111");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityTable {
    binaries: [Binary; GATE_COUNT],
    // owners[binary.raw()] = gate number
    owners: [u8; GATE_COUNT],
    id: IdentityId,
}

impl IdentityTable {
    /// Returns the verified canonical table.
    ///
    /// # Errors
    ///
    /// Returns [`DockingError::DataIntegrity`] if the compiled-in table
    /// violates an invariant. The check runs once per process.
    pub fn canonical() -> Result<&'static IdentityTable> {
        static TABLE: OnceLock<Result<IdentityTable>> = OnceLock::new();
        TABLE
            .get_or_init(|| {
                IdentityTable::from_entries(
                    RootTables::canonical()
                        .binaries
                        .iter()
                        .map(|(gate, binary)| (i64::from(*gate), *binary)),
                )
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Builds a table from `(gate, binary)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`DockingError::DataIntegrity`] unless the entries name every
    /// gate `1..=64` exactly once, every binary is 6 characters over
    /// `{0, 1}`, and all binaries are distinct.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i64, S)>,
        S: AsRef<str>,
    {
        let mut binaries: [Option<Binary>; GATE_COUNT] = [None; GATE_COUNT];
        let mut owners = [0u8; GATE_COUNT];
        let mut count = 0usize;

        for (number, text) in entries {
            count += 1;
            let gate = Gate::new(number).map_err(|_| {
                DockingError::DataIntegrity(format!("identity table key {number} is not a gate"))
            })?;
            let binary = Binary::parse(text.as_ref()).map_err(|e| match e {
                DockingError::DataIntegrity(msg) => {
                    DockingError::DataIntegrity(format!("gate {gate}: {msg}"))
                }
                other => other,
            })?;
            if binaries[gate.slot()].is_some() {
                return Err(DockingError::DataIntegrity(format!(
                    "gate {gate} appears more than once"
                )));
            }
            let owner = &mut owners[usize::from(binary.raw())];
            if *owner != 0 {
                return Err(DockingError::DataIntegrity(format!(
                    "binary {binary} is shared by gates {} and {gate}",
                    *owner
                )));
            }
            *owner = gate.number();
            binaries[gate.slot()] = Some(binary);
        }

        if count != GATE_COUNT {
            return Err(DockingError::DataIntegrity(format!(
                "identity table has {count} entries, expected {GATE_COUNT}"
            )));
        }

        let mut verified = [Binary::from_raw(0); GATE_COUNT];
        for (slot, entry) in binaries.iter().enumerate() {
            verified[slot] = entry.ok_or_else(|| {
                DockingError::DataIntegrity(format!("gate {} has no binary", slot + 1))
            })?;
        }

        let id = IdentityId(crate::fnv1a(verified.iter().map(|b| b.raw())));
        tracing::debug!(entries = count, identity = %id, "identity table verified");
        Ok(Self {
            binaries: verified,
            owners,
            id,
        })
    }

    /// Builds a table from its persisted key→string form, keys being gate
    /// numbers written as decimal strings.
    ///
    /// # Errors
    ///
    /// Returns [`DockingError::DataIntegrity`] on a non-numeric key or any
    /// violation listed on [`IdentityTable::from_entries`].
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        let entries = map
            .iter()
            .map(|(key, binary)| {
                key.trim()
                    .parse::<i64>()
                    .map(|gate| (gate, binary.as_str()))
                    .map_err(|_| {
                        DockingError::DataIntegrity(format!(
                            "identity table key {key:?} is not a gate number"
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_entries(entries)
    }

    /// Fingerprint of the gate → binary assignment.
    #[must_use]
    pub fn identity_id(&self) -> IdentityId {
        self.id
    }

    /// Returns the binary of a gate.
    #[inline]
    #[must_use]
    pub fn binary(&self, gate: Gate) -> Binary {
        self.binaries[gate.slot()]
    }

    /// Reverse lookup: the gate owning `binary`.
    ///
    /// # Errors
    ///
    /// Returns [`DockingError::DataIntegrity`] if no gate owns the binary.
    /// A verified table owns all 64 values, so this signals corruption.
    pub fn gate_for(&self, binary: Binary) -> Result<Gate> {
        match self.owners.get(usize::from(binary.raw())) {
            Some(&owner) if owner != 0 => Gate::new(i64::from(owner)),
            _ => Err(DockingError::DataIntegrity(format!(
                "no gate owns binary {binary}"
            ))),
        }
    }

    /// Iterates `(gate, binary)` in gate order.
    pub fn iter(&self) -> impl Iterator<Item = (Gate, Binary)> + '_ {
        Gate::all().map(|gate| (gate, self.binary(gate)))
    }

    /// Returns the persisted key→string form.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(gate, binary)| (gate.to_string(), binary.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical_pairs() -> Vec<(i64, String)> {
        RootTables::canonical()
            .binaries
            .iter()
            .map(|(g, b)| (i64::from(*g), (*b).to_owned()))
            .collect()
    }

    #[test]
    fn canonical_table_loads() {
        let table = IdentityTable::canonical().unwrap();
        assert_eq!(table.iter().count(), 64);
    }

    #[test]
    fn reverse_lookup_inverts_forward() {
        let table = IdentityTable::canonical().unwrap();
        for (gate, binary) in table.iter() {
            assert_eq!(table.gate_for(binary), Ok(gate));
        }
    }

    #[test]
    fn rejects_duplicate_binary() {
        let mut pairs = canonical_pairs();
        pairs[1].1 = pairs[0].1.clone();
        let err = IdentityTable::from_entries(pairs).unwrap_err();
        assert!(matches!(err, DockingError::DataIntegrity(ref m) if m.contains("shared")));
    }

    #[test]
    fn rejects_missing_entry() {
        let mut pairs = canonical_pairs();
        pairs.pop();
        let err = IdentityTable::from_entries(pairs).unwrap_err();
        assert!(matches!(err, DockingError::DataIntegrity(ref m) if m.contains("63 entries")));
    }

    #[test]
    fn rejects_out_of_range_key() {
        let mut pairs = canonical_pairs();
        pairs[63].0 = 65;
        assert!(IdentityTable::from_entries(pairs).is_err());
    }

    #[test]
    fn rejects_malformed_binary() {
        let mut pairs = canonical_pairs();
        pairs[5].1 = "01011".to_owned();
        let err = IdentityTable::from_entries(pairs).unwrap_err();
        assert!(matches!(err, DockingError::DataIntegrity(ref m) if m.starts_with("gate 6")));
    }

    #[test]
    fn map_form_round_trips() {
        let table = IdentityTable::canonical().unwrap();
        let map = table.to_map();
        assert_eq!(map.len(), 64);
        assert_eq!(&IdentityTable::from_map(&map).unwrap(), table);
    }

    #[test]
    fn fingerprint_tracks_assignment() {
        let canonical = IdentityTable::canonical().unwrap();
        let reloaded = IdentityTable::from_entries(canonical_pairs()).unwrap();
        assert_eq!(reloaded.identity_id(), canonical.identity_id());

        let mut pairs = canonical_pairs();
        let first = pairs[0].1.clone();
        pairs[0].1 = pairs[1].1.clone();
        pairs[1].1 = first;
        let swapped = IdentityTable::from_entries(pairs).unwrap();
        assert_ne!(swapped.identity_id(), canonical.identity_id());
    }

    #[test]
    fn map_rejects_non_numeric_key() {
        let mut map = IdentityTable::canonical().unwrap().to_map();
        let value = map.remove("1").unwrap();
        map.insert("one".to_owned(), value);
        assert!(IdentityTable::from_map(&map).is_err());
    }
}
