//! Grouping documents: one entry per quarter, face or trigram, with the
//! member gates the author claims.
//!
//! Claimed membership is compared against the positioning algorithm for
//! every gate. A hand-maintained list that drifted from the binaries shows
//! up as a `MembershipMismatch` even when its counts look right.

use std::collections::BTreeMap;

use gatewheel::{
    Base, Face, Gate, IdentityTable, Positioning, Quarter, Trigram, TrigramPosition,
    WheelConfiguration, WheelOptions,
};
use serde_json::Value;

use super::{
    check_required_fields, entry_label, gate_list, gate_names, name_field, report_coverage,
    report_duplicates,
};
use crate::report::{Invariant, ValidationReport, Violation};
use crate::shape::GroupingKind;
use crate::ValidationOptions;

/// A derived group: canonical name and member gates in gate order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Canonical name.
    pub name: &'static str,
    /// Member gates.
    pub gates: Vec<Gate>,
}

/// Derived groups of one kind, in canonical order.
#[must_use]
pub fn derived_groups(positioning: &Positioning<'_>, kind: GroupingKind) -> Vec<Group> {
    match kind {
        GroupingKind::Quarter => Quarter::ALL
            .into_iter()
            .map(|q| Group {
                name: q.name(),
                gates: positioning.gates_in_quarter(q),
            })
            .collect(),
        GroupingKind::Face => Face::all()
            .map(|face| Group {
                name: face.name(),
                gates: positioning.gates_with_face(face),
            })
            .collect(),
        GroupingKind::LowerTrigram => trigram_groups(positioning, TrigramPosition::Lower),
        GroupingKind::UpperTrigram => trigram_groups(positioning, TrigramPosition::Upper),
    }
}

fn trigram_groups(positioning: &Positioning<'_>, position: TrigramPosition) -> Vec<Group> {
    Trigram::ALL
        .into_iter()
        .map(|t| Group {
            name: t.name(),
            gates: positioning.gates_with_trigram(position, t),
        })
        .collect()
}

/// Canonical name for a document name. Faces also accept their two-letter
/// code (`"AC"` for Vishnu).
fn resolve(kind: GroupingKind, name: &str) -> Option<&'static str> {
    let name = name.trim();
    match kind {
        GroupingKind::Quarter => Quarter::from_name(name).map(Quarter::name),
        GroupingKind::Face => Face::from_name(name)
            .or_else(|| face_from_code(name))
            .map(Face::name),
        GroupingKind::LowerTrigram | GroupingKind::UpperTrigram => {
            Trigram::from_name(name).map(Trigram::name)
        }
    }
}

fn face_from_code(code: &str) -> Option<Face> {
    let mut letters = code.chars();
    let outer = Base::from_letter(letters.next()?.to_ascii_uppercase())?;
    let inner = Base::from_letter(letters.next()?.to_ascii_uppercase())?;
    letters.next().is_none().then_some(Face::new(outer, inner))
}

/// Validates a grouping document of the given kind.
pub fn validate(
    entries: &[Value],
    kind: GroupingKind,
    options: &ValidationOptions,
) -> ValidationReport {
    let mut report = ValidationReport::new();

    let identity = match options.identity.as_ref() {
        Some(table) => Ok(table),
        None => IdentityTable::canonical(),
    };
    let wheel = WheelConfiguration::new(WheelOptions::default());
    let (identity, wheel) = match (identity, wheel) {
        (Ok(identity), Ok(wheel)) => (identity, wheel),
        (Err(e), _) | (_, Err(e)) => {
            report.push(Violation::keyed(
                Invariant::ReferenceData,
                "reference tables",
                "loadable identity table and default wheel",
                e.to_string(),
            ));
            return report;
        }
    };
    let groups = derived_groups(&Positioning::new(identity, &wheel), kind);

    let mut seen: BTreeMap<&'static str, usize> = BTreeMap::new();
    for (index, entry) in entries.iter().enumerate() {
        let label = match name_field(entry) {
            Ok(name) => match resolve(kind, name) {
                Some(canonical) => {
                    *seen.entry(canonical).or_default() += 1;
                    check_membership(&mut report, entry, canonical, &groups);
                    canonical.to_string()
                }
                None => {
                    report.push(Violation::keyed(
                        Invariant::UnknownKey,
                        name,
                        format!("one of the {} group names", kind.cardinality()),
                        name,
                    ));
                    name.to_string()
                }
            },
            Err(actual) => {
                let label = entry_label(index);
                report.push(Violation::keyed(
                    Invariant::InvalidKey,
                    &label,
                    "`name` string",
                    actual,
                ));
                label
            }
        };
        check_required_fields(&mut report, entry, &label, options);
    }

    report_duplicates(&mut report, &seen);
    let absent = groups
        .iter()
        .filter(|group| !seen.contains_key(group.name))
        .map(|group| group.name.to_string())
        .collect();
    report_coverage(&mut report, kind.cardinality(), entries.len(), absent);
    tracing::trace!(kind = ?kind, groups = groups.len(), "grouping checked");
    report
}

fn check_membership(
    report: &mut ValidationReport,
    entry: &Value,
    name: &'static str,
    groups: &[Group],
) {
    let Some(group) = groups.iter().find(|g| g.name == name) else {
        return;
    };
    let Some(mut claimed) = gate_list(report, entry, name) else {
        return;
    };
    claimed.sort_unstable();
    if claimed != group.gates {
        report.push(Violation::keyed(
            Invariant::MembershipMismatch,
            name,
            format!("gates {}", gate_names(&group.gates)),
            format!("gates {}", gate_names(&claimed)),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn groups(kind: GroupingKind) -> Vec<Group> {
        let identity = IdentityTable::canonical().unwrap();
        let wheel = WheelConfiguration::new(WheelOptions::default()).unwrap();
        derived_groups(&Positioning::new(identity, &wheel), kind)
    }

    fn document(kind: GroupingKind) -> Vec<Value> {
        groups(kind)
            .into_iter()
            .map(|g| {
                let gates: Vec<u8> = g.gates.iter().map(|gate| gate.number()).collect();
                json!({ "name": g.name, "gates": gates })
            })
            .collect()
    }

    #[test]
    fn derived_documents_pass() {
        for kind in [
            GroupingKind::Quarter,
            GroupingKind::Face,
            GroupingKind::LowerTrigram,
            GroupingKind::UpperTrigram,
        ] {
            let report = validate(&document(kind), kind, &ValidationOptions::default());
            assert!(report.passed(), "{kind:?}: {:?}", report.violations);
        }
    }

    #[test]
    fn stale_membership_is_caught() {
        let mut doc = document(GroupingKind::Quarter);
        // gate 2 is Civilisation; claim it for Mutation too
        let mut mutation: Vec<u64> = doc[0]["gates"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_u64)
            .collect();
        mutation.push(2);
        doc[0]["gates"] = json!(mutation);
        let report = validate(&doc, GroupingKind::Quarter, &ValidationOptions::default());
        assert_eq!(report.len(), 1);
        let v = &report.violations[0];
        assert_eq!(v.invariant, Invariant::MembershipMismatch);
        assert_eq!(v.keys, vec!["Mutation".to_string()]);
    }

    #[test]
    fn lower_list_under_upper_kind_mismatches() {
        // Gate 3 is Thunder below and Water above.
        let doc = document(GroupingKind::LowerTrigram);
        let report = validate(&doc, GroupingKind::UpperTrigram, &ValidationOptions::default());
        assert!(report.of(Invariant::MembershipMismatch).count() > 0);
    }

    #[test]
    fn face_codes_resolve() {
        assert_eq!(resolve(GroupingKind::Face, "ac"), Some("Vishnu"));
        assert_eq!(resolve(GroupingKind::Face, "Vishnu"), Some("Vishnu"));
        assert_eq!(resolve(GroupingKind::Face, "ACG"), None);
        assert_eq!(resolve(GroupingKind::Quarter, "Harmony"), None);
    }

    #[test]
    fn missing_group_is_counted() {
        let mut doc = document(GroupingKind::Face);
        doc.pop();
        let report = validate(&doc, GroupingKind::Face, &ValidationOptions::default());
        assert_eq!(report.len(), 1);
        let v = &report.violations[0];
        assert_eq!(v.invariant, Invariant::EntryCount);
        assert_eq!((v.expected.as_str(), v.actual.as_str()), ("16", "15"));
        assert_eq!(v.keys.len(), 1);
    }
}
