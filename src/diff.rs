//! Three-way difference between desired and currently applied parameters.

use tracing::debug;

use crate::set::ParameterSet;

static EMPTY: ParameterSet = ParameterSet::new();

/// Outcome of comparing a desired parameter set against the applied one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterDiff {
    /// Parameters to create or modify, with their desired values.
    pub added: ParameterSet,
    /// Parameters already holding their desired values.
    pub unchanged: ParameterSet,
    /// Parameters to reset, with their currently applied values.
    pub removed: ParameterSet,
}

impl ParameterDiff {
    /// Returns `true` when both compared sets were empty.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.unchanged.is_empty() && self.removed.is_empty()
    }

    /// Returns `true` when nothing needs to be applied or reset.
    pub fn is_synced(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Splits `desired` and `current` into added, unchanged, and removed
/// parameters.
///
/// An absent set is treated as empty. A parameter counts as unchanged only
/// when both sides agree exactly: either both carry the same concrete value
/// or both are unset. A value present on one side but unset on the other is
/// a modification and lands in `added` with the desired value. Neither input
/// is mutated; the returned sets are freshly allocated.
pub fn compute_difference(
    desired: Option<&ParameterSet>,
    current: Option<&ParameterSet>,
) -> ParameterDiff {
    let desired = desired.unwrap_or(&EMPTY);
    let current = current.unwrap_or(&EMPTY);

    let mut diff = ParameterDiff::default();

    if desired.is_empty() && current.is_empty() {
        return diff;
    }

    // One-sided inputs short-circuit into a single bucket.
    if current.is_empty() {
        diff.added = desired.clone();
        return diff;
    }
    if desired.is_empty() {
        diff.removed = current.clone();
        return diff;
    }

    for (name, value) in desired.iter() {
        match current.get(name) {
            // Both unset, or both concrete and equal.
            Some(applied) if applied == value.as_deref() => {
                diff.unchanged.insert(name.clone(), value.clone());
            }
            // Differing values, unset on exactly one side, or not yet applied.
            _ => {
                diff.added.insert(name.clone(), value.clone());
            }
        }
    }

    for (name, value) in current.iter() {
        if !desired.contains(name) {
            diff.removed.insert(name.clone(), value.clone());
        }
    }

    debug!(
        added = diff.added.len(),
        unchanged = diff.unchanged.len(),
        removed = diff.removed.len(),
        "computed parameter difference"
    );

    diff
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(entries: &[(&str, Option<&str>)]) -> ParameterSet {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.map(str::to_string)))
            .collect()
    }

    #[test]
    fn empty_inputs_produce_empty_difference() {
        let diff = compute_difference(Some(&ParameterSet::new()), Some(&ParameterSet::new()));
        assert!(diff.is_empty());
        assert!(diff.is_synced());
    }

    #[test]
    fn absent_sets_are_treated_as_empty() {
        assert!(compute_difference(None, None).is_empty());

        let current = set_of(&[("a", Some("1"))]);
        let diff = compute_difference(None, Some(&current));
        assert!(diff.added.is_empty());
        assert!(diff.unchanged.is_empty());
        assert_eq!(diff.removed, current);
    }

    #[test]
    fn fresh_parameters_are_all_additions() {
        let desired = set_of(&[("a", Some("1"))]);
        let diff = compute_difference(Some(&desired), Some(&ParameterSet::new()));
        assert_eq!(diff.added, desired);
        assert!(diff.unchanged.is_empty());
        assert!(diff.removed.is_empty());
    }

    #[test]
    fn mixed_sets_partition_by_name() {
        let desired = set_of(&[("a", Some("1")), ("b", Some("2"))]);
        let current = set_of(&[("a", Some("1")), ("c", Some("3"))]);

        let diff = compute_difference(Some(&desired), Some(&current));
        assert_eq!(diff.added, set_of(&[("b", Some("2"))]));
        assert_eq!(diff.unchanged, set_of(&[("a", Some("1"))]));
        assert_eq!(diff.removed, set_of(&[("c", Some("3"))]));
        assert!(!diff.is_synced());
    }

    #[test]
    fn changed_values_count_as_additions() {
        let desired = set_of(&[("a", Some("2"))]);
        let current = set_of(&[("a", Some("1"))]);

        let diff = compute_difference(Some(&desired), Some(&current));
        assert_eq!(diff.added, desired);
        assert!(diff.unchanged.is_empty());
        assert!(diff.removed.is_empty());
    }

    #[test]
    fn unset_markers_compare_equal() {
        let desired = set_of(&[("a", None)]);
        let current = set_of(&[("a", None)]);

        let diff = compute_difference(Some(&desired), Some(&current));
        assert!(diff.added.is_empty());
        assert_eq!(diff.unchanged, set_of(&[("a", None)]));
        assert!(diff.removed.is_empty());
    }

    #[test]
    fn unset_on_one_side_counts_as_modification() {
        let desired = set_of(&[("a", Some("1"))]);
        let current = set_of(&[("a", None)]);
        let diff = compute_difference(Some(&desired), Some(&current));
        assert_eq!(diff.added, desired);
        assert!(diff.unchanged.is_empty());

        let desired = set_of(&[("a", None)]);
        let current = set_of(&[("a", Some("1"))]);
        let diff = compute_difference(Some(&desired), Some(&current));
        assert_eq!(diff.added, desired);
        assert!(diff.unchanged.is_empty());
    }

    #[test]
    fn synced_sets_report_no_work() {
        let applied = set_of(&[("a", Some("1")), ("b", None)]);
        let diff = compute_difference(Some(&applied), Some(&applied));
        assert!(diff.is_synced());
        assert!(!diff.is_empty());
        assert_eq!(diff.unchanged, applied);
    }
}
