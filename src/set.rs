use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};

/// Mapping from parameter name to an optional string value.
///
/// A `Some` value carries a concrete setting, while `None` marks a parameter
/// that is tracked but explicitly unset. Entries iterate in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    entries: BTreeMap<String, Option<String>>,
}

impl ParameterSet {
    /// Creates an empty parameter set.
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Inserts `name` with an optional value, returning the previous value
    /// when the name was already tracked.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: Option<String>,
    ) -> Option<Option<String>> {
        self.entries.insert(name.into(), value)
    }

    /// Assigns a concrete value to `name`.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), Some(value.into()));
    }

    /// Tracks `name` without assigning a value.
    pub fn track(&mut self, name: impl Into<String>) {
        self.entries.insert(name.into(), None);
    }

    /// Returns the value stored under `name`.
    ///
    /// The outer `Option` distinguishes an untracked name from a tracked
    /// one; the inner `Option` distinguishes a concrete value from an unset
    /// marker.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.entries.get(name).map(|value| value.as_deref())
    }

    /// Returns `true` when `name` is tracked, with or without a value.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Removes `name`, returning its value when it was tracked.
    pub fn remove(&mut self, name: &str) -> Option<Option<String>> {
        self.entries.remove(name)
    }

    /// Number of tracked parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no parameters are tracked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Option<String>> {
        self.entries.iter()
    }

    /// Iterates parameter names in order.
    pub fn names(&self) -> btree_map::Keys<'_, String, Option<String>> {
        self.entries.keys()
    }
}

impl From<BTreeMap<String, Option<String>>> for ParameterSet {
    fn from(entries: BTreeMap<String, Option<String>>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, Option<String>)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, Option<String>)> for ParameterSet {
    fn extend<I: IntoIterator<Item = (String, Option<String>)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for ParameterSet {
    type Item = (String, Option<String>);
    type IntoIter = btree_map::IntoIter<String, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = (&'a String, &'a Option<String>);
    type IntoIter = btree_map::Iter<'a, String, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
