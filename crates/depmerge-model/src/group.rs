use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Serialize, Serializer};

/// Order-independent set of dependent identifiers.
///
/// Iteration yields identifiers in lexicographic order, which is also the
/// order dependents are written in canonical output.
pub type DependentSet = BTreeSet<String>;

/// Value → union of dependent identifiers over every occurrence of the value.
pub type ValueDependentMap = BTreeMap<String, DependentSet>;

/// One name/value pairing produced by flattening an option record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatItem {
    pub name: String,
    pub value: String,
    pub dependents: DependentSet,
}

/// Values sharing one unified dependent set, merged into a single option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedGroup {
    /// Unique names in first-seen order.
    pub names: Vec<String>,
    /// Unique values in first-seen order.
    pub values: Vec<String>,
    /// The merge key.
    pub dependents: DependentSet,
    /// Position of the group in output order.
    pub position: usize,
}

impl MergedGroup {
    pub fn new(dependents: DependentSet, position: usize) -> Self {
        Self {
            names: Vec::new(),
            values: Vec::new(),
            dependents,
            position,
        }
    }

    pub fn push_name(&mut self, name: &str) {
        if !self.names.iter().any(|existing| existing == name) {
            self.names.push(name.to_string());
        }
    }

    pub fn push_value(&mut self, value: &str) {
        if !self.values.iter().any(|existing| existing == value) {
            self.values.push(value.to_string());
        }
    }

    pub fn joined_names(&self) -> String {
        self.names.join(",")
    }

    pub fn joined_values(&self) -> String {
        self.values.join(",")
    }
}

/// Sequential group identifier rendered as `G<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(u32);

impl GroupId {
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G{}", self.0)
    }
}

impl Serialize for GroupId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
