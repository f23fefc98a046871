//! Option flattening.
//!
//! Expands every option record into one [`FlatItem`] per name/value pairing
//! and records which name was first seen for each dependent identifier.

use std::collections::BTreeMap;

use depmerge_model::{DependentSet, FlatItem, OptionRecord};

/// Flattened view of an option document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flattened {
    /// One item per name/value pairing, in document order.
    pub items: Vec<FlatItem>,
    /// Dependent identifier → first-seen display name.
    pub dependent_names: BTreeMap<String, String>,
    /// Name → first-seen value. Informational only.
    pub name_values: BTreeMap<String, String>,
}

impl Flattened {
    /// Display name for a dependent identifier, empty when unknown.
    pub fn dependent_name(&self, id: &str) -> &str {
        self.dependent_names.get(id).map_or("", String::as_str)
    }
}

/// Flatten option records into name/value items tagged with their dependents.
pub fn flatten_options(options: &[OptionRecord]) -> Flattened {
    let mut flattened = Flattened::default();
    for option in options {
        let mut dependents = DependentSet::new();
        for dependent in &option.dependents {
            dependents.insert(dependent.id.clone());
            flattened
                .dependent_names
                .entry(dependent.id.clone())
                .or_insert_with(|| dependent.name.clone());
        }
        for (name, value) in option.paired() {
            flattened.items.push(FlatItem {
                name: name.to_string(),
                value: value.to_string(),
                dependents: dependents.clone(),
            });
            flattened
                .name_values
                .entry(name.to_string())
                .or_insert_with(|| value.to_string());
        }
    }
    flattened
}
