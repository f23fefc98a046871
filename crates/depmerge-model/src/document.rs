use serde::{Deserialize, Serialize};

/// A reference from an option to a dependent entity.
///
/// The identifier is the key; the name is only used for display and the
/// first name seen for an identifier wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependentRef {
    pub id: String,
    pub name: String,
}

impl DependentRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// `id:name` form used when comparing dependents across documents.
    pub fn label(&self) -> String {
        format!("{}:{}", self.id, self.name)
    }
}

/// One `<option>` element with its tokenized attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRecord {
    pub names: Vec<String>,
    pub values: Vec<String>,
    pub dependents: Vec<DependentRef>,
}

impl OptionRecord {
    /// Pair every name with a value by position.
    ///
    /// When there are fewer values than names the last value repeats; with
    /// no values at all every name pairs with the empty string.
    pub fn paired(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().enumerate().map(|(idx, name)| {
            let value = self
                .values
                .get(idx)
                .or_else(|| self.values.last())
                .map_or("", String::as_str);
            (name.as_str(), value)
        })
    }

    /// Sorted `id:name` labels of this record's dependents.
    pub fn dependent_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.dependents.iter().map(DependentRef::label).collect();
        labels.sort();
        labels
    }
}

/// A parsed option document: the root element and its option records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDocument {
    pub root_tag: String,
    /// Root namespace declarations, then root attributes, by qualified name.
    pub root_attributes: Vec<(String, String)>,
    pub options: Vec<OptionRecord>,
}

impl OptionDocument {
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Total number of `<dependent>` elements across all options.
    pub fn dependent_count(&self) -> usize {
        self.options.iter().map(|option| option.dependents.len()).sum()
    }

    /// Number of distinct non-empty value tokens.
    pub fn distinct_value_count(&self) -> usize {
        let mut seen = std::collections::BTreeSet::new();
        for option in &self.options {
            for value in &option.values {
                seen.insert(value.as_str());
            }
        }
        seen.len()
    }
}
