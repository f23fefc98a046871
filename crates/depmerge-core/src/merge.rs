//! Group merging by identical unified dependent sets.

use std::collections::BTreeMap;

use depmerge_model::{DependentSet, FlatItem, MergedGroup, ValueDependentMap};

/// Merge flattened items into groups keyed by their value's unified
/// dependent set.
///
/// Groups come out in the order their key is first met; names and values
/// inside a group keep first-seen order without duplicates.
pub fn merge_groups(items: &[FlatItem], unified: &ValueDependentMap) -> Vec<MergedGroup> {
    let mut groups: Vec<MergedGroup> = Vec::new();
    let mut by_key: BTreeMap<&DependentSet, usize> = BTreeMap::new();
    let empty = DependentSet::new();
    for item in items {
        let key = unified.get(&item.value).unwrap_or(&empty);
        let index = *by_key.entry(key).or_insert_with(|| {
            groups.push(MergedGroup::new(key.clone(), groups.len()));
            groups.len() - 1
        });
        let group = &mut groups[index];
        group.push_name(&item.name);
        group.push_value(&item.value);
    }
    groups
}
