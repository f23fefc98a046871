//! Dependent unification: every value gets the union of the dependent sets
//! of all its occurrences.

use depmerge_model::{FlatItem, ValueDependentMap};

pub fn unify_dependents(items: &[FlatItem]) -> ValueDependentMap {
    let mut unified = ValueDependentMap::new();
    for item in items {
        unified
            .entry(item.value.clone())
            .or_default()
            .extend(item.dependents.iter().cloned());
    }
    unified
}

#[cfg(test)]
mod tests {
    use depmerge_model::DependentSet;

    use super::*;

    fn item(name: &str, value: &str, dependents: &[&str]) -> FlatItem {
        FlatItem {
            name: name.to_string(),
            value: value.to_string(),
            dependents: dependents.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn set(ids: &[&str]) -> DependentSet {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unions_across_occurrences() {
        let items = vec![
            item("A", "1", &["d1"]),
            item("B", "2", &["d2"]),
            item("C", "1", &["d3"]),
        ];
        let unified = unify_dependents(&items);
        assert_eq!(unified["1"], set(&["d1", "d3"]));
        assert_eq!(unified["2"], set(&["d2"]));
    }

    #[test]
    fn value_without_dependents_maps_to_empty_set() {
        let unified = unify_dependents(&[item("A", "1", &[])]);
        assert_eq!(unified["1"], DependentSet::new());
    }

    #[test]
    fn order_independent() {
        let mut items = vec![item("A", "1", &["d1"]), item("B", "1", &["d2"])];
        let forward = unify_dependents(&items);
        items.reverse();
        assert_eq!(forward, unify_dependents(&items));
    }
}
