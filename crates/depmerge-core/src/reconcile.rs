//! Before/after group reconciliation ("hybrid numbering").
//!
//! Every original option record gets a sequential identifier `G1`, `G2`, …
//! keyed by its raw value set. A canonical group whose value set matches an
//! original record's set inherits that record's identifier; every other
//! canonical group gets the next identifier after the original range, and
//! identical value sets share the identifier minted first.
//!
//! Each canonical value then becomes one [`ReportRow`] describing where it
//! came from and whether its group or its dependents changed.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use depmerge_model::{
    ChangeStatus, GroupId, OptionDocument, OptionRecord, ReconcileCounts, ReportRow,
};

type ValueSet = BTreeSet<String>;

/// Output of reconciling an original document with its canonical form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Final identifier of each canonical group, in canonical order.
    pub group_ids: Vec<GroupId>,
    pub rows: Vec<ReportRow>,
    pub counts: ReconcileCounts,
}

#[derive(Debug)]
struct OriginalGroup {
    id: GroupId,
    value_set: ValueSet,
}

/// Lookups built from the original document.
#[derive(Debug, Default)]
struct OriginalIndex {
    groups: Vec<OriginalGroup>,
    /// Raw value set → first identifier assigned to it.
    set_ids: BTreeMap<ValueSet, GroupId>,
    /// Value → indices into `groups` of every record containing it.
    value_groups: BTreeMap<String, Vec<usize>>,
    /// Value → union of `id:name` dependent labels over its records.
    value_dependents: BTreeMap<String, BTreeSet<String>>,
    /// Value → first name paired with it.
    value_names: BTreeMap<String, String>,
}

impl OriginalIndex {
    fn build(document: &OptionDocument) -> Self {
        let mut index = Self::default();
        let mut id = GroupId::new(0);
        for option in &document.options {
            id = id.next();
            index.add(id, option);
        }
        index
    }

    fn add(&mut self, id: GroupId, option: &OptionRecord) {
        let value_set: ValueSet = option.values.iter().cloned().collect();
        let labels = option.dependent_labels();
        let position = self.groups.len();
        self.set_ids.entry(value_set.clone()).or_insert(id);
        for value in &option.values {
            self.value_groups
                .entry(value.clone())
                .or_default()
                .push(position);
            self.value_dependents
                .entry(value.clone())
                .or_default()
                .extend(labels.iter().cloned());
        }
        for (name, value) in option.paired() {
            if !value.is_empty() && !self.value_names.contains_key(value) {
                self.value_names.insert(value.to_string(), name.to_string());
            }
        }
        self.groups.push(OriginalGroup { id, value_set });
    }

    fn last_id(&self) -> GroupId {
        self.groups.last().map_or(GroupId::new(0), |group| group.id)
    }

    fn groups_of(&self, value: &str) -> impl Iterator<Item = &OriginalGroup> {
        self.value_groups
            .get(value)
            .into_iter()
            .flatten()
            .map(|&position| &self.groups[position])
    }

    /// Original identifier to trace `value` back to: a record with exactly
    /// the canonical value set if there is one, else the first record the
    /// value appeared in.
    fn traced_id(&self, value: &str, canonical_set: &ValueSet) -> Option<GroupId> {
        let traced = self
            .groups_of(value)
            .find(|group| &group.value_set == canonical_set)
            .or_else(|| self.groups_of(value).next())?;
        self.set_ids.get(&traced.value_set).copied()
    }

    fn kept_group(&self, value: &str, canonical_set: &ValueSet) -> bool {
        self.groups_of(value)
            .any(|group| &group.value_set == canonical_set)
    }
}

/// One canonical option as seen by the reconciler.
#[derive(Debug)]
struct CanonicalGroup<'a> {
    option: &'a OptionRecord,
    value_set: ValueSet,
    dependents: BTreeSet<String>,
}

impl<'a> CanonicalGroup<'a> {
    fn new(option: &'a OptionRecord) -> Self {
        Self {
            option,
            value_set: option.values.iter().cloned().collect(),
            dependents: option.dependent_labels().into_iter().collect(),
        }
    }
}

/// Compare an original document with its canonical form.
pub fn reconcile(original: &OptionDocument, canonical: &OptionDocument) -> Reconciliation {
    let index = OriginalIndex::build(original);
    let groups: Vec<CanonicalGroup<'_>> =
        canonical.options.iter().map(CanonicalGroup::new).collect();

    let mut counts = ReconcileCounts::default();
    let group_ids = assign_group_ids(&index, &groups, &mut counts);

    let empty = BTreeSet::new();
    let mut rows = Vec::new();
    for (group, &final_group_id) in groups.iter().zip(&group_ids) {
        let final_group_name = group.option.names.join(",");
        let final_dependents = join_labels(&group.dependents);
        for value in &group.option.values {
            let original_dependents = index.value_dependents.get(value).unwrap_or(&empty);
            rows.push(ReportRow {
                serial: rows.len() + 1,
                value: value.clone(),
                original_name: index.value_names.get(value).cloned().unwrap_or_default(),
                final_group_name: final_group_name.clone(),
                original_group_id: index.traced_id(value, &group.value_set),
                final_group_id,
                group_status: ChangeStatus::from_unchanged(
                    index.kept_group(value, &group.value_set),
                ),
                dependency_status: ChangeStatus::from_unchanged(
                    original_dependents == &group.dependents,
                ),
                original_dependents: join_labels(original_dependents),
                final_dependents: final_dependents.clone(),
            });
        }
    }
    counts.tally_rows(&rows);
    debug!(
        original_groups = index.groups.len(),
        canonical_groups = groups.len(),
        reused_ids = counts.reused_ids,
        new_ids = counts.new_ids,
        rows = counts.rows,
        "reconciled groups"
    );
    Reconciliation {
        group_ids,
        rows,
        counts,
    }
}

fn assign_group_ids(
    index: &OriginalIndex,
    groups: &[CanonicalGroup<'_>],
    counts: &mut ReconcileCounts,
) -> Vec<GroupId> {
    let mut next_id = index.last_id().next();
    let mut minted: BTreeMap<&ValueSet, GroupId> = BTreeMap::new();
    let mut ids = Vec::with_capacity(groups.len());
    for group in groups {
        if let Some(&id) = index.set_ids.get(&group.value_set) {
            counts.reused_ids += 1;
            ids.push(id);
            continue;
        }
        let id = *minted.entry(&group.value_set).or_insert_with(|| {
            let id = next_id;
            next_id = next_id.next();
            counts.new_ids += 1;
            id
        });
        ids.push(id);
    }
    ids
}

fn join_labels(labels: &BTreeSet<String>) -> String {
    labels.iter().map(String::as_str).collect::<Vec<_>>().join(";")
}
