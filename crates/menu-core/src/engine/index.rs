//! Lookup tables over a flat record slice.

use std::collections::HashMap;

use crate::domain::{MenuId, MenuRecord};

/// `id -> record` and `parent -> children` lookups, holding positions into
/// the borrowed slice. `None` is the "no parent" key.
///
/// Referential integrity is not checked here: a `parent_id` that resolves
/// to nothing is left for the consumers to handle.
#[derive(Debug, Clone)]
pub struct RecordIndex<'a> {
    records: &'a [MenuRecord],
    by_id: HashMap<MenuId, usize>,
    by_parent: HashMap<Option<MenuId>, Vec<usize>>,
}

impl<'a> RecordIndex<'a> {
    pub fn build(records: &'a [MenuRecord]) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        let mut by_parent: HashMap<Option<MenuId>, Vec<usize>> = HashMap::new();

        for (pos, record) in records.iter().enumerate() {
            // duplicate ids: last one wins
            by_id.insert(record.id, pos);
            by_parent.entry(record.parent_id).or_default().push(pos);
        }

        Self {
            records,
            by_id,
            by_parent,
        }
    }

    pub fn get(&self, id: MenuId) -> Option<&'a MenuRecord> {
        let records = self.records;
        self.by_id.get(&id).map(|&pos| &records[pos])
    }

    pub fn contains(&self, id: MenuId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Direct children in insertion order, duplicates included.
    pub fn children_of(&self, parent: Option<MenuId>) -> impl Iterator<Item = &'a MenuRecord> + '_ {
        let records = self.records;
        self.by_parent
            .get(&parent)
            .into_iter()
            .flatten()
            .map(move |&pos| &records[pos])
    }

    /// True when the record at `pos` is the one `get` returns for its id.
    pub fn is_canonical(&self, pos: usize) -> bool {
        self.records
            .get(pos)
            .and_then(|r| self.by_id.get(&r.id))
            .is_some_and(|&winner| winner == pos)
    }

    pub fn parent_title(&self, record: &MenuRecord) -> Option<&'a str> {
        record
            .parent_id
            .and_then(|pid| self.get(pid))
            .map(|parent| parent.title.as_str())
    }

    pub fn records(&self) -> &'a [MenuRecord] {
        self.records
    }

    /// Number of distinct ids.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn duplicate_count(&self) -> usize {
        self.records.len() - self.by_id.len()
    }
}
