//! Path derivation by walking parent references.

use std::collections::HashSet;

use menu_shared::constants::{PATH_SEPARATOR, SORT_KEY_PAD_WIDTH};
use tracing::warn;

use super::index::RecordIndex;
use crate::domain::MenuRecord;

/// Derived addressing data for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathInfo {
    /// `/` followed by the slugs from the root down to the record.
    pub full_path: String,
    /// Parent hops taken; 0 for roots.
    pub depth: usize,
    /// Per-level `{sort_order:0>6}:{slug}` segments joined by `/`.
    pub path_sort_key: String,
    /// The walk stopped on an id it had already visited.
    pub truncated: bool,
}

/// Walk from `record` up through `index` until a root, a dangling parent,
/// or a revisited id.
///
/// A parent id that resolves to nothing ends the walk as if the record were
/// a root. A revisited id ends it with whatever was collected so far and
/// sets `truncated`.
///
/// `depth` counts only hops that reached a parent record: a dangling parent
/// leaves it at 0 and a two-record cycle stops at 1. Parent selector
/// indentation uses this value, so an orphan is indented like a root rather
/// than one level in.
pub fn derive_path(record: &MenuRecord, index: &RecordIndex<'_>) -> PathInfo {
    let mut chain: Vec<&MenuRecord> = vec![record];
    let mut visited = HashSet::from([record.id]);
    let mut truncated = false;
    let mut current = record;

    while let Some(parent_id) = current.parent_id {
        if visited.contains(&parent_id) {
            warn!(
                menu_id = record.id,
                parent_id, "Menu parent chain loops back on itself, path truncated"
            );
            truncated = true;
            break;
        }
        let Some(parent) = index.get(parent_id) else {
            break;
        };
        visited.insert(parent_id);
        chain.push(parent);
        current = parent;
    }

    let depth = chain.len() - 1;
    chain.reverse();

    let mut full_path = String::new();
    let mut path_sort_key = String::new();
    for (level, segment) in chain.iter().enumerate() {
        full_path.push(PATH_SEPARATOR);
        full_path.push_str(&segment.slug);

        if level > 0 {
            path_sort_key.push(PATH_SEPARATOR);
        }
        path_sort_key.push_str(&format!(
            "{:0>width$}:{}",
            segment.effective_sort_order().to_string(),
            segment.slug,
            width = SORT_KEY_PAD_WIDTH
        ));
    }

    PathInfo {
        full_path,
        depth,
        path_sort_key,
        truncated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<MenuRecord> {
        vec![
            MenuRecord::new(1, None, "configuration", "Configuration").with_sort_order(5),
            MenuRecord::new(2, Some(1), "menumanagement", "Menu Management"),
            MenuRecord::new(3, Some(2), "edit", "Edit").with_sort_order(-3),
        ]
    }

    #[test]
    fn test_root_path() {
        let records = sample();
        let index = RecordIndex::build(&records);
        let info = derive_path(&records[0], &index);
        assert_eq!(info.full_path, "/configuration");
        assert_eq!(info.depth, 0);
        assert_eq!(info.path_sort_key, "000005:configuration");
        assert!(!info.truncated);
    }

    #[test]
    fn test_nested_path_and_sort_key() {
        let records = sample();
        let index = RecordIndex::build(&records);
        let info = derive_path(&records[2], &index);
        assert_eq!(info.full_path, "/configuration/menumanagement/edit");
        assert_eq!(info.depth, 2);
        assert_eq!(
            info.path_sort_key,
            "000005:configuration/001000:menumanagement/0000-3:edit"
        );
    }

    #[test]
    fn test_dangling_parent_acts_as_root() {
        let records = vec![MenuRecord::new(7, Some(42), "orphan", "Orphan")];
        let index = RecordIndex::build(&records);
        let info = derive_path(&records[0], &index);
        assert_eq!(info.full_path, "/orphan");
        assert_eq!(info.depth, 0);
        assert!(!info.truncated);
    }

    #[test]
    fn test_two_node_cycle_is_truncated() {
        let records = vec![
            MenuRecord::new(1, Some(2), "a", "A"),
            MenuRecord::new(2, Some(1), "b", "B"),
        ];
        let index = RecordIndex::build(&records);
        let info = derive_path(&records[0], &index);
        assert_eq!(info.full_path, "/b/a");
        assert_eq!(info.depth, 1);
        assert!(info.truncated);
    }

    #[test]
    fn test_self_parent_is_truncated() {
        let records = vec![MenuRecord::new(3, Some(3), "loop", "Loop")];
        let index = RecordIndex::build(&records);
        let info = derive_path(&records[0], &index);
        assert_eq!(info.full_path, "/loop");
        assert_eq!(info.depth, 0);
        assert!(info.truncated);
    }
}
