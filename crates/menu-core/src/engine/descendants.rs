//! Descendant sets for reparent validation.

use std::collections::HashSet;

use super::index::RecordIndex;
use crate::domain::MenuId;

/// Every id reachable below `root` through the parent index.
///
/// Uses an explicit stack, and only descends into ids seen for the first
/// time, so deep chains and cyclic data both terminate.
pub fn collect_descendants(root: MenuId, index: &RecordIndex<'_>) -> HashSet<MenuId> {
    let mut out = HashSet::new();
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        for child in index.children_of(Some(id)) {
            if out.insert(child.id) {
                stack.push(child.id);
            }
        }
    }
    out
}

/// Ids that must not be offered as the new parent of `menu_id`: itself
/// and all of its descendants.
pub fn blocked_parent_ids(menu_id: MenuId, index: &RecordIndex<'_>) -> HashSet<MenuId> {
    let mut blocked = collect_descendants(menu_id, index);
    blocked.insert(menu_id);
    blocked
}
