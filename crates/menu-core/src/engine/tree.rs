// ============================================================================
// Menu Core - Tree Builder
// File: crates/menu-core/src/engine/tree.rs
// Description: Flat records -> ordered forest of owned MenuTreeNode
// ============================================================================

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::warn;

use super::collation::collate;
use super::index::RecordIndex;
use super::path::derive_path;
use super::resolver::{self, PathIndex};
use crate::domain::{MenuId, MenuRecord, MenuTreeNode, NodeIter};

/// Sibling order: `sort_order` ascending (missing = 1000), then `title`
/// in locale collation order.
pub fn compare_siblings(a: &MenuTreeNode, b: &MenuTreeNode) -> Ordering {
    a.record
        .effective_sort_order()
        .cmp(&b.record.effective_sort_order())
        .then_with(|| collate(&a.record.title, &b.record.title))
}

/// Build the ordered forest for `records`.
///
/// Every distinct id yields exactly one node. Records whose parent does not
/// resolve become roots, and a group of records whose parents only point at
/// each other is broken open at its first member in input order, which is
/// promoted to a root.
pub fn build_forest(records: &[MenuRecord]) -> Vec<MenuTreeNode> {
    let index = RecordIndex::build(records);
    if index.duplicate_count() > 0 {
        warn!(
            duplicates = index.duplicate_count(),
            "Duplicate menu ids in input, keeping the last record of each"
        );
    }

    // Arena: one slot per distinct id, children expressed as slot numbers.
    let mut slots: Vec<Option<MenuTreeNode>> = Vec::with_capacity(index.len());
    let mut slot_of = HashMap::with_capacity(index.len());
    for (pos, record) in records.iter().enumerate() {
        if !index.is_canonical(pos) {
            continue;
        }
        let info = derive_path(record, &index);
        slot_of.insert(record.id, slots.len());
        slots.push(Some(MenuTreeNode::new(record.clone(), info.full_path, info.truncated)));
    }

    let mut child_slots: Vec<Vec<usize>> = vec![Vec::new(); slots.len()];
    let mut root_slots = Vec::new();
    for (slot, node) in slots.iter().enumerate() {
        let Some(node) = node else { continue };
        match node.record.parent_id {
            None => root_slots.push(slot),
            Some(parent_id) => match slot_of.get(&parent_id) {
                Some(&parent_slot) => child_slots[parent_slot].push(slot),
                None => {
                    warn!(menu_id = node.id(), parent_id, "Menu parent not found, promoting to root");
                    root_slots.push(slot);
                }
            },
        }
    }

    let mut placed = vec![false; slots.len()];
    let mut kept: Vec<Vec<usize>> = vec![Vec::new(); slots.len()];
    let mut order = Vec::with_capacity(slots.len());
    for &root in &root_slots {
        claim_subtree(root, &child_slots, &mut placed, &mut kept, &mut order);
    }

    // Whatever is still unplaced only hangs off a cycle.
    for slot in 0..slots.len() {
        if placed[slot] {
            continue;
        }
        warn!(
            menu_id = ?slots[slot].as_ref().map(MenuTreeNode::id),
            "Menu is only reachable through a parent cycle, promoting to root"
        );
        root_slots.push(slot);
        claim_subtree(slot, &child_slots, &mut placed, &mut kept, &mut order);
    }

    // Reverse pre-order sees every child before its parent.
    for &slot in order.iter().rev() {
        let mut children: Vec<MenuTreeNode> = kept[slot]
            .iter()
            .filter_map(|&child| slots[child].take())
            .collect();
        children.sort_by(compare_siblings);
        if let Some(node) = slots[slot].as_mut() {
            node.children = children;
        }
    }

    let mut forest: Vec<MenuTreeNode> = root_slots
        .iter()
        .filter_map(|&slot| slots[slot].take())
        .collect();
    forest.sort_by(compare_siblings);
    forest
}

fn claim_subtree(
    start: usize,
    child_slots: &[Vec<usize>],
    placed: &mut [bool],
    kept: &mut [Vec<usize>],
    order: &mut Vec<usize>,
) {
    placed[start] = true;
    let mut stack = vec![start];
    while let Some(slot) = stack.pop() {
        order.push(slot);
        for &child in &child_slots[slot] {
            if !placed[child] {
                placed[child] = true;
                kept[slot].push(child);
                stack.push(child);
            }
        }
    }
}

/// An immutable, fully built menu tree.
#[derive(Debug, Clone, Default)]
pub struct MenuTree {
    roots: Vec<MenuTreeNode>,
    len: usize,
    path_index: Option<PathIndex>,
}

impl MenuTree {
    pub fn build(records: &[MenuRecord]) -> Self {
        let roots = build_forest(records);
        let len = NodeIter::over(&roots).count();
        Self {
            roots,
            len,
            path_index: None,
        }
    }

    /// Same as `build`, plus a `fullPath -> node` index for constant-time
    /// path queries on large menus.
    pub fn build_indexed(records: &[MenuRecord]) -> Self {
        let mut tree = Self::build(records);
        tree.path_index = Some(PathIndex::build(&tree.roots));
        tree
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn roots(&self) -> &[MenuTreeNode] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_indexed(&self) -> bool {
        self.path_index.is_some()
    }

    pub fn iter(&self) -> NodeIter<'_> {
        NodeIter::over(&self.roots)
    }

    pub fn find_by_id(&self, id: MenuId) -> Option<&MenuTreeNode> {
        self.iter().find(|node| node.id() == id)
    }

    /// Node whose full path equals `path` after normalization.
    pub fn find_by_path(&self, path: &str) -> Option<&MenuTreeNode> {
        match &self.path_index {
            Some(index) => index.find(&self.roots, path),
            None => resolver::find_node(&self.roots, path),
        }
    }

    /// Root-first chain ending at the node for `path`; empty when not found.
    pub fn ancestor_chain(&self, path: &str) -> Vec<&MenuTreeNode> {
        match &self.path_index {
            Some(index) => index.chain(&self.roots, path),
            None => resolver::find_chain(&self.roots, path),
        }
    }

    pub fn into_roots(self) -> Vec<MenuTreeNode> {
        self.roots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn full_paths(tree: &MenuTree) -> Vec<String> {
        tree.iter().map(|n| n.full_path.clone()).collect()
    }

    fn sample() -> Vec<MenuRecord> {
        vec![
            MenuRecord::new(1, None, "configuration", "Configuration").with_sort_order(2),
            MenuRecord::new(2, Some(1), "menumanagement", "Menu Management"),
            MenuRecord::new(3, None, "masters", "Masters").with_sort_order(1),
            MenuRecord::new(4, Some(3), "brand", "Brand").with_sort_order(20),
            MenuRecord::new(5, Some(3), "area", "Area").with_sort_order(10),
            MenuRecord::new(6, Some(3), "units", "Units"),
            MenuRecord::new(7, Some(5), "district", "District"),
        ]
    }

    #[test]
    fn test_every_record_becomes_one_node() {
        let records = sample();
        let tree = MenuTree::build(&records);
        assert_eq!(tree.len(), records.len());

        let ids: Vec<MenuId> = tree.iter().map(|n| n.id()).collect();
        let unique: HashSet<MenuId> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(unique, records.iter().map(|r| r.id).collect::<HashSet<MenuId>>());
    }

    #[test]
    fn test_full_path_of_child() {
        let tree = MenuTree::build(&sample());
        let node = tree.find_by_id(2).unwrap();
        assert_eq!(node.full_path, "/configuration/menumanagement");
    }

    #[test]
    fn test_sibling_order_by_sort_order_then_title() {
        let tree = MenuTree::build(&sample());
        let roots: Vec<MenuId> = tree.roots().iter().map(|n| n.id()).collect();
        assert_eq!(roots, vec![3, 1]);

        let masters = tree.find_by_id(3).unwrap();
        let order: Vec<Option<i32>> = masters.children.iter().map(|n| n.record.sort_order).collect();
        assert_eq!(order, vec![Some(10), Some(20), None]);
    }

    #[test]
    fn test_title_ties_use_locale_order() {
        let records = vec![
            MenuRecord::new(1, None, "b", "beta"),
            MenuRecord::new(2, None, "a", "Alpha"),
            MenuRecord::new(3, None, "c", "alpha"),
        ];
        let tree = MenuTree::build(&records);
        let titles: Vec<&str> = tree.roots().iter().map(|n| n.title()).collect();
        assert_eq!(titles, vec!["alpha", "Alpha", "beta"]);
    }

    #[test]
    fn test_capitalised_titles_interleave_with_lowercase() {
        let records = vec![
            MenuRecord::new(1, None, "zeta", "Zeta"),
            MenuRecord::new(2, None, "alpha", "alpha"),
            MenuRecord::new(3, None, "brand", "Brand"),
        ];
        let tree = MenuTree::build(&records);
        let titles: Vec<&str> = tree.roots().iter().map(|n| n.title()).collect();
        assert_eq!(titles, vec!["alpha", "Brand", "Zeta"]);
    }

    #[test]
    fn test_dangling_parent_becomes_root() {
        let records = vec![
            MenuRecord::new(1, None, "home", "Home"),
            MenuRecord::new(2, Some(99), "orphan", "Orphan"),
        ];
        let tree = MenuTree::build(&records);
        assert_eq!(tree.roots().len(), 2);
        assert_eq!(tree.find_by_id(2).unwrap().full_path, "/orphan");
    }

    #[test]
    fn test_cycle_terminates_and_keeps_both_nodes() {
        let records = vec![
            MenuRecord::new(1, Some(2), "a", "A"),
            MenuRecord::new(2, Some(1), "b", "B"),
        ];
        let tree = MenuTree::build(&records);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.roots().len(), 1);

        let root = &tree.roots()[0];
        assert_eq!(root.id(), 1);
        assert_eq!(root.full_path, "/b/a");
        assert!(root.truncated);
        assert_eq!(root.children[0].id(), 2);
        assert_eq!(root.children[0].full_path, "/a/b");
        assert!(root.children[0].is_leaf());
    }

    #[test]
    fn test_cycle_below_a_real_root_is_still_conserved() {
        let records = vec![
            MenuRecord::new(1, None, "root", "Root"),
            MenuRecord::new(2, Some(3), "x", "X"),
            MenuRecord::new(3, Some(2), "y", "Y"),
            MenuRecord::new(4, Some(3), "z", "Z"),
        ];
        let tree = MenuTree::build(&records);
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.roots().len(), 2);
    }

    // Compatibility behaviour: earlier duplicates vanish from the tree.
    #[test]
    fn test_duplicate_ids_last_record_wins() {
        let records = vec![
            MenuRecord::new(1, None, "old", "Old"),
            MenuRecord::new(2, Some(1), "child", "Child"),
            MenuRecord::new(1, None, "new", "New"),
        ];
        let tree = MenuTree::build(&records);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.find_by_id(2).unwrap().full_path, "/new/child");
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let records = sample();
        let first = MenuTree::build(&records);
        let second = MenuTree::build(&records);
        assert_eq!(first.len(), second.len());
        assert_eq!(full_paths(&first), full_paths(&second));
        assert_eq!(first.roots(), second.roots());
    }

    #[test]
    fn test_empty_input_builds_empty_tree() {
        let tree = MenuTree::build(&[]);
        assert!(tree.is_empty());
        assert!(tree.find_by_path("/").is_none());
        assert!(tree.ancestor_chain("/anything").is_empty());
    }

    #[test]
    fn test_indexed_tree_answers_like_scanning_tree() {
        let records = sample();
        let plain = MenuTree::build(&records);
        let indexed = MenuTree::build_indexed(&records);
        assert!(indexed.is_indexed());

        for path in ["/masters/area/district", "/configuration/", "/nope", "/"] {
            assert_eq!(
                plain.find_by_path(path).map(|n| n.id()),
                indexed.find_by_path(path).map(|n| n.id())
            );
            let a: Vec<MenuId> = plain.ancestor_chain(path).iter().map(|n| n.id()).collect();
            let b: Vec<MenuId> = indexed.ancestor_chain(path).iter().map(|n| n.id()).collect();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let mut records = vec![MenuRecord::new(0, None, "n0", "N0")];
        for id in 1..1_000 {
            records.push(MenuRecord::new(id, Some(id - 1), &format!("n{}", id), "N"));
        }
        let tree = MenuTree::build(&records);
        assert_eq!(tree.len(), 1_000);

        let deepest = tree.find_by_id(999).unwrap();
        assert_eq!(tree.ancestor_chain(&deepest.full_path).len(), 1_000);
    }
}
