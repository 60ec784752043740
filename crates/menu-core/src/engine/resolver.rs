//! Path resolution over a built forest.
//!
//! Queries are exact matches on normalized full paths, never prefixes. The
//! plain functions scan the forest depth-first, O(nodes) per query, which is
//! fine for navigation menus of a few hundred entries. `PathIndex` trades a
//! one-off build for constant-time lookups when menus grow past that.

use std::collections::HashMap;

use menu_shared::constants::{PATH_SEPARATOR, ROOT_PATH};

use crate::domain::MenuTreeNode;

/// Strip trailing slashes; the root path (and an empty one) stays `/`.
pub fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches(PATH_SEPARATOR);
    if trimmed.is_empty() {
        ROOT_PATH
    } else {
        trimmed
    }
}

/// First node in pre-order whose full path matches `path`.
pub fn find_node<'a>(forest: &'a [MenuTreeNode], path: &str) -> Option<&'a MenuTreeNode> {
    let wanted = normalize_path(path);
    let mut stack: Vec<&'a MenuTreeNode> = forest.iter().rev().collect();
    while let Some(node) = stack.pop() {
        if normalize_path(&node.full_path) == wanted {
            return Some(node);
        }
        stack.extend(node.children.iter().rev());
    }
    None
}

/// Root-first ancestor chain ending at the first match, or empty.
pub fn find_chain<'a>(forest: &'a [MenuTreeNode], path: &str) -> Vec<&'a MenuTreeNode> {
    let wanted = normalize_path(path);
    let matches = |node: &MenuTreeNode| normalize_path(&node.full_path) == wanted;

    // Each frame is an ancestor plus the index of its next child to try.
    let mut frames: Vec<(&'a MenuTreeNode, usize)> = Vec::new();
    for root in forest {
        if matches(root) {
            return vec![root];
        }
        frames.push((root, 0));

        while let Some(frame) = frames.last_mut() {
            let node: &'a MenuTreeNode = frame.0;
            match node.children.get(frame.1) {
                Some(child) => {
                    frame.1 += 1;
                    if matches(child) {
                        let mut chain: Vec<&'a MenuTreeNode> = frames.iter().map(|(n, _)| *n).collect();
                        chain.push(child);
                        return chain;
                    }
                    frames.push((child, 0));
                }
                None => {
                    frames.pop();
                }
            }
        }
    }
    Vec::new()
}

/// Normalized full path -> child-index address of the first pre-order match.
#[derive(Debug, Clone, Default)]
pub struct PathIndex {
    addresses: HashMap<String, Vec<usize>>,
}

impl PathIndex {
    pub fn build(forest: &[MenuTreeNode]) -> Self {
        let mut addresses = HashMap::new();
        let mut stack: Vec<(&MenuTreeNode, Vec<usize>)> = forest
            .iter()
            .enumerate()
            .rev()
            .map(|(i, node)| (node, vec![i]))
            .collect();

        while let Some((node, address)) = stack.pop() {
            for (i, child) in node.children.iter().enumerate().rev() {
                let mut child_address = address.clone();
                child_address.push(i);
                stack.push((child, child_address));
            }
            addresses
                .entry(normalize_path(&node.full_path).to_string())
                .or_insert(address);
        }

        Self { addresses }
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn find<'a>(&self, forest: &'a [MenuTreeNode], path: &str) -> Option<&'a MenuTreeNode> {
        self.chain(forest, path).pop()
    }

    /// `forest` must be the one this index was built from.
    pub fn chain<'a>(&self, forest: &'a [MenuTreeNode], path: &str) -> Vec<&'a MenuTreeNode> {
        let Some(address) = self.addresses.get(normalize_path(path)) else {
            return Vec::new();
        };

        let mut chain = Vec::with_capacity(address.len());
        let mut level = forest;
        for &i in address {
            match level.get(i) {
                Some(node) => {
                    chain.push(node);
                    level = node.children.as_slice();
                }
                None => return Vec::new(),
            }
        }
        chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MenuId, MenuRecord};
    use crate::engine::tree::build_forest;

    fn forest() -> Vec<MenuTreeNode> {
        build_forest(&[
            MenuRecord::new(1, None, "configuration", "Configuration"),
            MenuRecord::new(2, Some(1), "menumanagement", "Menu Management"),
            MenuRecord::new(3, Some(2), "create", "Create"),
            MenuRecord::new(4, None, "masters", "Masters"),
            MenuRecord::new(5, Some(4), "brand", "Brand"),
        ])
    }

    fn ids(chain: &[&MenuTreeNode]) -> Vec<MenuId> {
        chain.iter().map(|n| n.id()).collect()
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/a/b/"), "/a/b");
        assert_eq!(normalize_path("/a/b//"), "/a/b");
        assert_eq!(normalize_path("/a/b"), "/a/b");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn test_trailing_slash_resolves_to_same_node() {
        let forest = forest();
        let a = find_node(&forest, "/configuration/menumanagement").unwrap();
        let b = find_node(&forest, "/configuration/menumanagement/").unwrap();
        assert_eq!(a.id(), 2);
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_no_prefix_matching() {
        let forest = forest();
        assert!(find_node(&forest, "/configuration/menu").is_none());
        assert!(find_node(&forest, "/configuration/menumanagement/create/extra").is_none());
    }

    #[test]
    fn test_not_found_is_empty() {
        let forest = forest();
        assert!(find_node(&forest, "/does/not/exist").is_none());
        assert!(find_chain(&forest, "/does/not/exist").is_empty());
    }

    #[test]
    fn test_chain_is_root_first() {
        let forest = forest();
        assert_eq!(ids(&find_chain(&forest, "/configuration/menumanagement/create")), vec![1, 2, 3]);
        assert_eq!(ids(&find_chain(&forest, "/masters/brand/")), vec![4, 5]);
        assert_eq!(ids(&find_chain(&forest, "/masters")), vec![4]);
    }

    #[test]
    fn test_chain_backtracks_out_of_dead_subtrees() {
        // configuration (with children) is searched and abandoned before masters.
        let forest = forest();
        assert_eq!(forest[0].id(), 1);
        assert_eq!(ids(&find_chain(&forest, "/masters/brand")), vec![4, 5]);
    }

    #[test]
    fn test_first_pre_order_match_wins_for_duplicate_paths() {
        let forest = build_forest(&[
            MenuRecord::new(1, None, "a", "A").with_sort_order(1),
            MenuRecord::new(2, None, "a", "A2").with_sort_order(2),
        ]);
        assert_eq!(find_node(&forest, "/a").map(|n| n.id()), Some(1));

        let index = PathIndex::build(&forest);
        assert_eq!(index.len(), 1);
        assert_eq!(index.find(&forest, "/a").map(|n| n.id()), Some(1));
    }

    #[test]
    fn test_index_matches_scan() {
        let forest = forest();
        let index = PathIndex::build(&forest);
        assert_eq!(index.len(), 5);
        for node in crate::domain::NodeIter::over(&forest) {
            assert_eq!(ids(&index.chain(&forest, &node.full_path)), ids(&find_chain(&forest, &node.full_path)));
        }
        assert!(index.find(&forest, "/nope").is_none());
    }
}
