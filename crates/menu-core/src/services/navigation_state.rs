// ============================================================================
// Menu Core - Navigation State
// File: crates/menu-core/src/services/navigation_state.rs
// Description: The one current menu tree, replaced wholesale on refresh
// ============================================================================

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::domain::{MenuRecord, MenuTreeNode};
use crate::engine::MenuTree;

/// Records of one fetch together with the tree built from them.
#[derive(Debug, Default)]
pub struct NavigationSnapshot {
    records: Vec<MenuRecord>,
    tree: MenuTree,
}

impl NavigationSnapshot {
    pub fn new(records: Vec<MenuRecord>, tree: MenuTree) -> Self {
        Self { records, tree }
    }

    pub fn records(&self) -> &[MenuRecord] {
        &self.records
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }
}

/// Owned navigation state, shared by reference (usually `Arc`) with whatever
/// needs the menu. Readers take an `Arc` snapshot and keep using it even if a
/// newer tree is installed meanwhile; snapshots are never mutated.
#[derive(Debug, Default)]
pub struct NavigationState {
    current: RwLock<Arc<NavigationSnapshot>>,
    current_path: RwLock<Option<String>>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Arc<NavigationSnapshot> {
        self.current.read().clone()
    }

    /// Swap in a new snapshot, returning the one it replaced.
    pub fn install(&self, snapshot: NavigationSnapshot) -> Arc<NavigationSnapshot> {
        let next = Arc::new(snapshot);
        let previous = std::mem::replace(&mut *self.current.write(), next);
        debug!(
            previous_nodes = previous.tree().len(),
            "Installed new navigation snapshot"
        );
        previous
    }

    /// Back to an empty tree with no current page (session end).
    pub fn clear(&self) {
        *self.current.write() = Arc::new(NavigationSnapshot::default());
        *self.current_path.write() = None;
    }

    pub fn set_current_path(&self, path: &str) {
        *self.current_path.write() = Some(path.to_string());
    }

    pub fn current_path(&self) -> Option<String> {
        self.current_path.read().clone()
    }

    /// Node for the current path in the current tree, if any.
    pub fn current_page(&self) -> Option<MenuTreeNode> {
        let path = self.current_path()?;
        self.snapshot().tree().find_by_path(&path).cloned()
    }
}
