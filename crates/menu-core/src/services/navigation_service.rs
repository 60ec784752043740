// ============================================================================
// Menu Core - Navigation Service
// File: crates/menu-core/src/services/navigation_service.rs
// ============================================================================
//! Fetch-and-rebuild cycle, page context, and menu edit validation

use std::collections::HashSet;
use std::sync::Arc;

use menu_shared::config::NavigationSettings;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use super::navigation_state::{NavigationSnapshot, NavigationState};
use crate::domain::{MenuForm, MenuId, MenuPayload, MenuTreeNode};
use crate::engine::{self, MenuListingRow, MenuTree, ParentOption, RecordIndex};
use crate::error::DomainError;
use crate::repositories::MenuRepository;

/// Navigation service: owns the refresh cycle for one `NavigationState`
pub struct NavigationService<R: MenuRepository> {
    menu_repo: Arc<R>,
    state: Arc<NavigationState>,
    settings: NavigationSettings,
}

impl<R: MenuRepository> NavigationService<R> {
    pub fn new(menu_repo: Arc<R>, state: Arc<NavigationState>, settings: NavigationSettings) -> Self {
        Self {
            menu_repo,
            state,
            settings,
        }
    }

    pub fn state(&self) -> &Arc<NavigationState> {
        &self.state
    }

    /// Fetch all records, build a fresh tree and install it.
    ///
    /// Returns the node count of the new tree. On fetch failure the current
    /// tree stays installed.
    pub async fn refresh(&self) -> Result<usize, DomainError> {
        info!("Refreshing menu tree from: {}", self.settings.menu_endpoint);

        // 1. Fetch the flat collection
        let records = self.menu_repo.fetch_all().await.map_err(|e| {
            error!("Menu fetch failed, keeping current tree: {}", e);
            e
        })?;

        // 2. Build a brand new tree, never patch the old one
        let tree = if self.settings.build_path_index {
            MenuTree::build_indexed(&records)
        } else {
            MenuTree::build(&records)
        };
        let node_count = tree.len();

        if node_count > self.settings.large_menu_warn_threshold && !tree.is_indexed() {
            warn!(
                node_count,
                threshold = self.settings.large_menu_warn_threshold,
                "Large menu resolved by linear scan, consider enabling navigation.build_path_index"
            );
        }

        // 3. Swap it in
        self.state.install(NavigationSnapshot::new(records, tree));

        info!("Menu tree refreshed: {} nodes", node_count);
        Ok(node_count)
    }

    /// Record `path` as the current page and resolve it.
    pub fn navigate(&self, path: &str) -> Option<MenuTreeNode> {
        self.state.set_current_path(path);
        let page = self.state.current_page();
        if page.is_none() {
            debug!("No menu entry for path: {}", path);
        }
        page
    }

    /// Root-first breadcrumb trail for `path`; empty when nothing matches.
    pub fn breadcrumbs(&self, path: &str) -> Vec<Breadcrumb> {
        let snapshot = self.state.snapshot();
        let trail: Vec<Breadcrumb> = snapshot
            .tree()
            .ancestor_chain(path)
            .into_iter()
            .map(Breadcrumb::from)
            .collect();
        trail
    }

    /// Ids `menu_id` may not be re-parented under, from the last fetch.
    pub fn blocked_parents(&self, menu_id: MenuId) -> HashSet<MenuId> {
        let snapshot = self.state.snapshot();
        let index = RecordIndex::build(snapshot.records());
        engine::blocked_parent_ids(menu_id, &index)
    }

    pub fn parent_options(&self, editing: Option<MenuId>) -> Vec<ParentOption> {
        engine::parent_options(self.state.snapshot().records(), editing)
    }

    pub fn listing(&self) -> Vec<MenuListingRow> {
        engine::flatten_records(self.state.snapshot().records())
    }

    /// Validate a create/update form against the last fetched records.
    pub fn prepare_payload(&self, form: &MenuForm) -> Result<MenuPayload, DomainError> {
        let blocked = match form.menu_id {
            Some(menu_id) => {
                let snapshot = self.state.snapshot();
                let index = RecordIndex::build(snapshot.records());
                if !index.contains(menu_id) {
                    warn!("Edit rejected: menu {} not in current records", menu_id);
                    return Err(DomainError::MenuNotFound(menu_id));
                }
                engine::blocked_parent_ids(menu_id, &index)
            }
            None => HashSet::new(),
        };

        MenuPayload::from_form(form, &blocked).map_err(|e| {
            warn!("Menu payload rejected: {}", e);
            e
        })
    }
}

/// One step of a breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breadcrumb {
    pub menu_id: MenuId,
    pub title: String,
    pub full_path: String,
}

impl From<&MenuTreeNode> for Breadcrumb {
    fn from(node: &MenuTreeNode) -> Self {
        Self {
            menu_id: node.id(),
            title: node.title().to_string(),
            full_path: node.full_path.clone(),
        }
    }
}
