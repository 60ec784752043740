//! Flat, hierarchy-ordered views for the management table and the parent
//! selector of the edit form.

use std::collections::HashSet;

use serde::Serialize;

use super::collation::collate;
use super::descendants::blocked_parent_ids;
use super::index::RecordIndex;
use super::path::derive_path;
use crate::domain::{MenuId, MenuRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuListingRow {
    #[serde(flatten)]
    pub record: MenuRecord,
    pub full_path: String,
    pub depth: usize,
    pub path_sort_key: String,
    pub parent_title: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub truncated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentOption {
    pub menu_id: MenuId,
    pub full_path: String,
    pub depth: usize,
    pub disabled: bool,
}

/// One row per input record, ordered by path sort key (locale collation) so
/// parents precede their children and siblings follow sort order.
pub fn flatten_records(records: &[MenuRecord]) -> Vec<MenuListingRow> {
    let index = RecordIndex::build(records);
    let mut rows: Vec<MenuListingRow> = records
        .iter()
        .map(|record| {
            let info = derive_path(record, &index);
            MenuListingRow {
                record: record.clone(),
                full_path: info.full_path,
                depth: info.depth,
                path_sort_key: info.path_sort_key,
                parent_title: index.parent_title(record).map(str::to_string),
                truncated: info.truncated,
            }
        })
        .collect();
    rows.sort_by(|a, b| collate(&a.path_sort_key, &b.path_sort_key));
    rows
}

/// Parent choices for a form. When `editing` names a record, that record and
/// its descendants are disabled.
pub fn parent_options(records: &[MenuRecord], editing: Option<MenuId>) -> Vec<ParentOption> {
    let index = RecordIndex::build(records);
    let blocked = editing
        .map(|id| blocked_parent_ids(id, &index))
        .unwrap_or_default();

    flatten_records(records)
        .into_iter()
        .map(|row| ParentOption {
            disabled: blocked.contains(&row.record.id),
            menu_id: row.record.id,
            full_path: row.full_path,
            depth: row.depth,
        })
        .collect()
}

/// Ids a parent selector may offer for `editing`.
pub fn allowed_parent_ids(records: &[MenuRecord], editing: Option<MenuId>) -> HashSet<MenuId> {
    parent_options(records, editing)
        .into_iter()
        .filter(|option| !option.disabled)
        .map(|option| option.menu_id)
        .collect()
}
