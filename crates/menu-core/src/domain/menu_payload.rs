// ============================================================================
// Menu Core - Menu Form & Payload
// File: crates/menu-core/src/domain/menu_payload.rs
// Description: Edit form state and the normalized body sent on create/update
// ============================================================================

use std::collections::HashSet;

use menu_shared::constants::{DEFAULT_SORT_ORDER, PATH_SEPARATOR};
use menu_shared::utils::{sanitize_slug, trim_to_option};
use serde::Serialize;
use validator::{Validate, ValidationError};

use super::menu_record::{MenuId, MenuRecord, MenuType};
use crate::error::DomainError;

/// Editable form state. `menu_id` is `None` while creating.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuForm {
    pub menu_id: Option<MenuId>,
    pub parent_id: Option<MenuId>,
    pub slug: String,
    pub title: String,
    pub icon_key: Option<String>,
    pub menu_type: MenuType,
    pub is_active: bool,
    pub is_visible: bool,
    pub sort_order: Option<i32>,
    pub component_key: Option<String>,
}

impl Default for MenuForm {
    fn default() -> Self {
        Self {
            menu_id: None,
            parent_id: None,
            slug: String::new(),
            title: String::new(),
            icon_key: None,
            menu_type: MenuType::Page,
            is_active: true,
            is_visible: true,
            sort_order: Some(1),
            component_key: None,
        }
    }
}

impl MenuForm {
    pub fn for_new_root() -> Self {
        Self::default()
    }

    pub fn for_new_child(parent: &MenuRecord) -> Self {
        Self {
            parent_id: Some(parent.id),
            ..Self::default()
        }
    }

    pub fn for_edit(record: &MenuRecord) -> Self {
        Self {
            menu_id: Some(record.id),
            parent_id: record.parent_id,
            slug: record.slug.clone(),
            title: record.title.clone(),
            icon_key: record.icon_key.clone(),
            menu_type: record.menu_type,
            is_active: record.is_active,
            is_visible: record.is_visible,
            sort_order: Some(record.sort_order.unwrap_or(DEFAULT_SORT_ORDER)),
            component_key: record.component_key.clone(),
        }
    }
}

/// Body of a create (POST) or update (PUT) request.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuPayload {
    pub parent_id: Option<MenuId>,

    #[validate(
        length(min = 1, message = "Slug is required"),
        custom(function = "validate_single_segment")
    )]
    pub slug: String,

    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    pub icon_key: Option<String>,
    pub menu_type: MenuType,
    pub is_active: bool,
    pub is_visible: bool,
    pub sort_order: Option<i32>,
    pub component_key: Option<String>,
}

/// A slug is exactly one path segment.
fn validate_single_segment(slug: &str) -> Result<(), ValidationError> {
    if slug.contains(PATH_SEPARATOR) {
        return Err(ValidationError::new("slug_segment").with_message("Slug must not contain '/'".into()));
    }
    Ok(())
}

impl MenuPayload {
    /// Normalize a form into a payload. `blocked_parents` is the set from
    /// `blocked_parent_ids` for the record being edited (empty on create).
    pub fn from_form(form: &MenuForm, blocked_parents: &HashSet<MenuId>) -> Result<Self, DomainError> {
        if let (Some(menu_id), Some(parent_id)) = (form.menu_id, form.parent_id) {
            if blocked_parents.contains(&parent_id) {
                return Err(DomainError::InvalidParent { menu_id, parent_id });
            }
        }

        let payload = Self {
            parent_id: form.parent_id,
            slug: sanitize_slug(form.slug.trim()),
            title: form.title.trim().to_string(),
            icon_key: trim_to_option(form.icon_key.as_deref()),
            menu_type: form.menu_type,
            is_active: form.is_active,
            is_visible: form.is_visible,
            sort_order: form.sort_order,
            component_key: trim_to_option(form.component_key.as_deref()),
        };

        payload
            .validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;
        Ok(payload)
    }
}
