//! Domain errors

use thiserror::Error;

use crate::domain::MenuId;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Menu not found: {0}")]
    MenuNotFound(MenuId),

    #[error("Menu {menu_id} cannot be placed under {parent_id}: it would become its own ancestor")]
    InvalidParent { menu_id: MenuId, parent_id: MenuId },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Menu fetch failed: {0}")]
    FetchError(String),

    #[error("Menu decode failed: {0}")]
    DecodeError(#[from] serde_json::Error),
}
