// ============================================================================
// Menu Core - Menu Record Entity
// File: crates/menu-core/src/domain/menu_record.rs
// Description: Flat menu entry as received from the backend
// ============================================================================

use menu_shared::constants::DEFAULT_SORT_ORDER;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::DomainError;

pub type MenuId = i64;

/// Kind of menu entry. Unknown codes survive a round trip as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<i64>", into = "i64")]
pub enum MenuType {
    #[default]
    Page,
    Group,
    Action,
    External,
    Other(i64),
}

impl MenuType {
    pub fn code(&self) -> i64 {
        match self {
            Self::Page => 0,
            Self::Group => 1,
            Self::Action => 2,
            Self::External => 3,
            Self::Other(code) => *code,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Page => "Page",
            Self::Group => "Group",
            Self::Action => "Action",
            Self::External => "External",
            Self::Other(_) => "Unknown",
        }
    }
}

impl From<Option<i64>> for MenuType {
    fn from(code: Option<i64>) -> Self {
        match code {
            None | Some(0) => Self::Page,
            Some(1) => Self::Group,
            Some(2) => Self::Action,
            Some(3) => Self::External,
            Some(other) => Self::Other(other),
        }
    }
}

impl From<MenuType> for i64 {
    fn from(menu_type: MenuType) -> Self {
        menu_type.code()
    }
}

/// Menu record entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRecord {
    #[serde(rename = "menuId", alias = "id")]
    pub id: MenuId,

    #[serde(default)]
    pub parent_id: Option<MenuId>,

    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub icon_key: Option<String>,

    #[serde(default)]
    pub component_key: Option<String>,

    #[serde(default)]
    pub menu_type: MenuType,

    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_active: bool,

    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_visible: bool,

    #[serde(default)]
    pub sort_order: Option<i32>,
}

impl MenuRecord {
    pub fn new(id: MenuId, parent_id: Option<MenuId>, slug: &str, title: &str) -> Self {
        Self {
            id,
            parent_id,
            slug: slug.to_string(),
            title: title.to_string(),
            icon_key: None,
            component_key: None,
            menu_type: MenuType::Page,
            is_active: true,
            is_visible: true,
            sort_order: None,
        }
    }

    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    /// Sort order used for sibling ordering; missing means `DEFAULT_SORT_ORDER`.
    pub fn effective_sort_order(&self) -> i32 {
        self.sort_order.unwrap_or(DEFAULT_SORT_ORDER)
    }

    pub fn is_root_menu(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Decode the JSON array served by the menu endpoint.
pub fn decode_records(body: &[u8]) -> Result<Vec<MenuRecord>, DomainError> {
    Ok(serde_json::from_slice(body)?)
}

// true / non-zero number => true, everything else (false, 0, null, strings) => false
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        _ => false,
    })
}
