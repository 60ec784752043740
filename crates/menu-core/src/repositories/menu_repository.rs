//! Menu repository trait (port)

use async_trait::async_trait;
use crate::domain::MenuRecord;
use crate::error::DomainError;

/// Source of the flat menu collection, typically a GET on the menu endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<MenuRecord>, DomainError>;
}
