//! # Menu Core
//! 
//! Menu domain entities, the navigation tree engine, the repository port,
//! and the navigation services built on top of them.

pub mod domain;
pub mod engine;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use engine::MenuTree;
pub use error::DomainError;
