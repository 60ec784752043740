//! Navigation services built on the tree engine

pub mod navigation_state;
pub mod navigation_service;

pub use navigation_state::{NavigationSnapshot, NavigationState};
pub use navigation_service::{Breadcrumb, NavigationService};
