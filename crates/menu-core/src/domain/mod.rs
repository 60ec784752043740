//! # Menu Core - Domain Module
//! 
//! Menu entities: flat records, built tree nodes, and edit payloads.

pub mod menu_record;
pub mod menu_node;
pub mod menu_payload;

pub use menu_record::{decode_records, MenuId, MenuRecord, MenuType};
pub use menu_node::{MenuTreeNode, NodeIter};
pub use menu_payload::{MenuForm, MenuPayload};
