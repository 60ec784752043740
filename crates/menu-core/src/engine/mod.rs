//! Navigation tree engine.
//!
//! Pure, synchronous transformations: flat records in, an owned forest and
//! lookups out. Degenerate data (dangling parents, cycles, duplicate ids,
//! unmatched paths) is absorbed into defined fallbacks and never surfaces
//! as an error.

pub mod collation;
pub mod index;
pub mod path;
pub mod tree;
pub mod descendants;
pub mod resolver;
pub mod listing;

pub use collation::collate;
pub use index::RecordIndex;
pub use path::{derive_path, PathInfo};
pub use tree::{build_forest, compare_siblings, MenuTree};
pub use descendants::{blocked_parent_ids, collect_descendants};
pub use resolver::{find_chain, find_node, normalize_path, PathIndex};
pub use listing::{allowed_parent_ids, flatten_records, parent_options, MenuListingRow, ParentOption};
