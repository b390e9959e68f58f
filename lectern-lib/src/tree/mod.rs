//! Category tree reconstruction.
//!
//! Flat rows carrying an optional parent id are rebuilt into a forest
//! ([`build_forest`]) and flattened into a depth-annotated pre-order sequence
//! ([`flatten`]) so that table screens can render indentation without
//! recursive rendering.
//!
//! # Example
//!
//! ```
//! use lectern_lib::model::Category;
//! use lectern_lib::tree::{build_forest, flatten};
//!
//! let records = vec![
//!     Category::new(1, None),
//!     Category::new(2, Some(1)),
//!     Category::new(3, Some(2)),
//!     Category::new(4, Some(99)),
//! ];
//! let rows = flatten(&build_forest(&records), 0);
//! let shape: Vec<(i64, usize)> = rows.iter().map(|n| (n.record.id(), n.depth)).collect();
//! assert_eq!(shape, vec![(1, 0), (2, 1), (3, 2), (4, 0)]);
//! ```

mod builder;
mod flatten;
mod forest;
mod record;

pub use builder::{TreeBuilder, TreeConfig};
pub use flatten::{TreeNode, flatten};
pub use forest::{ForestNode, build_forest, build_forest_strict};
pub use record::TreeRecord;
