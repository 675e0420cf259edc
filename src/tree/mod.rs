//! Depth-bounded directory tree
//!
//! Counting happens in two passes:
//!
//! - `TreeBuilder`: mirrors the filesystem into `TreeNode`s, descending only
//!   as deep as the report depth needs
//! - `ReportWalker`: visits the nodes at the report depth and hands one
//!   `Report` per node to a `ReportSink`

mod builder;
mod node;
mod walker;

pub use builder::TreeBuilder;
pub use node::TreeNode;
pub use walker::{ReportSink, ReportWalker};
