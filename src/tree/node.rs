//! Tree node type

use std::path::{Path, PathBuf};

/// One directory level of the scanned tree.
///
/// `paths` holds the entries considered at this level (after exclusion),
/// `children` one node per subdirectory that was descended into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    /// Path this node reports under; `None` for an unlabelled root
    pub path: Option<PathBuf>,
    pub paths: Vec<PathBuf>,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// A root without a label. It never produces a report itself.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn labelled(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Default::default()
        }
    }

    pub fn label(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of levels below this node.
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.height() + 1)
            .max()
            .unwrap_or(0)
    }
}
