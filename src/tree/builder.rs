//! TreeBuilder - mirrors the filesystem down to a fixed depth

use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::Result;
use crate::classify::PathClassifier;
use crate::error::CountError;

use super::node::TreeNode;

/// Builds the directory structure reports are taken from.
pub struct TreeBuilder<'a> {
    classifier: &'a PathClassifier,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(classifier: &'a PathClassifier) -> Self {
        Self { classifier }
    }

    /// Add `paths` to `node`, descending into directories while `remaining > 0`.
    ///
    /// Every non-excluded path is appended to `node.paths`. A directory also
    /// gets a child node holding its own entries when budget is left, built
    /// with `remaining - 1`. A `.` path stands for the working directory.
    pub fn build_tree(
        &self,
        node: &mut TreeNode,
        paths: Vec<PathBuf>,
        remaining: usize,
    ) -> Result<()> {
        for path in paths {
            let path = if path == Path::new(".") {
                std::env::current_dir().map_err(CountError::WorkingDirectory)?
            } else {
                path
            };

            if self.classifier.should_exclude(&path) {
                trace!(path = %path.display(), "excluded from tree");
                continue;
            }

            let meta = fs::metadata(&path).map_err(|e| CountError::stat(&path, e))?;
            if meta.is_dir() && remaining != 0 {
                let mut child = TreeNode::labelled(path.clone());
                let entries = read_entries(&path)?;
                self.build_tree(&mut child, entries, remaining - 1)?;
                node.children.push(child);
            }
            node.paths.push(path);
        }
        Ok(())
    }
}

/// Immediate entries of a directory, hidden ones included.
fn read_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| CountError::read_dir(dir, e))?;
    entries
        .map(|entry| {
            entry
                .map(|e| e.path())
                .map_err(|e| CountError::read_dir(dir, e))
        })
        .collect()
}
