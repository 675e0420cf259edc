//! File index construction
//!
//! Turns a list of paths into the flat list of files to count. Directories
//! are walked to the bottom regardless of the report depth; bounding the
//! depth is the tree's job.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::Result;
use crate::classify::{HIDDEN_PREFIX, PathClassifier};
use crate::error::CountError;
use crate::text::{ContentClassifier, is_text_file};

/// Builds file indexes from node path lists.
pub struct IndexBuilder<'a> {
    paths: &'a PathClassifier,
    content: &'a dyn ContentClassifier,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(paths: &'a PathClassifier, content: &'a dyn ContentClassifier) -> Self {
        Self { paths, content }
    }

    /// Collect the files to count under `paths`, in directory listing order.
    ///
    /// Files given directly are only checked against the exclude list and
    /// extension filter. Files found inside directories must also be text.
    pub fn build_index(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut index = Vec::new();
        for path in paths {
            self.index_path(path, &mut index)?;
        }
        Ok(index)
    }

    fn index_path(&self, path: &Path, index: &mut Vec<PathBuf>) -> Result<()> {
        let meta = fs::metadata(path).map_err(|e| CountError::stat(path, e))?;
        if !meta.is_dir() {
            if self.paths.should_exclude(path) || self.paths.should_filter_by_extension(path) {
                trace!(path = %path.display(), "skipped");
                return Ok(());
            }
            index.push(path.to_path_buf());
            return Ok(());
        }
        if self.paths.should_exclude(path) {
            trace!(path = %path.display(), "skipped directory");
            return Ok(());
        }
        self.index_dir(path, index)
    }

    fn index_dir(&self, dir: &Path, index: &mut Vec<PathBuf>) -> Result<()> {
        let entries = fs::read_dir(dir).map_err(|e| CountError::read_dir(dir, e))?;

        for entry in entries {
            let entry = entry.map_err(|e| CountError::read_dir(dir, e))?;
            if entry.file_name().to_string_lossy().starts_with(HIDDEN_PREFIX) {
                continue;
            }

            let path = entry.path();
            // Follows symlinks, so a dangling link is a stat failure.
            let meta = fs::metadata(&path).map_err(|e| CountError::stat(&path, e))?;

            if meta.is_dir() {
                if !self.paths.should_exclude(&path) {
                    self.index_dir(&path, index)?;
                }
                continue;
            }

            if self.paths.should_exclude(&path) || self.paths.should_filter_by_extension(&path) {
                continue;
            }
            if !is_text_file(&path, self.content) {
                debug!(path = %path.display(), "not a text file");
                continue;
            }
            index.push(path);
        }

        Ok(())
    }
}
