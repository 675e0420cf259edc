//! Per-extension line totals
//!
//! An [`Aggregation`] maps extension keys to the files and lines counted
//! for them. One is built per reporting node and wrapped in a [`Report`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::classify::{NO_EXTENSION, extension_key};
use crate::lines::count_lines;

/// Totals for a single extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtensionStats {
    /// Number of files that contributed lines
    pub files: usize,
    pub lines: usize,
}

/// Extension key -> totals, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Aggregation {
    by_extension: BTreeMap<String, ExtensionStats>,
}

impl Aggregation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one file's line count under `ext`.
    pub fn record(&mut self, ext: impl Into<String>, lines: usize) {
        let entry = self.by_extension.entry(ext.into()).or_default();
        entry.files += 1;
        entry.lines += lines;
    }

    pub fn get(&self, ext: &str) -> Option<&ExtensionStats> {
        self.by_extension.get(ext)
    }

    /// Line total for `ext`, 0 when absent.
    pub fn lines(&self, ext: &str) -> usize {
        self.get(ext).map_or(0, |s| s.lines)
    }

    pub fn total_lines(&self) -> usize {
        self.by_extension.values().map(|s| s.lines).sum()
    }

    pub fn len(&self) -> usize {
        self.by_extension.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_extension.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExtensionStats)> {
        self.by_extension.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Rows that are shown to the user: never the no-extension row, and
    /// only the filtered extension when a filter is set.
    pub fn visible(&self, ext_filter: Option<&str>) -> Aggregation {
        let by_extension = self
            .by_extension
            .iter()
            .filter(|(k, _)| k.as_str() != NO_EXTENSION)
            .filter(|(k, _)| ext_filter.is_none_or(|f| f == k.as_str()))
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        Aggregation { by_extension }
    }
}

/// Count lines of every file in `files` and group them by extension.
///
/// Files that cannot be read are left out of the totals.
pub fn aggregate(files: &[PathBuf]) -> Aggregation {
    let mut aggregation = Aggregation::new();
    for path in files {
        match count_lines(path) {
            Ok(lines) => aggregation.record(extension_key(path), lines),
            Err(e) => debug!(error = %e, "skipping file"),
        }
    }
    aggregation
}

/// Result for one reporting node.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub path: PathBuf,
    /// Size of the file index the totals were computed from
    pub files: usize,
    pub extensions: Aggregation,
}

impl Report {
    pub fn new(path: &Path, files: usize, extensions: Aggregation) -> Self {
        Self {
            path: path.to_path_buf(),
            files,
            extensions,
        }
    }
}
