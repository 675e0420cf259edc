//! Configuration for a counting run

use std::num::NonZeroU8;
use std::path::PathBuf;

/// Directory depth at which reports are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportDepth {
    /// One aggregate report for the whole invocation.
    #[default]
    Whole,
    /// One report per directory found N levels below each root path.
    PerLevel(NonZeroU8),
}

impl ReportDepth {
    /// Build a depth from a raw `--tree` value, clamped into [0, 255].
    pub fn from_level(level: i64) -> Self {
        let clamped = level.clamp(0, u8::MAX as i64) as u8;
        match NonZeroU8::new(clamped) {
            Some(n) => ReportDepth::PerLevel(n),
            None => ReportDepth::Whole,
        }
    }

    /// Number of directory levels the tree builder may still descend.
    ///
    /// The synthetic root sits one level above the root paths when reporting
    /// per level, so the budget is one more than the requested depth.
    pub fn budget(&self) -> usize {
        match self {
            ReportDepth::Whole => 0,
            ReportDepth::PerLevel(n) => n.get() as usize + 1,
        }
    }

    pub fn is_whole(&self) -> bool {
        matches!(self, ReportDepth::Whole)
    }
}

/// Settings shared by every stage of a run. Built once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct CountConfig {
    /// Root paths to scan (empty = current directory)
    pub paths: Vec<PathBuf>,
    /// Only count files with this extension, including the leading dot
    pub ext: Option<String>,
    /// Base names, glob patterns or extensions excluded anywhere in the tree
    pub excludes: Vec<String>,
    pub depth: ReportDepth,
}

impl CountConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    /// Set the extension filter. An empty string clears it.
    pub fn ext(mut self, ext: impl Into<String>) -> Self {
        let ext = ext.into();
        self.ext = if ext.is_empty() { None } else { Some(ext) };
        self
    }

    pub fn excludes(mut self, excludes: Vec<String>) -> Self {
        self.excludes = excludes;
        self
    }

    pub fn depth(mut self, depth: ReportDepth) -> Self {
        self.depth = depth;
        self
    }
}
