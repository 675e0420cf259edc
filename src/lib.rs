//! count - line totals of text files, grouped by extension
//!
//! Roots are scanned recursively, binary files are skipped by a content
//! heuristic, and lines are summed per extension either for the whole
//! invocation or per directory at a chosen depth.

pub mod classify;
pub mod config;
pub mod counter;
pub mod error;
pub mod index;
pub mod lines;
pub mod output;
pub mod stats;
pub mod text;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use classify::PathClassifier;
pub use config::{CountConfig, ReportDepth};
pub use counter::{Counter, count};
pub use error::CountError;
pub use index::IndexBuilder;
pub use lines::count_lines;
pub use output::{ConsoleFormatter, JsonCollector, OutputConfig};
pub use stats::{Aggregation, ExtensionStats, Report, aggregate};
pub use text::{ContentClassifier, PrintableRatio, is_text_file};
pub use tree::{ReportSink, ReportWalker, TreeBuilder, TreeNode};

/// Result type for counting operations
pub type Result<T> = std::result::Result<T, CountError>;
