//! High-level counting API.
//!
//! Ties the stages together: build the tree from the configured roots, then
//! walk it and hand each report to a sink.

use std::path::PathBuf;

use tracing::debug;

use crate::Result;
use crate::classify::PathClassifier;
use crate::config::CountConfig;
use crate::error::CountError;
use crate::index::IndexBuilder;
use crate::stats::Report;
use crate::text::{ContentClassifier, PrintableRatio};
use crate::tree::{ReportSink, ReportWalker, TreeBuilder, TreeNode};

/// Runs a configured count.
pub struct Counter {
    config: CountConfig,
    classifier: PathClassifier,
    content: Box<dyn ContentClassifier>,
}

impl Counter {
    pub fn new(config: CountConfig) -> Self {
        let classifier = PathClassifier::new(&config);
        Self {
            config,
            classifier,
            content: Box::new(PrintableRatio::default()),
        }
    }

    /// Replace the text/binary heuristic.
    pub fn with_content_classifier(mut self, content: impl ContentClassifier + 'static) -> Self {
        self.content = Box::new(content);
        self
    }

    pub fn config(&self) -> &CountConfig {
        &self.config
    }

    /// Build the tree for the configured roots.
    ///
    /// With a whole-tree report the root is labelled with the working
    /// directory and holds the root paths directly. Per-level reporting
    /// leaves the root unlabelled so only deeper nodes report.
    pub fn build_tree(&self) -> Result<TreeNode> {
        let cwd = std::env::current_dir().map_err(CountError::WorkingDirectory)?;
        let paths: Vec<PathBuf> = if self.config.paths.is_empty() {
            vec![cwd.clone()]
        } else {
            self.config.paths.clone()
        };

        let mut root = if self.config.depth.is_whole() {
            TreeNode::labelled(cwd)
        } else {
            TreeNode::root()
        };
        let budget = self.config.depth.budget();
        debug!(roots = paths.len(), budget, "building tree");
        TreeBuilder::new(&self.classifier).build_tree(&mut root, paths, budget)?;
        Ok(root)
    }

    /// Walk a built tree, sending reports to `sink` as they are produced.
    pub fn walk<S: ReportSink + ?Sized>(&self, tree: &TreeNode, sink: &mut S) -> Result<()> {
        let index = IndexBuilder::new(&self.classifier, self.content.as_ref());
        let walker = ReportWalker::new(index, self.classifier.ext_filter());
        walker.walk(tree, self.config.depth.budget(), sink)
    }

    /// Build, walk and finish the sink.
    pub fn run<S: ReportSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        let tree = self.build_tree()?;
        self.walk(&tree, sink)?;
        sink.finish()?;
        Ok(())
    }
}

/// Count with the default heuristic and collect every report.
pub fn count(config: CountConfig) -> Result<Vec<Report>> {
    let mut reports = Vec::new();
    Counter::new(config).run(&mut reports)?;
    Ok(reports)
}
