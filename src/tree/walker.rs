//! ReportWalker - emits one report per node at the reporting depth

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::Result;
use crate::index::IndexBuilder;
use crate::stats::{Report, aggregate};

use super::node::TreeNode;

/// Receives reports as the walk produces them.
pub trait ReportSink {
    fn report(&mut self, report: Report) -> io::Result<()>;

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Collects reports in memory.
impl ReportSink for Vec<Report> {
    fn report(&mut self, report: Report) -> io::Result<()> {
        self.push(report);
        Ok(())
    }
}

/// Walks a built tree, counting lines at nodes `remaining` levels down.
pub struct ReportWalker<'a> {
    index: IndexBuilder<'a>,
    ext_filter: Option<&'a str>,
}

impl<'a> ReportWalker<'a> {
    pub fn new(index: IndexBuilder<'a>, ext_filter: Option<&'a str>) -> Self {
        Self { index, ext_filter }
    }

    /// Depth-first, children in directory listing order. Only nodes reached
    /// with `remaining == 0` report; their children are not visited.
    pub fn walk<S: ReportSink + ?Sized>(
        &self,
        node: &TreeNode,
        remaining: usize,
        sink: &mut S,
    ) -> Result<()> {
        if remaining == 0 && !node.paths.is_empty() {
            if let Some(label) = node.label() {
                self.report(label, &node.paths, sink)?;
            }
        }
        if node.is_leaf() || remaining == 0 {
            return Ok(());
        }
        for child in &node.children {
            self.walk(child, remaining - 1, sink)?;
        }
        Ok(())
    }

    fn report<S: ReportSink + ?Sized>(
        &self,
        label: &Path,
        paths: &[PathBuf],
        sink: &mut S,
    ) -> Result<()> {
        let index = self.index.build_index(paths)?;
        if index.is_empty() {
            debug!(path = %label.display(), "nothing to count");
            return Ok(());
        }
        debug!(path = %label.display(), files = index.len(), "counting");
        let aggregation = aggregate(&index);
        let report = Report::new(label, index.len(), aggregation.visible(self.ext_filter));
        sink.report(report)?;
        Ok(())
    }
}
