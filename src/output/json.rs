//! JSON output formatting

use std::io::{self, Stdout, Write};

use crate::stats::Report;
use crate::tree::ReportSink;

/// Collects reports and prints them as one pretty-printed JSON array on finish.
pub struct JsonCollector<W: Write = Stdout> {
    reports: Vec<Report>,
    out: W,
}

impl JsonCollector<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for JsonCollector<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> JsonCollector<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            reports: Vec::new(),
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for JsonCollector<W> {
    fn report(&mut self, report: Report) -> io::Result<()> {
        self.reports.push(report);
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&self.reports).map_err(io::Error::other)?;
        writeln!(self.out, "{}", json)?;
        self.out.flush()
    }
}
