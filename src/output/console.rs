//! Console output formatter
//!
//! Writes each report as soon as it arrives, so a later fatal error still
//! leaves the earlier reports on screen.

use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::stats::Report;
use crate::tree::ReportSink;

use super::config::OutputConfig;

/// Streams reports as text:
///
/// ```text
///
/// counting 3 files in /src/project...
/// .go		120
/// .md		14
/// ```
pub struct ConsoleFormatter<W: WriteColor = StandardStream> {
    config: OutputConfig,
    out: W,
}

impl ConsoleFormatter<StandardStream> {
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            config,
            out: StandardStream::stdout(choice),
        }
    }
}

impl<W: WriteColor> ConsoleFormatter<W> {
    pub fn with_writer(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: WriteColor> ReportSink for ConsoleFormatter<W> {
    fn report(&mut self, report: Report) -> io::Result<()> {
        writeln!(self.out)?;
        write!(self.out, "counting {} files in ", report.files)?;
        self.out.set_color(ColorSpec::new().set_bold(true))?;
        write!(self.out, "{}", report.path.display())?;
        self.out.reset()?;
        writeln!(self.out, "...")?;

        let mut ext_color = ColorSpec::new();
        ext_color.set_fg(Some(Color::Cyan));
        for (ext, stats) in report.extensions.iter() {
            self.out.set_color(&ext_color)?;
            write!(self.out, "{}", ext)?;
            self.out.reset()?;
            writeln!(self.out, "\t\t{}", stats.lines)?;
        }
        self.out.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        if self.config.show_done {
            writeln!(self.out)?;
            writeln!(self.out, "done!")?;
        }
        self.out.flush()
    }
}
