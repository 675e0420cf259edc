//! Output configuration types

/// Configuration for report output.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Print the closing `done!` line after the last report
    pub show_done: bool,
}

impl OutputConfig {
    pub fn color(use_color: bool) -> Self {
        Self {
            use_color,
            show_done: true,
        }
    }
}
