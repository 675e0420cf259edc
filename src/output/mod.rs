//! Report formatting and display
//!
//! - `console` - plain text reports written as the walk produces them
//! - `json` - all reports collected and printed as one JSON array

mod config;
mod console;
mod json;

pub use config::OutputConfig;
pub use console::ConsoleFormatter;
pub use json::JsonCollector;
