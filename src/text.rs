//! Text/binary detection
//!
//! Whether a file is worth counting is decided from its content, not its
//! name. The decision is made by a [`ContentClassifier`] so traversal code
//! does not care which heuristic is in use.

use std::path::Path;

use tracing::trace;
use unicode_general_category::{GeneralCategory, get_general_category};

/// Share of printable characters above which content counts as text.
pub const TEXT_THRESHOLD: f64 = 0.8;

/// Decides whether raw file content is text.
pub trait ContentClassifier {
    fn is_text(&self, content: &[u8]) -> bool;
}

/// Printable-density heuristic.
///
/// Content must be valid UTF-8. Printable and whitespace characters are
/// counted per decoded character and divided by the byte length, so the
/// result must strictly exceed `threshold`.
#[derive(Debug, Clone, Copy)]
pub struct PrintableRatio {
    pub threshold: f64,
}

impl Default for PrintableRatio {
    fn default() -> Self {
        Self {
            threshold: TEXT_THRESHOLD,
        }
    }
}

impl ContentClassifier for PrintableRatio {
    fn is_text(&self, content: &[u8]) -> bool {
        if content.is_empty() {
            return false;
        }
        let Ok(text) = std::str::from_utf8(content) else {
            return false;
        };
        let printable = text.chars().filter(|&c| is_printable(c)).count();
        printable as f64 / content.len() as f64 > self.threshold
    }
}

/// Whitespace, or a graphic character: letters, marks, numbers,
/// punctuation and symbols. Format, private-use and unassigned code
/// points are not printable.
fn is_printable(c: char) -> bool {
    if c.is_whitespace() {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

/// Read a file and classify it. Unreadable files are not text.
pub fn is_text_file(path: &Path, classifier: &dyn ContentClassifier) -> bool {
    match std::fs::read(path) {
        Ok(content) => classifier.is_text(&content),
        Err(e) => {
            trace!(path = %path.display(), error = %e, "unreadable, treating as binary");
            false
        }
    }
}
