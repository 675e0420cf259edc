//! Line counting

use std::path::Path;

use crate::Result;
use crate::error::CountError;

/// Count the line-feed separated segments of a file.
///
/// A trailing segment without a newline counts, and so does an empty one:
/// `"a\nb"` and `"a\n"` both have 2 lines, an empty file has 1.
pub fn count_lines(path: &Path) -> Result<usize> {
    let content = std::fs::read(path).map_err(|e| CountError::read(path, e))?;
    Ok(count_segments(&content))
}

pub fn count_segments(content: &[u8]) -> usize {
    content.iter().filter(|&&b| b == b'\n').count() + 1
}
