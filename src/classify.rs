//! Path exclusion and extension filtering

use std::path::Path;

use glob::Pattern;

use crate::config::CountConfig;

/// Marker prefix of hidden entries.
pub const HIDDEN_PREFIX: char = '.';

/// Aggregation key used for files without an extension.
pub const NO_EXTENSION: &str = ".";

/// Base name of a path, or an empty string when there is none (e.g. `/`, `..`).
///
/// A `..` or `/` argument therefore never reads as hidden, so `-p ..`
/// counts the parent directory instead of excluding it.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Extension of a path including the leading dot, or an empty string.
///
/// Everything from the last dot of the base name counts, so `.bashrc`
/// yields `.bashrc` and `archive.tar.gz` yields `.gz`.
pub fn extension(path: &Path) -> String {
    let name = base_name(path);
    match name.rfind('.') {
        Some(i) => name[i..].to_string(),
        None => String::new(),
    }
}

/// Extension used as the aggregation key, with [`NO_EXTENSION`] for files without one.
pub fn extension_key(path: &Path) -> String {
    let ext = extension(path);
    if ext.is_empty() {
        NO_EXTENSION.to_string()
    } else {
        ext
    }
}

/// Decides which paths take part in counting.
#[derive(Debug, Clone)]
pub struct PathClassifier {
    excludes: Vec<String>,
    patterns: Vec<Pattern>,
    ext: Option<String>,
}

impl PathClassifier {
    pub fn new(config: &CountConfig) -> Self {
        let patterns = config
            .excludes
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect();
        Self {
            excludes: config.excludes.clone(),
            patterns,
            ext: config.ext.clone(),
        }
    }

    /// Hidden entries, and entries whose name or extension is excluded.
    ///
    /// Every exclude entry is also tried as a glob against the base name,
    /// so `*_test.go` works and `a?c` excludes `abc` as well as `a?c`.
    pub fn should_exclude(&self, path: &Path) -> bool {
        let name = base_name(path);
        if name.starts_with(HIDDEN_PREFIX) {
            return true;
        }
        if self.excludes.iter().any(|e| *e == name) {
            return true;
        }
        if self.patterns.iter().any(|p| p.matches(&name)) {
            return true;
        }
        let ext = extension(path);
        !ext.is_empty() && self.excludes.contains(&ext)
    }

    /// True when an extension filter is set and the path does not carry it.
    /// Only meaningful for files.
    pub fn should_filter_by_extension(&self, path: &Path) -> bool {
        match &self.ext {
            Some(ext) => extension(path) != *ext,
            None => false,
        }
    }

    /// The configured extension filter, if any.
    pub fn ext_filter(&self) -> Option<&str> {
        self.ext.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier(excludes: &[&str], ext: &str) -> PathClassifier {
        let config = CountConfig::new()
            .excludes(excludes.iter().map(|s| s.to_string()).collect())
            .ext(ext);
        PathClassifier::new(&config)
    }

    #[test]
    fn test_extension() {
        assert_eq!(extension(Path::new("src/main.go")), ".go");
        assert_eq!(extension(Path::new("archive.tar.gz")), ".gz");
        assert_eq!(extension(Path::new("Makefile")), "");
        assert_eq!(extension(Path::new(".bashrc")), ".bashrc");
        assert_eq!(extension(Path::new("dir.d/file")), "");
    }

    #[test]
    fn test_extension_key_uses_sentinel() {
        assert_eq!(extension_key(Path::new("LICENSE")), NO_EXTENSION);
        assert_eq!(extension_key(Path::new("a.rs")), ".rs");
    }

    #[test]
    fn test_hidden_always_excluded() {
        let c = classifier(&[], "");
        assert!(c.should_exclude(Path::new(".git")));
        assert!(c.should_exclude(Path::new("src/.hidden.go")));
        assert!(!c.should_exclude(Path::new("src/visible.go")));

        let c = classifier(&["vendor", ".md"], ".go");
        assert!(c.should_exclude(Path::new("a/.env")));
    }

    #[test]
    fn test_exclude_by_name_and_extension() {
        let c = classifier(&["vendor", ".md", "*.lock"], "");
        assert!(c.should_exclude(Path::new("project/vendor")));
        assert!(c.should_exclude(Path::new("README.md")));
        assert!(c.should_exclude(Path::new("Cargo.lock")));
        assert!(!c.should_exclude(Path::new("vendored.rs")));
        assert!(!c.should_exclude(Path::new("src/lib.rs")));
    }

    #[test]
    fn test_exclude_entries_match_as_globs() {
        let c = classifier(&["a?c"], "");
        assert!(c.should_exclude(Path::new("abc")));
        assert!(c.should_exclude(Path::new("a?c")));
        assert!(!c.should_exclude(Path::new("abbc")));
    }

    #[test]
    fn test_root_like_paths_not_hidden() {
        let c = classifier(&[], "");
        assert!(!c.should_exclude(Path::new("/")));
        assert!(!c.should_exclude(Path::new("..")));
    }

    #[test]
    fn test_filter_by_extension() {
        let c = classifier(&[], ".go");
        assert!(!c.should_filter_by_extension(Path::new("a.go")));
        assert!(c.should_filter_by_extension(Path::new("b.txt")));
        assert!(c.should_filter_by_extension(Path::new("Makefile")));

        let c = classifier(&[], "");
        assert!(!c.should_filter_by_extension(Path::new("b.txt")));
        assert_eq!(c.ext_filter(), None);
    }
}
