//! Utility modules shared across the crate.

pub mod date;

use std::path::{Path, PathBuf};

/// Format count with noun, handling pluralization
///
/// - `plural_count(0, "post")` -> `"0 posts"`
/// - `plural_count(1, "post")` -> `"1 post"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}

/// Make a path absolute, canonicalizing when it exists on disk.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "post"), "0 posts");
        assert_eq!(plural_count(1, "post"), "1 post");
        assert_eq!(plural_count(12, "item"), "12 items");
    }

    #[test]
    fn test_normalize_path_is_absolute() {
        assert!(normalize_path(Path::new("does/not/exist")).is_absolute());
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            normalize_path(dir.path()),
            dir.path().canonicalize().unwrap()
        );
    }
}
