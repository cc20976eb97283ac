//! Configuration utility functions.

use std::path::{Path, PathBuf};
use url::Url;

/// Ensure the URL path ends with `/`, so relative item links resolve
/// beneath it instead of replacing its last segment.
///
/// # Examples
/// ```ignore
/// with_trailing_slash("https://example.com/blog")  -> "https://example.com/blog/"
/// with_trailing_slash("https://example.com")       -> "https://example.com/"
/// ```
pub fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Returns the absolute path to the config file if found.
///
/// # Example
/// ```text
/// /home/user/site/src/content/blog/  ← start
/// /home/user/site/blogfeed.toml      ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================
