//! `[build]` section configuration.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where posts are read from and where the feed is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Directory of Markdown posts.
    pub content: PathBuf,
    /// Output directory; the feed path is resolved inside it.
    pub output: PathBuf,
    /// Minify the generated XML.
    pub minify: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "src/content/blog".into(),
            output: "dist".into(),
            minify: false,
        }
    }
}

pub struct BuildSectionConfigFields {
    pub content: FieldPath,
}

impl BuildSectionConfig {
    pub const FIELDS: BuildSectionConfigFields = BuildSectionConfigFields {
        content: FieldPath::new("build.content"),
    };

    /// Validate after path normalization: the content directory must exist.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.content.is_dir() {
            diag.error_with_hint(
                Self::FIELDS.content,
                format!("content directory not found: {}", self.content.display()),
                "point it at the folder holding your Markdown posts",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.content, PathBuf::from("src/content/blog"));
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(!config.build.minify);
    }

    #[test]
    fn test_missing_content_dir() {
        let build = BuildSectionConfig {
            content: "/definitely/not/here".into(),
            ..BuildSectionConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        build.validate(&mut diag);
        assert_eq!(diag.errors()[0].field, BuildSectionConfig::FIELDS.content);
    }
}
