//! `[site.feed]` configuration.
//!
//! Controls how posts become feed items: link shape, summary length,
//! ordering, and the output format.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::error::FeedError;
use crate::feed::{LinkTemplate, SummaryLength};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Feed output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    /// RSS 2.0 format (default).
    #[default]
    Rss,
    /// Atom 1.0 format.
    Atom,
}

impl FeedFormat {
    /// Log prefix and display name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rss => "rss",
            Self::Atom => "atom",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FeedConfig {
    /// Output path for the feed file, relative to the output directory.
    pub path: PathBuf,
    /// Feed format: rss | atom.
    pub format: FeedFormat,
    /// Item link pattern, `{slug}` is replaced by the post slug.
    pub link_template: String,
    /// Generated summaries keep at most this many characters.
    ///
    /// Kept signed so a negative value is reported instead of
    /// failing deserialization with a type error.
    pub summary_length: i64,
    /// Order items newest first.
    pub sort: bool,
    /// Render Markdown bodies to HTML for `content:encoded`.
    pub render_markdown: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            path: "rss.xml".into(),
            format: FeedFormat::Rss,
            link_template: LinkTemplate::DEFAULT.to_string(),
            summary_length: SummaryLength::DEFAULT.get() as i64,
            sort: true,
            render_markdown: false,
        }
    }
}

/// Field paths of `[site.feed]`, for diagnostics.
pub struct FeedConfigFields {
    pub path: FieldPath,
    pub link_template: FieldPath,
    pub summary_length: FieldPath,
}

impl FeedConfig {
    pub const FIELDS: FeedConfigFields = FeedConfigFields {
        path: FieldPath::new("site.feed.path"),
        link_template: FieldPath::new("site.feed.link-template"),
        summary_length: FieldPath::new("site.feed.summary-length"),
    };

    /// Validate feed settings.
    ///
    /// # Checks
    /// - `link-template` is non-empty and contains `{slug}`
    /// - `summary-length` is not negative
    /// - `path` is a relative file path
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Err(FeedError::Configuration { field, message }) =
            LinkTemplate::new(self.link_template.as_str())
        {
            diag.error_with_hint(field, message, "e.g.: \"/blog/{slug}/\"");
        }

        if let Err(FeedError::Configuration { field, message }) =
            SummaryLength::try_from(self.summary_length)
        {
            diag.error_with_hint(field, message, "use 0 or a positive number, default is 150");
        }

        if self.path.as_os_str().is_empty() || self.path.is_absolute() {
            diag.error_with_hint(
                Self::FIELDS.path,
                "must be a relative file path",
                "e.g.: \"rss.xml\"",
            );
        }
    }
}
