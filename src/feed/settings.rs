//! Validated feed settings, derived from `[site.info]` and `[site.feed]`.

use super::summary::SummaryLength;
use crate::config::{FeedConfig, FeedFormat, SiteConfig, SiteInfoConfig, check_site_url};
use crate::config::with_trailing_slash;
use crate::error::{FeedError, FeedResult};
use std::path::PathBuf;
use url::Url;

/// Item link pattern with a `{slug}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTemplate(String);

impl LinkTemplate {
    pub const DEFAULT: &'static str = "/blog/{slug}/";
    pub const PLACEHOLDER: &'static str = "{slug}";

    pub fn new(template: impl Into<String>) -> FeedResult<Self> {
        let template = template.into();
        if template.trim().is_empty() {
            return Err(FeedError::configuration(
                FeedConfig::FIELDS.link_template,
                "link template is empty",
            ));
        }
        if !template.contains(Self::PLACEHOLDER) {
            return Err(FeedError::configuration(
                FeedConfig::FIELDS.link_template,
                format!("`{template}` does not contain {}", Self::PLACEHOLDER),
            ));
        }
        Ok(Self(template))
    }

    /// Substitute every `{slug}` occurrence.
    pub fn apply(&self, slug: &str) -> String {
        self.0.replace(Self::PLACEHOLDER, slug)
    }
}

impl Default for LinkTemplate {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

/// Everything the assembler and serializers need from configuration.
#[derive(Debug, Clone)]
pub struct FeedSettings {
    pub title: String,
    pub description: String,
    /// Always ends with `/`.
    pub site_url: Url,
    pub language: String,
    pub author: Option<String>,
    pub email: Option<String>,
    pub link_template: LinkTemplate,
    pub summary_length: SummaryLength,
    pub sort: bool,
    pub render_markdown: bool,
    /// Compact XML instead of indented output.
    pub minify: bool,
    pub format: FeedFormat,
    /// Feed file location relative to the output directory.
    pub feed_path: PathBuf,
}

impl FeedSettings {
    /// Settings with defaults for everything but the channel identity.
    pub fn new(title: impl Into<String>, site_url: Url) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            site_url: with_trailing_slash(site_url),
            language: "en".into(),
            author: None,
            email: None,
            link_template: LinkTemplate::default(),
            summary_length: SummaryLength::DEFAULT,
            sort: true,
            render_markdown: false,
            minify: false,
            format: FeedFormat::Rss,
            feed_path: "rss.xml".into(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> FeedResult<Self> {
        let info = &config.site.info;
        let feed = &config.site.feed;

        let url = info.url.as_deref().ok_or_else(|| {
            FeedError::configuration(SiteInfoConfig::FIELDS.url, "site URL is not set")
        })?;
        let site_url = check_site_url(url)
            .map_err(|message| FeedError::configuration(SiteInfoConfig::FIELDS.url, message))?;

        Ok(Self {
            title: info.title.clone(),
            description: info.description.clone(),
            site_url: with_trailing_slash(site_url),
            language: info.language.clone(),
            author: non_empty(&info.author),
            email: non_empty(&info.email),
            link_template: LinkTemplate::new(feed.link_template.as_str())?,
            summary_length: SummaryLength::try_from(feed.summary_length)?,
            sort: feed.sort,
            render_markdown: feed.render_markdown,
            minify: config.build.minify,
            format: feed.format,
            feed_path: feed.path.clone(),
        })
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
