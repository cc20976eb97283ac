//! Feed generation (RSS, Atom).
//!
//! ```text
//! PostSource ──► assemble ──► FeedDocument ──► rss::to_xml / atom::to_xml
//!                  │
//!                  ├── sort_posts   newest first, stable
//!                  └── describe     authored description or summary
//! ```
//!
//! Any invalid record or setting aborts generation, so a partial feed is
//! never written.

mod assemble;
pub mod atom;
pub mod rss;
mod settings;
mod sort;
mod summary;

pub use assemble::{FeedDocument, FeedItem, assemble};
pub use settings::{FeedSettings, LinkTemplate};
pub use sort::sort_posts;
pub use summary::{ELLIPSIS, SummaryLength, describe, summarize};

use crate::config::{FeedFormat, SiteConfig};
use crate::log;
use crate::post::PostSource;
use crate::utils::plural_count;
use anyhow::{Context, Result};
use pulldown_cmark::{Options, Parser, html};
use std::{borrow::Cow, fs, path::PathBuf};
use url::Url;

/// Read posts from `source`, build the configured feed and write it below
/// the output directory. Returns the written path.
pub fn build_feed(config: &SiteConfig, source: &dyn PostSource) -> Result<PathBuf> {
    let settings = FeedSettings::from_config(config)?;
    let posts = source.get_all()?;
    let doc = assemble(&posts, &settings)?;

    let xml = render(&doc, &settings)?;

    let feed_path = config.feed_output_path();
    if let Some(parent) = feed_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&feed_path, xml)
        .with_context(|| format!("failed to write {}", feed_path.display()))?;

    log!(settings.format.as_str(); "{} ({})",
        feed_path.file_name().unwrap_or_default().to_string_lossy(),
        plural_count(doc.items.len(), "item"));
    Ok(feed_path)
}

/// Serialize `doc` in the configured format.
///
/// Minified output is the serializer's compact form. Otherwise elements
/// are indented. Text and CDATA are written verbatim either way.
pub fn render(doc: &FeedDocument, settings: &FeedSettings) -> Result<String> {
    let pretty = !settings.minify;
    match settings.format {
        FeedFormat::Rss => self::rss::to_xml(doc, settings.render_markdown, pretty),
        FeedFormat::Atom => {
            let feed_path = settings.feed_path.to_string_lossy().replace('\\', "/");
            let self_href = absolute_link(&settings.site_url, &feed_path);
            self::atom::to_xml(doc, &self_href, settings.render_markdown, pretty)
        }
    }
}

/// Resolve an item link against the site URL.
///
/// Absolute links pass through. Relative ones are joined with `base`, which
/// should end in `/`: `posts/{slug}/` stays under the site path while
/// `/blog/{slug}/` is rooted at the host.
pub fn absolute_link(base: &Url, link: &str) -> String {
    base.join(link)
        .map(String::from)
        .unwrap_or_else(|_| link.to_string())
}

/// Post body as feed content, optionally rendered from Markdown to HTML.
pub fn render_content(body: &str, markdown: bool) -> Cow<'_, str> {
    if !markdown {
        return Cow::Borrowed(body);
    }
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;
    let mut out = String::with_capacity(body.len() * 3 / 2);
    html::push_html(&mut out, Parser::new_ext(body, options));
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::error::FeedError;
    use crate::post::PostRecord;
    use crate::utils::date::DateTimeUtc;

    #[test]
    fn test_absolute_link() {
        let base = Url::parse("https://example.com/site/").unwrap();
        assert_eq!(absolute_link(&base, "/blog/a/"), "https://example.com/blog/a/");
        assert_eq!(absolute_link(&base, "posts/a/"), "https://example.com/site/posts/a/");
        assert_eq!(
            absolute_link(&base, "https://cdn.example.org/a"),
            "https://cdn.example.org/a"
        );
    }

    #[test]
    fn test_render_content() {
        assert_eq!(render_content("**hi**", false), "**hi**");
        assert_eq!(render_content("**hi**", true), "<p><strong>hi</strong></p>\n");
    }

    fn posts() -> Vec<PostRecord> {
        vec![
            PostRecord::new("Old", "old", "old body")
                .with_published(DateTimeUtc::from_ymd(2024, 1, 1)),
            PostRecord::new("New", "new", "new body")
                .with_published(DateTimeUtc::from_ymd(2024, 3, 1)),
        ]
    }

    #[test]
    fn test_build_feed_writes_rss() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_parse_config("[site.feed]\npath = \"feeds/rss.xml\"");
        config.build.output = dir.path().to_path_buf();

        let path = build_feed(&config, &posts()).unwrap();
        assert_eq!(path, dir.path().join("feeds/rss.xml"));

        let xml = fs::read_to_string(&path).unwrap();
        let channel = ::rss::Channel::read_from(xml.as_bytes()).unwrap();
        let titles: Vec<_> = channel.items().iter().filter_map(|i| i.title()).collect();
        assert_eq!(titles, ["New", "Old"]);
    }

    #[test]
    fn test_build_feed_writes_atom() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_parse_config("[site.feed]\npath = \"atom.xml\"\nformat = \"atom\"");
        config.build.output = dir.path().to_path_buf();
        config.build.minify = true;

        let path = build_feed(&config, &posts()).unwrap();
        let xml = fs::read_to_string(path).unwrap();
        let feed = xml.parse::<atom_syndication::Feed>().unwrap();
        assert_eq!(feed.entries()[0].id(), "https://example.com/blog/new/");
        assert!(
            feed.links()
                .iter()
                .any(|l| l.href() == "https://example.com/atom.xml")
        );
    }

    #[test]
    fn test_build_feed_keeps_multiline_body() {
        let body = "First paragraph.\n\n    indented code\nlast line";
        let posts = vec![
            PostRecord::new("Code", "code", body)
                .with_published(DateTimeUtc::from_ymd(2024, 1, 1)),
        ];

        let mut lines = Vec::new();
        for minify in [true, false] {
            let dir = tempfile::tempdir().unwrap();
            let mut config = test_parse_config("");
            config.build.output = dir.path().to_path_buf();
            config.build.minify = minify;

            let xml = fs::read_to_string(build_feed(&config, &posts).unwrap()).unwrap();
            let channel = ::rss::Channel::read_from(xml.as_bytes()).unwrap();
            let item = &channel.items()[0];
            assert_eq!(item.content(), Some(body));
            assert_eq!(item.description(), Some(body));
            lines.push(xml.lines().count());
        }
        // Indented output has one line per element
        assert!(lines[0] < lines[1]);
    }

    #[test]
    fn test_build_feed_keeps_author_without_email() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_parse_config("");
        config.build.output = dir.path().to_path_buf();

        let posts = vec![PostRecord {
            author: Some("Alex Merced".into()),
            ..PostRecord::new("Iceberg", "iceberg", "")
                .with_published(DateTimeUtc::from_ymd(2024, 1, 1))
        }];

        let xml = fs::read_to_string(build_feed(&config, &posts).unwrap()).unwrap();
        let channel = ::rss::Channel::read_from(xml.as_bytes()).unwrap();
        assert_eq!(channel.items()[0].author(), Some("Alex Merced"));
    }

    #[test]
    fn test_build_feed_invalid_post_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_parse_config("");
        config.build.output = dir.path().to_path_buf();

        let mut posts = posts();
        posts.push(PostRecord::new("Undated", "undated", ""));

        let err = build_feed(&config, &posts).unwrap_err();
        assert_eq!(
            err.downcast_ref::<FeedError>(),
            Some(&FeedError::validation("undated", "missing publish date"))
        );
        assert!(!dir.path().join("rss.xml").exists());
    }
}
