//! Build command: write the feed file.

use crate::config::SiteConfig;
use crate::feed;
use crate::post::ContentDir;
use anyhow::Result;
use std::path::PathBuf;

/// Generate the feed from the configured content directory.
pub fn build(config: &SiteConfig) -> Result<PathBuf> {
    let source = ContentDir::new(&config.build.content);
    feed::build_feed(config, &source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;

    #[test]
    fn test_build_from_content_dir() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("posts");
        fs::create_dir_all(&content).unwrap();
        fs::write(
            content.join("hello.md"),
            "---\ntitle: Hello\npubDatetime: 2024-05-01T08:00:00Z\n---\nHello, world.\n",
        )
        .unwrap();
        fs::write(
            content.join("wip.md"),
            "---\ntitle: WIP\npubDatetime: 2024-06-01\ndraft: true\n---\nNot yet.\n",
        )
        .unwrap();

        let mut config = test_parse_config("");
        config.build.content = content;
        config.build.output = dir.path().join("dist");

        let path = build(&config).unwrap();
        let xml = fs::read_to_string(path).unwrap();
        let channel = rss::Channel::read_from(xml.as_bytes()).unwrap();

        assert_eq!(channel.items().len(), 1);
        let item = &channel.items()[0];
        assert_eq!(item.link(), Some("https://example.com/blog/hello/"));
        assert_eq!(item.description(), Some("Hello, world.\n"));
    }
}
