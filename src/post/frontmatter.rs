//! Frontmatter detection for Markdown posts.

use super::PostMeta;
use anyhow::{Context, Result};

/// Raw frontmatter block, tagged by syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frontmatter<'a> {
    /// `---` fenced YAML.
    Yaml(&'a str),
    /// `+++` fenced TOML.
    Toml(&'a str),
}

impl<'a> Frontmatter<'a> {
    /// Split a document into its frontmatter block and body.
    ///
    /// Both fences must be whole lines (`---` or `+++`, trailing whitespace
    /// allowed). Returns `None` when the document does not open with a
    /// fence or the block is never closed.
    pub fn split(content: &'a str) -> Option<(Self, &'a str)> {
        let trimmed = content.trim_start_matches('\u{feff}').trim_start();
        let (first, block) = split_line(trimmed);

        let fence = first.trim_end();
        let make: fn(&'a str) -> Self = match fence {
            "---" => Self::Yaml,
            "+++" => Self::Toml,
            _ => return None,
        };

        let mut remaining = block;
        while !remaining.is_empty() {
            let (line, next) = split_line(remaining);
            if line.trim_end() == fence {
                let fm = block[..block.len() - remaining.len()].trim();
                return Some((make(fm), next.trim_start_matches(['\r', '\n'])));
            }
            remaining = next;
        }

        None
    }

    /// Deserialize the block into [`PostMeta`].
    pub fn parse(self) -> Result<PostMeta> {
        match self {
            // An empty block still yields defaults
            Self::Yaml(s) | Self::Toml(s) if s.trim().is_empty() => Ok(PostMeta::default()),
            Self::Yaml(s) => serde_yaml::from_str(s).context("invalid YAML frontmatter"),
            Self::Toml(s) => toml::from_str(s).context("invalid TOML frontmatter"),
        }
    }
}

/// First line without its `\n`, and the rest.
fn split_line(s: &str) -> (&str, &str) {
    match s.find('\n') {
        Some(nl) => (&s[..nl], &s[nl + 1..]),
        None => (s, ""),
    }
}

/// Extract frontmatter and return (metadata, body).
pub fn extract_frontmatter(content: &str) -> Result<Option<(PostMeta, &str)>> {
    match Frontmatter::split(content) {
        Some((fm, body)) => Ok(Some((fm.parse()?, body))),
        None => Ok(None),
    }
}
