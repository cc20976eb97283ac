//! Blog post records and where they come from.
//!
//! A [`PostRecord`] is read-only input to feed generation. Records are
//! produced by a [`PostSource`]; [`ContentDir`] reads Markdown files with
//! frontmatter from disk.

mod content;
mod frontmatter;
mod meta;

pub use content::ContentDir;
pub use frontmatter::{Frontmatter, extract_frontmatter};
pub use meta::PostMeta;

use crate::error::{FeedError, FeedResult};
use crate::utils::date::DateTimeUtc;
use anyhow::Result;

/// One blog post as supplied by a [`PostSource`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostRecord {
    pub title: String,
    /// URL-safe identifier, unique within a collection.
    pub slug: String,
    /// Full text content, may be empty.
    pub body: String,
    /// Original publication time. Required for feed inclusion.
    pub published: Option<DateTimeUtc>,
    /// Set only when the post was edited after publication.
    pub modified: Option<DateTimeUtc>,
    pub author: Option<String>,
    pub category: Option<String>,
    /// Pre-authored summary, preferred over a generated one.
    pub description: Option<String>,
    pub draft: bool,
    pub tags: Vec<String>,
}

impl PostRecord {
    pub fn new(title: impl Into<String>, slug: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            body: body.into(),
            ..Self::default()
        }
    }

    pub fn with_published(mut self, date: DateTimeUtc) -> Self {
        self.published = Some(date);
        self
    }

    pub fn with_modified(mut self, date: DateTimeUtc) -> Self {
        self.modified = Some(date);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Modification time if set, otherwise publication time.
    ///
    /// A record without a publication time is rejected even when it has a
    /// modification time.
    pub fn effective_date(&self) -> FeedResult<DateTimeUtc> {
        let published = self
            .published
            .ok_or_else(|| FeedError::validation(&self.slug, "missing publish date"))?;
        Ok(self.modified.unwrap_or(published))
    }

    /// Check the fields a feed item cannot do without.
    pub fn validate(&self) -> FeedResult<()> {
        if self.slug.trim().is_empty() {
            return Err(FeedError::validation(
                &self.slug,
                format!("empty slug (title: {:?})", self.title),
            ));
        }
        if self.title.trim().is_empty() {
            return Err(FeedError::validation(&self.slug, "missing title"));
        }
        self.effective_date().map(|_| ())
    }
}

/// Supplies the post collection for one feed generation.
pub trait PostSource {
    fn get_all(&self) -> Result<Vec<PostRecord>>;
}

impl PostSource for [PostRecord] {
    fn get_all(&self) -> Result<Vec<PostRecord>> {
        Ok(self.to_vec())
    }
}

impl PostSource for Vec<PostRecord> {
    fn get_all(&self) -> Result<Vec<PostRecord>> {
        Ok(self.clone())
    }
}

/// Derive a slug from a path relative to the content directory.
///
/// The extension is dropped; each segment is lowercased with runs of
/// non-alphanumeric characters collapsed to `-`.
///
/// - `Hello World.md` -> `hello-world`
/// - `2024/My_Post.md` -> `2024/my-post`
pub fn slug_from_path(relative: &std::path::Path) -> String {
    let stem = relative.with_extension("");
    stem.components()
        .filter_map(|c| match c {
            std::path::Component::Normal(s) => Some(slugify(&s.to_string_lossy())),
            _ => None,
        })
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

fn slugify(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for c in segment.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            out.push(c);
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_effective_date_prefers_modified() {
        let post = PostRecord::new("T", "t", "")
            .with_published(DateTimeUtc::from_ymd(2024, 1, 1))
            .with_modified(DateTimeUtc::from_ymd(2024, 5, 1));
        assert_eq!(post.effective_date(), Ok(DateTimeUtc::from_ymd(2024, 5, 1)));

        let post = PostRecord::new("T", "t", "")
            .with_published(DateTimeUtc::from_ymd(2024, 1, 1));
        assert_eq!(post.effective_date(), Ok(DateTimeUtc::from_ymd(2024, 1, 1)));
    }

    #[test]
    fn test_effective_date_requires_published() {
        let post = PostRecord::new("T", "orphan", "")
            .with_modified(DateTimeUtc::from_ymd(2024, 5, 1));
        assert_eq!(
            post.effective_date(),
            Err(FeedError::validation("orphan", "missing publish date"))
        );
    }

    #[test]
    fn test_validate() {
        let date = DateTimeUtc::from_ymd(2024, 1, 1);
        assert!(
            PostRecord::new("T", "t", "")
                .with_published(date)
                .validate()
                .is_ok()
        );

        let err = PostRecord::new("T", " ", "")
            .with_published(date)
            .validate();
        assert!(matches!(err, Err(FeedError::Validation { .. })));

        let err = PostRecord::new("", "no-title", "")
            .with_published(date)
            .validate();
        assert_eq!(err, Err(FeedError::validation("no-title", "missing title")));
    }

    #[test]
    fn test_slug_from_path() {
        assert_eq!(slug_from_path(Path::new("Hello World.md")), "hello-world");
        assert_eq!(slug_from_path(Path::new("2024/My_Post.md")), "2024/my-post");
        assert_eq!(slug_from_path(Path::new("--odd--name--.md")), "odd-name");
        assert_eq!(slug_from_path(Path::new("café.markdown")), "café");
    }

    #[test]
    fn test_slice_source_returns_copy() {
        let posts = vec![PostRecord::new("A", "a", "")];
        assert_eq!(posts.as_slice().get_all().unwrap(), posts);
    }
}
