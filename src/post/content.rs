//! Markdown content directory as a post source.

use super::{PostRecord, PostSource, extract_frontmatter, slug_from_path};
use crate::error::{FeedError, FeedResult};
use crate::utils::{date::DateTimeUtc, plural_count};
use crate::debug;
use anyhow::{Context, Result, bail};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::{Path, PathBuf};

const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];

/// Reads every Markdown post below a directory.
///
/// Files are visited in path order, so the returned collection (and any
/// stable sort applied to it) is deterministic. Drafts are left out.
#[derive(Debug, Clone)]
pub struct ContentDir {
    root: PathBuf,
}

impl ContentDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn markdown_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = jwalk::WalkDir::new(&self.root)
            .sort(true)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.path())
            .filter(|path| is_markdown(path))
            .collect();
        files.sort();
        files
    }

    /// Load one file. `Ok(None)` when it has no frontmatter.
    fn load(&self, path: &Path) -> Result<Option<PostRecord>> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let Some((meta, body)) = extract_frontmatter(&source)
            .with_context(|| format!("in {}", path.display()))?
        else {
            debug!("content"; "no frontmatter, skipping {}", path.display());
            return Ok(None);
        };

        let slug = match meta.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slug.trim_matches('/').to_string(),
            _ => slug_from_path(path.strip_prefix(&self.root).unwrap_or(path)),
        };

        let published = parse_date(&slug, meta.pub_datetime.as_deref())?;
        let modified = parse_date(&slug, meta.mod_datetime.as_deref())?;

        Ok(Some(PostRecord {
            title: meta.title.unwrap_or_default(),
            body: body.to_string(),
            published,
            modified,
            author: meta.author,
            category: meta.category,
            description: meta.description,
            draft: meta.draft,
            tags: meta.tags,
            slug,
        }))
    }
}

impl PostSource for ContentDir {
    fn get_all(&self) -> Result<Vec<PostRecord>> {
        if !self.root.is_dir() {
            bail!("content directory not found: {}", self.root.display());
        }

        let mut seen = FxHashSet::default();
        let mut posts = Vec::new();
        let mut drafts = 0;

        for path in self.markdown_files() {
            let Some(post) = self.load(&path)? else {
                continue;
            };
            if post.draft {
                drafts += 1;
                continue;
            }
            if !seen.insert(post.slug.clone()) {
                return Err(FeedError::validation(
                    &post.slug,
                    format!("duplicate slug (again in {})", path.display()),
                )
                .into());
            }
            posts.push(post);
        }

        if drafts > 0 {
            debug!("content"; "excluded {}", plural_count(drafts, "draft"));
        }
        debug!("content"; "loaded {} from {}",
            plural_count(posts.len(), "post"), self.root.display());

        Ok(posts)
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|md| ext.eq_ignore_ascii_case(md))
        })
}

fn parse_date(slug: &str, raw: Option<&str>) -> FeedResult<Option<DateTimeUtc>> {
    raw.map(|text| {
        DateTimeUtc::parse(text)
            .ok_or_else(|| FeedError::validation(slug, format!("invalid date `{text}`")))
    })
    .transpose()
}
