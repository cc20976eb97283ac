//! Turn post records into a format-neutral feed document.

use super::settings::FeedSettings;
use super::sort::sort_posts;
use super::summary::describe;
use crate::error::FeedResult;
use crate::post::PostRecord;
use crate::utils::date::DateTimeUtc;
use serde::Serialize;
use url::Url;

/// One entry of the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedItem {
    pub link: String,
    pub title: String,
    pub slug: String,
    /// Effective date: modification time if set, else publication time.
    pub date: DateTimeUtc,
    pub published: DateTimeUtc,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Full post body, for `content:encoded` / `<content>`.
    #[serde(skip)]
    pub content: String,
}

/// Channel metadata plus items, ready for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct FeedDocument {
    pub title: String,
    pub description: String,
    pub site_url: Url,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub items: Vec<FeedItem>,
}

impl FeedDocument {
    /// Most recent item date, `None` for an empty feed.
    pub fn updated(&self) -> Option<DateTimeUtc> {
        self.items.iter().map(|item| item.date).max()
    }
}

/// Build the feed document for `posts`.
///
/// With sorting enabled items are newest first, otherwise they follow the
/// input order. Every record is validated either way, and the first
/// invalid one aborts the whole feed.
pub fn assemble(posts: &[PostRecord], settings: &FeedSettings) -> FeedResult<FeedDocument> {
    let ordered: Vec<&PostRecord> = if settings.sort {
        sort_posts(posts)?
    } else {
        posts.iter().collect()
    };

    let items = ordered
        .into_iter()
        .map(|post| to_item(post, settings))
        .collect::<FeedResult<Vec<_>>>()?;

    Ok(FeedDocument {
        title: settings.title.clone(),
        description: settings.description.clone(),
        site_url: settings.site_url.clone(),
        language: settings.language.clone(),
        author: settings.author.clone(),
        email: settings.email.clone(),
        items,
    })
}

fn to_item(post: &PostRecord, settings: &FeedSettings) -> FeedResult<FeedItem> {
    post.validate()?;
    let date = post.effective_date()?;
    // validate() guarantees a publication date
    let published = post.published.unwrap_or(date);

    Ok(FeedItem {
        link: settings.link_template.apply(&post.slug),
        title: post.title.clone(),
        slug: post.slug.clone(),
        date,
        published,
        description: describe(post, settings.summary_length).into_owned(),
        author: post.author.clone(),
        category: post.category.clone(),
        tags: post.tags.clone(),
        content: post.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FeedError;
    use crate::feed::{LinkTemplate, SummaryLength};

    fn settings() -> FeedSettings {
        FeedSettings::new("Blog", Url::parse("https://example.com").unwrap())
    }

    fn dated(slug: &str, day: u8) -> PostRecord {
        PostRecord::new(format!("Post {slug}"), slug, "body text")
            .with_published(DateTimeUtc::from_ymd(2024, 1, day))
    }

    #[test]
    fn test_items_sorted_with_links() {
        let posts = vec![dated("a", 1), dated("b", 3), dated("c", 2)];
        let doc = assemble(&posts, &settings()).unwrap();

        let links: Vec<_> = doc.items.iter().map(|i| i.link.as_str()).collect();
        assert_eq!(links, ["/blog/b/", "/blog/c/", "/blog/a/"]);
        assert_eq!(doc.title, "Blog");
        assert_eq!(doc.updated(), Some(DateTimeUtc::from_ymd(2024, 1, 3)));
    }

    #[test]
    fn test_description_precedence() {
        let posts = vec![
            dated("authored", 2).with_description("Hand written"),
            PostRecord {
                body: "x".repeat(300),
                ..dated("generated", 1)
            },
        ];
        let doc = assemble(&posts, &settings()).unwrap();
        assert_eq!(doc.items[0].description, "Hand written");
        assert_eq!(doc.items[1].description, format!("{}...", "x".repeat(150)));
    }

    #[test]
    fn test_custom_template_and_length() {
        let mut settings = settings();
        settings.link_template = LinkTemplate::new("posts/{slug}.html").unwrap();
        settings.summary_length = SummaryLength::new(4);

        let doc = assemble(&[dated("iceberg", 1)], &settings).unwrap();
        assert_eq!(doc.items[0].link, "posts/iceberg.html");
        assert_eq!(doc.items[0].description, "body...");
    }

    #[test]
    fn test_empty_collection() {
        let doc = assemble(&[], &settings()).unwrap();
        assert!(doc.items.is_empty());
        assert_eq!(doc.updated(), None);
    }

    #[test]
    fn test_unsorted_keeps_input_order() {
        let mut settings = settings();
        settings.sort = false;
        let posts = vec![dated("a", 1), dated("b", 3), dated("c", 2)];
        let doc = assemble(&posts, &settings).unwrap();
        let slugs: Vec<_> = doc.items.iter().map(|i| i.slug.as_str()).collect();
        assert_eq!(slugs, ["a", "b", "c"]);
    }

    #[test]
    fn test_unsorted_still_validates() {
        let mut settings = settings();
        settings.sort = false;
        let posts = vec![dated("a", 1), PostRecord::new("No date", "no-date", "")];
        let err = assemble(&posts, &settings).unwrap_err();
        assert_eq!(err, FeedError::validation("no-date", "missing publish date"));
    }

    #[test]
    fn test_missing_title_rejected() {
        let posts = vec![
            PostRecord::new("", "untitled", "")
                .with_published(DateTimeUtc::from_ymd(2024, 1, 1)),
        ];
        let err = assemble(&posts, &settings()).unwrap_err();
        assert_eq!(err, FeedError::validation("untitled", "missing title"));
    }

    #[test]
    fn test_item_keeps_both_dates() {
        let post = dated("edited", 1)
            .with_modified(DateTimeUtc::from_ymd(2024, 2, 1));
        let doc = assemble(&[post], &settings()).unwrap();
        assert_eq!(doc.items[0].date, DateTimeUtc::from_ymd(2024, 2, 1));
        assert_eq!(doc.items[0].published, DateTimeUtc::from_ymd(2024, 1, 1));
    }
}
