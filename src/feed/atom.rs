//! Atom 1.0 serialization.

use super::{FeedDocument, FeedItem, absolute_link, render_content};
use crate::utils::date::DateTimeUtc;
use anyhow::{Context, Result, anyhow};
use atom_syndication::{
    CategoryBuilder, ContentBuilder, Entry, EntryBuilder, Feed, FeedBuilder, FixedDateTime,
    GeneratorBuilder, Link, LinkBuilder, Person, PersonBuilder, Text, WriteConfig,
};

/// Serialize `doc` as an Atom feed, indented when `pretty`.
///
/// `self_href` is the absolute URL the feed itself is published at.
/// The feed-level `updated` is the newest item date, or the Unix epoch
/// for an empty feed.
pub fn to_xml(
    doc: &FeedDocument,
    self_href: &str,
    render_markdown: bool,
    pretty: bool,
) -> Result<String> {
    let entries = doc
        .items
        .iter()
        .map(|item| to_atom_entry(item, doc, render_markdown))
        .collect::<Result<Vec<_>>>()?;

    let updated = fixed(doc.updated().unwrap_or(DateTimeUtc::from_ymd(1970, 1, 1)))?;

    let authors: Vec<Person> = doc
        .author
        .as_ref()
        .map(|name| {
            vec![
                PersonBuilder::default()
                    .name(name.clone())
                    .email(doc.email.clone())
                    .build(),
            ]
        })
        .unwrap_or_default();

    let self_link: Link = LinkBuilder::default()
        .href(self_href)
        .rel("self".to_string())
        .mime_type(Some("application/atom+xml".to_string()))
        .build();

    let alternate_link: Link = LinkBuilder::default()
        .href(doc.site_url.as_str())
        .rel("alternate".to_string())
        .build();

    let subtitle = (!doc.description.is_empty()).then(|| Text::plain(doc.description.clone()));

    let feed: Feed = FeedBuilder::default()
        .title(Text::plain(doc.title.clone()))
        .id(doc.site_url.as_str())
        .updated(updated)
        .authors(authors)
        .links(vec![self_link, alternate_link])
        .subtitle(subtitle)
        .generator(Some(
            GeneratorBuilder::default()
                .value("blogfeed")
                .version(Some(env!("CARGO_PKG_VERSION").to_string()))
                .build(),
        ))
        .lang(doc.language.clone())
        .entries(entries)
        .build();

    if !pretty {
        return Ok(feed.to_string());
    }
    let config = WriteConfig {
        write_document_declaration: true,
        indent_size: Some(2),
    };
    let buf = feed
        .write_with_config(Vec::new(), config)
        .map_err(|e| anyhow!("failed to write Atom feed: {e}"))?;
    Ok(String::from_utf8(buf)?)
}

fn to_atom_entry(item: &FeedItem, doc: &FeedDocument, render_markdown: bool) -> Result<Entry> {
    let link = absolute_link(&doc.site_url, &item.link);

    let entry_link: Link = LinkBuilder::default()
        .href(&link)
        .rel("alternate".to_string())
        .build();

    let authors: Vec<Person> = item
        .author
        .as_ref()
        .map(|name| vec![PersonBuilder::default().name(name.clone()).build()])
        .unwrap_or_default();

    let categories = item
        .category
        .iter()
        .chain(&item.tags)
        .map(|term| CategoryBuilder::default().term(term.clone()).build())
        .collect::<Vec<_>>();

    let content = (!item.content.is_empty()).then(|| {
        let (value, content_type) = if render_markdown {
            (render_content(&item.content, true).into_owned(), "html")
        } else {
            (item.content.clone(), "text")
        };
        ContentBuilder::default()
            .value(Some(value))
            .content_type(Some(content_type.to_string()))
            .build()
    });

    Ok(EntryBuilder::default()
        .title(Text::plain(item.title.clone()))
        .id(&link)
        .updated(fixed(item.date)?)
        .published(Some(fixed(item.published)?))
        .links(vec![entry_link])
        .summary(Some(Text::plain(item.description.clone())))
        .authors(authors)
        .categories(categories)
        .content(content)
        .build())
}

fn fixed(date: DateTimeUtc) -> Result<FixedDateTime> {
    date.to_rfc3339()
        .parse()
        .with_context(|| format!("invalid Atom date {date}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn make_doc(items: Vec<FeedItem>) -> FeedDocument {
        FeedDocument {
            title: "Test Blog".into(),
            description: "A test blog".into(),
            site_url: Url::parse("https://example.com/").unwrap(),
            language: "en".into(),
            author: Some("Test Author".into()),
            email: Some("test@example.com".into()),
            items,
        }
    }

    fn make_item(slug: &str, published: DateTimeUtc, date: DateTimeUtc) -> FeedItem {
        FeedItem {
            link: format!("/blog/{slug}/"),
            title: format!("Post {slug}"),
            slug: slug.into(),
            date,
            published,
            description: "A test summary".into(),
            author: Some("Post Author".into()),
            category: Some("data".into()),
            tags: vec!["iceberg".into()],
            content: "# Heading".into(),
        }
    }

    #[test]
    fn test_atom_entry_basic() {
        let day = DateTimeUtc::from_ymd(2024, 1, 15);
        let doc = make_doc(vec![make_item("test", day, day)]);

        let entry = to_atom_entry(&doc.items[0], &doc, false).unwrap();
        assert_eq!(entry.title().as_str(), "Post test");
        assert_eq!(entry.id(), "https://example.com/blog/test/");
        assert!(entry.updated().to_rfc3339().starts_with("2024-01-15"));
        assert_eq!(entry.summary().map(Text::as_str), Some("A test summary"));
        assert_eq!(entry.authors()[0].name(), "Post Author");
        let terms: Vec<_> = entry.categories().iter().map(|c| c.term()).collect();
        assert_eq!(terms, ["data", "iceberg"]);
    }

    #[test]
    fn test_atom_entry_dates_and_markdown() {
        let published = DateTimeUtc::from_ymd(2024, 1, 1);
        let modified = DateTimeUtc::new(2024, 2, 1, 12, 0, 0);
        let doc = make_doc(vec![make_item("edited", published, modified)]);

        let entry = to_atom_entry(&doc.items[0], &doc, true).unwrap();
        assert!(entry.updated().to_rfc3339().starts_with("2024-02-01T12:00:00"));
        assert!(
            entry
                .published()
                .is_some_and(|p| p.to_rfc3339().starts_with("2024-01-01"))
        );
        let content = entry.content().unwrap();
        assert_eq!(content.content_type(), Some("html"));
        assert_eq!(content.value(), Some("<h1>Heading</h1>\n"));
    }

    #[test]
    fn test_to_xml_reads_back() {
        let newer = DateTimeUtc::from_ymd(2024, 3, 1);
        let older = DateTimeUtc::from_ymd(2024, 1, 1);
        let doc = make_doc(vec![
            make_item("b", newer, newer),
            make_item("a", older, older),
        ]);

        let xml = to_xml(&doc, "https://example.com/atom.xml", false, true).unwrap();
        let feed = xml.parse::<Feed>().unwrap();

        assert_eq!(feed.title().as_str(), "Test Blog");
        assert_eq!(feed.id(), "https://example.com/");
        assert!(feed.updated().to_rfc3339().starts_with("2024-03-01"));
        assert_eq!(feed.entries().len(), 2);
        assert_eq!(feed.entries()[0].id(), "https://example.com/blog/b/");
        assert!(
            feed.links()
                .iter()
                .any(|l| l.rel() == "self" && l.href() == "https://example.com/atom.xml")
        );
    }

    #[test]
    fn test_empty_feed_uses_epoch() {
        let xml = to_xml(&make_doc(vec![]), "https://example.com/atom.xml", false, false).unwrap();
        let feed = xml.parse::<Feed>().unwrap();
        assert!(feed.entries().is_empty());
        assert!(feed.updated().to_rfc3339().starts_with("1970-01-01"));
    }
}
