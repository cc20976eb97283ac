//! RSS 2.0 serialization.

use super::{FeedDocument, FeedItem, absolute_link, render_content};
use anyhow::{Result, anyhow};
use regex::Regex;
use rss::{
    CategoryBuilder, ChannelBuilder, GuidBuilder, Item, ItemBuilder, validation::Validate,
};
use std::{collections::BTreeMap, sync::LazyLock};

const CONTENT_NAMESPACE: &str = "http://purl.org/rss/1.0/modules/content/";

/// Serialize `doc` as an RSS 2.0 channel, indented when `pretty`.
///
/// The channel is validated before it is written, so a feed that readers
/// would reject (bad link, unparsable date) is an error here.
pub fn to_xml(doc: &FeedDocument, render_markdown: bool, pretty: bool) -> Result<String> {
    let items: Vec<Item> = doc
        .items
        .iter()
        .map(|item| to_rss_item(item, doc, render_markdown))
        .collect();

    let namespaces = BTreeMap::from([("content".to_string(), CONTENT_NAMESPACE.to_string())]);

    let channel = ChannelBuilder::default()
        .title(doc.title.clone())
        .link(doc.site_url.to_string())
        .description(doc.description.clone())
        .language(doc.language.clone())
        .generator(concat!("blogfeed ", env!("CARGO_PKG_VERSION")).to_string())
        .last_build_date(doc.updated().map(|date| date.to_rfc2822()))
        .namespaces(namespaces)
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| anyhow!("RSS validation failed: {e}"))?;

    if !pretty {
        return Ok(channel.to_string());
    }
    let buf = channel
        .pretty_write_to(Vec::new(), b' ', 2)
        .map_err(|e| anyhow!("failed to write RSS: {e}"))?;
    Ok(String::from_utf8(buf)?)
}

fn to_rss_item(item: &FeedItem, doc: &FeedDocument, render_markdown: bool) -> Item {
    let link = absolute_link(&doc.site_url, &item.link);

    let categories = item
        .category
        .iter()
        .chain(&item.tags)
        .map(|name| CategoryBuilder::default().name(name.clone()).build())
        .collect::<Vec<_>>();

    let content = (!item.content.is_empty())
        .then(|| render_content(&item.content, render_markdown).into_owned());

    ItemBuilder::default()
        .title(item.title.clone())
        .link(Some(link.clone()))
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .description(item.description.clone())
        .pub_date(item.date.to_rfc2822())
        .author(normalize_rss_author(item.author.as_deref(), doc))
        .categories(categories)
        .content(content)
        .build()
}

/// Normalize an author to the RSS form `email (Name)`.
///
/// A post author already in that form is kept. A bare post author name is
/// paired with the site email, or kept as is when no email is configured.
/// Without a post author the site author is used the same way. `None` only
/// when neither is set.
fn normalize_rss_author(author: Option<&str>, doc: &FeedDocument) -> Option<String> {
    static RE_VALID_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}[ \t]*\([^)]+\)$")
            .expect("author pattern is valid")
    });

    let name = author
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .or(doc.author.as_deref())?;

    if RE_VALID_AUTHOR.is_match(name) {
        return Some(name.to_string());
    }

    match doc.email.as_deref() {
        Some(email) => Some(format!("{email} ({name})")),
        None => Some(name.to_string()),
    }
}
