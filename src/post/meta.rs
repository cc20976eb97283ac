//! Post metadata from YAML (`---`) or TOML (`+++`) frontmatter.

use serde::{Deserialize, Deserializer};

/// Frontmatter fields recognized on a post.
///
/// | Field         | Aliases                                  |
/// |---------------|------------------------------------------|
/// | `title`       |                                          |
/// | `slug`        |                                          |
/// | `author`      |                                          |
/// | `category`    |                                          |
/// | `description` |                                          |
/// | `draft`       |                                          |
/// | `tags`        |                                          |
/// | `pubDatetime` | `date`, `pub-datetime`, `pub_datetime`   |
/// | `modDatetime` | `updated`, `update`, `mod-datetime`, `mod_datetime` |
///
/// Dates stay raw here; they are parsed once the slug is known so errors
/// can name the post. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostMeta {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub draft: bool,
    #[serde(deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    #[serde(
        alias = "date",
        alias = "pub-datetime",
        alias = "pub_datetime",
        deserialize_with = "deserialize_date"
    )]
    pub pub_datetime: Option<String>,
    #[serde(
        alias = "updated",
        alias = "update",
        alias = "mod-datetime",
        alias = "mod_datetime",
        deserialize_with = "deserialize_date"
    )]
    pub mod_datetime: Option<String>,
}

/// Deserialize tags, treating `null` as empty vec
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// A date written as text, or as a native TOML datetime.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Toml(toml::value::Datetime),
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<RawDate> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|raw| {
        let text = match raw {
            RawDate::Text(s) => s,
            RawDate::Toml(dt) => dt.to_string(),
        };
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }))
}
