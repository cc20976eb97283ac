//! Query command: print assembled feed items as JSON.
//!
//! Shows exactly what `build` would put in the feed (order, links,
//! summaries) without writing anything.

use crate::cli::QueryArgs;
use crate::config::SiteConfig;
use crate::debug;
use crate::feed::{FeedItem, FeedSettings, assemble};
use crate::post::{ContentDir, PostSource};
use crate::utils::plural_count;
use anyhow::Result;
use std::io::Write;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let source = ContentDir::new(&config.build.content);
    let output = query(args, config, &source)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}

fn query(args: &QueryArgs, config: &SiteConfig, source: &dyn PostSource) -> Result<String> {
    let settings = FeedSettings::from_config(config)?;
    let posts = source.get_all()?;
    let doc = assemble(&posts, &settings)?;
    debug!("query"; "assembled {}", plural_count(doc.items.len(), "item"));

    let items: &[FeedItem] = match args.limit {
        Some(limit) => &doc.items[..limit.min(doc.items.len())],
        None => &doc.items,
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(items)?
    } else {
        serde_json::to_string(items)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::post::PostRecord;
    use crate::utils::date::DateTimeUtc;
    use serde_json::Value;

    fn args(limit: Option<usize>) -> QueryArgs {
        QueryArgs {
            limit,
            pretty: false,
            site_url: None,
        }
    }

    fn posts() -> Vec<PostRecord> {
        vec![
            PostRecord::new("A", "a", "a".repeat(200))
                .with_published(DateTimeUtc::from_ymd(2024, 1, 1)),
            PostRecord::new("B", "b", "short")
                .with_published(DateTimeUtc::from_ymd(2024, 2, 1)),
        ]
    }

    fn query_json(args: &QueryArgs) -> Value {
        let config = test_parse_config("");
        serde_json::from_str(&query(args, &config, &posts()).unwrap()).unwrap()
    }

    #[test]
    fn test_query_outputs_sorted_items() {
        let json = query_json(&args(None));

        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["slug"], "b");
        assert_eq!(items[0]["link"], "/blog/b/");
        assert_eq!(items[0]["date"], "2024-02-01T00:00:00Z");
        assert_eq!(items[1]["description"], format!("{}...", "a".repeat(150)));
        assert!(items[0].get("content").is_none());
    }

    #[test]
    fn test_query_limit() {
        let json = query_json(&args(Some(1)));
        assert_eq!(json.as_array().unwrap().len(), 1);

        let json = query_json(&args(Some(10)));
        assert_eq!(json.as_array().unwrap().len(), 2);
    }
}
