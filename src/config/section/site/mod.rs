//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! title = "Alex's Apache Iceberg Blog"
//! description = "Writing about the Data Lakehouse and Apache Iceberg"
//! url = "https://example.com"
//!
//! [site.feed]
//! path = "rss.xml"
//! link-template = "/blog/{slug}/"
//! summary-length = 150
//! ```

mod feed;
mod info;

pub use feed::{FeedConfig, FeedFormat};
pub use info::{SiteInfoConfig, check_site_url};

use serde::{Deserialize, Serialize};

/// Site section configuration: channel metadata and feed settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site metadata (title, description, url, ...)
    pub info: SiteInfoConfig,

    /// Feed generation settings
    pub feed: FeedConfig,
}
