//! Configuration section definitions.
//!
//! | Module  | TOML Section | Purpose                         |
//! |---------|--------------|---------------------------------|
//! | `build` | `[build]`    | Content and output directories  |
//! | `site`  | `[site]`     | Channel info and feed settings  |

pub mod build;
pub mod site;

pub use build::BuildSectionConfig;
pub use site::{FeedConfig, FeedFormat, SiteInfoConfig, SiteSectionConfig, check_site_url};
