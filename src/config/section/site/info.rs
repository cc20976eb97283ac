//! `[site.info]` configuration.
//!
//! Channel-level metadata: title, description, base URL.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Site metadata for the feed channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// Site URL, relative item links are resolved against it.
    pub url: Option<String>,

    /// Language code (e.g., "en", "zh-Hans").
    pub language: String,

    /// Fallback author for posts without one.
    pub author: String,

    /// Author email, used to build RSS `author` values.
    pub email: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            url: None,
            language: "en".into(),
            author: String::new(),
            email: String::new(),
        }
    }
}

/// Field paths of `[site.info]`, for diagnostics.
pub struct SiteInfoConfigFields {
    pub title: FieldPath,
    pub url: FieldPath,
    pub email: FieldPath,
}

impl SiteInfoConfig {
    pub const FIELDS: SiteInfoConfigFields = SiteInfoConfigFields {
        title: FieldPath::new("site.info.title"),
        url: FieldPath::new("site.info.url"),
        email: FieldPath::new("site.info.email"),
    };

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `title` must be set (RSS requires a channel title)
    /// - `url` must be set
    /// - `url` must be a valid URL with scheme (e.g., `https://example.com`)
    /// - `email`, when set, must look like an address
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "feed title is empty",
                format!("set {}, e.g.: \"My Blog\"", Self::FIELDS.title),
            );
        }

        let email = self.email.trim();
        if !email.is_empty() && !is_plausible_email(email) {
            diag.error_with_hint(
                Self::FIELDS.email,
                format!("`{email}` is not an email address"),
                "RSS authors are written as \"email (Name)\", e.g.: \"alex@example.com\"",
            );
        }

        let Some(url_str) = &self.url else {
            diag.error_with_hint(
                Self::FIELDS.url,
                "feed links need a site URL but none is configured",
                format!("set {}, e.g.: \"https://example.com\"", Self::FIELDS.url),
            );
            return;
        };

        if let Err(message) = check_site_url(url_str) {
            diag.error_with_hint(Self::FIELDS.url, message, "use format like https://example.com");
        }
    }
}

/// `local@domain.tld` with no whitespace.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
                && !domain.contains('@')
        }
        None => false,
    }
}

/// Parse a site URL, requiring http(s) and a host.
pub fn check_site_url(url_str: &str) -> Result<url::Url, String> {
    let parsed = url::Url::parse(url_str).map_err(|e| format!("invalid URL: {e}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!(
            "scheme '{}' not supported, must be http or https",
            parsed.scheme()
        ));
    }
    if parsed.host_str().is_none() {
        return Err("URL must have a valid host".into());
    }
    Ok(parsed)
}
