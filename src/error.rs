//! Feed generation errors.
//!
//! Both variants abort the whole feed: an RSS document with a broken item
//! is never written.

use crate::config::FieldPath;
use thiserror::Error;

pub type FeedResult<T> = std::result::Result<T, FeedError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// A post record lacks something needed for ordering or linking.
    #[error("post `{slug}`: {message}")]
    Validation { slug: String, message: String },

    /// A feed setting is out of range or malformed.
    #[error("{field}: {message}")]
    Configuration { field: FieldPath, message: String },
}

impl FeedError {
    pub fn validation(slug: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            slug: slug.into(),
            message: message.into(),
        }
    }

    pub fn configuration(field: FieldPath, message: impl Into<String>) -> Self {
        Self::Configuration {
            field,
            message: message.into(),
        }
    }
}
