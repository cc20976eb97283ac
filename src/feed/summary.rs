//! Bounded-length post summaries.
//!
//! Length is counted in Unicode scalar values (Rust `char`s), both when
//! measuring and when cutting, so a summary never splits a UTF-8 sequence
//! and fixtures mean the same thing everywhere. Grapheme clusters are not
//! considered: a combining mark may be separated from its base. Cuts ignore
//! word boundaries.

use crate::config::FeedConfig;
use crate::error::{FeedError, FeedResult};
use crate::post::PostRecord;
use std::borrow::Cow;

/// Appended to a truncated summary.
pub const ELLIPSIS: &str = "...";

/// Maximum summary length in characters, excluding the ellipsis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SummaryLength(usize);

impl SummaryLength {
    pub const DEFAULT: Self = Self(150);

    pub const fn new(chars: usize) -> Self {
        Self(chars)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for SummaryLength {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for SummaryLength {
    type Error = FeedError;

    fn try_from(value: i64) -> FeedResult<Self> {
        usize::try_from(value).map(Self).map_err(|_| {
            FeedError::configuration(
                FeedConfig::FIELDS.summary_length,
                format!("must not be negative, got {value}"),
            )
        })
    }
}

/// Return `body` unchanged if it fits in `max`, else its first `max`
/// characters followed by [`ELLIPSIS`].
pub fn summarize(body: &str, max: SummaryLength) -> Cow<'_, str> {
    // `nth(max)` exists only when there are more than `max` chars
    match body.char_indices().nth(max.get()) {
        None => Cow::Borrowed(body),
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &body[..cut])),
    }
}

/// The pre-authored description if present, otherwise a generated summary.
///
/// An authored description is passed through verbatim and `summarize` is
/// not called for it.
pub fn describe(post: &PostRecord, max: SummaryLength) -> Cow<'_, str> {
    match &post.description {
        Some(description) => Cow::Borrowed(description.as_str()),
        None => summarize(&post.body, max),
    }
}
