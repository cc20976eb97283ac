//! Newest-first ordering of post records.

use crate::error::FeedResult;
use crate::post::PostRecord;
use crate::utils::date::DateTimeUtc;

/// Order posts by effective date, newest first.
///
/// The sort is stable: records with equal effective dates keep their input
/// order. Fails on the first record without a publication date. The input
/// is left untouched.
pub fn sort_posts(posts: &[PostRecord]) -> FeedResult<Vec<&PostRecord>> {
    let mut keyed: Vec<(DateTimeUtc, &PostRecord)> = posts
        .iter()
        .map(|post| Ok((post.effective_date()?, post)))
        .collect::<FeedResult<_>>()?;

    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(keyed.into_iter().map(|(_, post)| post).collect())
}
