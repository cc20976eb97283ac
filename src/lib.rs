//! blogfeed - RSS and Atom feeds for Markdown blogs.
//!
//! Posts come from a [`post::PostSource`], are ordered newest first and
//! summarized by [`feed::assemble`], then serialized by [`feed::rss`] or
//! [`feed::atom`]. [`feed::build_feed`] runs the whole pipeline and writes
//! the result.

pub mod cli;
pub mod config;
pub mod error;
pub mod feed;
pub mod logger;
pub mod post;
pub mod utils;
