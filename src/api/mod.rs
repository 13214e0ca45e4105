// src/api/mod.rs
//! WordPress API interaction — the ability to read posts and categories.
//!
//! This module separates HTTP plumbing (`client`), query construction
//! (`query`), the page crawl (`pagination`), and the typed operations
//! (`wordpress`).

pub mod client;
mod pagination;
pub mod query;
mod wordpress;

use crate::model::{Category, Post, PostPage};

/// The ability to read content from a WordPress site.
///
/// None of these operations fail: every network, status or content-type
/// problem collapses to the operation's empty default, so callers cannot
/// tell "nothing there" from "site unreachable". Use the `fetch_*` methods
/// on [`WordPressClient`] when the cause matters.
#[async_trait::async_trait]
pub trait ContentRepository: Send + Sync {
    /// One page of posts, newest first, with embedded media and terms.
    async fn list_posts(&self, query: &PostQuery) -> PostPage;
    /// The post with exactly this slug.
    async fn post_by_slug(&self, slug: &str) -> Option<Post>;
    /// Every post slug, crawling pages strictly in order.
    async fn all_slugs(&self) -> Vec<String>;
    /// Up to 100 non-empty categories.
    async fn categories(&self) -> Vec<Category>;
}

// Re-export the public interface
pub use client::{ApiResponse, WpHttpClient};
pub use query::PostQuery;
pub use wordpress::WordPressClient;
