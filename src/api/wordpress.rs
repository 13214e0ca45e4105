// src/api/wordpress.rs
//! The content client: typed WordPress operations over `WpHttpClient`.
//!
//! Each operation has a fallible `fetch_*` form returning `Result`, and a
//! `ContentRepository` form that collapses any failure to the operation's
//! empty default. The collapse happens in exactly one place per operation,
//! in the trait impl at the bottom of this file.

use super::client::{read_json, WpHttpClient};
use super::pagination::collect_pages;
use super::query::{category_query, slug_lookup_query, slug_page_query, PostQuery};
use super::ContentRepository;
use crate::config::ClientConfig;
use crate::constants::{CATEGORIES_ENDPOINT, MAX_CRAWL_PAGES, POSTS_ENDPOINT};
use crate::error::Result;
use crate::model::{Category, Post, PostPage, SlugEntry};

/// Stateless client for one WordPress site.
#[derive(Clone)]
pub struct WordPressClient {
    http: WpHttpClient,
}

impl WordPressClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            http: WpHttpClient::new(config)?,
        })
    }

    /// Client for the site named by `WP_URL` (or the placeholder site).
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::from_env())
    }

    pub fn api_base(&self) -> &str {
        self.http.api_base()
    }

    /// One page of posts. The page count defaults to 1 when the header is
    /// missing or unparseable.
    pub async fn fetch_posts(&self, query: &PostQuery) -> Result<PostPage> {
        let response = self
            .http
            .get(POSTS_ENDPOINT, &query.to_query_pairs())
            .await?;
        let result = read_json::<Vec<Post>>(response).await?;

        Ok(PostPage {
            total_pages: result.total_pages.unwrap_or(1),
            posts: result.data,
        })
    }

    /// The first post whose slug matches exactly.
    pub async fn fetch_post_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        let response = self
            .http
            .get(POSTS_ENDPOINT, &slug_lookup_query(slug))
            .await?;
        let result = read_json::<Vec<Post>>(response).await?;
        Ok(result.data.into_iter().next())
    }

    /// One page of the slug crawl with the total page count it reports.
    pub async fn fetch_slug_page(&self, page: u32) -> Result<(Vec<String>, u32)> {
        let response = self.http.get(POSTS_ENDPOINT, &slug_page_query(page)).await?;
        let result = read_json::<Vec<SlugEntry>>(response).await?;
        let slugs = result.data.into_iter().map(|entry| entry.slug).collect();
        Ok((slugs, result.total_pages.unwrap_or(1)))
    }

    pub async fn fetch_categories(&self) -> Result<Vec<Category>> {
        let response = self.http.get(CATEGORIES_ENDPOINT, &category_query()).await?;
        let result = read_json::<Vec<Category>>(response).await?;
        Ok(result.data)
    }
}

#[async_trait::async_trait]
impl ContentRepository for WordPressClient {
    /// Failure and an empty listing look the same: no posts, zero pages.
    async fn list_posts(&self, query: &PostQuery) -> PostPage {
        self.fetch_posts(query).await.unwrap_or_else(|e| {
            log::warn!("Post listing unavailable, returning empty page: {}", e);
            PostPage::empty()
        })
    }

    /// Failure and "no such slug" both yield `None`.
    async fn post_by_slug(&self, slug: &str) -> Option<Post> {
        self.fetch_post_by_slug(slug).await.unwrap_or_else(|e| {
            log::warn!("Lookup of slug '{}' failed: {}", slug, e);
            None
        })
    }

    /// A failing page ends the crawl; earlier pages' slugs are still returned.
    async fn all_slugs(&self) -> Vec<String> {
        let crawl = collect_pages(|page| self.fetch_slug_page(page), MAX_CRAWL_PAGES).await;
        if crawl.interrupted.is_some() {
            log::warn!(
                "Slug enumeration incomplete: {} slugs from {} pages",
                crawl.items.len(),
                crawl.pages_fetched
            );
        }
        crawl.items
    }

    /// Failure and a site without categories both yield an empty list.
    async fn categories(&self) -> Vec<Category> {
        self.fetch_categories().await.unwrap_or_else(|e| {
            log::warn!("Category listing unavailable: {}", e);
            Vec::new()
        })
    }
}
