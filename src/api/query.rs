// src/api/query.rs
//! Query-string builders for the WordPress collection endpoints.

use crate::constants::{CATEGORY_PAGE_SIZE, DEFAULT_POSTS_PER_PAGE, SLUG_CRAWL_PAGE_SIZE};

/// Query-string pairs ready for `RequestBuilder::query`.
pub type QueryPairs = Vec<(&'static str, String)>;

/// Options for a post listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuery {
    pub per_page: u32,
    /// 1-based page number.
    pub page: u32,
    /// Restricts the listing to these categories when non-empty.
    pub categories: Vec<u64>,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_POSTS_PER_PAGE,
            page: 1,
            categories: Vec::new(),
        }
    }
}

impl PostQuery {
    pub fn with_page(self, page: u32) -> Self {
        Self { page, ..self }
    }

    pub fn with_per_page(self, per_page: u32) -> Self {
        Self { per_page, ..self }
    }

    pub fn with_categories(self, categories: Vec<u64>) -> Self {
        Self { categories, ..self }
    }

    /// Newest-first listing with embedded media and terms.
    pub fn to_query_pairs(&self) -> QueryPairs {
        let mut pairs = vec![
            ("per_page", self.per_page.to_string()),
            ("page", self.page.to_string()),
            ("_embed", "true".to_string()),
            ("orderby", "date".to_string()),
            ("order", "desc".to_string()),
        ];

        if !self.categories.is_empty() {
            let joined = self
                .categories
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(("categories", joined));
        }

        pairs
    }
}

/// Exact-slug lookup with embedded relations.
pub fn slug_lookup_query(slug: &str) -> QueryPairs {
    vec![("slug", slug.to_string()), ("_embed", "true".to_string())]
}

/// One page of the slug crawl, trimmed to the `slug` field.
pub fn slug_page_query(page: u32) -> QueryPairs {
    vec![
        ("per_page", SLUG_CRAWL_PAGE_SIZE.to_string()),
        ("page", page.to_string()),
        ("_fields", "slug".to_string()),
    ]
}

/// All non-empty categories.
pub fn category_query() -> QueryPairs {
    vec![
        ("per_page", CATEGORY_PAGE_SIZE.to_string()),
        ("hide_empty", "true".to_string()),
    ]
}
