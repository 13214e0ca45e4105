// src/model/post.rs
//! Posts as returned by `GET /wp/v2/posts`, including the `_embedded` bundle.

use serde::{Deserialize, Serialize};

/// A field WordPress renders server-side, e.g. `{"rendered": "<p>Hi</p>"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

impl Rendered {
    pub fn new(rendered: impl Into<String>) -> Self {
        Self {
            rendered: rendered.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.rendered
    }
}

/// A single post snapshot.
///
/// Every field but `id` and `slug` defaults when absent so that responses
/// trimmed with `_fields` still decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub slug: String,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub content: Rendered,
    #[serde(default)]
    pub excerpt: Rendered,
    /// Publish timestamp in the site's timezone, e.g. `2024-03-05T09:30:00`.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub modified: String,
    /// Attachment id of the featured image, 0 when none is set.
    #[serde(default)]
    pub featured_media: u64,
    #[serde(default)]
    pub categories: Vec<u64>,
    #[serde(
        rename = "_embedded",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub embedded: Option<Embedded>,
}

impl Post {
    /// Source URL of the first embedded featured-media entry.
    ///
    /// `None` when the post carries no embedded bundle, the bundle has no
    /// media, or the entry has no URL (WordPress embeds an error object in
    /// place of media the caller may not read).
    pub fn featured_image_url(&self) -> Option<&str> {
        let embedded = self.embedded.as_ref()?;
        let media = embedded.featured_media.as_ref()?.first()?;
        if media.source_url.is_empty() {
            None
        } else {
            Some(media.source_url.as_str())
        }
    }

    /// Names of the terms in the first embedded term group.
    ///
    /// WordPress orders `wp:term` by taxonomy with categories first, so this
    /// yields category names. Empty when nothing is embedded.
    pub fn category_names(&self) -> Vec<&str> {
        let Some(embedded) = &self.embedded else {
            return Vec::new();
        };
        match embedded.terms.as_ref().and_then(|groups| groups.first()) {
            Some(group) => group.iter().map(|term| term.name.as_str()).collect(),
            None => Vec::new(),
        }
    }
}

/// Related resources WordPress resolves inline when `_embed` is requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Embedded {
    #[serde(
        rename = "wp:featuredmedia",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub featured_media: Option<Vec<FeaturedMedia>>,
    /// One group per taxonomy.
    #[serde(rename = "wp:term", default, skip_serializing_if = "Option::is_none")]
    pub terms: Option<Vec<Vec<Term>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedMedia {
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub alt_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

/// The `{"slug": ...}` projection returned for `_fields=slug`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SlugEntry {
    pub slug: String,
}

/// One page of a post listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostPage {
    pub posts: Vec<Post>,
    /// Page count from `X-WP-TotalPages`; 0 only for the failure default.
    pub total_pages: u32,
}

impl PostPage {
    /// The result reported for a failed listing: no posts and zero pages.
    pub fn empty() -> Self {
        Self {
            posts: Vec::new(),
            total_pages: 0,
        }
    }
}
