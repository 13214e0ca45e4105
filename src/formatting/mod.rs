// src/formatting/mod.rs
//! Presentation helpers over already-fetched posts. No I/O.

mod date;
mod markup;

pub use date::format_date;
pub use markup::strip_markup;

use crate::model::Post;

/// Featured image URL of `post`, if one is embedded.
pub fn featured_image_url(post: &Post) -> Option<&str> {
    post.featured_image_url()
}

/// Category names embedded in `post`, empty when none are.
pub fn category_names(post: &Post) -> Vec<&str> {
    post.category_names()
}

/// One listing line: formatted date, slug, and the title without markup.
pub fn summary_line(post: &Post) -> String {
    format!(
        "{}  {}  {}",
        format_date(&post.date),
        post.slug,
        strip_markup(post.title.as_str())
    )
}
