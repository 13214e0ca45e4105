// src/model/mod.rs
//! Read-only snapshots of WordPress resources.

mod category;
mod post;

pub use category::Category;
pub use post::{Embedded, FeaturedMedia, Post, PostPage, Rendered, SlugEntry, Term};
