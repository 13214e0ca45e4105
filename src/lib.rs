// src/lib.rs
//! wpfetch library — a thin client over the WordPress REST API.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `Result`
//! - **Configuration** — `ClientConfig`, `CommandLineInput`, `RunConfig`
//! - **Domain model** — `Post`, `Category`, `PostPage`, embedded bundle types
//! - **API client** — `ContentRepository`, `WordPressClient`, `PostQuery`
//! - **Formatting** — `format_date`, `strip_markup`, embedded-data helpers

mod api;
mod config;
mod constants;
mod error;
mod formatting;
mod model;

// --- Error Handling ---
pub use crate::error::{AppError, Result};

// --- Configuration ---
pub use crate::config::{ClientConfig, Command, CommandLineInput, RunConfig};
pub use crate::constants::{DEFAULT_SITE_URL, SITE_URL_ENV, TOTAL_PAGES_HEADER};

// --- Domain Model ---
pub use crate::model::{Category, Embedded, FeaturedMedia, Post, PostPage, Rendered, Term};

// --- API Client ---
pub use crate::api::{ApiResponse, ContentRepository, PostQuery, WordPressClient, WpHttpClient};

// --- Formatting ---
pub use crate::formatting::{
    category_names, featured_image_url, format_date, strip_markup, summary_line,
};
