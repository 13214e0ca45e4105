// src/constants.rs
//! Domain constants that define the operational boundaries of the client.
//!
//! Each constant is named for the WordPress concept it constrains. Reading
//! them top to bottom tells you which endpoints are hit, with what page
//! sizes, and where the site URL comes from.

// ---------------------------------------------------------------------------
// Site configuration
// ---------------------------------------------------------------------------

/// Environment variable holding the WordPress site URL.
pub const SITE_URL_ENV: &str = "WP_URL";

/// Site URL used when `WP_URL` is unset or empty.
///
/// Requests against it are expected to fail and collapse to empty results.
pub const DEFAULT_SITE_URL: &str = "https://your-site.wordpress.com";

/// Path of the REST namespace below the site root.
pub const API_PATH: &str = "/wp-json/wp/v2";

// ---------------------------------------------------------------------------
// Endpoints and headers
// ---------------------------------------------------------------------------

pub const POSTS_ENDPOINT: &str = "posts";
pub const CATEGORIES_ENDPOINT: &str = "categories";

/// Response header carrying the number of result pages for a collection.
pub const TOTAL_PAGES_HEADER: &str = "X-WP-TotalPages";

// ---------------------------------------------------------------------------
// Page sizes
// ---------------------------------------------------------------------------

/// Posts per page for an ordinary listing.
pub const DEFAULT_POSTS_PER_PAGE: u32 = 12;

/// Page size used while crawling slugs. WordPress caps `per_page` at 100.
pub const SLUG_CRAWL_PAGE_SIZE: u32 = 100;

/// Page size for the category listing.
pub const CATEGORY_PAGE_SIZE: u32 = 100;

/// Upper bound on pages visited by a single slug crawl.
///
/// The crawl follows whatever total the latest page reports, so a server
/// that keeps growing its total would otherwise never let it finish.
pub const MAX_CRAWL_PAGES: u32 = 10_000;
