// src/api/client.rs
//! Pure HTTP client wrapper for the WordPress REST API.
//!
//! This module provides a thin wrapper around reqwest for making requests
//! against the `wp/v2` namespace, and the classification of responses into
//! decoded data or one of the failure kinds in `AppError`. It does no
//! business logic and never substitutes defaults.

use crate::config::ClientConfig;
use crate::constants::TOTAL_PAGES_HEADER;
use crate::error::{AppError, Result};
use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// A thin wrapper around reqwest Client bound to one API base.
#[derive(Clone)]
pub struct WpHttpClient {
    client: Client,
    api_base: String,
}

impl WpHttpClient {
    /// Creates a client for the site named in `config`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(Self::create_headers())
            .build()?;
        Ok(Self {
            client,
            api_base: config.api_base(),
        })
    }

    fn create_headers() -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Makes a GET request to `endpoint` below the API base.
    ///
    /// Only transport failures are errors here; status and content type are
    /// left to [`read_json`].
    pub async fn get(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Response> {
        let url = format!("{}/{}", self.api_base, endpoint);
        log::debug!("GET {} {:?}", url, query);

        let response = self.client.get(url).query(query).send().await?;

        log::debug!("{} -> {}", response.url(), response.status());
        Ok(response)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: StatusCode,
    pub url: String,
    /// Parsed `X-WP-TotalPages`, `None` when missing or not a number.
    pub total_pages: Option<u32>,
}

/// Body WordPress sends with error statuses.
#[derive(Debug, Deserialize)]
struct WpErrorBody {
    code: String,
}

/// Decodes a JSON response, classifying everything else as an error.
///
/// A non-success status yields `ServiceStatus` (with the WordPress error code
/// when the body carries one). A success whose content type is not JSON
/// yields `UnexpectedContentType` without reading the body.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<ApiResponse<T>> {
    let status = response.status();
    let url = response.url().to_string();
    let total_pages = parse_total_pages(response.headers());
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let code = serde_json::from_str::<WpErrorBody>(&body)
            .ok()
            .map(|e| e.code);
        return Err(AppError::ServiceStatus { status, url, code });
    }

    if !is_json_content_type(&content_type) {
        return Err(AppError::UnexpectedContentType { content_type, url });
    }

    let text = response.text().await?;
    let data = serde_json::from_str(&text)?;

    Ok(ApiResponse {
        data,
        status,
        url,
        total_pages,
    })
}

/// Reads `X-WP-TotalPages` as a page count.
pub fn parse_total_pages(headers: &header::HeaderMap) -> Option<u32> {
    headers
        .get(TOTAL_PAGES_HEADER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

/// `application/json`, or any `+json` structured syntax, ignoring parameters.
fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || mime.ends_with("+json")
}
