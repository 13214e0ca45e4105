// tests/common/mod.rs
//! In-process stand-in for a WordPress site.
//!
//! Each test supplies a responder that maps a request (path plus query
//! parameters) to a canned response. Every request is recorded so tests can
//! assert on what the client asked for.

#![allow(dead_code)]

use axum::{
    body::Body,
    extract::{Query, State},
    http::{self, header, StatusCode, Uri},
    response::Response,
    Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use wpfetch::{ClientConfig, WordPressClient};

pub const POSTS_PATH: &str = "/wp-json/wp/v2/posts";
pub const CATEGORIES_PATH: &str = "/wp-json/wp/v2/categories";

/// A request as seen by the stub.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: HashMap<String, String>,
}

impl RecordedRequest {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }
}

/// A canned response.
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: String,
    pub total_pages: Option<String>,
}

impl StubResponse {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: "application/json; charset=UTF-8",
            body: body.into(),
            total_pages: None,
        }
    }

    pub fn html(body: impl Into<String>) -> Self {
        Self {
            content_type: "text/html; charset=UTF-8",
            ..Self::json(body)
        }
    }

    pub fn status(status: StatusCode) -> Self {
        Self {
            status,
            ..Self::json(format!(
                r#"{{"code":"stub_error","message":"stub","data":{{"status":{}}}}}"#,
                status.as_u16()
            ))
        }
    }

    pub fn with_total_pages(self, total: impl Into<String>) -> Self {
        Self {
            total_pages: Some(total.into()),
            ..self
        }
    }

    fn into_response(self) -> Response {
        let mut builder = http::Response::builder()
            .status(self.status)
            .header(header::CONTENT_TYPE, self.content_type);
        if let Some(total) = self.total_pages {
            builder = builder.header("X-WP-TotalPages", total);
        }
        builder
            .body(Body::from(self.body))
            .expect("stub response is well-formed")
    }
}

type Responder = dyn Fn(&RecordedRequest) -> StubResponse + Send + Sync;

struct StubState {
    responder: Box<Responder>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// A running stub site.
pub struct StubSite {
    pub base_url: String,
    state: Arc<StubState>,
}

impl StubSite {
    /// Starts a stub on an ephemeral localhost port.
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&RecordedRequest) -> StubResponse + Send + Sync + 'static,
    {
        let state = Arc::new(StubState {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server runs");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn client(&self) -> WordPressClient {
        WordPressClient::new(&ClientConfig::with_site_url(Some(self.base_url.clone())))
            .expect("client builds")
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn handle(
    State(state): State<Arc<StubState>>,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let request = RecordedRequest {
        path: uri.path().to_string(),
        query,
    };
    let response = (state.responder)(&request);
    state.requests.lock().unwrap().push(request);
    response.into_response()
}

/// A site root nothing listens on.
pub async fn unreachable_site() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}", addr)
}

/// A minimal post object as WordPress would send it.
pub fn post_json(id: u64, slug: &str) -> String {
    format!(
        r#"{{
            "id": {id},
            "slug": "{slug}",
            "date": "2024-03-05T09:30:00",
            "modified": "2024-03-05T09:30:00",
            "title": {{"rendered": "Post {id}"}},
            "content": {{"rendered": "<p>Body {id}</p>"}},
            "excerpt": {{"rendered": "<p>Excerpt {id}</p>"}},
            "featured_media": 0,
            "categories": [1]
        }}"#
    )
}

/// A JSON array of slug projections.
pub fn slug_page_json(slugs: &[&str]) -> String {
    let entries: Vec<String> = slugs
        .iter()
        .map(|slug| format!(r#"{{"slug":"{}"}}"#, slug))
        .collect();
    format!("[{}]", entries.join(","))
}
