//! Shared utilities for integration testing.

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use tower::ServiceExt;

use vanity_urls::config::loader::parse_yaml;
use vanity_urls::http::HttpServer;

/// Build the router for a YAML config, panicking on bad configs.
pub fn router(config: &str) -> Router {
    let config = parse_yaml(config).expect("config parses");
    HttpServer::from_config(config).expect("route table builds").router()
}

/// Send a GET request through the router.
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Read a response body as text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Content of `<meta name="{name}" content="...">`, or "".
pub fn find_meta(page: &str, name: &str) -> String {
    let sep = format!("<meta name=\"{}\" content=\"", name);
    let Some(start) = page.find(&sep) else {
        return String::new();
    };
    let content = &page[start + sep.len()..];
    match content.find('"') {
        Some(end) => content[..end].to_string(),
        None => String::new(),
    }
}
