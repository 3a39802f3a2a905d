//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the vanity handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Dispatch requests to the route table
//! - Turn dispatch outcomes into pages, redirects and 404s

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::any,
    Router,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::VanityConfig;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::http::templates::{render_go_get, render_index, render_vanity};
use crate::observability::{metrics, spans};
use crate::routing::{Dispatch, RouteError, RouteTable};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouteTable>,
    pub config: Arc<VanityConfig>,
}

/// HTTP server for vanity import paths.
pub struct HttpServer {
    router: Router,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server from a configuration and its route table.
    pub fn new(config: VanityConfig, table: RouteTable) -> Self {
        let state = AppState {
            table: Arc::new(table),
            config: Arc::new(config),
        };
        let router = Self::build_router(&state);
        Self { router, state }
    }

    /// Build the route table from `config` and create the server.
    pub fn from_config(config: VanityConfig) -> Result<Self, RouteError> {
        let table = RouteTable::from_config(&config)?;
        Ok(Self::new(config, table))
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(state: &AppState) -> Router {
        let timeout = Duration::from_secs(state.config.server.request_timeout_secs);
        Router::new()
            .route("/{*path}", any(vanity_handler))
            .route("/", any(vanity_handler))
            .with_state(state.clone())
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(spans::request_span))
                    .layer(propagate_request_id_layer())
                    .layer(TimeoutLayer::new(timeout)),
            )
    }

    /// The router, for serving or for driving requests in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.state.table.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &VanityConfig {
        &self.state.config
    }
}

fn is_go_get(uri: &Uri) -> bool {
    uri.query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).any(|(k, v)| k == "go-get" && v == "1"))
        .unwrap_or(false)
}

fn found(target: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, target.to_string())]).into_response()
}

fn not_found(config: &VanityConfig) -> Response {
    if config.redir_404.is_empty() {
        (StatusCode::NOT_FOUND, "404 page not found\n").into_response()
    } else {
        found(&config.redir_404)
    }
}

/// Main vanity handler.
/// Looks up the route and answers with a page, a redirect or a 404.
async fn vanity_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let start_time = Instant::now();
    let path = uri.path();
    let config = &state.config;

    let (outcome, response) = match state.table.dispatch(path) {
        Dispatch::Index if !config.redir_index.is_empty() => {
            tracing::debug!(target_url = %config.redir_index, "Redirecting index");
            ("redirect_index", found(&config.redir_index))
        }
        Dispatch::Index => (
            "index",
            Html(render_index(config, &state.table)).into_response(),
        ),
        Dispatch::NotFound => {
            tracing::debug!(path = %path, "No route matched");
            ("not_found", not_found(config))
        }
        Dispatch::Redirect(target) => {
            tracing::info!(path = %path, target_url = %target, "Redirecting download");
            ("redirect", found(&target))
        }
        Dispatch::Vanity(resolved) => {
            let resolved = resolved.with_site(&config.host, &config.title, &config.logo_url);
            let body = if is_go_get(&uri) {
                render_go_get(&resolved)
            } else {
                render_vanity(&resolved, config)
            };
            let cache_control = resolved
                .entry
                .map(|e| e.cache_control.clone())
                .unwrap_or_default();
            (
                "vanity",
                ([(header::CACHE_CONTROL, cache_control)], Html(body)).into_response(),
            )
        }
    };

    metrics::record_request(outcome, start_time);
    response
}
