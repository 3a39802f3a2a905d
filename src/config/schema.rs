//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! All types derive Serde traits for deserialization from config files.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root configuration for the vanity URL server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct VanityConfig {
    /// Site title shown on the index and package pages (defaults to `host`).
    pub title: String,

    /// Public host name packages are imported under (e.g., "golift.io").
    pub host: String,

    /// Free-form description rendered on the index page.
    pub description: String,

    /// Logo rendered on the index and package pages.
    pub logo_url: String,

    /// Extra links rendered in the "Resources" column.
    pub links: Vec<LinkConfig>,

    /// Global cache lifetime in seconds for package pages.
    pub cache_max_age: Option<u64>,

    /// Route declarations keyed by request path.
    pub paths: HashMap<String, RouteSpec>,

    /// Global list of sub-path substrings that trigger a redirect.
    pub redir_paths: Vec<String>,

    /// Link to the source of this server, shown in the index footer.
    pub src: String,

    /// Redirect target used instead of rendering the index page.
    pub redir_index: String,

    /// Redirect target used instead of a plain 404.
    pub redir_404: String,

    /// Listener settings.
    pub server: ServerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// A titled link on the index page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LinkConfig {
    pub title: String,
    pub url: String,
}

/// Declaration of a single route, as written in the config file.
///
/// Every field is optional; missing values are inferred when the route
/// table is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RouteSpec {
    /// Per-route cache lifetime in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_max_age: Option<u64>,

    /// Per-route redirect sub-path substrings. `None` inherits the global list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redir_paths: Option<Vec<String>>,

    /// Repository URL.
    pub repo: String,

    /// Pure redirect target.
    pub redir: String,

    /// Explicit `go-source` display template.
    pub display: String,

    /// Version control system (git, bzr, hg, svn; github/gitlab/bitbucket mean git).
    pub vcs: String,

    /// Append the first residual segment to the path and repository.
    pub wildcard: bool,

    /// Tag name to repository reference.
    pub tags: HashMap<String, String>,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub listen: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 15,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
