//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (YAML/TOML)
//!     → loader.rs (parse & deserialize, title default)
//!     → validation.rs (semantic checks)
//!     → VanityConfig (validated, immutable)
//!     → routing::RouteTable::from_config (VCS inference, sorting)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve_config_path, ConfigError, DEFAULT_CONFIG_FILE};
pub use schema::LinkConfig;
pub use schema::ObservabilityConfig;
pub use schema::RouteSpec;
pub use schema::ServerConfig;
pub use schema::VanityConfig;
