//! Startup orchestration.
//!
//! # Responsibilities
//! - Locate, load and validate configuration
//! - Build the route table before any listener exists
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - No partially built route table is ever served

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{load_config, resolve_config_path, ConfigError, VanityConfig};
use crate::routing::{RouteError, RouteTable};

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("config file: {0}")]
    Routes(#[from] RouteError),
}

/// Everything needed to start serving.
#[derive(Debug)]
pub struct Prepared {
    pub config: VanityConfig,
    pub table: RouteTable,
    /// The file that was actually read.
    pub config_path: PathBuf,
    /// True when the default location was missing and `./config.yaml` was used.
    pub used_fallback: bool,
}

/// Load the configuration at `requested` and build its route table.
pub fn prepare(requested: &Path) -> Result<Prepared, StartupError> {
    let config_path = resolve_config_path(requested);
    let used_fallback = config_path != requested;

    let config = load_config(&config_path)?;
    let table = RouteTable::from_config(&config)?;

    Ok(Prepared {
        config,
        table,
        config_path,
        used_fallback,
    })
}
