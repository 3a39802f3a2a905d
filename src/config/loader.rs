//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::VanityConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Where to find the config file if `-c` is not provided.
#[cfg(target_os = "macos")]
pub const DEFAULT_CONFIG_FILE: &str = "/usr/local/etc/vanity-urls/config.yaml";

/// Where to find the config file if `-c` is not provided.
#[cfg(not(target_os = "macos"))]
pub const DEFAULT_CONFIG_FILE: &str = "/etc/vanity-urls/config.yaml";

/// Fallback used when the default config file does not exist.
pub const LOCAL_CONFIG_FILE: &str = "config.yaml";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("parsing YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Pick the config file to read.
///
/// Only the built-in default location falls back to `./config.yaml`; an
/// explicitly requested file is always used as given.
pub fn resolve_config_path(requested: &Path) -> PathBuf {
    if requested == Path::new(DEFAULT_CONFIG_FILE) && !requested.exists() {
        return PathBuf::from(LOCAL_CONFIG_FILE);
    }
    requested.to_path_buf()
}

/// Load and validate configuration from a YAML or TOML file.
pub fn load_config(path: &Path) -> Result<VanityConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );
    let config = if is_yaml {
        parse_yaml(&content)?
    } else {
        parse_toml(&content)?
    };

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Parse a YAML document and apply defaults.
pub fn parse_yaml(content: &str) -> Result<VanityConfig, ConfigError> {
    let config: VanityConfig = serde_yaml::from_str(content)?;
    Ok(apply_defaults(config))
}

/// Parse a TOML document and apply defaults.
pub fn parse_toml(content: &str) -> Result<VanityConfig, ConfigError> {
    let config: VanityConfig = toml::from_str(content)?;
    Ok(apply_defaults(config))
}

fn apply_defaults(mut config: VanityConfig) -> VanityConfig {
    if config.title.is_empty() {
        config.title = config.host.clone();
    }
    config
}
