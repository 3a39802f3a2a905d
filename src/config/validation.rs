//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that route keys are absolute paths
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: VanityConfig → Result<(), Vec<ValidationError>>
//! - VCS inference errors are reported by the route table builder, not here

use thiserror::Error;

use crate::config::schema::VanityConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("host is required")]
    MissingHost,

    #[error("path {0:?} must start with '/'")]
    RelativePath(String),

    #[error("server.request_timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Validate a parsed configuration.
pub fn validate_config(config: &VanityConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.host.is_empty() {
        errors.push(ValidationError::MissingHost);
    }

    let mut relative: Vec<&String> = config
        .paths
        .keys()
        .filter(|p| !p.starts_with('/'))
        .collect();
    relative.sort();
    errors.extend(relative.into_iter().map(|p| ValidationError::RelativePath(p.clone())));

    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
