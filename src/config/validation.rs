//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check mount prefixes and the href base are well-formed
//! - Validate value ranges (timeouts > 0, limits > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>

use axum::http::HeaderName;
use thiserror::Error;

use crate::config::schema::ServiceConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must start with '/' and must not end with '/': {value:?}")]
    BadPrefix { field: &'static str, value: String },

    #[error("library prefix must differ from the agent prefix")]
    DuplicatePrefix,

    #[error("external_url must be an http(s) URL without a trailing '/': {0:?}")]
    BadExternalUrl(String),

    #[error("agent_header is not a valid header name: {0:?}")]
    BadAgentHeader(String),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// Check a loaded configuration.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let ais = &config.ais;

    for (field, value) in [("ais.prefix", &ais.prefix), ("ais.library_prefix", &ais.library_prefix)] {
        if !value.starts_with('/') || value.ends_with('/') {
            errors.push(ValidationError::BadPrefix {
                field,
                value: value.clone(),
            });
        }
    }

    if ais.prefix == ais.library_prefix {
        errors.push(ValidationError::DuplicatePrefix);
    }

    let url = &ais.external_url;
    if !(url.starts_with("http://") || url.starts_with("https://")) || url.ends_with('/') {
        errors.push(ValidationError::BadExternalUrl(url.clone()));
    }

    if HeaderName::from_bytes(ais.agent_header.as_bytes()).is_err() {
        errors.push(ValidationError::BadAgentHeader(ais.agent_header.clone()));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::Zero("timeouts.request_secs"));
    }

    if config.listener.max_body_bytes == 0 {
        errors.push(ValidationError::Zero("listener.max_body_bytes"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
