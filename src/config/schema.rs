//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Root configuration for the inventory service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address, body limit).
    pub listener: ListenerConfig,

    /// Protocol mount points and href base.
    pub ais: AisConfig,

    /// Inventory store settings.
    pub inventory: InventoryConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            max_body_bytes: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Protocol mount configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AisConfig {
    /// Path prefix of the per-agent inventory.
    pub prefix: String,

    /// Path prefix of the shared library inventory.
    pub library_prefix: String,

    /// Scheme and authority clients use to reach this service; prepended
    /// to the prefix when building hrefs.
    pub external_url: String,

    /// Agent that owns the library inventory.
    pub library_owner: Uuid,

    /// Header carrying the acting agent's id.
    pub agent_header: String,
}

impl Default for AisConfig {
    fn default() -> Self {
        Self {
            prefix: "/aisv3".to_string(),
            library_prefix: "/aisv3/library".to_string(),
            external_url: "http://localhost:8080".to_string(),
            library_owner: Uuid::nil(),
            agent_header: "x-agent-id".to_string(),
        }
    }
}

/// Inventory store configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct InventoryConfig {
    /// JSON seed loaded into the in-memory store at startup.
    pub seed_path: Option<String>,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
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
