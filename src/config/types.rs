//! Configuration types for the roster service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `service.yaml`.

use serde::Deserialize;

use crate::models::TransportEmployee;

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// The socket address the server listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}

/// The complete service configuration loaded from `service.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceConfig {
    /// Server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Employees loaded into storage at startup, in transport shape.
    #[serde(default)]
    pub seed: Vec<TransportEmployee>,
}
