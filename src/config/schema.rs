//! Configuration schema definitions.
//!
//! This module defines the configuration of the static route server.
//! All types derive Serde traits for deserialization from config files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Top-level routes, tried in declaration order.
    pub routes: Vec<RouteConfig>,

    /// Subrouters, tried after the top-level routes.
    pub mounts: Vec<MountConfig>,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// A route answered with a fixed response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Method token, or "any".
    #[serde(default = "default_method")]
    pub method: String,

    /// Route pattern, e.g. "/hello/:name".
    pub pattern: String,

    /// Response status code.
    #[serde(default = "default_status")]
    pub status: u16,

    /// Response body. `{name}` is replaced with the path parameter `name`.
    #[serde(default)]
    pub body: String,

    /// Response headers.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

/// Routes mounted below a common prefix.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MountConfig {
    /// Mount prefix, e.g. "/api/person/:id".
    pub prefix: String,

    /// Routes relative to the prefix.
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

fn default_method() -> String {
    "any".to_string()
}

fn default_status() -> u16 {
    200
}
