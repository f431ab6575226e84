// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::collections::HashMap;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    #[serde(default)]
    pub resources: ResourcesConfig,
    #[serde(default)]
    pub routes: RoutesConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `error`, `warn` or `info`
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    /// Idle seconds before a keep-alive connection is closed, 0 disables keep-alive
    pub keep_alive_timeout: u64,
    /// Deadline for the request head when keep-alive is off
    pub read_timeout: u64,
    /// Deadline for producing each response
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub max_body_size: u64,
    /// `max-age` sent with served resources, in seconds
    pub cache_max_age: u32,
}

/// Static resource configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ResourcesConfig {
    /// URL path the resource handler is mounted on
    #[serde(default = "default_mount")]
    pub mount: String,
    /// Prefix mappings, registered in the listed order
    #[serde(default)]
    pub mappings: Vec<MappingConfig>,
    /// Extra extension to Content-Type overrides
    #[serde(default)]
    pub mime_overrides: HashMap<String, String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_mount() -> String {
    "/resources".to_string()
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            mount: default_mount(),
            mappings: Vec::new(),
            mime_overrides: HashMap::new(),
        }
    }
}

/// One `prefix -> directory` entry
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct MappingConfig {
    pub prefix: String,
    pub path: String,
}

/// Top-level route configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RoutesConfig {
    /// URL served internally when `/` is requested
    #[serde(default)]
    pub default_route: Option<String>,
}
