// Configuration module entry point
// Loads layered configuration and builds the start-up resource map

mod state;
mod types;

use std::net::SocketAddr;

pub use state::AppState;
pub use types::{
    Config, HttpConfig, LoggingConfig, MappingConfig, PerformanceConfig, ResourcesConfig,
    RoutesConfig, ServerConfig,
};

use crate::logger;
use crate::resources::ResourceMap;

/// Default config file name (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from the default `config.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// Missing files are fine: defaults and `ADZE_*` environment variables
    /// (`ADZE_SERVER__PORT=9000`) still apply.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("ADZE").separator("__"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "adze/0.1")?
            .set_default("http.max_body_size", 10_485_760)? // 10MB
            .set_default("http.cache_max_age", 3600)?
            .set_default("resources.mount", "/resources")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

impl ResourcesConfig {
    /// Register every configured mapping, in order.
    ///
    /// A mapping whose directory cannot be registered is skipped with a
    /// warning rather than aborting start-up.
    pub fn build_map(&self) -> ResourceMap {
        let mut map = ResourceMap::new();
        for mapping in &self.mappings {
            match map.add_path_mapping(&mapping.prefix, &mapping.path) {
                Ok(base) => logger::log_mapping_added(&mapping.prefix, &base),
                Err(e) => logger::log_mapping_skipped(&mapping.prefix, &e),
            }
        }
        map
    }

    /// Mount point without its trailing slash (`/` becomes empty)
    pub fn mount_path(&self) -> &str {
        self.mount.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent");
        let cfg = Config::load_from(missing.to_str().unwrap()).unwrap();

        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert_eq!(cfg.http.max_body_size, 10_485_760);
        assert_eq!(cfg.resources.mount, "/resources");
        assert!(cfg.resources.mappings.is_empty());
        assert!(cfg.routes.default_route.is_none());
    }

    #[test]
    fn test_load_mappings_from_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("adze.toml");
        fs::write(
            &file,
            r#"
[server]
port = 9090

[resources]
mount = "/assets/"
mappings = [
    { prefix = "jquery", path = "/srv/jquery" },
    { prefix = "site", path = "./resources" },
]

[resources.mime_overrides]
mjs = "text/javascript"

[routes]
default_route = "/blog"
"#,
        )
        .unwrap();

        let base = dir.path().join("adze");
        let cfg = Config::load_from(base.to_str().unwrap()).unwrap();

        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.resources.mount_path(), "/assets");
        assert_eq!(
            cfg.resources.mappings,
            vec![
                MappingConfig {
                    prefix: "jquery".to_string(),
                    path: "/srv/jquery".to_string(),
                },
                MappingConfig {
                    prefix: "site".to_string(),
                    path: "./resources".to_string(),
                },
            ]
        );
        assert_eq!(
            cfg.resources.mime_overrides.get("mjs").map(String::as_str),
            Some("text/javascript")
        );
        assert_eq!(cfg.routes.default_route.as_deref(), Some("/blog"));
    }

    #[test]
    fn test_build_map_skips_missing_directories() {
        let dir = tempdir().unwrap();
        let resources = ResourcesConfig {
            mappings: vec![
                MappingConfig {
                    prefix: "gone".to_string(),
                    path: dir.path().join("gone").to_str().unwrap().to_string(),
                },
                MappingConfig {
                    prefix: "here".to_string(),
                    path: dir.path().to_str().unwrap().to_string(),
                },
            ],
            ..ResourcesConfig::default()
        };

        let map = resources.build_map();
        let prefixes: Vec<&str> = map.entries().map(|(p, _)| p).collect();
        assert_eq!(prefixes, vec!["here"]);
    }

    #[test]
    fn test_socket_addr() {
        let dir = tempdir().unwrap();
        let mut cfg = Config::load_from(dir.path().join("x").to_str().unwrap()).unwrap();
        assert_eq!(cfg.get_socket_addr().unwrap().port(), 8080);

        cfg.server.host = "not a host".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }
}
