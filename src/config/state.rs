// Application state module
// Everything request handlers read, frozen before the listener starts

use super::types::Config;
use crate::http::mime::MimeOverrides;
use crate::resources::ResourceMap;

/// Application state
///
/// Built once in `main` and shared behind an `Arc`. Nothing in here is
/// mutated after construction, so handlers read it without locking.
pub struct AppState {
    pub config: Config,
    pub resources: ResourceMap,
    pub mime_overrides: MimeOverrides,
}

impl AppState {
    /// Build state from configuration, registering configured mappings
    pub fn new(config: &Config) -> Self {
        let resources = config.resources.build_map();
        Self::with_resources(config, resources)
    }

    /// Build state around an already populated resource map
    pub fn with_resources(config: &Config, resources: ResourceMap) -> Self {
        let mime_overrides = MimeOverrides::with_extra(&config.resources.mime_overrides);
        Self {
            config: config.clone(),
            resources,
            mime_overrides,
        }
    }

    /// Whether access log lines should be written
    pub const fn access_log(&self) -> bool {
        self.config.logging.access_log
    }
}
