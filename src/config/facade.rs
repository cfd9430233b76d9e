//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::M3uToolsConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file and environment.
    pub fn load() -> Result<M3uToolsConfig, ConfigError> {
        MergeService::load()
    }

    /// Load configuration from a specific file (replacing the global file).
    pub fn load_from_file(path: &Path) -> Result<M3uToolsConfig, ConfigError> {
        MergeService::load_from_file(path)
    }

    /// Create default configuration.
    pub fn default() -> M3uToolsConfig {
        M3uToolsConfig::default()
    }
}
