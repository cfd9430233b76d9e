//! MergeService: orchestrates sources and deserializes to M3uToolsConfig.

use crate::config::sources::{environment, global_file};
use crate::config::M3uToolsConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use std::path::Path;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from standard sources.
    /// Precedence: defaults (lowest) -> global file -> environment (highest).
    pub fn load() -> Result<M3uToolsConfig, ConfigError> {
        let builder = Config::builder();
        let builder = global_file::add_to_builder(builder)?;
        let builder = environment::add_to_builder(builder)?;
        Self::finish(builder)
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<M3uToolsConfig, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::Message(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let builder = Config::builder().add_source(File::new(
            &path.to_string_lossy(),
            FileFormat::Toml,
        ));
        let builder = environment::add_to_builder(builder)?;
        Self::finish(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<M3uToolsConfig, ConfigError> {
        let config = builder.build()?;
        config.try_deserialize()
    }
}
