//! Global config file source: `$XDG_CONFIG_HOME/m3u-tools/config.toml`, optional.

use crate::config::xdg;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match xdg::global_config_path() {
        Ok(path) if path.is_file() => {
            tracing::debug!("Loading configuration from {:?}", path);
            Ok(builder.add_source(File::new(&path.to_string_lossy(), FileFormat::Toml)))
        }
        Ok(_) => Ok(builder),
        Err(e) => {
            tracing::debug!("Skipping global configuration: {}", e);
            Ok(builder)
        }
    }
}
