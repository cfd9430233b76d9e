//! Environment variable source: M3U_TOOLS_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Uses M3U_TOOLS prefix and __ as separator, e.g. `M3U_TOOLS__EXPORT__FILE_NAME`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("M3U_TOOLS")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
