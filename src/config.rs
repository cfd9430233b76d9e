//! Configuration: defaults, optional TOML file, and `M3U_TOOLS__*` environment overlay.

mod facade;
mod merge;
pub mod paths;
mod sources;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// File name used when the export target is a directory.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "playlist.m3u";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct M3uToolsConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

/// Export defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Name of the playlist written when the export target is a directory
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Drop repeated lines from exports unless overridden on the command line
    #[serde(default)]
    pub remove_duplicates: bool,
}

fn default_file_name() -> String {
    DEFAULT_EXPORT_FILE_NAME.to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            remove_duplicates: false,
        }
    }
}
