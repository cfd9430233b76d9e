//! CLI Tooling
//!
//! Command-line interface for printing and exporting playlist trees. Commands
//! are executed through [`CliContext`], which returns the text to show on
//! stdout.

use crate::config::{ConfigLoader, M3uToolsConfig};
use crate::error::ApiError;
use crate::io;
use crate::logging::LoggingConfig;
use crate::tree::path::resolve_lenient;
use crate::tree::{ExportOptions, Node, PrintOptions};
use crate::types::has_playlist_extension;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

/// m3u-tools - inspect and flatten nested playlists
#[derive(Parser, Debug)]
#[command(name = "m3u-tools")]
#[command(about = "Inspect and flatten nested m3u playlists and media directories")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides the global config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply logging flags on top of the configured logging section.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        } else if self.verbose {
            config.level = "debug".to_string();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print a playlist or directory as a tree
    Print(PrintArgs),
    /// Write a playlist or directory out as a new playlist file
    Export(ExportArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct PrintArgs {
    /// Playlist file or directory to print
    pub file: PathBuf,

    /// Display file paths as absolute paths
    #[arg(long)]
    pub absolute: bool,

    /// Display file paths relative to the root playlist
    #[arg(long)]
    pub relative_root: bool,

    /// Display file paths relative to the parent playlist
    #[arg(long)]
    pub relative_parent: bool,

    /// Display only file names without paths
    #[arg(long)]
    pub minimal: bool,

    /// Expand nested playlists
    #[arg(long, overrides_with = "shrink_m3u")]
    pub expand_m3u: bool,

    /// Do not expand nested playlists (default)
    #[arg(long, overrides_with = "expand_m3u")]
    pub shrink_m3u: bool,

    /// Expand nested directories
    #[arg(long, overrides_with = "shrink_dir")]
    pub expand_dir: bool,

    /// Do not expand nested directories (default)
    #[arg(long, overrides_with = "expand_dir")]
    pub shrink_dir: bool,
}

impl PrintArgs {
    /// Translate flags into render options. `--minimal` wins over every path style.
    pub fn options(&self) -> PrintOptions {
        PrintOptions {
            absolute: self.absolute && !self.minimal,
            relative_to_root: self.relative_root && !self.minimal,
            relative_to_parent: self.relative_parent && !self.minimal,
            expand_playlists: self.expand_m3u,
            expand_dirs: self.expand_dir,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Playlist file or directory to export
    pub file: PathBuf,

    /// Target playlist file, or a directory to write the default file name into
    pub export_path: PathBuf,

    /// Write absolute file paths
    #[arg(long, overrides_with = "relative")]
    pub absolute: bool,

    /// Write paths relative to the exported playlist (default)
    #[arg(long, overrides_with = "absolute")]
    pub relative: bool,

    /// Write out the entries of nested playlists instead of the playlists
    #[arg(long)]
    pub flatten_m3u: bool,

    /// Write out the entries of nested directories instead of the directories
    #[arg(long)]
    pub flatten_dir: bool,

    /// Drop repeated entries, keeping the first occurrence
    #[arg(long)]
    pub remove_duplicates: bool,
}

/// Decide the file an export is written to.
///
/// A directory target receives `file_name`. A target already ending in
/// `.m3u`/`.m3u8` is kept; any other extension is replaced by `.m3u`.
pub fn resolve_export_target(requested: &Path, file_name: &str) -> PathBuf {
    if requested.is_dir() {
        requested.join(file_name)
    } else if has_playlist_extension(requested) {
        requested.to_path_buf()
    } else {
        requested.with_extension("m3u")
    }
}

/// CLI context holding the loaded configuration
pub struct CliContext {
    config: M3uToolsConfig,
}

impl CliContext {
    /// Create a new CLI context, loading configuration from `config_path` or
    /// from the standard sources.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: M3uToolsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &M3uToolsConfig {
        &self.config
    }

    /// Execute a CLI command and return its stdout text.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Print(args) => self.handle_print(args),
            Commands::Export(args) => self.handle_export(args),
        }
    }

    fn handle_print(&self, args: &PrintArgs) -> Result<String, ApiError> {
        let root = Node::open(&args.file)?;
        Ok(root.render(&args.options()))
    }

    fn handle_export(&self, args: &ExportArgs) -> Result<String, ApiError> {
        let target = resolve_export_target(&args.export_path, &self.config.export.file_name);
        let root = Node::open(&args.file)?;

        let options = ExportOptions {
            base: (!args.absolute).then(|| resolve_lenient(&target)),
            flatten_playlists: args.flatten_m3u,
            flatten_dirs: args.flatten_dir,
            remove_duplicates: args.remove_duplicates || self.config.export.remove_duplicates,
        };
        let lines = root.export(&options);
        io::write_lines(&target, &lines)?;

        info!("Exported {} entries from {:?} to {:?}", lines.len(), root.path(), target);
        Ok(format!("Exported {} entries to {}", lines.len(), target.display()))
    }
}
