//! m3u-tools: nested playlist inspection and flattening
//!
//! Builds an in-memory tree from an `.m3u`/`.m3u8` playlist or a media
//! directory, resolving nested playlists and directories recursively, and
//! offers a printed tree view and a flattened export to a new playlist.

pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod tooling;
pub mod tree;
pub mod types;
