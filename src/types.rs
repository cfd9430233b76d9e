//! Core types shared by the tree, rendering, and export code.

use std::path::Path;

/// Extensions (without the dot, compared case-insensitively) that mark a playlist.
pub const PLAYLIST_EXTENSIONS: [&str; 2] = ["m3u", "m3u8"];

/// Classification of a filesystem entry reachable from the playlist root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The referenced path does not exist.
    Missing,
    Directory,
    /// A file with an `.m3u` or `.m3u8` extension.
    Playlist,
    /// Any other existing file.
    Track,
}

impl NodeKind {
    /// Classify `path` against the live filesystem.
    pub fn classify(path: &Path) -> Self {
        if !path.exists() {
            NodeKind::Missing
        } else if path.is_dir() {
            NodeKind::Directory
        } else if has_playlist_extension(path) {
            NodeKind::Playlist
        } else {
            NodeKind::Track
        }
    }
}

/// True when the final extension of `path` is a playlist extension.
pub fn has_playlist_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            PLAYLIST_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}
