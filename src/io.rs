//! Raw filesystem capabilities used by the tree: directory listing,
//! playlist reading, and playlist writing.

use crate::error::TreeError;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const UTF8_BOM: char = '\u{feff}';

/// List the immediate entries of `dir` in the order the platform returns them.
///
/// No sorting is applied and symlinked entries are returned as-is.
pub fn list_entries(dir: &Path) -> Result<Vec<PathBuf>, TreeError> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
    {
        let entry = entry.map_err(|e| TreeError::ListDirectory {
            path: dir.to_path_buf(),
            source: e.into(),
        })?;
        entries.push(entry.into_path());
    }
    Ok(entries)
}

/// Read a playlist file as text lines.
///
/// Invalid UTF-8 is decoded lossily and a leading byte-order mark is dropped.
/// Lines are returned untrimmed.
pub fn read_lines(path: &Path) -> Result<Vec<String>, TreeError> {
    let bytes = fs::read(path).map_err(|source| TreeError::ReadPlaylist {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = String::from_utf8_lossy(&bytes);
    let text = decoded.strip_prefix(UTF8_BOM).unwrap_or(&decoded);
    Ok(text.lines().map(str::to_string).collect())
}

/// Write `lines` to `path`, one per line, each newline-terminated.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<(), TreeError> {
    let wrap = |source| TreeError::WritePlaylist {
        path: path.to_path_buf(),
        source,
    };
    let file = fs::File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writer.write_all(line.as_bytes()).map_err(wrap)?;
        writer.write_all(b"\n").map_err(wrap)?;
    }
    writer.flush().map_err(wrap)
}
