//! Flattened export of a loaded playlist tree.

use crate::tree::node::Node;
use crate::tree::path::display_path;
use crate::types::NodeKind;
use std::collections::HashSet;
use std::path::PathBuf;

/// Options for [`Node::export`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Paths are written relative to this target (its directory when it is a
    /// file or does not exist yet). `None` writes absolute paths.
    pub base: Option<PathBuf>,
    /// Replace nested playlists by their entries.
    pub flatten_playlists: bool,
    /// Replace nested directories by their entries.
    pub flatten_dirs: bool,
    /// Keep only the first occurrence of each output line.
    pub remove_duplicates: bool,
}

impl ExportOptions {
    fn flattens(&self, kind: NodeKind) -> bool {
        (self.flatten_playlists && kind == NodeKind::Playlist)
            || (self.flatten_dirs && kind == NodeKind::Directory)
    }
}

impl Node {
    /// Produce the export lines for this node's children, in order.
    ///
    /// A flattened child contributes its own export lines in place of itself.
    /// Every other child contributes one line with its display path.
    pub fn export(&self, options: &ExportOptions) -> Vec<String> {
        let mut lines = Vec::new();
        self.export_into(options, &mut lines);
        if options.remove_duplicates {
            let mut seen = HashSet::new();
            lines.retain(|line| seen.insert(line.clone()));
        }
        lines
    }

    fn export_into(&self, options: &ExportOptions, lines: &mut Vec<String>) {
        for child in self.children() {
            if options.flattens(child.kind()) {
                child.export_into(options, lines);
            } else {
                let shown = display_path(
                    child.path(),
                    options.base.is_none(),
                    options.base.as_deref(),
                );
                lines.push(shown.to_string_lossy().into_owned());
            }
        }
    }
}
