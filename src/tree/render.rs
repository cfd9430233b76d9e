//! Box-drawing tree view of a loaded playlist tree.

use crate::tree::node::Node;
use crate::tree::path::display_path;
use crate::types::NodeKind;
use std::path::Path;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const BLANK_INDENT: &str = "    ";

/// Options for [`Node::render`].
///
/// Path style precedence is `absolute`, then `relative_to_root`, then
/// `relative_to_parent`; with none set only names are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintOptions {
    pub absolute: bool,
    pub relative_to_root: bool,
    pub relative_to_parent: bool,
    /// Show the entries of nested playlists beneath them.
    pub expand_playlists: bool,
    /// Show the entries of nested directories beneath them.
    pub expand_dirs: bool,
}

impl PrintOptions {
    fn expands(&self, kind: NodeKind) -> bool {
        (self.expand_playlists && kind == NodeKind::Playlist)
            || (self.expand_dirs && kind == NodeKind::Directory)
    }

    fn base<'a>(&self, root: &'a Path, parent: &'a Path) -> Option<&'a Path> {
        if self.relative_to_root {
            Some(root)
        } else if self.relative_to_parent {
            Some(parent)
        } else {
            None
        }
    }
}

impl Node {
    /// Render the tree as lines: the root first, then its children with
    /// `├── `/`└── ` connectors.
    pub fn render_lines(&self, options: &PrintOptions) -> Vec<String> {
        let root_line = display_path(self.path(), options.absolute, None);
        let mut lines = vec![root_line.to_string_lossy().into_owned()];
        self.render_children(&mut lines, "", options, self.path());
        lines
    }

    /// Render the tree as a single newline-separated string without a
    /// trailing newline.
    pub fn render(&self, options: &PrintOptions) -> String {
        self.render_lines(options).join("\n")
    }

    fn render_children(
        &self,
        lines: &mut Vec<String>,
        prefix: &str,
        options: &PrintOptions,
        root: &Path,
    ) {
        let count = self.children().len();
        for (index, child) in self.children().iter().enumerate() {
            let is_last = index + 1 == count;
            let connector = if is_last { LAST_BRANCH } else { BRANCH };
            let shown = display_path(
                child.path(),
                options.absolute,
                options.base(root, self.path()),
            );
            lines.push(format!("{prefix}{connector}{}", shown.to_string_lossy()));

            if options.expands(child.kind()) {
                let indent = if is_last { BLANK_INDENT } else { PIPE_INDENT };
                child.render_children(lines, &format!("{prefix}{indent}"), options, root);
            }
        }
    }
}
