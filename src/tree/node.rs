//! Playlist tree nodes: construction from a reference and recursive Load.

use crate::error::TreeError;
use crate::io;
use crate::tree::path::resolve_reference;
use crate::types::NodeKind;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// One filesystem entry reachable from the playlist root.
///
/// A node owns its children exclusively. Children are only ever populated for
/// [`NodeKind::Directory`] and [`NodeKind::Playlist`] nodes, by [`Node::load`].
#[derive(Debug, Clone)]
pub struct Node {
    path: PathBuf,
    kind: NodeKind,
    children: Vec<Node>,
}

impl Node {
    /// Build a node from a possibly relative reference.
    ///
    /// `parent` is the path of the playlist or directory that produced the
    /// reference; `None` for the root. A reference that cannot be found is not
    /// an error: the node is classified as [`NodeKind::Missing`].
    pub fn new(path_ref: impl AsRef<Path>, parent: Option<&Path>) -> Self {
        let path = resolve_reference(path_ref.as_ref(), parent);
        let kind = NodeKind::classify(&path);
        Node {
            path,
            kind,
            children: Vec::new(),
        }
    }

    /// Build and fully load the tree rooted at `path_ref`.
    pub fn open(path_ref: impl AsRef<Path>) -> Result<Self, TreeError> {
        let mut root = Node::new(path_ref, None);
        root.load()?;
        Ok(root)
    }

    #[cfg(test)]
    pub(crate) fn from_parts(path: impl Into<PathBuf>, kind: NodeKind, children: Vec<Node>) -> Self {
        Node {
            path: path.into(),
            kind,
            children,
        }
    }

    /// Absolute path of this node.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Recursively expand directories and playlists below this node.
    ///
    /// Cycle detection is per branch: a path already expanded by an ancestor
    /// is left with no children, while the same path reached from a sibling
    /// branch is expanded again. Loading an already loaded node rebuilds its
    /// children from scratch.
    pub fn load(&mut self) -> Result<(), TreeError> {
        if self.kind == NodeKind::Missing {
            warn!("Root path does not exist: {:?}", self.path);
        }
        let mut ancestors = HashSet::new();
        self.load_guarded(&mut ancestors)
    }

    fn load_guarded(&mut self, ancestors: &mut HashSet<PathBuf>) -> Result<(), TreeError> {
        if ancestors.contains(&self.path) {
            debug!("Skipping {:?}: already expanded by an ancestor", self.path);
            return Ok(());
        }

        let references = match self.kind {
            NodeKind::Missing | NodeKind::Track => return Ok(()),
            NodeKind::Directory => io::list_entries(&self.path)?,
            NodeKind::Playlist => playlist_references(&self.path)?,
        };
        debug!(
            "Expanding {:?} {:?} with {} entries",
            self.kind,
            self.path,
            references.len()
        );

        self.children.clear();
        ancestors.insert(self.path.clone());
        for reference in references {
            let mut child = Node::new(&reference, Some(self.path.as_path()));
            if child.kind == NodeKind::Missing {
                if is_comment_line(&reference) {
                    debug!("Unresolved comment line in {:?}: {:?}", self.path, reference);
                } else {
                    warn!("Referenced path does not exist: {:?}", child.path);
                }
            }
            child.load_guarded(ancestors)?;
            self.children.push(child);
        }
        ancestors.remove(&self.path);
        Ok(())
    }
}

/// Every non-blank line of a playlist, trimmed, is a reference.
fn playlist_references(path: &Path) -> Result<Vec<PathBuf>, TreeError> {
    Ok(io::read_lines(path)?
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect())
}

/// Extended M3U directives (`#EXTM3U`, `#EXTINF:...`) and comments.
fn is_comment_line(reference: &Path) -> bool {
    reference.to_string_lossy().starts_with('#')
}
