//! Path resolution for playlist references and display-path computation.
//!
//! Every node stores an absolute path. Existing paths are canonical (symlinks
//! resolved); missing ones are resolved component by component, canonical up
//! to the first missing component and lexically folded after it.

use std::path::{Component, Path, PathBuf};

/// Resolve a reference found in a playlist line or a directory listing.
///
/// A reference that exists relative to the working directory is used as
/// given. Otherwise it is interpreted relative to the directory containing
/// `parent` (the referencing playlist or directory entry). A reference that
/// exists under neither interpretation still resolves to an absolute path.
pub fn resolve_reference(path_ref: &Path, parent: Option<&Path>) -> PathBuf {
    if path_ref.exists() {
        return canonical_or_absolute(path_ref);
    }
    let candidate = match parent.and_then(Path::parent) {
        Some(parent_dir) => parent_dir.join(path_ref),
        None => path_ref.to_path_buf(),
    };
    if candidate.exists() {
        canonical_or_absolute(&candidate)
    } else {
        resolve_lenient(&candidate)
    }
}

/// Make `path` absolute without requiring it to exist.
///
/// Components are applied in order. After each named component the prefix
/// built so far is canonicalized when it exists, so a `..` that follows a
/// symlink climbs out of the link target. Below the first missing component
/// `.` and `..` are folded lexically. `..` at the root is dropped.
pub fn resolve_lenient(path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in absolute(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                resolved.push(name);
                if let Ok(canonical) = dunce::canonicalize(&resolved) {
                    resolved = canonical;
                }
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}

fn canonical_or_absolute(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| resolve_lenient(path))
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

/// Express `target` relative to the directory `base_dir`.
///
/// Both paths must be absolute. When they share no root (different drive
/// prefixes) the target is returned unchanged. Identical paths give `.`.
pub fn relative_path(target: &Path, base_dir: &Path) -> PathBuf {
    let target_parts: Vec<Component> = target.components().collect();
    let base_parts: Vec<Component> = base_dir.components().collect();
    let common = target_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();
    if common == 0 {
        return target.to_path_buf();
    }

    let mut relative = PathBuf::new();
    for _ in common..base_parts.len() {
        relative.push("..");
    }
    for part in &target_parts[common..] {
        relative.push(part.as_os_str());
    }
    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    relative
}

/// Compute how a node's path is shown.
///
/// - `absolute`: the path itself.
/// - `base` is a directory: relative to it.
/// - `base` is a file, or does not exist yet: relative to its parent directory.
/// - no base: the final component only.
pub fn display_path(path: &Path, absolute: bool, base: Option<&Path>) -> PathBuf {
    if absolute {
        return path.to_path_buf();
    }
    match base {
        Some(base) if base.is_dir() => relative_path(path, base),
        Some(base) => relative_path(path, base.parent().unwrap_or(base)),
        None => path
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| path.to_path_buf()),
    }
}
