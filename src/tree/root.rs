//! Root path resolution and validation

use std::path::{Component, Path, PathBuf};

use crate::error::{Result, TreeError};

/// Resolve `path` to its absolute form and check that it is a walkable directory.
///
/// Runs before anything is printed, so a bad root produces no tree output.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    let absolute = absolute_path(path)?;

    if !absolute.exists() {
        return Err(TreeError::InvalidPath(absolute));
    }
    if !absolute.is_dir() {
        return Err(TreeError::NotADirectory(absolute));
    }

    Ok(absolute)
}

/// Absolute form of `path` with `.` and `..` removed lexically.
/// Symlinks are left as they are.
fn absolute_path(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(TreeError::CurrentDir)?
            .join(path)
    };
    Ok(normalize_lexically(&joined))
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `pop` is a no-op at the root, matching `/..` == `/`
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
