//! Error types for tree walking

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Enumerating a directory failed somewhere in the traversal.
    #[error("cannot read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_embed_path() {
        let err = TreeError::InvalidPath(PathBuf::from("/nope/here"));
        assert_eq!(err.to_string(), "Invalid path: /nope/here");

        let err = TreeError::NotADirectory(PathBuf::from("/etc/hosts"));
        assert_eq!(err.to_string(), "Not a directory: /etc/hosts");
    }

    #[test]
    fn test_read_dir_keeps_source() {
        use std::error::Error as _;

        let err = TreeError::ReadDir {
            path: PathBuf::from("/locked"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("cannot read directory /locked"));
        assert!(err.source().is_some());
    }
}
