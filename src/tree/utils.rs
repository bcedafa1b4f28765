//! Shared utility functions for tree walking

use std::fs::DirEntry;

/// A hidden entry is one whose name begins with `.`
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Get the display name of a directory entry.
pub fn entry_name(entry: &DirEntry) -> String {
    entry.file_name().to_string_lossy().into_owned()
}
