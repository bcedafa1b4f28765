//! Aggregate counters collected during a walk

use std::fmt;

/// Directory and entry counters accumulated across a whole traversal.
///
/// `files` is bumped once for every listed entry, directories included.
/// `directories` is bumped once for every directory the walker enters,
/// the root and depth-pruned directories included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkCounts {
    pub directories: usize,
    pub files: usize,
}

impl WalkCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_directory(&mut self) {
        self.directories += 1;
    }

    pub fn record_entry(&mut self) {
        self.files += 1;
    }
}

/// The trailing report line, e.g. `3 directories, 7 files`.
impl fmt::Display for WalkCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.files == 0 {
            write!(f, "{} directories", self.directories)
        } else {
            write!(f, "{} directories, {} files", self.directories, self.files)
        }
    }
}
