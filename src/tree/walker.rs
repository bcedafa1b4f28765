//! TreeWalker - depth-first traversal that streams each line as it is visited

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::error::{Result, TreeError};

use super::config::WalkerConfig;
use super::counts::WalkCounts;
use super::root::resolve_root;
use super::utils::{entry_name, is_hidden};

/// Callback for streaming output - receives node information for display.
pub trait TreeOutput {
    /// Called once, before traversal, with the absolute root path.
    fn output_root(&mut self, root: &Path) -> io::Result<()>;

    /// Called for every listed entry in pre-order.
    ///
    /// `ancestors` holds one flag per level above the entry, `true` when
    /// that ancestor was the last of its siblings.
    fn output_node(
        &mut self,
        name: &str,
        ancestors: &[bool],
        is_dir: bool,
        is_last: bool,
    ) -> io::Result<()>;

    fn finish(&mut self, counts: &WalkCounts) -> io::Result<()>;
}

/// A child that survived filtering, in display order.
#[derive(Debug)]
struct Child {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// Tree walker that outputs directly without building the tree in memory.
/// Uses O(depth) memory for the ancestor trail plus one directory listing
/// per level.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Validate `root`, print it, walk it and print the report.
    ///
    /// Fails before any output if `root` is missing or not a directory.
    /// An unreadable directory at any depth aborts the walk; lines already
    /// written are not taken back.
    pub fn walk<O: TreeOutput>(&self, root: &Path, output: &mut O) -> Result<WalkCounts> {
        let root = resolve_root(root)?;
        output.output_root(&root)?;

        let mut counts = WalkCounts::new();
        self.walk_dir(&root, &[], &mut counts, output)?;

        output.finish(&counts)?;
        Ok(counts)
    }

    fn walk_dir<O: TreeOutput>(
        &self,
        path: &Path,
        ancestors: &[bool],
        counts: &mut WalkCounts,
        output: &mut O,
    ) -> Result<()> {
        // Counted before the depth check, so the root and pruned
        // directories are included
        counts.record_directory();

        if self.config.at_max_depth(ancestors.len()) {
            debug!("depth limit reached at {}", path.display());
            return Ok(());
        }

        debug!("entering {}", path.display());
        let children = self.read_children(path)?;
        let last_index = children.len().saturating_sub(1);

        for (i, child) in children.into_iter().enumerate() {
            let is_last = i == last_index;

            // Hidden entries still occupy their slot when `is_last` is decided
            if !self.config.include_hidden && is_hidden(&child.name) {
                trace!("skipping hidden entry {}", child.name);
                continue;
            }

            output.output_node(&child.name, ancestors, child.is_dir, is_last)?;

            if child.is_dir {
                let mut trail = ancestors.to_vec();
                trail.push(is_last);
                self.walk_dir(&child.path, &trail, counts, output)?;
            }

            counts.record_entry();
        }

        Ok(())
    }

    /// Read and sort the immediate children of `path`.
    ///
    /// The directories-only filter is applied here, before the caller
    /// computes last-child positions. Hidden entries are kept and skipped
    /// by the caller.
    fn read_children(&self, path: &Path) -> Result<Vec<Child>> {
        let read_error = |source: io::Error| TreeError::ReadDir {
            path: path.to_path_buf(),
            source,
        };

        let mut entries = fs::read_dir(path)
            .map_err(read_error)?
            .collect::<io::Result<Vec<_>>>()
            .map_err(read_error)?;
        entries.sort_by_key(|entry| entry.file_name());

        let mut children = Vec::with_capacity(entries.len());
        for entry in entries {
            let name = entry_name(&entry);
            let entry_path = entry.path();
            // Follows symlinks, so a link to a directory is expanded
            let is_dir = entry_path.is_dir();

            if self.config.dirs_only && !is_dir {
                trace!("skipping non-directory {}", name);
                continue;
            }

            children.push(Child {
                name,
                path: entry_path,
                is_dir,
            });
        }

        Ok(children)
    }
}
