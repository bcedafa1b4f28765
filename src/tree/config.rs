//! Configuration types for the tree walker

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Number of ancestor levels to descend before pruning.
    /// `None` walks the whole hierarchy.
    pub max_depth: Option<usize>,
    /// Include entries whose name starts with `.`
    pub include_hidden: bool,
    pub dirs_only: bool,
}

impl WalkerConfig {
    /// Check whether a directory at `depth` must not be expanded.
    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }
}
