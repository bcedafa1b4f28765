//! Directory tree walking logic
//!
//! `TreeWalker` performs a depth-first, pre-order walk and hands every listed
//! entry to a `TreeOutput` as soon as it is visited, so memory use stays
//! proportional to the depth of the hierarchy.

mod config;
mod counts;
mod root;
mod utils;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use counts::WalkCounts;
pub use root::resolve_root;
pub use walker::{TreeOutput, TreeWalker};
