//! Tree formatting and display
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Indentation and branch glyphs
//! - `streaming` - Streaming formatter for console output

mod config;
mod streaming;
mod utils;

// Re-export public types and functions
pub use config::OutputConfig;
pub use streaming::StreamingFormatter;
pub use utils::indentation;
