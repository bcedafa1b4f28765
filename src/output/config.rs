//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Render directory names in bold
    pub use_color: bool,
    /// Print the trailing directory/file summary
    pub report: bool,
}

impl OutputConfig {
    /// Plain output: no styling, report kept.
    pub fn plain() -> Self {
        Self {
            use_color: false,
            ..Default::default()
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            report: true,
        }
    }
}
