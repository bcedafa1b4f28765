//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes each tree line as
//! soon as the walker visits it, for use with `TreeWalker`.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{TreeOutput, WalkCounts};

use super::config::OutputConfig;
use super::utils::indentation;

/// Streaming output formatter - outputs directly without buffering.
/// Implements the TreeOutput trait for use with TreeWalker.
pub struct StreamingFormatter<W: WriteColor = StandardStream> {
    config: OutputConfig,
    out: W,
}

impl StreamingFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::with_writer(config, StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn with_writer(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_name(&mut self, name: &str, is_dir: bool) -> io::Result<()> {
        if is_dir && self.config.use_color {
            self.out.set_color(ColorSpec::new().set_bold(true))?;
            write!(self.out, "{}", name)?;
            self.out.reset()
        } else {
            write!(self.out, "{}", name)
        }
    }
}

impl<W: WriteColor> TreeOutput for StreamingFormatter<W> {
    fn output_root(&mut self, root: &Path) -> io::Result<()> {
        writeln!(self.out, "{}", root.display())
    }

    fn output_node(
        &mut self,
        name: &str,
        ancestors: &[bool],
        is_dir: bool,
        is_last: bool,
    ) -> io::Result<()> {
        write!(self.out, "{} ", indentation(ancestors, is_last))?;
        self.write_name(name, is_dir)?;
        writeln!(self.out)
    }

    fn finish(&mut self, counts: &WalkCounts) -> io::Result<()> {
        if self.config.report {
            writeln!(self.out)?;
            writeln!(self.out, "{}", counts)?;
        }
        self.out.flush()
    }
}
