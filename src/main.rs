//! CLI entry point for twig

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::debug;
use twig::{OutputConfig, StreamingFormatter, TreeWalker, WalkerConfig};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "twig")]
#[command(about = "List the contents of a directory as a tree")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "max-level", value_name = "N")]
    max_level: Option<usize>,

    /// Include hidden entries (names starting with '.')
    #[arg(short = 'a', long = "include-hidden")]
    include_hidden: bool,

    /// List directories only
    #[arg(short = 'd', long = "directories-only")]
    directories_only: bool,

    /// Omit the directory/file summary at the end of the listing
    #[arg(long = "noreport")]
    noreport: bool,

    /// Control bold directory names: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let walker = TreeWalker::new(WalkerConfig {
        max_depth: args.max_level,
        include_hidden: args.include_hidden,
        dirs_only: args.directories_only,
    });

    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
        report: !args.noreport,
    };

    debug!("walker config: {:?}", walker.config());
    debug!("output config: {:?}", output_config);

    let mut formatter = StreamingFormatter::new(output_config);
    if let Err(e) = walker.walk(&args.path, &mut formatter) {
        eprintln!("twig: {}", e);
        process::exit(1);
    }
}
