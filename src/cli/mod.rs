//! Command-line interface module

use clap::{ArgGroup, Parser};
use console::style;
use std::path::PathBuf;

use crate::transform::Direction;
use crate::walker::WalkOptions;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "extmask")]
#[command(about = "Mask file extensions with reversible obfuscated tokens")]
#[command(version)]
#[command(group(ArgGroup::new("direction").required(true).args(["encode", "decode"])))]
pub struct Args {
    /// Replace known plain extensions with masked tokens
    #[arg(short, long)]
    pub encode: bool,

    /// Restore masked tokens to their plain extensions
    #[arg(short, long)]
    pub decode: bool,

    /// File or directory to process
    pub path: PathBuf,

    /// Recursively process subdirectories (directories only)
    #[arg(short, long)]
    pub recursive: bool,

    /// Show what would be renamed without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Continue with remaining files when a rename fails
    #[arg(long)]
    pub continue_on_error: bool,

    /// Output a run summary after processing
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

impl Args {
    /// Direction selected by the mutually exclusive encode/decode flags
    pub fn direction(&self) -> Direction {
        if self.decode {
            Direction::Decode
        } else {
            Direction::Encode
        }
    }

    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            recursive: self.recursive,
            dry_run: self.dry_run,
            continue_on_error: self.continue_on_error,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

/// Show an error message
pub fn show_error(message: &str) {
    eprintln!("{} {}", style("✗").red(), message);
}

/// Show a warning message (if not in quiet mode)
pub fn show_warning(message: &str, quiet: bool) {
    if !quiet {
        eprintln!("{} {}", style("⚠").yellow(), message);
    }
}
