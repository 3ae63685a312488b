//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --config) are inherited by all subcommands

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// emojiforge - emoji sprite, stylesheet and lookup-table builder
#[derive(Parser, Debug)]
#[command(name = "emojiforge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the config file (default: emojiforge.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build emoji assets into the cache and publish them
    Build {
        /// Regenerate even when the cache directory is complete
        #[arg(short, long)]
        force: bool,

        /// Cache root directory (overrides config and environment)
        #[arg(long)]
        cache_root: Option<PathBuf>,
    },

    /// Print the cache stamp of the current inputs
    Stamp {
        /// Cache root directory (overrides config and environment)
        #[arg(long)]
        cache_root: Option<PathBuf>,
    },
}
