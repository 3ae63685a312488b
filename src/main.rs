//! emojiforge CLI - emoji asset builder
//!
//! Usage: emojiforge <COMMAND>
//!
//! Commands:
//!   build   Build emoji assets into the cache and publish them
//!   stamp   Print the cache stamp of the current inputs

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use emojiforge::presentation::{Cli, Commands};

mod commands;
mod ui;

use commands::build::cmd_build;
use commands::stamp::cmd_stamp;
use ui::json::{emit_event, events::ErrorEvent};

/// Exit code for configuration, input and I/O errors
const EXIT_STRUCTURAL: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            if cli.json {
                let _ = emit_event(&ErrorEvent::new(command_name(&cli.command), format!("{:#}", e)));
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::from(EXIT_STRUCTURAL)
        }
    }
}

fn run(cli: &Cli) -> Result<u8> {
    let config = cli.config.as_deref();

    match &cli.command {
        Commands::Build { force, cache_root } => {
            let code = cmd_build(config, cache_root.as_deref(), *force, cli.json, cli.verbose)?;
            Ok(code)
        }
        Commands::Stamp { cache_root } => {
            cmd_stamp(config, cache_root.as_deref(), cli.json, cli.verbose)?;
            Ok(0)
        }
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Build { .. } => "build",
        Commands::Stamp { .. } => "stamp",
    }
}

/// `-v` raises the default filter one level at a time; `RUST_LOG` wins.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
