mod cli;
mod handlers;
mod line_range;

use anyhow::Result;
use clap::Parser;
use std::process;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // RUST_LOG applies unless -v asks for something specific
    let level = match cli.verbose {
        0 => None,
        1 => Some(log::LevelFilter::Info),
        2 => Some(log::LevelFilter::Debug),
        _ => Some(log::LevelFilter::Trace),
    };
    match level {
        Some(level) => env_logger::Builder::from_default_env()
            .filter_level(level)
            .init(),
        None => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .init(),
    }

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

/// Returns false when the command ran but the result should fail the process.
fn run(cli: Cli) -> Result<bool> {
    let config = handlers::load_config(cli.config.as_deref())?;
    let formatter = config.formatter()?;
    log::debug!(
        "Using {} bullets, todo patterns {:?}",
        formatter.catalog().len(),
        config.todo_patterns
    );

    match cli.command {
        Commands::Format(args) => handlers::format(&config, &formatter, &args),
        Commands::Mark { style, file, lines } => {
            handlers::mark(&config, &formatter, &style, &file, lines)?;
            Ok(true)
        }
        Commands::Promote { file, lines, down } => {
            handlers::promote(&config, &formatter, &file, lines, down)?;
            Ok(true)
        }
        Commands::Bullets => {
            handlers::bullets(&formatter)?;
            Ok(true)
        }
    }
}
