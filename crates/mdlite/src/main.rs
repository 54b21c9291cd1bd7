//! mdlite CLI - inline markup to HTML renderer.
//!
//! Provides commands for:
//! - `render`: Render a file or stdin, one text unit per line
//! - `config`: Show the effective symbol table and wrappers

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, RenderArgs};
use output::Output;

/// mdlite - inline markup to HTML renderer.
#[derive(Parser)]
#[command(name = "mdlite", version, about)]
struct Cli {
    /// Enable verbose output (debug logging).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render markup to HTML.
    Render(RenderArgs),
    /// Show the effective configuration.
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Config(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
