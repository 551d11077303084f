mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "progress",
    about = "Track feature completion for autonomous coding projects",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .spec/ or .git/)
    #[arg(long, global = true, env = "PROGRESS_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show progress summary and the next feature to implement
    Check,

    /// Mark a feature as passing or not passing
    Update {
        /// Feature id
        id: u64,

        /// New status: true or false (case-insensitive)
        #[arg(value_parser = parse_passes, action = clap::ArgAction::Set)]
        passes: bool,
    },
}

fn parse_passes(s: &str) -> Result<bool, String> {
    match s.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(format!("expected 'true' or 'false', got '{s}'")),
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Check => cmd::check::run(&root, cli.json),
        Commands::Update { id, passes } => cmd::update::run(&root, id, passes, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
