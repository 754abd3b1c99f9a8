//! # opprec CLI
//!
//! Replays recorded driver event scripts through the tree builder and prints
//! the assembled expression tree.

mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "opprec")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to operator table configuration
    #[arg(long, env = "OPPREC_CONFIG", default_value = "opprec.yml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble the tree described by an event script
    Replay {
        /// Script file (YAML or JSON), or `-` for stdin
        script: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = TreeFormat::Sexpr)]
        format: TreeFormat,
    },

    /// List the effective operator table
    Operators {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Copy, Clone, ValueEnum)]
pub enum TreeFormat {
    Sexpr,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Replay { script, format } => {
            commands::replay_script(&cli.config, &script, format)
        }
        Commands::Operators { json } => commands::list_operators(&cli.config, json),
    }
}
