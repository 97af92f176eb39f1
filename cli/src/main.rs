//! Bytemerge CLI - Command-line interface for the vocabulary trainer.
//!
//! This is the main entry point for the `bytemerge` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{LoadCommand, TokenizeCommand};

#[derive(Parser)]
#[command(name = "bytemerge")]
#[command(about = "Train byte-pair vocabularies from raw text", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize a text file and write the trained vocabulary as a .bin file
    Tokenize(TokenizeCommand),
    /// Load a .bin vocabulary file and report the entries in it
    Load(LoadCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tokenize(cmd) => commands::tokenize::run(cmd)?,
        Commands::Load(cmd) => commands::load::run(cmd)?,
    }

    Ok(())
}
