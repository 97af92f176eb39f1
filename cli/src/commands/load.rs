//! Load command implementation.

use clap::Parser;

/// Load command arguments.
#[derive(Parser)]
pub struct LoadCommand {
    /// Path to a vocabulary .bin file
    pub input: String,

    /// Number of most recent merged entries to preview
    #[arg(short, long, default_value_t = 10)]
    pub preview: usize,
}

use anyhow::Result as AnyhowResult;
use bytemerge_core::{codec, Symbol, BASE_VOCAB_SIZE};
use std::path::Path;

pub fn run(cmd: LoadCommand) -> AnyhowResult<()> {
    let vocab = codec::read_file(Path::new(&cmd.input))?;
    println!("Loaded {} entries from {}", vocab.len(), cmd.input);

    if vocab.merge_count() > 0 && cmd.preview > 0 {
        println!("Most recent merges:");
        let first = vocab.len().saturating_sub(cmd.preview).max(BASE_VOCAB_SIZE);

        for sym in (first..vocab.len()).map(|i| i as Symbol) {
            let bytes = vocab.expand(sym);
            println!("  [{}] => \"{}\"", sym, bytes.escape_ascii());
        }
    }

    Ok(())
}
