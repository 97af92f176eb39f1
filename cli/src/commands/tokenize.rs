//! Tokenize command implementation.

use clap::Parser;

/// Tokenize command arguments.
#[derive(Parser)]
pub struct TokenizeCommand {
    /// Path to the input text file
    pub input: String,

    /// Path to write the trained vocabulary to
    pub output: String,
}

use anyhow::Result as AnyhowResult;
use bytemerge_core::{codec, VocabError};
use bytemerge_training::MergeTrainer;
use std::fs;
use std::path::Path;
use std::time::Instant;

pub fn run(cmd: TokenizeCommand) -> AnyhowResult<()> {
    // Read the input in full; training is not streamed.
    let start = Instant::now();
    let input = fs::read(&cmd.input).map_err(|e| VocabError::io(&cmd.input, e))?;
    println!(
        "Read {} bytes in {:.2}s",
        input.len(),
        start.elapsed().as_secs_f64()
    );

    // Train
    let start = Instant::now();
    let outcome = MergeTrainer::new(&input).train();
    println!(
        "Training completed in {:.2}s",
        start.elapsed().as_secs_f64()
    );
    println!("  Merges: {}", outcome.rounds);
    println!("  Vocabulary entries: {}", outcome.vocab.len());
    println!(
        "  Token sequence: {} -> {} symbols",
        input.len(),
        outcome.tokens.len()
    );

    // Persist the table
    let output_path = Path::new(&cmd.output);
    codec::write_file(output_path, &outcome.vocab)?;
    println!("Wrote {} entries to {}", outcome.vocab.len(), cmd.output);

    Ok(())
}
