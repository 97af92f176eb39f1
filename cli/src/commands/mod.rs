//! CLI commands for the bytemerge trainer.

pub mod load;
pub mod tokenize;

pub use load::LoadCommand;
pub use tokenize::TokenizeCommand;
