//! Bytemerge-training - BPE training infrastructure
//!
//! This crate learns a byte-pair vocabulary from raw text: it
//! repeatedly merges the most frequent adjacent symbol pair into a new
//! symbol until no pair occurs more than once.
//!
//! # Features
//!
//! - O(n) per-round pair frequency counting
//! - Greedy left-to-right non-overlapping pair replacement
//! - Integration with bytemerge-core for vocabulary storage
//!
//! # Example
//!
//! ```rust
//! use bytemerge_training::MergeTrainer;
//!
//! let outcome = MergeTrainer::new(b"aaaa").train();
//! assert_eq!(outcome.vocab.len(), 257);
//! assert_eq!(outcome.tokens, vec![256, 256]);
//! ```

pub use bytemerge_core::{Result, VocabError};

pub mod training;
pub use training::{count_adjacent_pairs, max_pair, top_pairs, MergeTrainer, PairCounts, TrainOutcome};
