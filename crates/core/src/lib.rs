//! Bytemerge-core - Byte-pair vocabulary data model
//!
//! This crate provides the fundamental data structures for byte-pair
//! encoding (BPE) vocabularies trained over raw bytes, together with
//! the fixed-width binary codec used to persist them.
//!
//! # Features
//!
//! - Compact vocabulary table doubling as merge history
//! - Symbol expansion back to the underlying byte string
//! - Headerless fixed-width binary serialization
//! - Error handling with detailed diagnostics
//!
//! # Example
//!
//! ```rust
//! use bytemerge_core::VocabTable;
//!
//! // Every table starts from the 256 literal byte entries
//! let mut vocab = VocabTable::new();
//! let id = vocab.push_merge(b'a' as u32, b'b' as u32);
//! assert_eq!(id, 256);
//! assert_eq!(vocab.expand(id), b"ab");
//! ```

pub mod error;
pub use error::{Result, VocabError};

pub mod vocab;
pub use vocab::{Pair, Symbol, VocabEntry, VocabTable, BASE_VOCAB_SIZE};

pub mod codec;
pub use codec::{decode, encode, read_file, write_file, RECORD_SIZE};
