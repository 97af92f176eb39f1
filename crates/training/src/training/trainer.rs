//! The merge loop.
//!
//! Training repeatedly merges the most frequent adjacent symbol pair
//! into a new vocabulary entry and rewrites the token sequence, until
//! no pair occurs more than once. The frequency map is rebuilt from
//! scratch every round; with k merges this is O(n·k) overall, a
//! deliberate tradeoff that keeps round selection and termination easy
//! to reason about at the input sizes this tool targets.

use super::counter::{count_adjacent_pairs, max_pair};
use bytemerge_core::{Pair, Symbol, VocabTable};

/// Result of one training run.
#[derive(Debug, Clone)]
pub struct TrainOutcome {
    /// The trained vocabulary, merge history included.
    pub vocab: VocabTable,
    /// The fully compressed token sequence.
    pub tokens: Vec<Symbol>,
    /// Number of merge rounds performed.
    pub rounds: usize,
}

/// Trains a byte-pair vocabulary from raw input bytes.
pub struct MergeTrainer {
    vocab: VocabTable,
    tokens: Vec<Symbol>,
}

impl MergeTrainer {
    /// Set up a trainer over the given input.
    ///
    /// The vocabulary starts as the 256-entry byte alphabet and the
    /// token sequence as one symbol per input byte.
    pub fn new(input: &[u8]) -> Self {
        Self {
            vocab: VocabTable::new(),
            tokens: input.iter().map(|&b| b as Symbol).collect(),
        }
    }

    /// Run the merge loop to completion.
    ///
    /// Each round counts adjacent pairs, picks one with the maximum
    /// count, and halts once that count is no greater than 1 (the
    /// halting pair is not added to the vocabulary). Otherwise the
    /// pair becomes a new entry and every occurrence in the sequence
    /// is collapsed into the new symbol. Every merge shortens the
    /// sequence by at least one symbol, so the loop terminates.
    pub fn train(mut self) -> TrainOutcome {
        let mut rounds = 0;

        loop {
            let counts = count_adjacent_pairs(&self.tokens);

            let Some((pair, count)) = max_pair(&counts) else {
                break;
            };
            if count <= 1 {
                break;
            }

            let new_sym = self.vocab.push_merge(pair.0, pair.1);
            self.tokens = rewrite(&self.tokens, pair, new_sym);
            rounds += 1;
        }

        TrainOutcome {
            vocab: self.vocab,
            tokens: self.tokens,
            rounds,
        }
    }
}

/// Replace every occurrence of `pair` with `new_sym`.
///
/// Greedy left-to-right, non-overlapping: a matched pair consumes both
/// symbols, so the right symbol of a match cannot start another one.
/// The result is a fresh buffer; the input is left untouched.
fn rewrite(tokens: &[Symbol], pair: Pair, new_sym: Symbol) -> Vec<Symbol> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        if i + 1 < tokens.len() && (tokens[i], tokens[i + 1]) == pair {
            out.push(new_sym);
            i += 2;
        } else {
            out.push(tokens[i]);
            i += 1;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemerge_core::{VocabEntry, BASE_VOCAB_SIZE};

    #[test]
    fn test_rewrite_non_overlapping() {
        // Four 'a's collapse into two merged symbols, not three.
        let out = rewrite(&[97, 97, 97, 97], (97, 97), 256);
        assert_eq!(out, vec![256, 256]);
    }

    #[test]
    fn test_rewrite_keeps_trailing_symbol() {
        let out = rewrite(&[97, 97, 97], (97, 97), 256);
        assert_eq!(out, vec![256, 97]);
    }

    #[test]
    fn test_rewrite_no_matches() {
        let out = rewrite(&[97, 98, 99], (120, 121), 256);
        assert_eq!(out, vec![97, 98, 99]);
    }

    #[test]
    fn test_train_aaaa() {
        let outcome = MergeTrainer::new(b"aaaa").train();

        assert_eq!(outcome.vocab.len(), 257);
        assert_eq!(outcome.vocab.get(256), Some(VocabEntry::new(97, 97)));
        assert_eq!(outcome.tokens, vec![256, 256]);
        assert_eq!(outcome.rounds, 1);
    }

    #[test]
    fn test_train_empty_input() {
        let outcome = MergeTrainer::new(b"").train();

        assert_eq!(outcome.vocab.len(), BASE_VOCAB_SIZE);
        assert!(outcome.tokens.is_empty());
        assert_eq!(outcome.rounds, 0);
    }

    #[test]
    fn test_train_without_repeated_pairs() {
        // Every pair occurs once, so the best count is 1 and nothing
        // is merged.
        let outcome = MergeTrainer::new(b"abcd").train();

        assert_eq!(outcome.vocab.len(), BASE_VOCAB_SIZE);
        assert_eq!(outcome.tokens, vec![97, 98, 99, 100]);
        assert_eq!(outcome.rounds, 0);
    }

    #[test]
    fn test_base_alphabet_preserved_after_training() {
        let outcome = MergeTrainer::new(b"the theme of the thesis").train();

        for i in 0..BASE_VOCAB_SIZE as Symbol {
            assert_eq!(outcome.vocab.get(i), Some(VocabEntry::new(i, i)));
        }
    }

    #[test]
    fn test_no_forward_references() {
        let outcome = MergeTrainer::new(b"abab cdcd abab cdcd").train();
        assert!(outcome.vocab.merge_count() > 0);

        for (i, entry) in outcome
            .vocab
            .entries()
            .iter()
            .enumerate()
            .skip(BASE_VOCAB_SIZE)
        {
            assert!((entry.left as usize) < i);
            assert!((entry.right as usize) < i);
        }
    }

    #[test]
    fn test_sequence_shrinks_every_round() {
        // Re-run the loop by hand to observe each round's length.
        let input = b"banana bandana banana bandana";
        let mut vocab = VocabTable::new();
        let mut tokens: Vec<Symbol> = input.iter().map(|&b| b as Symbol).collect();

        loop {
            let counts = count_adjacent_pairs(&tokens);
            let Some((pair, count)) = max_pair(&counts) else {
                break;
            };
            if count <= 1 {
                break;
            }

            let before = tokens.len();
            let new_sym = vocab.push_merge(pair.0, pair.1);
            tokens = rewrite(&tokens, pair, new_sym);
            assert!(tokens.len() < before);
        }

        // The loop above mirrors train(); the outcomes must agree.
        let outcome = MergeTrainer::new(input).train();
        assert_eq!(outcome.tokens.len(), tokens.len());
        assert_eq!(outcome.vocab.len(), vocab.len());
    }

    #[test]
    fn test_halting_pair_not_appended() {
        // After round 1 the sequence is [256, 256]; pair (256, 256)
        // has count 1 and must not enter the vocabulary.
        let outcome = MergeTrainer::new(b"aaaa").train();

        for entry in outcome.vocab.entries() {
            assert_ne!(*entry, VocabEntry::new(256, 256));
        }
    }

    #[test]
    fn test_merged_symbols_expand_to_input_substrings() {
        let input = b"low lower lowest low lower lowest";
        let outcome = MergeTrainer::new(input).train();

        for sym in BASE_VOCAB_SIZE as Symbol..outcome.vocab.len() as Symbol {
            let bytes = outcome.vocab.expand(sym);
            assert!(bytes.len() >= 2);
            assert!(input
                .windows(bytes.len())
                .any(|window| window == bytes.as_slice()));
        }
    }

    #[test]
    fn test_expanding_final_tokens_recovers_input() {
        let input = b"mississippi mississippi";
        let outcome = MergeTrainer::new(input).train();

        let mut recovered = Vec::new();
        for &sym in &outcome.tokens {
            recovered.extend(outcome.vocab.expand(sym));
        }
        assert_eq!(recovered, input);
    }
}
