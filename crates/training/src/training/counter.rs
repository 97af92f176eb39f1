//! Pair frequency counting for BPE training.
//!
//! Each training round rebuilds the frequency map from scratch with a
//! single O(n) scan over the token sequence. Keys are ordered pairs:
//! `(a, b)` and `(b, a)` are counted independently.

use ahash::AHashMap;
use bytemerge_core::{Pair, Symbol};

/// Pair -> occurrence count for one token sequence.
pub type PairCounts = AHashMap<Pair, u64>;

/// Count every adjacent ordered pair in the sequence.
///
/// Occurrences are counted at every position, so overlapping
/// occurrences all contribute ("aaaa" counts `(a, a)` three times).
/// Sequences shorter than two symbols yield an empty map.
pub fn count_adjacent_pairs(tokens: &[Symbol]) -> PairCounts {
    let mut counts = PairCounts::new();

    for window in tokens.windows(2) {
        let pair = (window[0], window[1]);
        *counts.entry(pair).or_insert(0) += 1;
    }

    counts
}

/// Find a pair whose count equals the maximum in the map.
///
/// Ties are broken by map iteration order, which is unspecified; the
/// only guarantee is that the returned count is the true maximum.
/// Returns `None` for an empty map.
pub fn max_pair(counts: &PairCounts) -> Option<(Pair, u64)> {
    counts
        .iter()
        .max_by_key(|&(_, &count)| count)
        .map(|(&pair, &count)| (pair, count))
}

/// The `n` highest-count pairs, sorted by descending count.
///
/// Diagnostic helper for inspecting a frequency table.
pub fn top_pairs(counts: &PairCounts, n: usize) -> Vec<(Pair, u64)> {
    let mut sorted: Vec<(Pair, u64)> = counts.iter().map(|(&p, &c)| (p, c)).collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted.truncate(n);
    sorted
}
