//! Training components: pair counting and the merge loop.

pub mod counter;
pub mod trainer;

pub use counter::{count_adjacent_pairs, max_pair, top_pairs, PairCounts};
pub use trainer::{MergeTrainer, TrainOutcome};
