//! Filtering and ranking
//!
//! The matcher narrows the word list by constraints; the ranker picks the
//! matches built from the most common letters.

mod engine;
pub mod matcher;
pub mod ranker;

pub use engine::{Assistance, Assistant};
pub use matcher::{filter_words, matches};
pub use ranker::{RankError, ScoredWord, best_words, letter_usage_counts, ranked, score};
