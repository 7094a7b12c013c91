//! Letter-frequency ranking
//!
//! Scores each candidate by how popular its distinct letters are across the
//! candidate pool, favoring guesses built from common letters.

use crate::core::Word;
use rustc_hash::FxHashMap;
use std::fmt;
use tracing::debug;

/// Error type for ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankError {
    /// No words to rank, so there is no maximum score
    EmptyInput,
}

impl fmt::Display for RankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Cannot rank an empty word list"),
        }
    }
}

impl std::error::Error for RankError {}

/// A word paired with its letter-frequency score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: Word,
    pub score: usize,
}

/// Count how many words contain each letter at least once
///
/// A letter repeated within one word counts once for that word.
#[must_use]
pub fn letter_usage_counts(words: &[Word]) -> FxHashMap<char, usize> {
    let mut counts: FxHashMap<char, usize> = FxHashMap::default();
    for word in words {
        for letter in word.distinct_letters() {
            *counts.entry(letter).or_insert(0) += 1;
        }
    }
    counts
}

/// Score a word as the sum of the usage counts of its distinct letters
#[must_use]
pub fn score(word: &Word, counts: &FxHashMap<char, usize>) -> usize {
    word.distinct_letters()
        .map(|letter| counts.get(&letter).copied().unwrap_or(0))
        .sum()
}

/// Return every word that achieves the maximum score
///
/// Ties are not broken: all maximal words are returned in input order, and
/// duplicate input words appear once per occurrence.
///
/// # Errors
/// Returns `RankError::EmptyInput` if `words` is empty.
///
/// # Examples
/// ```
/// use wordle_assist::solver::best_words;
/// use wordle_assist::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["abcde", "fghij"]);
/// assert_eq!(best_words(&words).unwrap().len(), 2);
/// assert!(best_words(&[]).is_err());
/// ```
pub fn best_words(words: &[Word]) -> Result<Vec<Word>, RankError> {
    let counts = letter_usage_counts(words);
    let scores: Vec<usize> = words.iter().map(|word| score(word, &counts)).collect();

    let max_score = scores
        .iter()
        .copied()
        .max()
        .ok_or(RankError::EmptyInput)?;

    let best: Vec<Word> = words
        .iter()
        .zip(&scores)
        .filter(|&(_, &s)| s == max_score)
        .map(|(word, _)| word.clone())
        .collect();

    debug!(
        candidates = words.len(),
        max_score,
        best = best.len(),
        "ranked candidates"
    );

    Ok(best)
}

/// Score every word and sort by descending score
///
/// The sort is stable, so equal scores keep their input order.
#[must_use]
pub fn ranked(words: &[Word]) -> Vec<ScoredWord> {
    let counts = letter_usage_counts(words);
    let mut scored: Vec<ScoredWord> = words
        .iter()
        .map(|word| ScoredWord {
            word: word.clone(),
            score: score(word, &counts),
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}
