//! One-shot filter command
//!
//! Applies a single set of constraints to the word list without prompting.

use crate::core::{ConstraintError, Constraints};
use crate::solver::{Assistance, Assistant, ScoredWord, ranked};

/// Configuration for a one-shot filter
#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub exact: String,
    pub include: String,
    pub exclude: String,
    /// Number of top-scored matches to list, if any
    pub show_scores: Option<usize>,
}

impl FilterConfig {
    #[must_use]
    pub fn new(exact: String, include: String, exclude: String) -> Self {
        Self {
            exact,
            include,
            exclude,
            show_scores: None,
        }
    }

    #[must_use]
    pub fn with_scores(mut self, count: usize) -> Self {
        self.show_scores = Some(count);
        self
    }
}

/// Result of a one-shot filter
#[derive(Debug, Clone)]
pub struct FilterResult {
    pub constraints: Constraints,
    pub assistance: Assistance,
    /// Top-scored matches, highest first; empty unless requested
    pub scores: Vec<ScoredWord>,
    pub total_words: usize,
}

/// Filter and rank the word list for one set of constraints
///
/// # Errors
///
/// Returns `ConstraintError` if the green or yellow pattern is not exactly
/// 5 characters long.
pub fn run_filter(
    config: &FilterConfig,
    assistant: &Assistant,
) -> Result<FilterResult, ConstraintError> {
    let constraints = Constraints::new(&config.exact, &config.include, &config.exclude)?;
    let assistance = assistant.assist(&constraints);

    let scores = match config.show_scores {
        Some(count) if count > 0 => {
            let mut scores = ranked(&assistance.matches);
            scores.truncate(count);
            scores
        }
        _ => Vec::new(),
    };

    Ok(FilterResult {
        constraints,
        assistance,
        scores,
        total_words: assistant.words().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::loader::words_from_slice;

    const SAMPLE: &[&str] = &["spice", "slice", "space", "stage", "stale"];

    fn config(exact: &str, include: &str, exclude: &str) -> FilterConfig {
        FilterConfig::new(exact.to_string(), include.to_string(), exclude.to_string())
    }

    #[test]
    fn filter_matches_in_list_order() {
        let words = words_from_slice(SAMPLE);
        let result = run_filter(&config("s****", "*****", ""), &Assistant::new(&words)).unwrap();

        let matches: Vec<&str> = result.assistance.matches.iter().map(Word::text).collect();
        assert_eq!(matches, SAMPLE);
        assert_eq!(result.total_words, 5);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn filter_rejects_bad_lengths() {
        let words = words_from_slice(SAMPLE);
        let assistant = Assistant::new(&words);

        assert!(matches!(
            run_filter(&config("s*", "*****", ""), &assistant),
            Err(ConstraintError::ExactLength(2))
        ));
        assert!(matches!(
            run_filter(&config("*****", "******", ""), &assistant),
            Err(ConstraintError::IncludeLength(6))
        ));
    }

    #[test]
    fn constraint_errors_keep_their_cause_under_context() {
        use anyhow::Context;

        let words = words_from_slice(SAMPLE);
        let err = run_filter(&config("s*", "*****", ""), &Assistant::new(&words))
            .context("Invalid filter constraints")
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid filter constraints");
        assert!(err.root_cause().to_string().contains("got 2"));
    }

    #[test]
    fn filter_lists_top_scores() {
        let words = words_from_slice(SAMPLE);
        let cfg = config("*****", "*****", "").with_scores(2);
        let result = run_filter(&cfg, &Assistant::new(&words)).unwrap();

        assert_eq!(result.scores.len(), 2);
        assert_eq!(result.scores[0].word.text(), "space");
        assert_eq!(result.scores[0].score, 18);
    }

    #[test]
    fn zero_scores_requested_lists_nothing() {
        let words = words_from_slice(SAMPLE);
        let cfg = config("*****", "*****", "").with_scores(0);
        let result = run_filter(&cfg, &Assistant::new(&words)).unwrap();
        assert!(result.scores.is_empty());
    }
}
