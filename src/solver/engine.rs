//! Main assistant interface

use super::matcher::filter_words;
use super::ranker::{RankError, best_words};
use crate::core::{Constraints, Word};

/// Outcome of one interaction cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assistance {
    /// Every word consistent with the constraints, in word-list order
    pub matches: Vec<Word>,
    /// Highest-scoring matches; empty when nothing matched
    pub suggestions: Vec<Word>,
}

impl Assistance {
    /// Check whether no word matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Suggestions are only worth showing when they narrow the matches down
    #[must_use]
    pub fn has_distinct_suggestions(&self) -> bool {
        !self.suggestions.is_empty() && self.suggestions.len() < self.matches.len()
    }
}

/// Word-list assistant
///
/// Borrows the word list loaded at startup and runs the filter-then-rank
/// pipeline for each set of constraints.
#[derive(Debug, Clone, Copy)]
pub struct Assistant<'a> {
    words: &'a [Word],
}

impl<'a> Assistant<'a> {
    /// Create a new assistant over the given word list
    #[must_use]
    pub const fn new(words: &'a [Word]) -> Self {
        Self { words }
    }

    /// The full word list
    #[must_use]
    pub const fn words(&self) -> &'a [Word] {
        self.words
    }

    /// Filter the word list and rank the matches
    ///
    /// Ranking is skipped when nothing matches.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Constraints;
    /// use wordle_assist::solver::Assistant;
    /// use wordle_assist::wordlists::loader::words_from_slice;
    ///
    /// let words = words_from_slice(&["spice", "slice", "space", "stage", "stale"]);
    /// let assistant = Assistant::new(&words);
    ///
    /// let result = assistant.assist(&Constraints::new("s****", "*****", "").unwrap());
    /// assert_eq!(result.matches.len(), 5);
    /// assert_eq!(result.suggestions[0].text(), "space");
    /// ```
    #[must_use]
    pub fn assist(&self, constraints: &Constraints) -> Assistance {
        let matches = filter_words(constraints, self.words);
        if matches.is_empty() {
            return Assistance::default();
        }

        // Non-empty matches always have a maximum score
        let suggestions = best_words(&matches).unwrap_or_else(|RankError::EmptyInput| Vec::new());

        Assistance {
            matches,
            suggestions,
        }
    }
}
