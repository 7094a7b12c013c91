//! Constraint matching
//!
//! Decides whether a word is consistent with the green/yellow/grey
//! constraints and filters word lists down to the candidates.

use crate::core::{Constraints, WILDCARD, Word};
use tracing::debug;

/// Check whether a word satisfies all constraints
///
/// Checks run in order and the first failure rejects:
/// 1. Exact: every non-wildcard green letter sits at its position
/// 2. Include: every non-wildcard yellow letter is in the word, but not at its position
/// 3. Exclude: no grey letter sits at a position that has no green letter
///
/// Positions pinned by a green letter are exempt from the grey check, since a
/// letter can be green in one place and grey in another.
///
/// # Examples
/// ```
/// use wordle_assist::core::{Constraints, Word};
/// use wordle_assist::solver::matches;
///
/// let constraints = Constraints::new("a****", "*****", "a").unwrap();
/// assert!(matches(&constraints, &Word::new("abbey").unwrap()));
/// assert!(!matches(&constraints, &Word::new("aorta").unwrap()));
/// ```
#[must_use]
pub fn matches(constraints: &Constraints, word: &Word) -> bool {
    let exact = constraints.exact();
    let include = constraints.include();

    let exact_ok = exact
        .iter()
        .zip(word.chars())
        .all(|(&green, &letter)| green == WILDCARD || green == letter);
    if !exact_ok {
        return false;
    }

    let include_ok = include.iter().zip(word.chars()).all(|(&yellow, &letter)| {
        yellow == WILDCARD || (word.has_letter(yellow) && yellow != letter)
    });
    if !include_ok {
        return false;
    }

    exact
        .iter()
        .zip(word.chars())
        .filter(|&(&green, _)| green == WILDCARD)
        .all(|(_, &letter)| !constraints.excludes(letter))
}

/// Filter a word list down to the words that satisfy the constraints
///
/// Order and duplicates of the input are preserved. An empty list yields an
/// empty result.
#[must_use]
pub fn filter_words(constraints: &Constraints, words: &[Word]) -> Vec<Word> {
    let matching: Vec<Word> = words
        .iter()
        .filter(|word| matches(constraints, word))
        .cloned()
        .collect();

    debug!(
        %constraints,
        total = words.len(),
        matching = matching.len(),
        "filtered word list"
    );

    matching
}
