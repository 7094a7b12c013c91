//! Word representation
//!
//! A Word stores a 5-character token along with letter position indices for
//! constraint checks and letter-frequency scoring.

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of characters in every word
pub const WORD_LENGTH: usize = 5;

/// A 5-character word with letter position tracking
///
/// The text is lowercased on construction. Only the length is validated;
/// the word list is trusted for content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [char; WORD_LENGTH],
    char_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the lowercased text is not
    /// exactly 5 characters long.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        let chars: [char; WORD_LENGTH] = text
            .chars()
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|rejected: Vec<char>| WordError::InvalidLength(rejected.len()))?;

        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            chars,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a character array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Iterate over the distinct letters of the word in first-occurrence order
    ///
    /// A letter repeated in the word is yielded once.
    pub fn distinct_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.chars
            .iter()
            .enumerate()
            .filter(|&(i, &ch)| self.positions_of(ch).first() == Some(&i))
            .map(|(_, &ch)| ch)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), &['c', 'r', 'a', 'n', 'e']);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        let word = Word::new("café!").unwrap();
        assert_eq!(word.char_at(3), 'é');
    }

    #[test]
    fn word_content_is_not_validated() {
        assert!(Word::new("ab-cd").is_ok());
        assert!(Word::new("o'dea").is_ok());
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), 'c');
        assert_eq!(word.char_at(4), 'e');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter('c'));
        assert!(word.has_letter('a'));
        assert!(!word.has_letter('z'));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.positions_of('e'), &[2, 3]);
        assert_eq!(word.positions_of('s'), &[0]);
        assert_eq!(word.positions_of('z'), &[] as &[usize]);
    }

    #[test]
    fn distinct_letters_skips_repeats() {
        let word = Word::new("speed").unwrap();
        let letters: Vec<char> = word.distinct_letters().collect();
        assert_eq!(letters, vec!['s', 'p', 'e', 'd']);

        let word = Word::new("aaaaa").unwrap();
        assert_eq!(word.distinct_letters().count(), 1);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
