//! Word list loading utilities
//!
//! Provides functions to load word lists from files or string slices.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load words from a file with one word per line
///
/// Trailing whitespace is stripped and each line is lowercased; only lines
/// of exactly 5 characters are kept. File order and duplicates are preserved.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use wordle_assist::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordlist.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_lines(&content);

    debug!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

/// Parse word list text, keeping the 5-character lines
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| Word::new(line.trim_end()).ok())
        .collect()
}

/// Convert a string slice to a Word vector, skipping entries of the wrong length
///
/// # Examples
/// ```
/// use wordle_assist::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
