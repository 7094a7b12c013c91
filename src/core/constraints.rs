//! Guess constraints
//!
//! Three parallel constraint strings describe what prior guesses revealed:
//! - exact (green): the letter required at each position, `*` for unknown
//! - include (yellow): a letter present in the word but not at this position
//! - exclude (grey): letters absent from the word, any length

use super::word::WORD_LENGTH;
use rustc_hash::FxHashSet;
use std::fmt;

/// Placeholder for "no constraint at this position"
pub const WILDCARD: char = '*';

/// A 5-character exact or include pattern
pub type PositionPattern = [char; WORD_LENGTH];

/// Error type for malformed constraint input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    ExactLength(usize),
    IncludeLength(usize),
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactLength(len) => write!(
                f,
                "green letters must be exactly {WORD_LENGTH} characters ('*' for unknown), got {len}"
            ),
            Self::IncludeLength(len) => write!(
                f,
                "yellow letters must be exactly {WORD_LENGTH} characters ('*' for none), got {len}"
            ),
        }
    }
}

impl std::error::Error for ConstraintError {}

/// Validated constraint set for one interaction cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    exact: PositionPattern,
    include: PositionPattern,
    exclude: FxHashSet<char>,
}

impl Constraints {
    /// Constraints that every word satisfies
    #[must_use]
    pub fn unconstrained() -> Self {
        Self::from_parts([WILDCARD; WORD_LENGTH], [WILDCARD; WORD_LENGTH], "")
    }

    /// Parse the three raw constraint strings
    ///
    /// Input is lowercased. Only lengths are validated; characters other
    /// than `*` are taken literally.
    ///
    /// # Errors
    /// Returns `ConstraintError` if `exact` or `include` is not exactly
    /// 5 characters long. `exact` is checked first.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Constraints;
    ///
    /// let constraints = Constraints::new("s****", "*a***", "xyz").unwrap();
    /// assert_eq!(constraints.exact()[0], 's');
    /// assert!(constraints.excludes('y'));
    ///
    /// assert!(Constraints::new("s***", "*****", "").is_err());
    /// ```
    pub fn new(exact: &str, include: &str, exclude: &str) -> Result<Self, ConstraintError> {
        let exact = parse_exact(exact)?;
        let include = parse_include(include)?;
        Ok(Self::from_parts(exact, include, exclude))
    }

    /// Build constraints from already-validated patterns
    #[must_use]
    pub fn from_parts(exact: PositionPattern, include: PositionPattern, exclude: &str) -> Self {
        Self {
            exact,
            include,
            exclude: exclude.to_lowercase().chars().collect(),
        }
    }

    /// Green pattern
    #[inline]
    #[must_use]
    pub const fn exact(&self) -> &PositionPattern {
        &self.exact
    }

    /// Yellow pattern
    #[inline]
    #[must_use]
    pub const fn include(&self) -> &PositionPattern {
        &self.include
    }

    /// Check whether a letter is in the grey set
    #[inline]
    #[must_use]
    pub fn excludes(&self, letter: char) -> bool {
        self.exclude.contains(&letter)
    }

    /// Check whether these constraints filter nothing
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.exact.iter().all(|&c| c == WILDCARD)
            && self.include.iter().all(|&c| c == WILDCARD)
            && self.exclude.is_empty()
    }

    /// Grey letters in sorted order
    #[must_use]
    pub fn excluded_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.exclude.iter().copied().collect();
        letters.sort_unstable();
        letters
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unconstrained()
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let exact: String = self.exact.iter().collect();
        let include: String = self.include.iter().collect();
        let exclude: String = self.excluded_letters().into_iter().collect();
        write!(f, "exact={exact} include={include} exclude={exclude}")
    }
}

/// Parse a green pattern
///
/// # Errors
/// Returns `ConstraintError::ExactLength` if the lowercased input is not
/// exactly 5 characters.
pub fn parse_exact(input: &str) -> Result<PositionPattern, ConstraintError> {
    parse_pattern(input).map_err(ConstraintError::ExactLength)
}

/// Parse a yellow pattern
///
/// # Errors
/// Returns `ConstraintError::IncludeLength` if the lowercased input is not
/// exactly 5 characters.
pub fn parse_include(input: &str) -> Result<PositionPattern, ConstraintError> {
    parse_pattern(input).map_err(ConstraintError::IncludeLength)
}

fn parse_pattern(input: &str) -> Result<PositionPattern, usize> {
    input
        .to_lowercase()
        .chars()
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|rejected: Vec<char>| rejected.len())
}
