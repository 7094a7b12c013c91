//! Core domain types for the assistant
//!
//! Words and the constraint set built from prior guesses.
//! All types here are pure and independently testable.

mod constraints;
mod word;

pub use constraints::{
    ConstraintError, Constraints, PositionPattern, WILDCARD, parse_exact, parse_include,
};
pub use word::{WORD_LENGTH, Word, WordError};
