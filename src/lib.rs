//! Wordle Assistant
//!
//! Filters a five-letter word list by the green, yellow and grey letters
//! revealed so far, and suggests the candidates built from the most common
//! letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::core::Constraints;
//! use wordle_assist::solver::Assistant;
//! use wordle_assist::wordlists::loader::words_from_slice;
//!
//! let words = words_from_slice(&["spice", "slice", "space", "stage", "stale"]);
//! let assistant = Assistant::new(&words);
//!
//! // 'a' is in the word but not second; no 'e' outside green positions
//! let constraints = Constraints::new("*****", "*a***", "e").unwrap();
//! let result = assistant.assist(&constraints);
//! assert!(result.matches.is_empty());
//! ```

// Core domain types
pub mod core;

// Matching and ranking
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Diagnostics
pub mod logging;
