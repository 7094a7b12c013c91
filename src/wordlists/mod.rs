//! Word lists for the assistant
//!
//! The word list is read once at startup from a plain text file.

pub mod loader;

pub use loader::load_from_file;

/// Word list read when no path is given on the command line
pub const DEFAULT_WORDLIST: &str = "wordlist.txt";
