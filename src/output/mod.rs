//! Terminal output formatting
//!
//! Display utilities for CLI results, plus the cosmetic shuffle applied to
//! matches before they are shown.

pub mod display;
pub mod formatters;
pub mod shuffle;

pub use display::{print_filter_result, write_assistance};
pub use shuffle::{display_rng, shuffled};
