//! Formatting utilities for terminal output

use crate::core::{Constraints, WILDCARD, Word};
use colored::Colorize;

/// Format words as a bracketed, comma-separated list
#[must_use]
pub fn word_list(words: &[Word]) -> String {
    let joined = words.iter().map(Word::text).collect::<Vec<_>>().join(", ");
    format!("[{joined}]")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a letter-frequency score relative to the best score
#[must_use]
pub fn score_bar(score: usize, max_score: usize, width: usize) -> String {
    create_progress_bar(score as f64, max_score as f64, width)
}

/// Render constraints with green, yellow and grey colouring
#[must_use]
pub fn constraints_summary(constraints: &Constraints) -> String {
    let exact: String = constraints
        .exact()
        .iter()
        .map(|&c| {
            if c == WILDCARD {
                c.to_string().bright_black().to_string()
            } else {
                c.to_string().to_uppercase().green().bold().to_string()
            }
        })
        .collect();

    let include: String = constraints
        .include()
        .iter()
        .map(|&c| {
            if c == WILDCARD {
                c.to_string().bright_black().to_string()
            } else {
                c.to_string().to_uppercase().yellow().bold().to_string()
            }
        })
        .collect();

    let exclude: String = constraints.excluded_letters().into_iter().collect();

    format!(
        "green {exact}  yellow {include}  grey {}",
        exclude.to_uppercase().bright_black()
    )
}
