//! Display functions for command results

use super::formatters::{constraints_summary, score_bar, word_list};
use crate::commands::FilterResult;
use crate::core::Word;
use crate::solver::Assistance;
use colored::Colorize;
use std::io::{self, Write};

/// Write the outcome of one prompt cycle
///
/// `shown` is the display order of the matches. Suggestions are only listed
/// when they are a strict subset of the matches.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_assistance<W: Write>(
    out: &mut W,
    shown: &[Word],
    assistance: &Assistance,
) -> io::Result<()> {
    if assistance.is_empty() {
        writeln!(out, "{}", "No matching words found.".red())?;
        return Ok(());
    }

    writeln!(
        out,
        "{}\n {}",
        "Here are some matching words to try:".cyan(),
        word_list(shown)
    )?;

    if assistance.has_distinct_suggestions() {
        writeln!(
            out,
            "{} {}\n",
            "suggestions:".green().bold(),
            word_list(&assistance.suggestions)
        )?;
    }

    Ok(())
}

/// Print the result of a one-shot filter
pub fn print_filter_result(result: &FilterResult) {
    let assistance = &result.assistance;

    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", constraints_summary(&result.constraints));
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n📋 {} of {} words match",
        assistance.matches.len().to_string().bright_yellow().bold(),
        result.total_words
    );

    if assistance.is_empty() {
        println!("{}", "❌ No matching words found.".red().bold());
        return;
    }

    println!("   {}", word_list(&assistance.matches));

    if assistance.has_distinct_suggestions() {
        println!(
            "\n💡 {} {}",
            "Suggestions:".bright_cyan().bold(),
            word_list(&assistance.suggestions).green()
        );
    }

    if !result.scores.is_empty() {
        let max_score = result.scores.first().map_or(0, |scored| scored.score);

        println!("\n📈 {}", "Letter-frequency scores:".bright_cyan().bold());
        for scored in &result.scores {
            println!(
                "   {} {} {:3}",
                scored.word.text().to_uppercase(),
                score_bar(scored.score, max_score, 30).green(),
                scored.score
            );
        }
    }
}
