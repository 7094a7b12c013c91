//! Simple interactive CLI mode
//!
//! Prompt-driven loop: read green, yellow and grey letters, then show the
//! matching words and the best guesses.

use crate::core::{Constraints, parse_exact, parse_include};
use crate::output::{display_rng, shuffled, write_assistance};
use crate::solver::Assistant;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

const EXACT_PROMPT: &str =
    "\nWhich letters are in the right position? (green letters, '*' for unknown)\nexample: *oi*g";
const INCLUDE_PROMPT: &str =
    "Which letters are in the word but in the wrong position? (yellow letters, '*' for none)\nexample: ***n*";
const EXCLUDE_PROMPT: &str = "Which letters are not in the word? (all grey letters)\nexample: xyz";

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading user input or writing output fails.
pub fn run_simple(assistant: &Assistant, seed: Option<u64>) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut rng = display_rng(seed);

    run_simple_with(assistant, &mut stdin.lock(), &mut stdout.lock(), &mut rng)
}

/// Run the prompt loop over arbitrary input and output
///
/// Ends normally at end of input.
/// A green or yellow answer of the wrong length prints a message and
/// restarts the cycle.
///
/// # Errors
///
/// Returns an error if reading from `input` or writing to `out` fails.
pub fn run_simple_with<R, W, G>(
    assistant: &Assistant,
    input: &mut R,
    out: &mut W,
    rng: &mut G,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    writeln!(
        out,
        "\n{}\n{} words loaded. Press Ctrl+D at any time to exit.",
        "*** Wordle Assistant ***".bright_cyan().bold(),
        assistant.words().len()
    )?;

    loop {
        let Some(exact) = prompt(input, out, EXACT_PROMPT)? else {
            break;
        };
        let exact = match parse_exact(&exact) {
            Ok(pattern) => pattern,
            Err(e) => {
                warn!(input = %exact, "rejected green letters");
                writeln!(out, "{} -- restarting", e.to_string().red())?;
                continue;
            }
        };

        let Some(include) = prompt(input, out, INCLUDE_PROMPT)? else {
            break;
        };
        let include = match parse_include(&include) {
            Ok(pattern) => pattern,
            Err(e) => {
                warn!(input = %include, "rejected yellow letters");
                writeln!(out, "{} -- restarting", e.to_string().red())?;
                continue;
            }
        };

        let Some(exclude) = prompt(input, out, EXCLUDE_PROMPT)? else {
            break;
        };

        let constraints = Constraints::from_parts(exact, include, &exclude);
        let assistance = assistant.assist(&constraints);
        debug!(
            %constraints,
            matches = assistance.matches.len(),
            suggestions = assistance.suggestions.len(),
            "cycle complete"
        );

        let shown = shuffled(&assistance.matches, rng);
        write_assistance(out, &shown, &assistance)?;
    }

    writeln!(out, "\n👋 Good luck!\n")?;
    Ok(())
}

/// Print a prompt and read one answer
///
/// Returns `None` at end of input. Only the line terminator is stripped
/// before lowercasing, so surrounding spaces count toward the length.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    writeln!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\n', '\r']).to_lowercase()))
}
