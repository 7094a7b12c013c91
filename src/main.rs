//! Wordle Assistant - CLI
//!
//! Filters a word list by green/yellow/grey letters and suggests the next
//! guess by letter frequency. Prompt, TUI and one-shot modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_assist::{
    commands::{FilterConfig, run_filter, run_simple},
    core::Word,
    logging::{self, LogTarget},
    output::print_filter_result,
    solver::Assistant,
    wordlists::{DEFAULT_WORDLIST, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Wordle assistant: filter a word list by green/yellow/grey letters and suggest guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDLIST)]
    wordlist: String,

    /// Seed for the display shuffle (reproducible output)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for green, yellow and grey letters in a loop (default)
    Simple,

    /// Interactive TUI mode
    Play,

    /// Filter once with the given constraints
    Filter {
        /// Green letters, '*' for unknown (e.g. *oi*g)
        #[arg(short, long, default_value = "*****")]
        exact: String,

        /// Yellow letters, '*' for none (e.g. ***n*)
        #[arg(short, long, default_value = "*****")]
        include: String,

        /// Grey letters (e.g. xyz)
        #[arg(short = 'x', long, default_value = "")]
        exclude: String,

        /// Also list the N best letter-frequency scores
        #[arg(short, long)]
        scores: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Simple mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    let log_target = match command {
        Commands::Play => LogTarget::Discard,
        _ => LogTarget::Stderr,
    };
    logging::init(cli.verbose, log_target)?;

    let words = load_words(&cli.wordlist)?;
    let assistant = Assistant::new(&words);

    match command {
        Commands::Simple => run_simple(&assistant, cli.seed).context("Prompt loop failed"),
        Commands::Play => run_play_command(&words, cli.seed),
        Commands::Filter {
            exact,
            include,
            exclude,
            scores,
        } => {
            let mut config = FilterConfig::new(exact, include, exclude);
            if let Some(count) = scores {
                config = config.with_scores(count);
            }
            run_filter_command(&config, &assistant)
        }
    }
}

fn load_words(path: &str) -> Result<Vec<Word>> {
    let words =
        load_from_file(path).with_context(|| format!("Failed to read word list '{path}'"))?;
    tracing::info!(path, words = words.len(), "word list ready");
    Ok(words)
}

fn run_filter_command(config: &FilterConfig, assistant: &Assistant) -> Result<()> {
    let result = run_filter(config, assistant).context("Invalid filter constraints")?;
    print_filter_result(&result);
    Ok(())
}

fn run_play_command(words: &[Word], seed: Option<u64>) -> Result<()> {
    use wordle_assist::interactive::{App, run_tui};

    let app = App::new(words, seed);
    run_tui(app)
}
