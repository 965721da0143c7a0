//! HORDLE - CLI
//!
//! Word guessing game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, builder::RangedU64ValueParser};
use hordle::{
    commands::{run_simple, score_words},
    config::GameConfig,
    core::Word,
    game::DEFAULT_ATTEMPTS,
    output::print_score_result,
    wordlists::{Dictionary, loader::load_from_file},
};
use std::{fs::File, path::PathBuf, sync::Mutex};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hordle",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Secret word (default: a random common word for every game)
    #[arg(short, long, global = true)]
    secret: Option<String>,

    /// Number of guesses per game
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_ATTEMPTS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=20)
    )]
    attempts: usize,

    /// Word list of accepted guesses, one word per line (default: built in)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Log debug events
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Log errors only
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Write logs to this file (the TUI logs nowhere else)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type guesses line by line)
    Simple,

    /// Score one guess against a secret
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },
}

/// Install the tracing subscriber
///
/// `HORDLE_LOG` overrides the level picked from `--verbose` / `--quiet`.
/// Without a log file, the TUI gets no subscriber so nothing is written over
/// the alternate screen.
fn init_tracing(cli: &Cli, tui: bool) -> Result<()> {
    let level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_env("HORDLE_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None if tui => return Ok(()),
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    result.map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}

/// Load the dictionary from the `--dictionary` file or the built-in lists
fn load_dictionary(path: Option<&PathBuf>) -> Result<Dictionary> {
    match path {
        None => Ok(Dictionary::embedded()),
        Some(path) => {
            let accepted = load_from_file(path)?;
            tracing::info!(words = accepted.len(), path = %path.display(), "loaded dictionary");
            Ok(Dictionary::with_accepted(accepted))
        }
    }
}

fn build_config(cli: &Cli) -> Result<GameConfig> {
    let secret = cli
        .secret
        .as_deref()
        .map(Word::new)
        .transpose()
        .context("invalid --secret")?;

    Ok(GameConfig {
        secret,
        attempts: cli.attempts,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);
    init_tracing(&cli, matches!(command, Commands::Play))?;

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Score { guess, secret } => run_score_command(guess, secret),
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use hordle::interactive::{App, run_tui};

    let dictionary = load_dictionary(cli.dictionary.as_ref())?;
    let app = App::new(build_config(cli)?, &dictionary)?;
    run_tui(app)
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let dictionary = load_dictionary(cli.dictionary.as_ref())?;
    run_simple(&build_config(cli)?, &dictionary)
}

fn run_score_command(guess: &str, secret: &str) -> Result<()> {
    let record = score_words(guess, secret)?;
    print_score_result(&record);
    Ok(())
}
