//! chromatype: Likert personality quiz scoring and result cards
//!
//! Balances a question dataset, scores answers onto RGB color channels, and
//! renders a shareable PNG result card.

use anyhow::{Context, Result};
use chromatype::cli;
use chromatype::config::AppConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "chromatype")]
#[command(version)]
#[command(about = "Personality color quiz: balance, score, render", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Check a question dataset before deploying it
    chromatype validate questions.json --descriptions descriptions.json

    # Take the quiz in the terminal and save everything
    chromatype quiz questions.json descriptions.json \\
        --save-answers answers.json --output card.png

    # Re-score saved answers
    chromatype score answers.json

    # Re-render the card with a different font
    chromatype render answers.json descriptions.json \\
        --font DejaVuSans.ttf --output card.png")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `validate` subcommand
#[derive(Parser)]
struct ValidateArgs {
    /// Path to the question dataset
    questions: PathBuf,

    /// Description dataset to check alongside the questions
    #[arg(long)]
    descriptions: Option<PathBuf>,
}

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    /// Path to a saved answer file
    answers: PathBuf,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `render` subcommand
#[derive(Parser)]
struct RenderArgs {
    /// Path to a saved answer file
    answers: PathBuf,

    /// Path to the description dataset
    descriptions: PathBuf,

    /// TTF/OTF font file for the card text
    #[arg(long, env = "CHROMATYPE_FONT")]
    font: Option<PathBuf>,

    /// Where to write the PNG card
    #[arg(short, long, default_value = "result.png")]
    output: PathBuf,
}

/// Arguments for the `quiz` subcommand
#[derive(Parser)]
struct QuizArgs {
    /// Path to the question dataset
    questions: PathBuf,

    /// Path to the description dataset
    descriptions: PathBuf,

    /// TTF/OTF font file for the card text
    #[arg(long, env = "CHROMATYPE_FONT")]
    font: Option<PathBuf>,

    /// Save the recorded answers as JSON
    #[arg(long)]
    save_answers: Option<PathBuf>,

    /// Write the PNG result card
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate question and description datasets
    Validate(ValidateArgs),
    /// Score a saved answer file
    Score(ScoreArgs),
    /// Render the result card for a saved answer file
    Render(RenderArgs),
    /// Take the quiz interactively
    Quiz(QuizArgs),
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => AppConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Validate(args) => {
            cli::run_validate(args.questions, args.descriptions, cli.quiet)
        }
        Commands::Score(args) => {
            cli::run_score(args.answers, config.scoring, args.output_file, cli.quiet)
        }
        Commands::Render(args) => cli::run_render(
            args.answers,
            args.descriptions,
            args.font,
            args.output,
            config,
            cli.quiet,
        ),
        Commands::Quiz(args) => cli::run_quiz(
            args.questions,
            args.descriptions,
            args.font,
            args.save_answers,
            args.output,
            config,
        ),
    }
}
