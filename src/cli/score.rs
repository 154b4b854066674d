//! Score command handler.
//!
//! Scores a saved answer file and emits the outcome as JSON, either to
//! stdout or to a file.

use super::load_answers;
use crate::config::ScoringConfig;
use crate::model::TraitAxis;
use crate::scoring::ScoringEngine;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Run the score command.
pub fn run_score(
    answers: PathBuf,
    config: ScoringConfig,
    output_file: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let (index, answer_map) = load_answers(&answers)?;
    let outcome = ScoringEngine::new(config).score(&answer_map, &index);

    let json = serde_json::to_string_pretty(&outcome).context("serializing score outcome")?;
    match output_file {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("writing {}", path.display()))?;
            if !quiet {
                println!("Wrote {}", path.display());
            }
        }
        None => println!("{json}"),
    }

    if !quiet {
        eprintln!("Color: {}", outcome.comprehensive.hex);
        for axis in TraitAxis::ALL {
            eprintln!(
                "  {}: {:.1}%",
                axis.label(),
                outcome.comprehensive.percentage(axis)
            );
        }
    }
    Ok(())
}
