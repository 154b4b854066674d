//! Render command handler.
//!
//! Scores a saved answer file, selects the matching description buckets, and
//! writes the result card PNG.

use super::load_answers;
use crate::config::AppConfig;
use crate::descriptions::DescriptionSet;
use crate::model::TraitAxis;
use crate::render::{FontStore, ResultRenderer};
use crate::scoring::ScoringEngine;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Run the render command.
pub fn run_render(
    answers: PathBuf,
    descriptions: PathBuf,
    font: Option<PathBuf>,
    output_file: PathBuf,
    config: AppConfig,
    quiet: bool,
) -> Result<()> {
    let (index, answer_map) = load_answers(&answers)?;
    let outcome = ScoringEngine::new(config.scoring).score(&answer_map, &index);
    let set = DescriptionSet::load(&descriptions)?;

    let texts: [&str; 3] = [
        set.describe(TraitAxis::R, outcome.comprehensive.percentage(TraitAxis::R)),
        set.describe(TraitAxis::G, outcome.comprehensive.percentage(TraitAxis::G)),
        set.describe(TraitAxis::B, outcome.comprehensive.percentage(TraitAxis::B)),
    ];

    let renderer = ResultRenderer::new(config.render, FontStore::load(font.as_deref()));
    let png = renderer.render(&outcome.comprehensive, texts)?;
    std::fs::write(&output_file, png)
        .with_context(|| format!("writing {}", output_file.display()))?;

    if !quiet {
        println!(
            "Wrote {} ({})",
            output_file.display(),
            outcome.comprehensive.hex
        );
    }
    Ok(())
}
