//! Validate command handler.
//!
//! Loads and balances the question dataset, optionally checks a description
//! dataset against it, and reports what a quiz session would actually use.

use crate::bank::QuestionBank;
use crate::descriptions::DescriptionSet;
use crate::model::{Polarity, TraitAxis};
use anyhow::Result;
use std::path::PathBuf;

/// Run the validate command.
pub fn run_validate(questions: PathBuf, descriptions: Option<PathBuf>, quiet: bool) -> Result<()> {
    let bank = QuestionBank::load(&questions)?;

    if !quiet {
        println!("Question dataset: {}", questions.display());
        println!("  balanced questions: {}", bank.len());
        for axis in TraitAxis::ALL {
            let per_side = bank
                .questions()
                .iter()
                .filter(|q| q.kind.axis == axis && q.kind.polarity == Polarity::Positive)
                .count();
            println!("  {}: {per_side} per side", axis.label());
        }
    }

    if let Some(path) = descriptions {
        let set = DescriptionSet::load(&path)?;
        if !quiet {
            println!("Description dataset: {}", path.display());
            let worlds: Vec<String> = crate::model::World::ALL
                .into_iter()
                .filter(|w| set.world(*w).is_some())
                .map(|w| w.to_string())
                .collect();
            if worlds.is_empty() {
                println!("  comprehensive buckets only");
            } else {
                println!("  world buckets: {}", worlds.join(", "));
            }
        }
    }

    if !quiet {
        println!("OK");
    }
    Ok(())
}
