//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by
//! main.rs. Each handler implements the business logic for a specific CLI
//! subcommand.

mod quiz;
mod render;
mod score;
mod validate;

pub use quiz::run_quiz;
pub use render::run_render;
pub use score::run_score;
pub use validate::run_validate;

use crate::error::{ChromatypeError, ErrorContext, Result};
use crate::model::{index_questions, Answer, AnswerMap, Question, QuestionIndex, QuestionKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One persisted answer record.
///
/// Records carry the question kind alongside the id because presentation ids
/// are assigned per shuffle and are meaningless across runs; the kind is what
/// makes a saved answer file scoreable on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub value: i8,
}

/// Top-level answer file shape.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerFile {
    pub answers: Vec<AnswerRecord>,
}

/// Load an answer file and rebuild a scoreable index from its records.
///
/// The synthetic index reuses the recorded kinds; question text is not needed
/// for scoring and is left empty.
pub fn load_answers(path: &Path) -> Result<(QuestionIndex, AnswerMap)> {
    let content = std::fs::read_to_string(path).map_err(|e| ChromatypeError::io(path, e))?;
    let file: AnswerFile = serde_json::from_str(&content)
        .with_context(|| format!("loading answers from {}", path.display()))?;

    let questions = file
        .answers
        .iter()
        .map(|record| Question {
            id: record.id,
            text: String::new(),
            kind: record.kind,
        })
        .collect();
    let index = index_questions(questions);

    let mut answers = AnswerMap::new();
    for record in &file.answers {
        let answer = Answer::new(record.id, record.kind, record.value)
            .with_context(|| format!("answer for question {}", record.id))?;
        answers.insert(record.id, answer);
    }
    Ok((index, answers))
}
