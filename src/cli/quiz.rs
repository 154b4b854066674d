//! Quiz command handler.
//!
//! Runs an interactive terminal session: presents each balanced question,
//! collects Likert answers, then scores and reports the profile. Answers and
//! the result card can be saved for later runs of `score` and `render`.

use super::{AnswerFile, AnswerRecord};
use crate::bank::QuestionBank;
use crate::config::AppConfig;
use crate::descriptions::DescriptionSet;
use crate::model::{TraitAxis, MAX_ANSWER_VALUE, MIN_ANSWER_VALUE};
use crate::render::{FontStore, ResultRenderer};
use crate::scoring::ScoringEngine;
use crate::session::QuizSession;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write as _};
use std::path::PathBuf;

/// Run the quiz command.
pub fn run_quiz(
    questions: PathBuf,
    descriptions: PathBuf,
    font: Option<PathBuf>,
    save_answers: Option<PathBuf>,
    output_file: Option<PathBuf>,
    config: AppConfig,
) -> Result<()> {
    let bank = QuestionBank::load(&questions)?;
    let set = DescriptionSet::load(&descriptions)?;
    let mut session = QuizSession::new(bank);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    println!(
        "Answer each statement from {MIN_ANSWER_VALUE} (strongly disagree) \
         to {MAX_ANSWER_VALUE} (strongly agree). Enter q to stop early."
    );

    while let Some(question) = session.current().cloned() {
        let (done, total) = session.progress();
        print!("[{}/{total}] {}\n> ", done + 1, question.text);
        io::stdout().flush().context("flushing prompt")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading answer")?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            break;
        }
        match input.parse::<i8>() {
            Ok(value) => {
                if let Err(err) = session.record(question.id, value) {
                    println!("{err}");
                }
            }
            Err(_) => println!(
                "Enter a whole number from {MIN_ANSWER_VALUE} to {MAX_ANSWER_VALUE}, or q"
            ),
        }
    }

    let (answered, total) = session.progress();
    if answered < total {
        println!("Scoring {answered} of {total} answers; the rest count as neutral.");
    }

    let outcome = ScoringEngine::new(config.scoring).score(session.answers(), session.questions());

    println!("\nYour color: {}", outcome.comprehensive.hex);
    for axis in TraitAxis::ALL {
        let percentage = outcome.comprehensive.percentage(axis);
        println!("  {}: {percentage:.1}%", axis.label());
        println!("    {}", set.describe(axis, percentage));
    }
    for (world, profile) in &outcome.worlds {
        println!("  {world}: {}", profile.hex);
    }

    if let Some(path) = save_answers {
        let file = AnswerFile {
            answers: session
                .answers()
                .values()
                .map(|a| AnswerRecord {
                    id: a.question_id,
                    kind: a.kind,
                    value: a.value,
                })
                .collect(),
        };
        let json = serde_json::to_string_pretty(&file).context("serializing answers")?;
        std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        println!("Saved answers to {}", path.display());
    }

    if let Some(path) = output_file {
        let texts: [&str; 3] = [
            set.describe(TraitAxis::R, outcome.comprehensive.percentage(TraitAxis::R)),
            set.describe(TraitAxis::G, outcome.comprehensive.percentage(TraitAxis::G)),
            set.describe(TraitAxis::B, outcome.comprehensive.percentage(TraitAxis::B)),
        ];
        let renderer = ResultRenderer::new(config.render, FontStore::load(font.as_deref()));
        let png = renderer.render(&outcome.comprehensive, texts)?;
        std::fs::write(&path, png).with_context(|| format!("writing {}", path.display()))?;
        println!("Saved result card to {}", path.display());
    }

    Ok(())
}
