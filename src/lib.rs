//! **Likert personality quiz scoring with color-coded results.**
//!
//! `chromatype` turns a pool of agree/disagree statements into a balanced
//! quiz, scores the answers onto three personality axes, and expresses the
//! outcome as an RGB color with per-axis percentages, canned descriptions,
//! and a rendered PNG result card.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The shared vocabulary: [`model::TraitAxis`],
//!   [`model::QuestionKind`], questions, answers, and the
//!   [`model::ColorProfile`] scoring output.
//! - **[`bank`]**: Loads a question dataset and balances it so every axis has
//!   equal positive and negative items before shuffling.
//! - **[`scoring`]**: The [`scoring::ScoringEngine`], a pure fold from
//!   answers to color profiles. Per-world profiles come from the same path
//!   as the comprehensive one.
//! - **[`descriptions`]**: Decile description buckets selected by
//!   percentage.
//! - **[`layout`]** and **[`render`]**: Greedy text wrapping against real
//!   font metrics, and the SVG-composed, resvg-rasterized result card.
//! - **[`session`]**: Mutable state for one participant's pass through the
//!   quiz.
//!
//! ## Getting Started: Scoring Answers
//!
//! ```
//! use chromatype::model::{index_questions, Answer, AnswerMap, Question, QuestionKind};
//! use chromatype::scoring::ScoringEngine;
//!
//! let index = index_questions(vec![
//!     Question { id: 1, text: "I take charge".into(), kind: QuestionKind::parse("RP").unwrap() },
//!     Question { id: 2, text: "I hold back".into(), kind: QuestionKind::parse("RS").unwrap() },
//! ]);
//! let answers: AnswerMap = [
//!     (1, Answer::new(1, index[&1].kind, 4).unwrap()),
//!     (2, Answer::new(2, index[&2].kind, -4).unwrap()),
//! ]
//! .into_iter()
//! .collect();
//!
//! let outcome = ScoringEngine::default().score(&answers, &index);
//! assert_eq!(outcome.comprehensive.r.absolute, 136);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Cast safety: f32/f64/u32 casts in layout math are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]

pub mod bank;
pub mod cli;
pub mod config;
pub mod descriptions;
pub mod error;
pub mod layout;
pub mod model;
pub mod render;
pub mod scoring;
pub mod session;

pub use bank::QuestionBank;
pub use descriptions::DescriptionSet;
pub use error::{ChromatypeError, Result};
pub use model::ColorProfile;
pub use render::ResultRenderer;
pub use scoring::{ScoreOutcome, ScoringEngine};
pub use session::QuizSession;
