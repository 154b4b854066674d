//! Core data model for the quiz scoring engine.
//!
//! The model is deliberately small: a closed question-kind taxonomy, quiz
//! items with presentation-order ids, immutable recorded answers, and the
//! derived per-axis results that everything downstream consumes.

mod kind;
mod question;
mod result;

pub use kind::{Polarity, QuestionKind, TraitAxis, World};
pub use question::{
    index_questions, Answer, AnswerMap, Question, QuestionIndex, MAX_ANSWER_VALUE,
    MIN_ANSWER_VALUE,
};
pub use result::{AxisResult, ColorProfile};
