//! Quiz session state: presentation order, recorded answers, progress.
//!
//! The session owns the balanced question sequence and the answer map and
//! nothing else; scoring and rendering take its state by reference. Answers
//! are keyed by question id, so re-answering a question overwrites the
//! earlier value instead of double counting it.

use crate::bank::QuestionBank;
use crate::error::{ChromatypeError, Result};
use crate::model::{Answer, AnswerMap, Question, QuestionIndex};

/// One participant's pass through a balanced question sequence.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: QuestionIndex,
    answers: AnswerMap,
}

impl QuizSession {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            questions: bank.into_index(),
            answers: AnswerMap::new(),
        }
    }

    /// The next unanswered question in presentation order, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Question> {
        self.questions
            .values()
            .find(|q| !self.answers.contains_key(&q.id))
    }

    /// Record an answer for a question.
    ///
    /// Re-answering overwrites the previous value. Unknown ids and
    /// out-of-range values are rejected.
    pub fn record(&mut self, question_id: u32, value: i8) -> Result<()> {
        let question = self.questions.get(&question_id).ok_or_else(|| {
            ChromatypeError::validation(format!(
                "question id {question_id} is not part of this session"
            ))
        })?;
        let answer = Answer::new(question_id, question.kind, value)?;
        if self.answers.insert(question_id, answer).is_some() {
            tracing::debug!(question_id, "Answer overwritten");
        }
        Ok(())
    }

    /// True once every question has a recorded answer.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answers.len() == self.questions.len()
    }

    /// Answered and total counts, for progress display.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.answers.len(), self.questions.len())
    }

    #[must_use]
    pub const fn questions(&self) -> &QuestionIndex {
        &self.questions
    }

    #[must_use]
    pub const fn answers(&self) -> &AnswerMap {
        &self.answers
    }
}
