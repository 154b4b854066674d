//! Quiz items and the session answer record.

use super::QuestionKind;
use crate::error::{ChromatypeError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Answer values are whole Likert steps from -4 to +4.
pub const MIN_ANSWER_VALUE: i8 = -4;
pub const MAX_ANSWER_VALUE: i8 = 4;

/// A single quiz item as presented to the user.
///
/// The `id` is assigned after balancing and shuffling (1-based, contiguous in
/// presentation order) and is reassigned every time the bank is rebuilt; it is
/// a derived position, not a persisted identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
}

/// Questions keyed by presentation id, preserving presentation order.
pub type QuestionIndex = IndexMap<u32, Question>;

/// A recorded response to one question.
///
/// Never mutated after creation; a later answer to the same question id
/// replaces the whole entry in the session map (last write wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: u32,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub value: i8,
}

/// Answers keyed by question id; insertion order is the order of first response.
pub type AnswerMap = IndexMap<u32, Answer>;

impl Answer {
    /// Create an answer, validating the Likert value range.
    pub fn new(question_id: u32, kind: QuestionKind, value: i8) -> Result<Self> {
        if !(MIN_ANSWER_VALUE..=MAX_ANSWER_VALUE).contains(&value) {
            return Err(ChromatypeError::validation(format!(
                "answer value {value} out of range [{MIN_ANSWER_VALUE}..{MAX_ANSWER_VALUE}]"
            )));
        }
        Ok(Self {
            question_id,
            kind,
            value,
        })
    }
}

/// Build a question index from a presentation-ordered list.
#[must_use]
pub fn index_questions(questions: Vec<Question>) -> QuestionIndex {
    questions.into_iter().map(|q| (q.id, q)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Polarity, TraitAxis};

    fn kind() -> QuestionKind {
        QuestionKind::new(TraitAxis::R, Polarity::Positive)
    }

    #[test]
    fn test_answer_value_bounds() {
        assert!(Answer::new(1, kind(), 4).is_ok());
        assert!(Answer::new(1, kind(), -4).is_ok());
        assert!(Answer::new(1, kind(), 0).is_ok());
        assert!(Answer::new(1, kind(), 5).is_err());
        assert!(Answer::new(1, kind(), -5).is_err());
    }

    #[test]
    fn test_index_preserves_order() {
        let questions = vec![
            Question {
                id: 1,
                text: "first".into(),
                kind: kind(),
            },
            Question {
                id: 2,
                text: "second".into(),
                kind: kind(),
            },
        ];
        let index = index_questions(questions);
        let ids: Vec<u32> = index.keys().copied().collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
