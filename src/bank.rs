//! Question bank: dataset loading, polarity balancing, and shuffling.
//!
//! The raw pool may carry an unequal number of positive and negative items
//! per axis; scoring assumes symmetry, so the bank trims every opposing pair
//! down to the smaller side before shuffling. The shuffle is intentionally
//! unseeded: presentation order changes on every load for perceived
//! freshness, not statistical validity.

use crate::error::{ChromatypeError, DataErrorKind, ErrorContext, Result};
use crate::model::{index_questions, Polarity, Question, QuestionIndex, QuestionKind, TraitAxis};
use indexmap::IndexMap;
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::path::Path;

/// One raw dataset record before validation.
#[derive(Debug, Clone, Deserialize)]
struct QuestionRecord {
    #[serde(rename = "type")]
    kind: String,
    text: String,
}

/// Top-level question dataset shape.
#[derive(Debug, Deserialize)]
struct QuestionFile {
    questions: Option<Vec<QuestionRecord>>,
}

/// A balanced, shuffled question sequence ready for a quiz session.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Load a question dataset from a JSON file and balance it.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ChromatypeError::io(path, e))?;
        Self::from_json(&content)
            .with_context(|| format!("loading question bank from {}", path.display()))
    }

    /// Parse and balance a question dataset from JSON content.
    pub fn from_json(content: &str) -> Result<Self> {
        let file: QuestionFile = serde_json::from_str(content)?;
        let records = file.questions.ok_or_else(|| {
            ChromatypeError::data(
                "question dataset",
                DataErrorKind::MissingCollection {
                    collection: "questions".to_string(),
                },
            )
        })?;

        let mut pool = Vec::with_capacity(records.len());
        for record in records {
            let kind = QuestionKind::parse(&record.kind)
                .ok_or_else(|| ChromatypeError::invalid_kind(record.kind.clone()))?;
            pool.push((kind, record.text));
        }
        Self::balance(pool)
    }

    /// Balance a typed pool into a shuffled question sequence.
    ///
    /// Groups items by kind, trims each opposing pair (same axis and world,
    /// opposite polarity) to `min(positive, negative)` items per side,
    /// shuffles the concatenation uniformly, and assigns sequential 1-based
    /// ids in the final order.
    pub fn balance(pool: Vec<(QuestionKind, String)>) -> Result<Self> {
        if pool.is_empty() {
            return Err(ChromatypeError::data(
                "question dataset",
                DataErrorKind::EmptyPool,
            ));
        }

        let mut grouped: IndexMap<QuestionKind, Vec<String>> = IndexMap::new();
        for (kind, text) in pool {
            grouped.entry(kind).or_default().push(text);
        }

        // Opposing pairs are keyed by the positive-polarity kind.
        let pair_keys: indexmap::IndexSet<QuestionKind> = grouped
            .keys()
            .map(|k| QuestionKind {
                axis: k.axis,
                polarity: Polarity::Positive,
                world: k.world,
            })
            .collect();

        let mut balanced: Vec<(QuestionKind, String)> = Vec::new();
        let mut kept_per_axis = [0usize; 3];
        for positive_kind in pair_keys {
            let negative_kind = QuestionKind {
                polarity: Polarity::Negative,
                ..positive_kind
            };
            let positives = grouped.get(&positive_kind).map_or(&[][..], Vec::as_slice);
            let negatives = grouped.get(&negative_kind).map_or(&[][..], Vec::as_slice);
            let take = positives.len().min(negatives.len());
            let dropped = positives.len() + negatives.len() - 2 * take;
            if dropped > 0 {
                tracing::info!(
                    axis = %positive_kind.axis,
                    world = ?positive_kind.world,
                    dropped,
                    "Trimmed unbalanced question pair"
                );
            }
            for text in positives.iter().take(take) {
                balanced.push((positive_kind, text.clone()));
            }
            for text in negatives.iter().take(take) {
                balanced.push((negative_kind, text.clone()));
            }
            kept_per_axis[axis_slot(positive_kind.axis)] += take;
        }

        for axis in TraitAxis::ALL {
            if kept_per_axis[axis_slot(axis)] == 0 {
                return Err(ChromatypeError::data(
                    "question dataset",
                    DataErrorKind::MissingKind {
                        kind: axis.to_string(),
                    },
                ));
            }
        }

        balanced.shuffle(&mut rand::thread_rng());

        let questions = balanced
            .into_iter()
            .enumerate()
            .map(|(i, (kind, text))| Question {
                id: i as u32 + 1,
                text,
                kind,
            })
            .collect::<Vec<_>>();

        tracing::debug!(count = questions.len(), "Question bank balanced");
        Ok(Self { questions })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Consume the bank into a question index keyed by presentation id.
    #[must_use]
    pub fn into_index(self) -> QuestionIndex {
        index_questions(self.questions)
    }
}

const fn axis_slot(axis: TraitAxis) -> usize {
    match axis {
        TraitAxis::R => 0,
        TraitAxis::G => 1,
        TraitAxis::B => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::World;

    fn kind(wire: &str) -> QuestionKind {
        QuestionKind::parse(wire).expect(wire)
    }

    fn pool_of(counts: &[(&str, usize)]) -> Vec<(QuestionKind, String)> {
        let mut pool = Vec::new();
        for &(wire, n) in counts {
            for i in 0..n {
                pool.push((kind(wire), format!("{wire} item {i}")));
            }
        }
        pool
    }

    #[test]
    fn test_balance_trims_excess_items() {
        // 7 positive vs 3 negative for R: the pair keeps 3 + 3 = 6
        let bank = QuestionBank::balance(pool_of(&[
            ("RP", 7),
            ("RS", 3),
            ("GP", 2),
            ("GS", 2),
            ("BP", 1),
            ("BS", 1),
        ]))
        .expect("balance");

        let r_items = bank
            .questions()
            .iter()
            .filter(|q| q.kind.axis == TraitAxis::R)
            .count();
        assert_eq!(r_items, 6);
        assert_eq!(bank.len(), 6 + 4 + 2);
    }

    #[test]
    fn test_ids_are_contiguous_one_based() {
        let bank = QuestionBank::balance(pool_of(&[
            ("RP", 2),
            ("RS", 2),
            ("GP", 2),
            ("GS", 2),
            ("BP", 2),
            ("BS", 2),
        ]))
        .expect("balance");

        let mut ids: Vec<u32> = bank.questions().iter().map(|q| q.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=12).collect::<Vec<u32>>());
    }

    #[test]
    fn test_empty_pool_is_fatal() {
        let err = QuestionBank::balance(Vec::new()).unwrap_err();
        assert!(err.to_string().contains("quiz data"));
    }

    #[test]
    fn test_missing_axis_is_fatal() {
        // No B items at all
        let result = QuestionBank::balance(pool_of(&[
            ("RP", 2),
            ("RS", 2),
            ("GP", 2),
            ("GS", 2),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_one_sided_pair_contributes_nothing() {
        // BP without BS zeroes the pair, which zeroes the whole B axis
        let result = QuestionBank::balance(pool_of(&[
            ("RP", 2),
            ("RS", 2),
            ("GP", 2),
            ("GS", 2),
            ("BP", 3),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_worlds_balance_independently() {
        let bank = QuestionBank::balance(pool_of(&[
            ("RPinner", 3),
            ("RSinner", 1),
            ("RPsocial", 2),
            ("RSsocial", 2),
            ("GPinner", 1),
            ("GSinner", 1),
            ("BPinner", 1),
            ("BSinner", 1),
        ]))
        .expect("balance");

        let inner_r = bank
            .questions()
            .iter()
            .filter(|q| q.kind.axis == TraitAxis::R && q.kind.world == Some(World::Inner))
            .count();
        assert_eq!(inner_r, 2, "RPinner trimmed to the RSinner count");

        let social_r = bank
            .questions()
            .iter()
            .filter(|q| q.kind.axis == TraitAxis::R && q.kind.world == Some(World::Social))
            .count();
        assert_eq!(social_r, 4);
    }

    #[test]
    fn test_from_json_rejects_missing_collection() {
        let err = QuestionBank::from_json("{}").unwrap_err();
        assert!(err.to_string().contains("quiz data"));
    }

    #[test]
    fn test_from_json_rejects_unknown_kind() {
        let content = r#"{"questions": [{"type": "XP", "text": "bogus"}]}"#;
        assert!(QuestionBank::from_json(content).is_err());
    }

    #[test]
    fn test_from_json_happy_path() {
        let content = r#"{"questions": [
            {"type": "RP", "text": "I take charge"},
            {"type": "RS", "text": "I hold back"},
            {"type": "GP", "text": "I smooth things over"},
            {"type": "GS", "text": "I let conflicts run"},
            {"type": "BP", "text": "I plan ahead"},
            {"type": "BS", "text": "I improvise"}
        ]}"#;
        let bank = QuestionBank::from_json(content).expect("parse");
        assert_eq!(bank.len(), 6);
    }
}
