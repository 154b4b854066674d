//! Scoring engine: folds recorded answers into color profiles.
//!
//! Scoring is a pure function of the answer map, the question index, and the
//! configured scale rule. Positive-polarity answers add to an axis total,
//! negative-polarity answers subtract, the difference is shifted onto the
//! 0..255 channel around a midpoint of 128, and the three channels become a
//! hex color plus percentages.
//!
//! Multi-world question sets produce one profile per world plus a
//! comprehensive profile computed from the sum across all worlds before
//! normalization; there is a single scoring path parameterized by an optional
//! world filter, not parallel code per variant.

use crate::config::ScoringConfig;
use crate::model::{AnswerMap, AxisResult, ColorProfile, Polarity, QuestionIndex, TraitAxis, World};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything scoring produces for one completed answer set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreOutcome {
    /// Profile over all answers, worlds summed before normalization
    pub comprehensive: ColorProfile,
    /// Per-world profiles; empty for single-axis question sets
    pub worlds: BTreeMap<World, ColorProfile>,
}

/// Stateless scoring engine carrying only its configuration.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    #[must_use]
    pub const fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score a completed answer set against its question index.
    ///
    /// Answers referencing a question id absent from the index are skipped
    /// (logged, not fatal). An axis with no contributing answers stays at the
    /// neutral midpoint: absolute 128, 50.0%.
    #[must_use]
    pub fn score(&self, answers: &AnswerMap, index: &QuestionIndex) -> ScoreOutcome {
        let mut skipped = 0usize;
        let comprehensive = self.fold(answers, index, None, &mut skipped);

        let mut worlds = BTreeMap::new();
        for world in worlds_present(index) {
            let mut ignored = 0;
            worlds.insert(world, self.fold(answers, index, Some(world), &mut ignored));
        }

        if skipped > 0 {
            tracing::warn!(
                skipped,
                "Answers referenced unknown question ids and were ignored"
            );
        }

        ScoreOutcome {
            comprehensive,
            worlds,
        }
    }

    /// Fold answers for one world (or all worlds) into a profile.
    fn fold(
        &self,
        answers: &AnswerMap,
        index: &QuestionIndex,
        world: Option<World>,
        skipped: &mut usize,
    ) -> ColorProfile {
        let mut positive = [0i32; 3];
        let mut negative = [0i32; 3];

        for answer in answers.values() {
            let Some(question) = index.get(&answer.question_id) else {
                *skipped += 1;
                continue;
            };
            if world.is_some() && question.kind.world != world {
                continue;
            }
            let slot = axis_slot(question.kind.axis);
            match question.kind.polarity {
                Polarity::Positive => positive[slot] += i32::from(answer.value),
                Polarity::Negative => negative[slot] += i32::from(answer.value),
            }
        }

        let items = items_per_side(index, world);
        let axis = |a: TraitAxis| {
            let slot = axis_slot(a);
            let raw = positive[slot] - negative[slot];
            AxisResult::from_raw(raw, self.config.scale.factor(items[slot]))
        };
        ColorProfile::from_axes(axis(TraitAxis::R), axis(TraitAxis::G), axis(TraitAxis::B))
    }
}

/// Count balanced items per axis side for the scale rule.
///
/// The bank guarantees equal positive and negative counts per pair, so the
/// positive count stands in for either side.
fn items_per_side(index: &QuestionIndex, world: Option<World>) -> [usize; 3] {
    let mut items = [0usize; 3];
    for question in index.values() {
        if world.is_some() && question.kind.world != world {
            continue;
        }
        if question.kind.polarity == Polarity::Positive {
            items[axis_slot(question.kind.axis)] += 1;
        }
    }
    items
}

fn worlds_present(index: &QuestionIndex) -> Vec<World> {
    let mut present: Vec<World> = Vec::new();
    for question in index.values() {
        if let Some(world) = question.kind.world {
            if !present.contains(&world) {
                present.push(world);
            }
        }
    }
    present.sort_unstable();
    present
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
    use crate::model::{index_questions, Answer, Question, QuestionKind};

    fn question(id: u32, wire: &str) -> Question {
        Question {
            id,
            text: format!("q{id}"),
            kind: QuestionKind::parse(wire).expect(wire),
        }
    }

    fn answer(id: u32, wire: &str, value: i8) -> (u32, Answer) {
        let kind = QuestionKind::parse(wire).expect(wire);
        (id, Answer::new(id, kind, value).expect("valid value"))
    }

    #[test]
    fn test_empty_answers_score_midpoint() {
        let index = index_questions(vec![
            question(1, "RP"),
            question(2, "RS"),
            question(3, "GP"),
            question(4, "GS"),
            question(5, "BP"),
            question(6, "BS"),
        ]);
        let outcome = ScoringEngine::default().score(&AnswerMap::new(), &index);
        for axis in TraitAxis::ALL {
            assert_eq!(outcome.comprehensive.percentage(axis), 50.0);
        }
        assert_eq!(outcome.comprehensive.hex, "#808080");
        assert!(outcome.worlds.is_empty());
    }

    #[test]
    fn test_worked_example_rp4_rs_minus4() {
        let index = index_questions(vec![question(1, "RP"), question(2, "RS")]);
        let answers: AnswerMap = [answer(1, "RP", 4), answer(2, "RS", -4)]
            .into_iter()
            .collect();
        let outcome = ScoringEngine::default().score(&answers, &index);

        // raw = 4 - (-4) = 8
        assert_eq!(outcome.comprehensive.r.raw, 8);
        assert_eq!(outcome.comprehensive.r.absolute, 136);
        assert_eq!(outcome.comprehensive.r.percentage, 53.1);
    }

    #[test]
    fn test_all_zero_answers_are_mid_gray() {
        let index = index_questions(vec![
            question(1, "RP"),
            question(2, "RS"),
            question(3, "GP"),
            question(4, "GS"),
            question(5, "BP"),
            question(6, "BS"),
        ]);
        let answers: AnswerMap = index
            .values()
            .map(|q| {
                let a = Answer::new(q.id, q.kind, 0).expect("zero is valid");
                (q.id, a)
            })
            .collect();
        let outcome = ScoringEngine::default().score(&answers, &index);
        assert_eq!(outcome.comprehensive.hex, "#808080");
    }

    #[test]
    fn test_unknown_question_ids_are_skipped() {
        let index = index_questions(vec![question(1, "RP")]);
        let answers: AnswerMap = [answer(1, "RP", 4), answer(99, "GP", 4)]
            .into_iter()
            .collect();
        let outcome = ScoringEngine::default().score(&answers, &index);
        assert_eq!(outcome.comprehensive.r.raw, 4);
        // The orphan GP answer contributes nothing
        assert_eq!(outcome.comprehensive.g.raw, 0);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let index = index_questions(vec![question(1, "RP"), question(2, "GS")]);
        let answers: AnswerMap = [answer(1, "RP", 3), answer(2, "GS", -2)]
            .into_iter()
            .collect();
        let engine = ScoringEngine::default();
        assert_eq!(engine.score(&answers, &index), engine.score(&answers, &index));
    }

    #[test]
    fn test_world_profiles_and_comprehensive_sum() {
        let index = index_questions(vec![
            question(1, "RPinner"),
            question(2, "RSinner"),
            question(3, "RPsocial"),
            question(4, "RSsocial"),
        ]);
        let answers: AnswerMap = [
            answer(1, "RPinner", 4),
            answer(2, "RSinner", 0),
            answer(3, "RPsocial", 2),
            answer(4, "RSsocial", 0),
        ]
        .into_iter()
        .collect();
        let outcome = ScoringEngine::default().score(&answers, &index);

        assert_eq!(outcome.worlds.len(), 2);
        assert_eq!(outcome.worlds[&World::Inner].r.raw, 4);
        assert_eq!(outcome.worlds[&World::Social].r.raw, 2);
        // Comprehensive sums raw totals across worlds before normalization
        assert_eq!(outcome.comprehensive.r.raw, 6);
        assert_eq!(outcome.comprehensive.r.absolute, 134);
    }

    #[test]
    fn test_per_item_count_scale() {
        use crate::config::{ScaleRule, ScoringConfig};

        // One item per side: factor = 256 / 8 = 32, so +4 saturates the channel
        let index = index_questions(vec![question(1, "RP"), question(2, "RS")]);
        let answers: AnswerMap = [answer(1, "RP", 4)].into_iter().collect();
        let engine = ScoringEngine::new(ScoringConfig {
            scale: ScaleRule::PerItemCount,
        });
        let outcome = engine.score(&answers, &index);
        assert_eq!(outcome.comprehensive.r.absolute, 255);
        assert_eq!(outcome.comprehensive.r.percentage, 99.6);
    }
}
