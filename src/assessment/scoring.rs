use super::{AnswerSet, QuizItem};
use crate::bank::Level;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Correct/answered/total counts for one level or topic bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub correct: usize,
    pub total: usize,
    #[serde(default)]
    pub answered: usize,
}

impl Tally {
    /// Share of correct answers as 0..=100; an empty bucket scores 0.
    pub fn percentage(&self) -> f64 {
        percentage(self.correct, self.total)
    }

    pub fn incorrect(&self) -> usize {
        self.answered.saturating_sub(self.correct)
    }

    pub fn unattempted(&self) -> usize {
        self.total.saturating_sub(self.answered)
    }

    fn record(&mut self, answered: bool, correct: bool) {
        self.total += 1;
        if answered {
            self.answered += 1;
        }
        if correct {
            self.correct += 1;
        }
    }
}

pub(crate) fn percentage(correct: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64 * 100.0
    }
}

/// Result of scoring one quiz submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score_percentage: f64,
    pub correct_count: usize,
    pub total_count: usize,
    /// Always holds all five levels.
    pub level_performance: BTreeMap<Level, Tally>,
    /// Topics in the order they first appear in the quiz.
    pub topic_performance: IndexMap<String, Tally>,
}

impl ScoreReport {
    pub fn level(&self, level: Level) -> Tally {
        self.level_performance
            .get(&level)
            .copied()
            .unwrap_or_default()
    }

    pub fn score_label(&self) -> String {
        format!("{}/{}", self.correct_count, self.total_count)
    }
}

/// Scores a quiz against the collected answers.
///
/// Every item counts toward its level and topic totals whether or not it was
/// answered; only answered items with the stored correct option count as
/// correct.
pub fn score(items: &[QuizItem], answers: &AnswerSet) -> ScoreReport {
    let mut level_performance: BTreeMap<Level, Tally> =
        Level::ALL.iter().map(|level| (*level, Tally::default())).collect();
    let mut topic_performance: IndexMap<String, Tally> = IndexMap::new();
    let mut correct_count = 0;

    for item in items {
        let chosen = answers.get(item.sequence_number);
        let correct = chosen.is_some_and(|option| item.question.is_correct(option));
        if correct {
            correct_count += 1;
        }
        level_performance
            .entry(item.assigned_level)
            .or_default()
            .record(chosen.is_some(), correct);
        topic_performance
            .entry(item.topic().to_string())
            .or_default()
            .record(chosen.is_some(), correct);
    }

    ScoreReport {
        score_percentage: percentage(correct_count, items.len()),
        correct_count,
        total_count: items.len(),
        level_performance,
        topic_performance,
    }
}
