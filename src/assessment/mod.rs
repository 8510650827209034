//! Quiz composition and answer collection.

pub mod scoring;

pub use scoring::{score, ScoreReport, Tally};

use crate::bank::{Level, Question, QuestionRepository, OPTION_COUNT};
use crate::error::AssessmentError;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Default number of questions drawn from each level.
pub const DEFAULT_QUESTIONS_PER_LEVEL: usize = 5;
/// Default upper bound on quiz length.
pub const DEFAULT_MAX_QUESTIONS: usize = 25;

/// One question placed in a quiz. `sequence_number` is 1-based and dense in
/// presentation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizItem {
    pub question: Arc<Question>,
    pub assigned_level: Level,
    pub sequence_number: u32,
}

impl QuizItem {
    pub fn topic(&self) -> &str {
        &self.question.topic
    }
}

/// Builds quiz instances from a repository.
pub struct QuizComposer<'a> {
    repository: &'a QuestionRepository,
}

impl<'a> QuizComposer<'a> {
    pub fn new(repository: &'a QuestionRepository) -> Self {
        Self { repository }
    }

    /// Samples `per_level_target` questions from every level, shuffles the
    /// combined set, truncates it to `max_total`, and numbers the result.
    ///
    /// All five levels are probed whatever `_self_assessed_level` says, so
    /// the measured standing does not depend on the self-report. A course
    /// with no questions yields an empty quiz.
    pub fn compose<R: Rng + ?Sized>(
        &self,
        course: &str,
        _self_assessed_level: Level,
        per_level_target: usize,
        max_total: usize,
        rng: &mut R,
    ) -> Vec<QuizItem> {
        let mut drawn: Vec<(Level, Arc<Question>)> = Vec::new();
        for level in Level::ALL {
            for question in self.repository.sample(course, level, per_level_target, rng) {
                drawn.push((level, question));
            }
        }
        drawn.shuffle(rng);
        drawn.truncate(max_total);

        drawn
            .into_iter()
            .zip(1u32..)
            .map(|((assigned_level, question), sequence_number)| QuizItem {
                question,
                assigned_level,
                sequence_number,
            })
            .collect()
    }
}

/// Answers chosen so far, keyed by quiz sequence number.
///
/// Unanswered items are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    answers: BTreeMap<u32, u8>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or replaces) the option chosen for a quiz item.
    pub fn record(&mut self, sequence_number: u32, option: u8) -> Result<(), AssessmentError> {
        if usize::from(option) >= OPTION_COUNT {
            return Err(AssessmentError::InvalidOption(option));
        }
        self.answers.insert(sequence_number, option);
        Ok(())
    }

    pub fn get(&self, sequence_number: u32) -> Option<u8> {
        self.answers.get(&sequence_number).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }
}
