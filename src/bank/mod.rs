//! Question bank: courses, difficulty levels, and the repository that answers
//! sampling queries for the quiz composer.

pub mod catalog;

use crate::error::AssessmentError;
use indexmap::IndexMap;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Number of answer options every question carries.
pub const OPTION_COUNT: usize = 4;

/// Difficulty tier, 1 (easiest) to 5 (hardest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(1);
    pub const MAX: Level = Level(5);
    pub const ALL: [Level; 5] = [Level(1), Level(2), Level(3), Level(4), Level(5)];

    pub fn new(value: u8) -> Result<Self, AssessmentError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AssessmentError::InvalidLevel(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Steps up by `steps` tiers, stopping at level 5.
    pub fn saturating_add(self, steps: u8) -> Self {
        Self(self.0.saturating_add(steps).min(Self::MAX.0))
    }
}

impl TryFrom<u8> for Level {
    type Error = AssessmentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed subject tracks offered by the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Course {
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "AI/ML")]
    AiMl,
    #[serde(rename = "Cybersecurity")]
    Cybersecurity,
    #[serde(rename = "Full Stack")]
    FullStack,
}

impl Course {
    pub const ALL: [Course; 4] = [
        Course::DataScience,
        Course::AiMl,
        Course::Cybersecurity,
        Course::FullStack,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::DataScience => "Data Science",
            Self::AiMl => "AI/ML",
            Self::Cybersecurity => "Cybersecurity",
            Self::FullStack => "Full Stack",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|course| course.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single multiple-choice question. Immutable once inserted in a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub course: String,
    pub topic: String,
    pub level: Level,
    pub prompt: String,
    pub options: [String; OPTION_COUNT],
    pub correct_option: u8,
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        course: impl Into<String>,
        topic: impl Into<String>,
        level: Level,
        prompt: impl Into<String>,
        options: [String; OPTION_COUNT],
        correct_option: u8,
    ) -> Result<Self, AssessmentError> {
        if usize::from(correct_option) >= OPTION_COUNT {
            return Err(AssessmentError::InvalidOption(correct_option));
        }
        Ok(Self {
            id: id.into(),
            course: course.into(),
            topic: topic.into(),
            level,
            prompt: prompt.into(),
            options,
            correct_option,
        })
    }

    pub fn is_correct(&self, option: u8) -> bool {
        self.correct_option == option
    }
}

#[derive(Debug, Clone, Default)]
struct CourseBank {
    by_level: BTreeMap<Level, Vec<Arc<Question>>>,
    topics: Vec<String>,
}

/// Per-course question pools keyed by level.
///
/// Lookups for a course the repository does not know return empty results.
#[derive(Debug, Clone, Default)]
pub struct QuestionRepository {
    banks: IndexMap<String, CourseBank>,
}

impl QuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository preloaded with the built-in sample bank for every course.
    pub fn with_catalog() -> Self {
        let mut repo = Self::new();
        for question in catalog::sample_questions() {
            repo.insert(question);
        }
        repo
    }

    pub fn insert(&mut self, question: Question) {
        let bank = self.banks.entry(question.course.clone()).or_default();
        if !bank.topics.contains(&question.topic) {
            bank.topics.push(question.topic.clone());
        }
        bank.by_level
            .entry(question.level)
            .or_default()
            .push(Arc::new(question));
    }

    pub fn courses(&self) -> Vec<&str> {
        self.banks.keys().map(String::as_str).collect()
    }

    pub fn questions_at_level(&self, course: &str, level: Level) -> &[Arc<Question>] {
        self.banks
            .get(course)
            .and_then(|bank| bank.by_level.get(&level))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Draws up to `n` distinct questions uniformly at random from one level.
    ///
    /// Returns every available question when fewer than `n` exist. Separate
    /// calls share no draw state.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        course: &str,
        level: Level,
        n: usize,
        rng: &mut R,
    ) -> Vec<Arc<Question>> {
        self.questions_at_level(course, level)
            .choose_multiple(rng, n)
            .cloned()
            .collect()
    }

    /// Count of questions per level; levels without questions are omitted.
    pub fn level_distribution(&self, course: &str) -> BTreeMap<Level, usize> {
        self.banks
            .get(course)
            .map(|bank| {
                bank.by_level
                    .iter()
                    .filter(|(_, questions)| !questions.is_empty())
                    .map(|(level, questions)| (*level, questions.len()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Topics of a course in the order they were first inserted.
    pub fn topics(&self, course: &str) -> Vec<String> {
        self.banks
            .get(course)
            .map(|bank| bank.topics.clone())
            .unwrap_or_default()
    }

    pub fn question_count(&self, course: &str) -> usize {
        self.level_distribution(course).values().sum()
    }
}
