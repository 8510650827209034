use crate::assessment::{ScoreReport, Tally};
use crate::bank::Level;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Level percentage needed to count a level as mastered.
pub const MASTERY_THRESHOLD: f64 = 70.0;
/// Topic percentage at or above which a topic is strong.
pub const STRONG_THRESHOLD: f64 = 80.0;
/// Topic percentage below which a topic is weak.
pub const WEAK_THRESHOLD: f64 = 60.0;
/// Level percentage at or above which a level is still "learning".
pub const LEARNING_THRESHOLD: f64 = 50.0;

/// Per-topic figures carried in each band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicStanding {
    pub topic: String,
    pub percentage: f64,
    pub correct: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicBands {
    pub strong: Vec<TopicStanding>,
    pub moderate: Vec<TopicStanding>,
    pub weak: Vec<TopicStanding>,
}

/// Splits topics into strong (>= 80%), weak (< 60%) and moderate (the rest).
/// Topics with no questions are left out of every band.
pub fn classify_topics(topic_performance: &IndexMap<String, Tally>) -> TopicBands {
    let mut bands = TopicBands::default();
    for (topic, tally) in topic_performance {
        if tally.total == 0 {
            continue;
        }
        let standing = TopicStanding {
            topic: topic.clone(),
            percentage: tally.percentage(),
            correct: tally.correct,
            total: tally.total,
        };
        if standing.percentage >= STRONG_THRESHOLD {
            bands.strong.push(standing);
        } else if standing.percentage < WEAK_THRESHOLD {
            bands.weak.push(standing);
        } else {
            bands.moderate.push(standing);
        }
    }
    bands
}

/// Qualitative summary of the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Readiness {
    Excellent,
    Good,
    Satisfactory,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl Readiness {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Satisfactory => "Satisfactory",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Excellent => "You have excellent prerequisite knowledge for this course.",
            Self::Good => "You have solid foundational knowledge. Minor improvements needed.",
            Self::Satisfactory => {
                "You have basic understanding. Focus on key improvement areas."
            }
            Self::NeedsImprovement => {
                "Significant preparation recommended before starting the course."
            }
        }
    }
}

pub fn readiness(overall_score: f64) -> Readiness {
    if overall_score >= 80.0 {
        Readiness::Excellent
    } else if overall_score >= 70.0 {
        Readiness::Good
    } else if overall_score >= 60.0 {
        Readiness::Satisfactory
    } else {
        Readiness::NeedsImprovement
    }
}

/// Highest level with at least one question scored at or above the mastery
/// threshold. Falls back to level 1 when no level qualifies.
pub fn actual_level(level_performance: &BTreeMap<Level, Tally>) -> Level {
    Level::ALL
        .iter()
        .rev()
        .copied()
        .find(|level| {
            level_performance
                .get(level)
                .is_some_and(|tally| tally.total > 0 && tally.percentage() >= MASTERY_THRESHOLD)
        })
        .unwrap_or(Level::MIN)
}

/// How the self-assessment compares with the measured level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelGapBand {
    SignificantlyOverestimated,
    SlightlyOptimistic,
    Accurate,
    Outperforming,
}

impl LevelGapBand {
    pub fn from_gap(gap: i8) -> Self {
        match gap {
            g if g > 2 => Self::SignificantlyOverestimated,
            1 | 2 => Self::SlightlyOptimistic,
            0 => Self::Accurate,
            _ => Self::Outperforming,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::SignificantlyOverestimated => "Your self-assessment was significantly higher than your actual performance. Focus on fundamentals.",
            Self::SlightlyOptimistic => "Your self-assessment was slightly optimistic. Review the recommended materials.",
            Self::Accurate => "Your self-assessment matches your performance. Great self-awareness!",
            Self::Outperforming => "You're performing above your self-assessment. Consider challenging yourself more!",
        }
    }
}

/// Signed difference `self_assessed - actual`.
pub fn level_gap(self_assessed: Level, actual: Level) -> i8 {
    self_assessed.get() as i8 - actual.get() as i8
}

/// Per-level status shown alongside the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelStatus {
    Mastered,
    Learning,
    #[serde(rename = "Needs Work")]
    NeedsWork,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelStanding {
    pub level: Level,
    pub correct: usize,
    pub total: usize,
    pub percentage: f64,
    pub status: LevelStatus,
}

/// Status of every level that had at least one question.
pub fn level_standings(level_performance: &BTreeMap<Level, Tally>) -> Vec<LevelStanding> {
    level_performance
        .iter()
        .filter(|(_, tally)| tally.total > 0)
        .map(|(level, tally)| {
            let percentage = tally.percentage();
            let status = if percentage >= MASTERY_THRESHOLD {
                LevelStatus::Mastered
            } else if percentage >= LEARNING_THRESHOLD {
                LevelStatus::Learning
            } else {
                LevelStatus::NeedsWork
            };
            LevelStanding {
                level: *level,
                correct: tally.correct,
                total: tally.total,
                percentage,
                status,
            }
        })
        .collect()
}

/// Classified view of one scored quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub overall_score: f64,
    pub readiness: Readiness,
    pub readiness_message: String,
    pub strong_topics: Vec<TopicStanding>,
    pub moderate_topics: Vec<TopicStanding>,
    pub weak_topics: Vec<TopicStanding>,
    pub actual_level: Level,
    pub self_assessed_level: Level,
    pub level_gap: i8,
    pub level_gap_band: LevelGapBand,
    pub level_gap_message: String,
    pub level_performance: BTreeMap<Level, Tally>,
    pub topic_performance: IndexMap<String, Tally>,
}

impl GapAnalysis {
    pub fn level_standings(&self) -> Vec<LevelStanding> {
        level_standings(&self.level_performance)
    }
}

pub fn analyze(report: &ScoreReport, self_assessed_level: Level) -> GapAnalysis {
    let bands = classify_topics(&report.topic_performance);
    let readiness = readiness(report.score_percentage);
    let actual = actual_level(&report.level_performance);
    let gap = level_gap(self_assessed_level, actual);
    let band = LevelGapBand::from_gap(gap);

    GapAnalysis {
        overall_score: report.score_percentage,
        readiness,
        readiness_message: readiness.message().to_string(),
        strong_topics: bands.strong,
        moderate_topics: bands.moderate,
        weak_topics: bands.weak,
        actual_level: actual,
        self_assessed_level,
        level_gap: gap,
        level_gap_band: band,
        level_gap_message: band.message().to_string(),
        level_performance: report.level_performance.clone(),
        topic_performance: report.topic_performance.clone(),
    }
}
