//! Exportable gap-analysis report.

pub mod visualizations;

pub use visualizations::{
    build_skill_tree, level_radar, RadarPoint, SkillNode, SkillNodeStatus, SkillTree,
};

use crate::analysis::GapAnalysis;
use crate::assessment::{ScoreReport, Tally};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const RECOMMENDATIONS: [&str; 5] = [
    "Review and practice core concepts",
    "Take advanced courses on weak areas",
    "Practice with real-world projects",
    "Participate in coding exercises",
    "Engage in peer learning activities",
];

/// One row of the per-topic breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRow {
    pub section: String,
    pub correct: usize,
    pub incorrect: usize,
    pub unattempted: usize,
    pub strength_level: String,
    pub remarks: String,
}

impl PerformanceRow {
    fn from_tally(section: &str, tally: &Tally) -> Self {
        let (strength_level, remarks) = strength_band(tally.percentage());
        Self {
            section: section.to_string(),
            correct: tally.correct,
            incorrect: tally.incorrect(),
            unattempted: tally.unattempted(),
            strength_level: strength_level.to_string(),
            remarks: remarks.to_string(),
        }
    }
}

fn strength_band(percentage: f64) -> (&'static str, &'static str) {
    if percentage >= 80.0 {
        ("Excellent", "Strong understanding of this topic")
    } else if percentage >= 70.0 {
        ("Good", "Good performance, minor improvements needed")
    } else if percentage >= 60.0 {
        ("Satisfactory", "Basic understanding, needs practice")
    } else {
        ("Needs Improvement", "Significant improvement required")
    }
}

/// The exported report document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapReport {
    pub candidate_name: String,
    pub course: String,
    pub test_date: NaiveDate,
    pub score: String,
    pub percentage: f64,
    pub status: String,
    pub performance_breakdown: Vec<PerformanceRow>,
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub recommendations: Vec<String>,
}

pub fn build_report(
    candidate_name: &str,
    course: &str,
    report: &ScoreReport,
    gap: &GapAnalysis,
    test_date: NaiveDate,
) -> GapReport {
    GapReport {
        candidate_name: candidate_name.to_string(),
        course: course.to_string(),
        test_date,
        score: report.score_label(),
        percentage: gap.overall_score,
        status: gap.readiness.label().to_string(),
        performance_breakdown: report
            .topic_performance
            .iter()
            .filter(|(_, tally)| tally.total > 0)
            .map(|(topic, tally)| PerformanceRow::from_tally(topic, tally))
            .collect(),
        strengths: gap
            .strong_topics
            .iter()
            .map(|t| format!("Excellent knowledge of {}", t.topic))
            .collect(),
        improvement_areas: gap
            .weak_topics
            .iter()
            .map(|t| format!("Improve understanding of {}", t.topic))
            .collect(),
        recommendations: RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
    }
}

/// `gap_analysis_report_YYYYMMDD.json`
pub fn report_file_name(date: NaiveDate) -> String {
    format!("gap_analysis_report_{}.json", date.format("%Y%m%d"))
}

pub fn to_json(report: &GapReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize gap report")
}

/// Writes the report into `dir`, named after its test date. An existing
/// report for the same date is replaced.
pub fn write_report(dir: &Path, report: &GapReport) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;
    let path = dir.join(report_file_name(report.test_date));
    fs::write(&path, to_json(report)?)
        .with_context(|| format!("Failed to write report {}", path.display()))?;
    Ok(path)
}

pub fn read_report(path: &Path) -> Result<GapReport> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read report {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("Failed to parse report {}", path.display()))
}
