use crate::analysis::GapAnalysis;
use crate::assessment::ScoreReport;
use crate::workspace::Workspace;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

use super::{AssessmentEvent, EventType};

/// Structured payload logged when a quiz is composed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizComposedDetails {
    pub course: String,
    pub self_assessed_level: u8,
    pub question_count: usize,
    pub questions_per_level: usize,
    pub max_questions: usize,
}

/// Structured payload logged when a quiz is scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSubmittedDetails {
    pub course: String,
    pub score: String,
    pub percentage: f64,
    pub readiness: String,
    pub actual_level: u8,
    pub level_gap: i8,
    #[serde(default)]
    pub weak_topics: Vec<String>,
}

impl QuizSubmittedDetails {
    pub fn new(course: &str, report: &ScoreReport, gap: &GapAnalysis) -> Self {
        Self {
            course: course.to_string(),
            score: report.score_label(),
            percentage: report.score_percentage,
            readiness: gap.readiness.label().to_string(),
            actual_level: gap.actual_level.get(),
            level_gap: gap.level_gap,
            weak_topics: gap.weak_topics.iter().map(|t| t.topic.clone()).collect(),
        }
    }
}

pub fn log_event(
    workspace: &Workspace,
    session_id: Uuid,
    event_type: EventType,
    details: serde_json::Value,
) -> Result<Uuid> {
    let event = AssessmentEvent::new(session_id, event_type, details);
    workspace.event_log().append_event(&event)?;
    Ok(event.event_id)
}

pub fn log_quiz_composed(
    workspace: &Workspace,
    session_id: Uuid,
    details: QuizComposedDetails,
) -> Result<Uuid> {
    log_event(
        workspace,
        session_id,
        EventType::QuizComposed,
        serde_json::to_value(details)?,
    )
}

pub fn log_quiz_submitted(
    workspace: &Workspace,
    session_id: Uuid,
    details: QuizSubmittedDetails,
) -> Result<Uuid> {
    log_event(
        workspace,
        session_id,
        EventType::QuizSubmitted,
        serde_json::to_value(details)?,
    )
}

pub fn log_report_exported(workspace: &Workspace, session_id: Uuid, path: &Path) -> Result<Uuid> {
    log_event(
        workspace,
        session_id,
        EventType::ReportExported,
        serde_json::json!({ "report_path": path }),
    )
}

pub fn log_session_reset(workspace: &Workspace, session_id: Uuid) -> Result<Uuid> {
    log_event(
        workspace,
        session_id,
        EventType::SessionReset,
        serde_json::json!({}),
    )
}
