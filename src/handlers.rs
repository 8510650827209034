//! Application-facing steps that drive a [`SessionState`] against a
//! [`Workspace`], record the matching event, and hand back a short message.

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use rand::Rng;
use std::path::PathBuf;

use crate::analysis::{prioritize, GapAnalysis};
use crate::assessment::ScoreReport;
use crate::bank::QuestionRepository;
use crate::learning::{build_learning_path, build_schedule, LearningPath, WeekPlan};
use crate::orchestration::events::{QuizComposedDetails, QuizSubmittedDetails};
use crate::orchestration::{
    log_quiz_composed, log_quiz_submitted, log_report_exported, log_session_reset,
};
use crate::reports::{build_report, write_report};
use crate::session::SessionState;
use crate::workspace::Workspace;

/// Composes the quiz for the session's course and level.
pub fn start_assessment<R: Rng + ?Sized>(
    workspace: &Workspace,
    repository: &QuestionRepository,
    session: &mut SessionState,
    rng: &mut R,
) -> Result<String> {
    let settings = &workspace.config.quiz;
    let count = session.start_quiz(repository, settings, rng)?.len();
    let course = session.course.clone().unwrap_or_default();

    log_quiz_composed(
        workspace,
        session.session_id,
        QuizComposedDetails {
            course: course.clone(),
            self_assessed_level: session.self_assessed_level.get(),
            question_count: count,
            questions_per_level: settings.questions_per_level,
            max_questions: settings.max_questions,
        },
    )?;

    if count == 0 {
        Ok(format!(
            "No questions are available for {course}; the assessment cannot be scored."
        ))
    } else {
        Ok(format!("Assessment ready: {count} questions for {course}."))
    }
}

/// Scores the session and logs the outcome.
pub fn submit_assessment(workspace: &Workspace, session: &mut SessionState) -> Result<String> {
    session.submit()?;
    let (report, gap) = completed_parts(session)?;
    let course = session.course.as_deref().unwrap_or_default();
    log_quiz_submitted(
        workspace,
        session.session_id,
        QuizSubmittedDetails::new(course, report, gap),
    )?;
    Ok(format!(
        "Overall score {:.1}% ({}). {}",
        gap.overall_score,
        gap.readiness.label(),
        gap.readiness_message
    ))
}

/// Learning path and schedule for a completed session.
pub fn plan_learning(
    workspace: &Workspace,
    session: &SessionState,
) -> Result<(LearningPath, Vec<WeekPlan>)> {
    let (_, gap) = completed_parts(session)?;
    let course = session.course.as_deref().unwrap_or_default();
    let priorities = prioritize(&gap.weak_topics, &gap.moderate_topics);
    let path = build_learning_path(course, &priorities, &gap.strong_topics, gap.actual_level);
    let schedule = build_schedule(&path, workspace.config.schedule.weeks);
    Ok((path, schedule))
}

/// Writes the report for a completed session into the exports directory.
pub fn export_assessment(
    workspace: &Workspace,
    session: &SessionState,
    export_date: NaiveDate,
) -> Result<(PathBuf, String)> {
    let (report, gap) = completed_parts(session)?;
    let course = session.course.as_deref().unwrap_or_default();
    let document = build_report(
        &workspace.config.export.candidate_name,
        course,
        report,
        gap,
        export_date,
    );
    let path = write_report(workspace.exports_dir(), &document)
        .context("Failed to export gap analysis report")?;
    log_report_exported(workspace, session.session_id, &path)?;
    let msg = format!("Report saved to {}", path.display());
    Ok((path, msg))
}

/// Logs the reset against the old session id, then starts fresh.
pub fn reset_assessment(workspace: &Workspace, session: &mut SessionState) -> Result<String> {
    log_session_reset(workspace, session.session_id)?;
    session.reset();
    Ok("Assessment reset. Select a course to begin.".to_string())
}

fn completed_parts(session: &SessionState) -> Result<(&ScoreReport, &GapAnalysis)> {
    match (&session.results, &session.gap_analysis) {
        (Some(report), Some(gap)) => Ok((report, gap)),
        _ => Err(anyhow!("Assessment has not been submitted yet.")),
    }
}
