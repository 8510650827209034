use super::{seeded, IntegrationHarness};
use skillgap::handlers::{reset_assessment, start_assessment, submit_assessment};
use skillgap::orchestration::EventType;
use skillgap::session::SessionPhase;
use skillgap::{AssessmentError, Level, SessionState};

#[test]
fn independent_sessions_do_not_share_progress() {
    let harness = IntegrationHarness::new();
    let workspace = harness.workspace();
    let repo = harness.repository();

    let mut alice = SessionState::new();
    let mut bob = SessionState::new();
    alice.select_course("Full Stack").unwrap();
    bob.select_course("Full Stack").unwrap();
    start_assessment(&workspace, &repo, &mut alice, &mut seeded(1)).unwrap();
    start_assessment(&workspace, &repo, &mut bob, &mut seeded(1)).unwrap();

    alice.answer_current(0).unwrap();
    assert_eq!(alice.progress().0, 1);
    assert_eq!(bob.progress().0, 0);
    assert_ne!(alice.session_id, bob.session_id);
}

#[test]
fn unknown_course_completes_with_floor_results() {
    let harness = IntegrationHarness::new();
    let workspace = harness.workspace();
    let repo = harness.repository();

    let mut session = SessionState::new();
    session.select_course("Quantum Cooking").unwrap();
    let msg = start_assessment(&workspace, &repo, &mut session, &mut seeded(9)).unwrap();
    assert!(msg.contains("cannot be scored"));

    let msg = submit_assessment(&workspace, &mut session).unwrap();
    assert!(msg.starts_with("Overall score 0.0% (Needs Improvement)"));
    let gap = session.gap_analysis.as_ref().unwrap();
    assert_eq!(gap.actual_level, Level::MIN);
    assert_eq!(session.results.as_ref().unwrap().total_count, 0);
}

#[test]
fn resubmitting_is_rejected() {
    let harness = IntegrationHarness::new();
    let workspace = harness.workspace();
    let repo = harness.repository();

    let mut session = SessionState::new();
    session.select_course("Cybersecurity").unwrap();
    start_assessment(&workspace, &repo, &mut session, &mut seeded(2)).unwrap();
    submit_assessment(&workspace, &mut session).unwrap();
    let err = session.submit().unwrap_err();
    assert!(matches!(err, AssessmentError::SessionState(_)));
    assert!(session.select_course("AI/ML").is_err());
}

#[test]
fn reset_logs_and_clears() {
    let harness = IntegrationHarness::new();
    let workspace = harness.workspace();
    let repo = harness.repository();

    let mut session = SessionState::new();
    session.select_course("Data Science").unwrap();
    session.set_self_assessed_level(5).unwrap();
    start_assessment(&workspace, &repo, &mut session, &mut seeded(6)).unwrap();
    let old_id = session.session_id;

    reset_assessment(&workspace, &mut session).unwrap();
    assert_eq!(session.phase, SessionPhase::SelectingCourse);
    assert_eq!(session.self_assessed_level.get(), 3);

    let events = workspace.event_log().session_events(old_id).unwrap();
    assert_eq!(events.last().unwrap().event_type, EventType::SessionReset);
}

#[test]
fn configured_quiz_size_is_respected() {
    let harness = IntegrationHarness::new();
    let mut workspace = harness.workspace();
    workspace.config.quiz.questions_per_level = 4;
    workspace.config.quiz.max_questions = 20;
    let repo = harness.repository();

    let mut session = SessionState::new();
    session.select_course("AI/ML").unwrap();
    start_assessment(&workspace, &repo, &mut session, &mut seeded(12)).unwrap();
    assert_eq!(session.quiz.len(), 20);
}
