use super::{fixture_item, seeded, IntegrationHarness};
use skillgap::analysis::{analyze, prioritize};
use skillgap::assessment::score;
use skillgap::bank::Level;
use skillgap::handlers::{plan_learning, start_assessment, submit_assessment};
use skillgap::learning::{build_learning_path, build_schedule, StudyPhase};
use skillgap::{AnswerSet, SessionState};

#[test]
fn weak_and_strong_topics_flow_into_the_path() {
    let quiz = vec![
        fixture_item(1, "Network Security", 1),
        fixture_item(2, "Network Security", 1),
        fixture_item(3, "Cryptography", 2),
        fixture_item(4, "Cryptography", 2),
        fixture_item(5, "Web Security", 3),
        fixture_item(6, "Web Security", 3),
        fixture_item(7, "Web Security", 3),
    ];
    let mut answers = AnswerSet::new();
    for seq in [1, 2, 5, 6] {
        answers.record(seq, 0).unwrap();
    }
    let report = score(&quiz, &answers);
    let gap = analyze(&report, Level::new(2).unwrap());
    let priorities = prioritize(&gap.weak_topics, &gap.moderate_topics);
    let path = build_learning_path("Cybersecurity", &priorities, &gap.strong_topics, gap.actual_level);

    assert_eq!(path.immediate_focus.len(), 1);
    assert_eq!(path.immediate_focus[0].area, "Cryptography");
    assert_eq!(path.immediate_focus[0].current_score, "0.0%");
    assert_eq!(path.short_term[0].area, "Web Security");
    assert_eq!(path.short_term[0].current_score, "66.7%");
    assert_eq!(path.long_term[0].area, "Network Security");
    assert_eq!(path.long_term[0].goal, "Maintain and deepen expertise");
    assert_eq!(path.estimated_hours, 5 + 3 + 2);
    assert!(path.immediate_focus[0].resources[0].contains("Cryptography"));

    let schedule = build_schedule(&path, 4);
    assert_eq!(schedule.len(), 4);
    assert_eq!(schedule[0].focus_areas, vec!["Cryptography"]);
    assert_eq!(schedule[1].focus_areas, vec!["Web Security"]);
    assert_eq!(schedule[2].focus_areas, vec!["Network Security"]);
    assert_eq!(schedule[3].phases, vec![StudyPhase::Review]);
    assert_eq!(schedule[3].focus_areas.len(), 3);
}

#[test]
fn plan_follows_configured_schedule_length() {
    let harness = IntegrationHarness::new();
    let mut workspace = harness.workspace();
    workspace.config.schedule.weeks = 6;
    let repo = harness.repository();

    let mut session = SessionState::new();
    session.select_course("Data Science").unwrap();
    start_assessment(&workspace, &repo, &mut session, &mut seeded(4)).unwrap();
    submit_assessment(&workspace, &mut session).unwrap();

    let (path, schedule) = plan_learning(&workspace, &session).unwrap();
    assert_eq!(schedule.len(), 6);
    assert_eq!(schedule[0].phases, vec![StudyPhase::Foundation]);
    assert_eq!(schedule[5].phases, vec![StudyPhase::Review]);
    // Nothing answered: every topic is weak, so only three make the immediate focus.
    assert_eq!(path.immediate_focus.len(), 3);
    assert!(path.short_term.is_empty());
    assert!(path.long_term.is_empty());
}

#[test]
fn two_week_plan_keeps_short_term_areas() {
    let harness = IntegrationHarness::new();
    let mut workspace = harness.workspace();
    workspace.config.schedule.weeks = 2;
    let repo = harness.repository();

    let mut session = SessionState::new();
    session.select_course("Cybersecurity").unwrap();
    start_assessment(&workspace, &repo, &mut session, &mut seeded(8)).unwrap();
    let mut index = 0;
    loop {
        let correct = session.current_item().unwrap().question.correct_option;
        let choice = if index % 3 == 0 { (correct + 1) % 4 } else { correct };
        session.answer_current(choice).unwrap();
        index += 1;
        if !session.next() {
            break;
        }
    }
    submit_assessment(&workspace, &mut session).unwrap();

    let (path, schedule) = plan_learning(&workspace, &session).unwrap();
    assert_eq!(schedule.len(), 2);
    assert!(schedule[1].includes(StudyPhase::Review));
    for area in path.areas() {
        assert!(
            schedule[0].focus_areas.contains(&area) || schedule[1].focus_areas.contains(&area),
            "{area} missing from the schedule"
        );
    }
}

#[test]
fn plan_requires_submission() {
    let harness = IntegrationHarness::new();
    let workspace = harness.workspace();
    assert!(plan_learning(&workspace, &SessionState::new()).is_err());
}
