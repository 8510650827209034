use super::{fixture_item, seeded, IntegrationHarness};
use rand::Rng;
use skillgap::assessment::{score, QuizComposer};
use skillgap::bank::{Course, Level};
use skillgap::AnswerSet;

#[test]
fn totals_agree_across_levels_and_topics() {
    let harness = IntegrationHarness::new();
    let repo = harness.repository();
    for seed in 0..25u64 {
        let mut rng = seeded(seed);
        let course = Course::ALL[(seed % 4) as usize];
        let quiz = QuizComposer::new(&repo).compose(course.label(), Level::MIN, 5, 25, &mut rng);

        let mut answers = AnswerSet::new();
        for item in &quiz {
            if rng.gen_bool(0.7) {
                answers
                    .record(item.sequence_number, rng.gen_range(0..4))
                    .unwrap();
            }
        }
        let report = score(&quiz, &answers);

        let level_total: usize = report.level_performance.values().map(|t| t.total).sum();
        let topic_total: usize = report.topic_performance.values().map(|t| t.total).sum();
        assert_eq!(level_total, report.total_count);
        assert_eq!(topic_total, report.total_count);
        assert!(report.correct_count <= report.total_count);
        assert!((0.0..=100.0).contains(&report.score_percentage));
        assert_eq!(
            report.score_percentage,
            100.0 * report.correct_count as f64 / report.total_count as f64
        );
        for level in Level::ALL {
            let expected = quiz.iter().filter(|i| i.assigned_level == level).count();
            assert_eq!(report.level(level).total, expected);
        }
    }
}

#[test]
fn scoring_is_idempotent() {
    let quiz = vec![
        fixture_item(1, "Cryptography", 2),
        fixture_item(2, "Web Security", 5),
        fixture_item(3, "Cryptography", 2),
    ];
    let mut answers = AnswerSet::new();
    answers.record(1, 0).unwrap();
    answers.record(3, 2).unwrap();
    let first = score(&quiz, &answers);
    let second = score(&quiz, &answers);
    assert_eq!(first, second);
    assert_eq!(first.correct_count, 1);
}

#[test]
fn empty_quiz_does_not_divide_by_zero() {
    let mut answers = AnswerSet::new();
    answers.record(1, 1).unwrap();
    let report = score(&[], &answers);
    assert_eq!(report.score_percentage, 0.0);
    assert_eq!(report.correct_count, 0);
    assert!(report.level_performance.values().all(|t| t.total == 0 && t.percentage() == 0.0));
}
