use super::{seeded, IntegrationHarness};
use skillgap::assessment::QuizComposer;
use skillgap::bank::{Course, Level};
use std::collections::HashSet;

#[test]
fn every_quiz_is_numbered_one_to_n() {
    let harness = IntegrationHarness::new();
    let repo = harness.repository();
    let composer = QuizComposer::new(&repo);
    for seed in 0..40u64 {
        let course = Course::ALL[(seed % 4) as usize];
        let per_level = (seed % 7) as usize;
        let max_total = 5 + (seed % 23) as usize;
        let quiz = composer.compose(course.label(), Level::MIN, per_level, max_total, &mut seeded(seed));

        let expected = (per_level * 5).min(5 * 5).min(max_total);
        assert_eq!(quiz.len(), expected, "seed {seed}");
        let numbers: HashSet<u32> = quiz.iter().map(|i| i.sequence_number).collect();
        assert_eq!(numbers, (1..=quiz.len() as u32).collect::<HashSet<u32>>());
        for (position, item) in quiz.iter().enumerate() {
            assert_eq!(item.sequence_number as usize, position + 1);
        }
    }
}

#[test]
fn no_question_repeats_within_a_quiz() {
    let harness = IntegrationHarness::new();
    let repo = harness.repository();
    let quiz = QuizComposer::new(&repo).compose("Data Science", Level::MAX, 5, 25, &mut seeded(17));
    let ids: HashSet<&str> = quiz.iter().map(|i| i.question.id.as_str()).collect();
    assert_eq!(ids.len(), quiz.len());
}

#[test]
fn every_level_is_probed_regardless_of_self_assessment() {
    let harness = IntegrationHarness::new();
    let repo = harness.repository();
    let composer = QuizComposer::new(&repo);
    for level in Level::ALL {
        let quiz = composer.compose("AI/ML", level, 2, 25, &mut seeded(3));
        for probed in Level::ALL {
            assert_eq!(
                quiz.iter().filter(|i| i.assigned_level == probed).count(),
                2,
                "self level {level} skipped level {probed}"
            );
        }
    }
}

#[test]
fn shuffling_mixes_levels() {
    let harness = IntegrationHarness::new();
    let repo = harness.repository();
    let quiz = QuizComposer::new(&repo).compose("Full Stack", Level::MIN, 5, 25, &mut seeded(8));
    let levels: Vec<u8> = quiz.iter().map(|i| i.assigned_level.get()).collect();
    let mut sorted = levels.clone();
    sorted.sort_unstable();
    assert_ne!(levels, sorted, "quiz order should not be grouped by level");
}

#[test]
fn repository_samples_are_independent_across_calls() {
    let harness = IntegrationHarness::new();
    let repo = harness.repository();
    let mut rng = seeded(5);
    let mut seen = HashSet::new();
    for _ in 0..20 {
        for q in repo.sample("Cybersecurity", Level::MIN, 1, &mut rng) {
            seen.insert(q.id.clone());
        }
    }
    assert!(seen.len() > 1, "independent draws should revisit the pool");
    assert_eq!(repo.level_distribution("Cybersecurity").get(&Level::MIN), Some(&5));
}
