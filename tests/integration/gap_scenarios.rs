use super::{fixture_item, seeded};
use rand::Rng;
use skillgap::analysis::{
    actual_level, analyze, classify_topics, prioritize, LevelGapBand, Priority, Readiness,
};
use skillgap::assessment::{score, QuizComposer, Tally};
use skillgap::bank::{Level, QuestionRepository};
use skillgap::AnswerSet;
use std::collections::BTreeMap;

#[test]
fn cybersecurity_strong_network_weak_cryptography() {
    let repo = QuestionRepository::with_catalog();
    let quiz = QuizComposer::new(&repo).compose(
        "Cybersecurity",
        Level::new(4).unwrap(),
        4,
        20,
        &mut seeded(2024),
    );
    assert_eq!(quiz.len(), 20);

    let mut answers = AnswerSet::new();
    let mut others_seen: BTreeMap<String, usize> = BTreeMap::new();
    for item in &quiz {
        let correct = item.question.correct_option;
        let wrong = (correct + 1) % 4;
        let choice = match item.topic() {
            "Network Security" => correct,
            "Cryptography" => wrong,
            other => {
                // Three of four right keeps every other topic moderate.
                let seen = others_seen.entry(other.to_string()).or_default();
                *seen += 1;
                if *seen == 1 {
                    wrong
                } else {
                    correct
                }
            }
        };
        answers.record(item.sequence_number, choice).unwrap();
    }

    let report = score(&quiz, &answers);
    let network = report.topic_performance["Network Security"];
    let crypto = report.topic_performance["Cryptography"];
    assert_eq!((network.correct, network.total), (4, 4));
    assert_eq!((crypto.correct, crypto.total), (0, 4));

    let gap = analyze(&report, Level::new(4).unwrap());
    assert!(gap.strong_topics.iter().any(|t| t.topic == "Network Security"));
    assert!(gap.weak_topics.iter().any(|t| t.topic == "Cryptography"));

    let priorities = prioritize(&gap.weak_topics, &gap.moderate_topics);
    assert_eq!(priorities[0].area, "Cryptography");
    assert_eq!(priorities[0].priority, Priority::High);
    assert!(priorities[1..].iter().all(|p| p.priority == Priority::Medium));
}

#[test]
fn empty_quiz_scenario() {
    let report = score(&[], &AnswerSet::new());
    let gap = analyze(&report, Level::new(3).unwrap());
    assert_eq!(gap.overall_score, 0.0);
    assert_eq!(gap.readiness, Readiness::NeedsImprovement);
    assert_eq!(gap.actual_level, Level::MIN);
    assert!(gap.strong_topics.is_empty() && gap.weak_topics.is_empty());
}

#[test]
fn exactly_seventy_percent_at_level_three() {
    let mut quiz = Vec::new();
    let mut answers = AnswerSet::new();
    for seq in 1..=10 {
        quiz.push(fixture_item(seq, "Ethical Hacking", 3));
        answers.record(seq, if seq <= 7 { 0 } else { 1 }).unwrap();
    }
    for seq in 11..=14 {
        quiz.push(fixture_item(seq, "OS Security", 4));
        answers.record(seq, 3).unwrap();
    }
    for seq in 15..=18 {
        quiz.push(fixture_item(seq, "Web Security", 5));
    }

    let report = score(&quiz, &answers);
    assert_eq!(report.level(Level::new(3).unwrap()).percentage(), 70.0);

    let gap = analyze(&report, Level::MAX);
    assert_eq!(gap.actual_level.get(), 3);
    assert_eq!(gap.level_gap, 2);
    assert_eq!(gap.level_gap_band, LevelGapBand::SlightlyOptimistic);
    assert_eq!(
        gap.level_gap_message,
        "Your self-assessment was slightly optimistic. Review the recommended materials."
    );
}

#[test]
fn every_topic_lands_in_exactly_one_band() {
    let repo = QuestionRepository::with_catalog();
    for seed in 0..20u64 {
        let mut rng = seeded(seed);
        let quiz = QuizComposer::new(&repo).compose("Data Science", Level::MIN, 5, 25, &mut rng);
        let mut answers = AnswerSet::new();
        for item in &quiz {
            answers.record(item.sequence_number, rng.gen_range(0..4)).unwrap();
        }
        let report = score(&quiz, &answers);
        let bands = classify_topics(&report.topic_performance);
        for topic in report.topic_performance.keys() {
            let hits = [&bands.strong, &bands.moderate, &bands.weak]
                .iter()
                .filter(|band| band.iter().any(|t| &t.topic == topic))
                .count();
            assert_eq!(hits, 1, "topic {topic} in {hits} bands");
        }
    }
}

#[test]
fn actual_level_is_monotonic_in_level_scores() {
    let mut rng = seeded(77);
    for _ in 0..200 {
        let mut base: BTreeMap<Level, Tally> = BTreeMap::new();
        let mut improved: BTreeMap<Level, Tally> = BTreeMap::new();
        for level in Level::ALL {
            let total = rng.gen_range(1..=6);
            let correct = rng.gen_range(0..=total);
            let better = rng.gen_range(correct..=total);
            base.insert(level, Tally { correct, total, answered: total });
            improved.insert(level, Tally { correct: better, total, answered: total });
        }
        assert!(actual_level(&improved) >= actual_level(&base));
    }
}
