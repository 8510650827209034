//! Static study-resource library keyed by course, topic and level.

use crate::bank::Level;

type LevelResources = [[&'static str; 2]; 5];

const LIBRARY: &[(&str, &[(&str, LevelResources)])] = &[
    (
        "Data Science",
        &[
            (
                "Statistics",
                [
                    ["Khan Academy: Basic Statistics", "Coursera: Statistics Fundamentals"],
                    ["DataCamp: Intermediate Statistics", "YouTube: StatQuest"],
                    ["Coursera: Inferential Statistics", "edX: Probability and Statistics"],
                    ["MIT OpenCourseWare: Advanced Statistics", "Coursera: Bayesian Statistics"],
                    ["Research Papers on Statistical Methods", "Advanced Statistical Modeling"],
                ],
            ),
            (
                "Python",
                [
                    ["Codecademy: Python Basics", "Python.org Tutorial"],
                    ["Real Python: Intermediate Python", "DataCamp: Python Programming"],
                    ["Effective Python by Brett Slatkin", "Advanced Python Features"],
                    ["Fluent Python by Luciano Ramalho", "Python Design Patterns"],
                    ["Python Core Development", "Contributing to Python Projects"],
                ],
            ),
        ],
    ),
    (
        "AI/ML",
        &[
            (
                "Calculus",
                [
                    ["Khan Academy: Calculus Basics", "Paul's Online Math Notes"],
                    ["MIT OCW: Single Variable Calculus", "Coursera: Calculus One"],
                    ["MIT OCW: Multivariable Calculus", "Advanced Calculus Concepts"],
                    ["Vector Calculus Applications", "Optimization Theory"],
                    ["Research-level Calculus", "Mathematical Analysis"],
                ],
            ),
            (
                "Machine Learning",
                [
                    ["Google: Machine Learning Crash Course", "Coursera: ML for Beginners"],
                    ["Andrew Ng: Machine Learning Course", "Fast.ai: Practical ML"],
                    ["Deep Learning Specialization", "Hands-on Machine Learning"],
                    ["Advanced ML Algorithms", "Research Papers"],
                    ["Cutting-edge ML Research", "Novel Algorithm Development"],
                ],
            ),
        ],
    ),
    (
        "Cybersecurity",
        &[
            (
                "Linux",
                [
                    ["Linux Journey", "Introduction to Linux"],
                    ["Linux Command Line Basics", "Linux System Administration"],
                    ["Advanced Linux Security", "Linux Hardening Guide"],
                    ["Linux Kernel Security", "Security Auditing"],
                    ["Linux Security Research", "Kernel Development"],
                ],
            ),
            (
                "Network Security",
                [
                    ["Network Security Basics", "Introduction to Cybersecurity"],
                    ["CompTIA Security+", "Network Security Fundamentals"],
                    ["Ethical Hacking Course", "Penetration Testing"],
                    ["Advanced Network Security", "Security Architecture"],
                    ["Security Research", "Zero-day Analysis"],
                ],
            ),
        ],
    ),
    (
        "Full Stack",
        &[
            (
                "HTML/CSS",
                [
                    ["MDN: HTML Basics", "W3Schools: CSS Tutorial"],
                    ["Responsive Web Design", "CSS Flexbox & Grid"],
                    ["Advanced CSS Techniques", "CSS Animations"],
                    ["CSS Architecture", "Performance Optimization"],
                    ["Web Standards Development", "Browser Engine Internals"],
                ],
            ),
            (
                "JavaScript",
                [
                    ["JavaScript.info", "Codecademy: JavaScript"],
                    ["You Don't Know JS", "JavaScript: The Good Parts"],
                    ["Async JavaScript", "Modern JavaScript Features"],
                    ["JavaScript Design Patterns", "Performance Optimization"],
                    ["V8 Engine Internals", "TC39 Proposals"],
                ],
            ),
        ],
    ),
];

/// Strips decorations the quiz sometimes appends to topic names.
fn clean_area(area: &str) -> String {
    area.replace(" concepts", "").replace("Level ", "").trim().to_string()
}

fn to_owned_list(resources: &[&str; 2]) -> Vec<String> {
    resources.iter().map(|r| r.to_string()).collect()
}

/// Resources for `area` at `level`.
///
/// Tries an exact topic match, then a case-insensitive substring match in
/// either direction, and finally generic search suggestions. Never empty.
pub fn resources_for(course: &str, area: &str, level: Level) -> Vec<String> {
    let area = clean_area(area);
    let index = usize::from(level.get() - 1);

    if let Some((_, topics)) = LIBRARY.iter().find(|(name, _)| *name == course) {
        if let Some((_, levels)) = topics.iter().find(|(topic, _)| *topic == area) {
            return to_owned_list(&levels[index]);
        }
        let needle = area.to_lowercase();
        let partial = topics.iter().find(|(topic, _)| {
            let key = topic.to_lowercase();
            !needle.is_empty() && (needle.contains(&key) || key.contains(&needle))
        });
        if let Some((_, levels)) = partial {
            return to_owned_list(&levels[index]);
        }
    }

    vec![
        format!("Online search: \"{area} tutorial level {level}\""),
        format!("YouTube: \"{area} explained\""),
        format!("Practice exercises on {area}"),
    ]
}
