use super::resources::resources_for;
use crate::analysis::{Priority, PriorityItem, TopicStanding};
use crate::bank::Level;
use serde::{Deserialize, Serialize};

const FOCUS_LIMIT: usize = 3;
const MAINTAIN_LIMIT: usize = 2;
const IMMEDIATE_HOURS: u32 = 5;
const SHORT_TERM_HOURS: u32 = 3;
const LONG_TERM_HOURS: u32 = 2;

/// A topic to raise to a target score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusArea {
    pub area: String,
    pub current_score: String,
    pub target_score: String,
    pub resources: Vec<String>,
    pub estimated_hours: u32,
}

/// A strong topic to keep sharp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceGoal {
    pub area: String,
    pub current_score: String,
    pub goal: String,
    pub resources: Vec<String>,
    pub estimated_hours: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    pub immediate_focus: Vec<FocusArea>,
    pub short_term: Vec<FocusArea>,
    pub long_term: Vec<MaintenanceGoal>,
    pub estimated_hours: u32,
}

impl LearningPath {
    /// Every area named by the path, immediate focus first.
    pub fn areas(&self) -> Vec<String> {
        self.immediate_focus
            .iter()
            .chain(&self.short_term)
            .map(|item| item.area.clone())
            .chain(self.long_term.iter().map(|goal| goal.area.clone()))
            .collect()
    }
}

fn focus_area(
    course: &str,
    item: &PriorityItem,
    level: Level,
    target: &str,
    hours: u32,
) -> FocusArea {
    FocusArea {
        area: item.area.clone(),
        current_score: format!("{:.1}%", item.score),
        target_score: target.to_string(),
        resources: resources_for(course, &item.area, level),
        estimated_hours: hours,
    }
}

/// Expands a priority list into a three-horizon study plan.
///
/// Up to three High items go to the immediate focus, up to three Medium items
/// to the short term, and up to two strong topics to the long term.
pub fn build_learning_path(
    course: &str,
    priorities: &[PriorityItem],
    strong_topics: &[TopicStanding],
    actual_level: Level,
) -> LearningPath {
    let mut path = LearningPath::default();

    for item in priorities
        .iter()
        .filter(|p| p.priority == Priority::High)
        .take(FOCUS_LIMIT)
    {
        path.immediate_focus
            .push(focus_area(course, item, actual_level, "70%+", IMMEDIATE_HOURS));
        path.estimated_hours += IMMEDIATE_HOURS;
    }

    for item in priorities
        .iter()
        .filter(|p| p.priority == Priority::Medium)
        .take(FOCUS_LIMIT)
    {
        path.short_term.push(focus_area(
            course,
            item,
            actual_level.saturating_add(1),
            "80%+",
            SHORT_TERM_HOURS,
        ));
        path.estimated_hours += SHORT_TERM_HOURS;
    }

    for topic in strong_topics.iter().take(MAINTAIN_LIMIT) {
        path.long_term.push(MaintenanceGoal {
            area: topic.topic.clone(),
            current_score: format!("{:.1}%", topic.percentage),
            goal: "Maintain and deepen expertise".into(),
            resources: resources_for(course, &topic.topic, actual_level.saturating_add(2)),
            estimated_hours: LONG_TERM_HOURS,
        });
        path.estimated_hours += LONG_TERM_HOURS;
    }

    path
}
