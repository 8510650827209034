use super::path::LearningPath;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Default plan length in weeks.
pub const DEFAULT_WEEKS: usize = 4;

const WEEKLY_GOALS: [&str; 4] = [
    "Complete all assigned readings",
    "Solve practice problems daily",
    "Participate in discussion forums",
    "Take weekly progress quiz",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyPhase {
    Foundation,
    SkillDevelopment,
    Advanced,
    Review,
}

impl StudyPhase {
    const ORDER: [StudyPhase; 4] = [
        StudyPhase::Foundation,
        StudyPhase::SkillDevelopment,
        StudyPhase::Advanced,
        StudyPhase::Review,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Foundation => "Foundation Building",
            Self::SkillDevelopment => "Skill Development",
            Self::Advanced => "Advanced Topics",
            Self::Review => "Review & Assessment",
        }
    }

    pub fn topics(&self) -> &'static str {
        match self {
            Self::Foundation => "Core concepts & basics",
            Self::SkillDevelopment => "Practice & application",
            Self::Advanced => "Complex problems & projects",
            Self::Review => "Final review & mock tests",
        }
    }

    /// Weekly hour budget as `(low, high)`.
    pub fn hours(&self) -> (u32, u32) {
        match self {
            Self::Foundation => (10, 12),
            Self::SkillDevelopment => (8, 10),
            Self::Advanced => (6, 8),
            Self::Review => (4, 6),
        }
    }

    fn focus_areas(&self, path: &LearningPath) -> Vec<String> {
        match self {
            Self::Foundation => path.immediate_focus.iter().map(|f| f.area.clone()).collect(),
            Self::SkillDevelopment => path.short_term.iter().map(|f| f.area.clone()).collect(),
            Self::Advanced => path.long_term.iter().map(|g| g.area.clone()).collect(),
            Self::Review => path.areas(),
        }
    }

    /// Phases that fall in week `index` of a `weeks`-long plan.
    ///
    /// Plans of four weeks or more give each week one phase and stretch the
    /// phases across the extra weeks. Shorter plans fold consecutive phases
    /// into one week. Either way every phase appears and the last week
    /// includes Review.
    fn for_week(index: usize, weeks: usize) -> Vec<StudyPhase> {
        let count = Self::ORDER.len();
        if weeks >= count {
            vec![Self::ORDER[index * count / weeks]]
        } else {
            Self::ORDER
                .into_iter()
                .enumerate()
                .filter(|(position, _)| position * weeks / count == index)
                .map(|(_, phase)| phase)
                .collect()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub week: usize,
    /// One phase, or several folded together when the plan is shorter than
    /// four weeks.
    pub phases: Vec<StudyPhase>,
    pub focus: String,
    pub topics: String,
    pub hours: String,
    pub activities: Vec<String>,
    /// Learning-path areas that belong to this week's phases.
    pub focus_areas: Vec<String>,
}

impl WeekPlan {
    fn new(week: usize, phases: Vec<StudyPhase>, path: &LearningPath) -> Self {
        let focus = phases.iter().map(|p| p.title()).collect::<Vec<_>>().join(" + ");
        let topics = phases.iter().map(|p| p.topics()).collect::<Vec<_>>().join("; ");
        let (low, high) = phases
            .iter()
            .map(StudyPhase::hours)
            .fold((0, 0), |(low, high), (l, h)| (low + l, high + h));
        let focus_areas: IndexSet<String> = phases
            .iter()
            .flat_map(|phase| phase.focus_areas(path))
            .collect();
        Self {
            week,
            phases,
            focus,
            topics,
            hours: format!("{low}-{high}"),
            activities: WEEKLY_GOALS.iter().map(|g| g.to_string()).collect(),
            focus_areas: focus_areas.into_iter().collect(),
        }
    }

    pub fn includes(&self, phase: StudyPhase) -> bool {
        self.phases.contains(&phase)
    }
}

/// Week-by-week plan over the fixed four-phase template.
pub fn build_schedule(path: &LearningPath, weeks: usize) -> Vec<WeekPlan> {
    (0..weeks)
        .map(|index| WeekPlan::new(index + 1, StudyPhase::for_week(index, weeks), path))
        .collect()
}
