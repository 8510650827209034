//! Chart-ready data for the skill tree and the per-level radar. Rendering is
//! left to the presentation layer.

use crate::analysis::{GapAnalysis, MASTERY_THRESHOLD};
use crate::assessment::Tally;
use crate::bank::{Course, Level};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const TIERS: [&str; 4] = ["Foundation", "Intermediate", "Advanced", "Expert"];
const ROOT_VALUE: u32 = 100;
const SKILL_VALUE: u32 = 10;

fn hierarchy(course: Course) -> [[&'static str; 3]; 4] {
    match course {
        Course::DataScience => [
            ["Basic Statistics", "Python Basics", "Data Types"],
            ["Probability", "Data Manipulation", "Visualization"],
            ["Hypothesis Testing", "Machine Learning", "Big Data"],
            ["Statistical Modeling", "Deep Learning", "Data Engineering"],
        ],
        Course::AiMl => [
            ["Mathematics", "Calculus", "Linear Algebra"],
            ["Supervised Learning", "Unsupervised Learning", "Neural Networks"],
            ["Deep Learning", "NLP", "Computer Vision"],
            ["Reinforcement Learning", "GANs", "Transformers"],
        ],
        Course::Cybersecurity => [
            ["OS Basics", "Linux", "Networking"],
            ["Network Security", "Cryptography", "Web Security"],
            ["Penetration Testing", "Malware Analysis", "Incident Response"],
            ["Security Architecture", "Threat Hunting", "Zero-day Research"],
        ],
        Course::FullStack => [
            ["HTML", "CSS", "JavaScript"],
            ["React/Vue", "Node.js", "Databases"],
            ["API Design", "Authentication", "Cloud Deployment"],
            ["Microservices", "DevOps", "System Design"],
        ],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillNodeStatus {
    Root,
    /// Tier at or below the measured level.
    Mastered,
    /// Tier directly above the measured level.
    InProgress,
    Locked,
    Strong,
    Weak,
    Moderate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillNode {
    pub label: String,
    pub parent: Option<String>,
    pub value: u32,
    pub status: SkillNodeStatus,
}

/// Sunburst data: a root, four tiers and three skills per tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTree {
    pub course: String,
    pub nodes: Vec<SkillNode>,
}

impl SkillTree {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, label: &str) -> Option<&SkillNode> {
        self.nodes.iter().find(|node| node.label == label)
    }
}

fn overlaps(skill: &str, topic: &str) -> bool {
    let skill = skill.to_lowercase();
    let topic = topic.to_lowercase();
    skill.contains(&topic) || topic.contains(&skill)
}

fn skill_status(skill: &str, gap: &GapAnalysis) -> SkillNodeStatus {
    if gap.strong_topics.iter().any(|t| overlaps(skill, &t.topic)) {
        SkillNodeStatus::Strong
    } else if gap.weak_topics.iter().any(|t| overlaps(skill, &t.topic)) {
        SkillNodeStatus::Weak
    } else {
        SkillNodeStatus::Moderate
    }
}

/// Builds the skill tree for a course; unknown courses get an empty tree.
pub fn build_skill_tree(course: &str, gap: &GapAnalysis) -> SkillTree {
    let Some(known) = Course::from_label(course) else {
        return SkillTree {
            course: course.to_string(),
            nodes: Vec::new(),
        };
    };
    let root = known.label().to_string();
    let actual = u32::from(gap.actual_level.get());

    let mut nodes = vec![SkillNode {
        label: root.clone(),
        parent: None,
        value: ROOT_VALUE,
        status: SkillNodeStatus::Root,
    }];

    for ((tier_index, tier), skills) in TIERS.iter().enumerate().zip(hierarchy(known)) {
        let tier_number = tier_index as u32 + 1;
        let status = if tier_number <= actual {
            SkillNodeStatus::Mastered
        } else if tier_number == actual + 1 {
            SkillNodeStatus::InProgress
        } else {
            SkillNodeStatus::Locked
        };
        nodes.push(SkillNode {
            label: tier.to_string(),
            parent: Some(root.clone()),
            value: skills.len() as u32 * SKILL_VALUE,
            status,
        });
        for skill in skills {
            nodes.push(SkillNode {
                label: skill.to_string(),
                parent: Some(tier.to_string()),
                value: SKILL_VALUE,
                status: skill_status(skill, gap),
            });
        }
    }

    SkillTree { course: root, nodes }
}

/// One spoke of the per-level radar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub label: String,
    pub score: f64,
    pub target: f64,
}

/// Score for every level 1..=5 against the mastery target.
pub fn level_radar(level_performance: &BTreeMap<Level, Tally>) -> Vec<RadarPoint> {
    Level::ALL
        .iter()
        .map(|level| RadarPoint {
            label: format!("Level {level}"),
            score: level_performance
                .get(level)
                .map(Tally::percentage)
                .unwrap_or(0.0),
            target: MASTERY_THRESHOLD,
        })
        .collect()
}
