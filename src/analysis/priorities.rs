use super::gap::TopicStanding;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
}

/// What a priority item refers to. Quiz-derived items are always topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaKind {
    Topic,
}

/// One area the learner should work on, ranked by priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityItem {
    pub priority: Priority,
    pub area: String,
    pub kind: AreaKind,
    pub score: f64,
    pub reason: String,
}

/// Weak topics first (High), then moderate topics (Medium), each band kept
/// in its input order.
pub fn prioritize(weak: &[TopicStanding], moderate: &[TopicStanding]) -> Vec<PriorityItem> {
    let high = weak.iter().map(|topic| PriorityItem {
        priority: Priority::High,
        area: topic.topic.clone(),
        kind: AreaKind::Topic,
        score: topic.percentage,
        reason: format!(
            "Low performance ({:.1}%) - needs immediate attention",
            topic.percentage
        ),
    });
    let medium = moderate.iter().map(|topic| PriorityItem {
        priority: Priority::Medium,
        area: topic.topic.clone(),
        kind: AreaKind::Topic,
        score: topic.percentage,
        reason: format!("Room for improvement ({:.1}%)", topic.percentage),
    });
    high.chain(medium).collect()
}
