//! Gap analysis over a scored quiz and the priority list derived from it.

pub mod gap;
pub mod priorities;

pub use gap::{
    actual_level, analyze, classify_topics, level_gap, level_standings, readiness, GapAnalysis,
    LevelGapBand, LevelStanding, LevelStatus, Readiness, TopicBands, TopicStanding,
    MASTERY_THRESHOLD, STRONG_THRESHOLD, WEAK_THRESHOLD,
};
pub use priorities::{prioritize, AreaKind, Priority, PriorityItem};
