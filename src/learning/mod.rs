//! Learning path and study schedule generation.

pub mod path;
pub mod resources;
pub mod schedule;

pub use path::{build_learning_path, FocusArea, LearningPath, MaintenanceGoal};
pub use resources::resources_for;
pub use schedule::{build_schedule, StudyPhase, WeekPlan, DEFAULT_WEEKS};
