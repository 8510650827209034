pub mod analysis;
pub mod assessment;
pub mod bank;
pub mod error;
pub mod handlers;
pub mod learning;
pub mod orchestration;
pub mod reports;
pub mod session;
pub mod workspace;

// Re-export commonly used types for convenience.
pub use analysis::GapAnalysis;
pub use assessment::{AnswerSet, QuizItem, ScoreReport};
pub use bank::{Course, Level, Question, QuestionRepository};
pub use error::AssessmentError;
pub use session::SessionState;
pub use workspace::{AppConfig, Workspace};
