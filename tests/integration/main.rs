use rand::rngs::StdRng;
use rand::SeedableRng;
use skillgap::bank::{Level, Question, QuestionRepository};
use skillgap::{QuizItem, Workspace};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

pub struct IntegrationHarness {
    workspace: TempDir,
}

impl IntegrationHarness {
    pub fn new() -> Self {
        let workspace = TempDir::new().expect("failed to create temp workspace");
        Self { workspace }
    }

    pub fn workspace_path(&self) -> &Path {
        self.workspace.path()
    }

    pub fn workspace(&self) -> Workspace {
        Workspace::open_at(self.workspace.path()).expect("failed to open workspace for tests")
    }

    pub fn repository(&self) -> QuestionRepository {
        QuestionRepository::with_catalog()
    }
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Hand-built quiz item whose correct option is always 0.
pub fn fixture_item(sequence_number: u32, topic: &str, level: u8) -> QuizItem {
    let level = Level::new(level).expect("fixture level");
    let question = Question::new(
        format!("fx_{sequence_number}"),
        "Cybersecurity",
        topic,
        level,
        format!("Fixture question {sequence_number}"),
        ["right", "wrong", "wrong", "wrong"].map(String::from),
        0,
    )
    .expect("fixture question");
    QuizItem {
        question: Arc::new(question),
        assigned_level: level,
        sequence_number,
    }
}

mod gap_scenarios;
mod learning_plan;
mod quiz_composition;
mod scoring_properties;
mod session_flow;
