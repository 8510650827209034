pub mod events;

pub use events::{
    log_event, log_quiz_composed, log_quiz_submitted, log_report_exported, log_session_reset,
};

use crate::workspace::Workspace;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

/// Type of assessment events that can be logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    QuizComposed,
    QuizSubmitted,
    ReportExported,
    SessionReset,
}

/// General-purpose assessment event stored as JSONL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentEvent {
    pub event_id: Uuid,
    pub session_id: Uuid,
    pub event_type: EventType,
    pub timestamp: DateTime<Utc>,
    pub details: serde_json::Value,
}

impl AssessmentEvent {
    pub fn new(session_id: Uuid, event_type: EventType, details: serde_json::Value) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            session_id,
            event_type,
            timestamp: Utc::now(),
            details,
        }
    }
}

/// Append-only event log for a workspace.
pub struct EventLog {
    events_path: PathBuf,
}

impl EventLog {
    pub fn for_workspace(workspace: &Workspace) -> Self {
        Self {
            events_path: workspace.paths.events_file(),
        }
    }

    pub fn append_event(&self, event: &AssessmentEvent) -> Result<()> {
        if let Some(parent) = self.events_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.events_path)
            .with_context(|| format!("Failed to open event log {:?}", self.events_path))?;
        file.write_all(serde_json::to_string(event)?.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }

    pub fn load_events(&self) -> Result<Vec<AssessmentEvent>> {
        if !self.events_path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.events_path)?;
        let mut events = Vec::new();
        for line in data.lines().filter(|l| !l.trim().is_empty()) {
            let event: AssessmentEvent = serde_json::from_str(line)
                .with_context(|| format!("Corrupt event line in {:?}", self.events_path))?;
            events.push(event);
        }
        Ok(events)
    }

    /// Events recorded for one session, oldest first.
    pub fn session_events(&self, session_id: Uuid) -> Result<Vec<AssessmentEvent>> {
        Ok(self
            .load_events()?
            .into_iter()
            .filter(|event| event.session_id == session_id)
            .collect())
    }
}
