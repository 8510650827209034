mod config;

pub use config::{
    config_file_path, ensure_workspace_structure, load_from, load_or_default, save, save_to,
    workspace_root, AppConfig, ExportSettings, QuizSettings, ScheduleSettings, WorkspacePaths,
    CONFIG_FILE_NAME,
};

use crate::orchestration::EventLog;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Configuration plus filesystem locations for one installation.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub config: AppConfig,
    pub paths: WorkspacePaths,
}

impl Workspace {
    /// Opens the default workspace (`SKILLGAP_HOME` or the OS data dir).
    pub fn new() -> Result<Self> {
        Self::open_at(workspace_root()?)
    }

    /// Opens (creating if needed) a workspace rooted at `root`.
    pub fn open_at(root: impl Into<PathBuf>) -> Result<Self> {
        let paths = WorkspacePaths::under(root);
        paths.ensure()?;
        let config = load_from(&paths.config_file())?;
        Ok(Self { config, paths })
    }

    pub fn root(&self) -> &Path {
        &self.paths.root
    }

    pub fn exports_dir(&self) -> &Path {
        &self.paths.exports_dir
    }

    pub fn event_log(&self) -> EventLog {
        EventLog::for_workspace(self)
    }

    pub fn save_config(&self) -> Result<()> {
        save_to(&self.paths.config_file(), &self.config)
    }
}
