//! Configuration primitives for SkillGap.
//!
//! Stored in a machine-readable TOML file located at
//! `<workspace root>/config/config.toml`, where the workspace root is
//! `SKILLGAP_HOME` when set and the OS data directory otherwise:
//!   %APPDATA%/SkillGap on Windows
//!   $XDG_DATA_HOME/SkillGap on Linux
//!   ~/Library/Application Support/SkillGap on macOS
//!
//! Only quiz sizing, schedule length and export defaults are configurable.
//! Scoring thresholds are fixed.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::assessment::{DEFAULT_MAX_QUESTIONS, DEFAULT_QUESTIONS_PER_LEVEL};
use crate::learning::DEFAULT_WEEKS;

/// Root configuration persisted per installation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Quiz composition limits.
    #[serde(default)]
    pub quiz: QuizSettings,
    /// Study schedule defaults.
    #[serde(default)]
    pub schedule: ScheduleSettings,
    /// Report export defaults.
    #[serde(default)]
    pub export: ExportSettings,
}

impl AppConfig {
    /// Rejects sizes that would produce an empty quiz or schedule.
    pub fn validate(&self) -> Result<()> {
        if self.quiz.questions_per_level == 0 || self.quiz.max_questions == 0 {
            bail!("Quiz sizes must be at least 1.");
        }
        if self.schedule.weeks == 0 {
            bail!("The study schedule needs at least one week.");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSettings {
    /// Questions drawn from each difficulty level.
    #[serde(default = "default_questions_per_level")]
    pub questions_per_level: usize,
    /// Upper bound on the number of questions in one quiz.
    #[serde(default = "default_max_questions")]
    pub max_questions: usize,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            questions_per_level: default_questions_per_level(),
            max_questions: default_max_questions(),
        }
    }
}

const fn default_questions_per_level() -> usize {
    DEFAULT_QUESTIONS_PER_LEVEL
}

const fn default_max_questions() -> usize {
    DEFAULT_MAX_QUESTIONS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSettings {
    #[serde(default = "default_weeks")]
    pub weeks: usize,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            weeks: default_weeks(),
        }
    }
}

const fn default_weeks() -> usize {
    DEFAULT_WEEKS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Name printed on exported reports.
    #[serde(default = "default_candidate_name")]
    pub candidate_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            candidate_name: default_candidate_name(),
        }
    }
}

fn default_candidate_name() -> String {
    "Student".into()
}

/// Standard relative path to the config file (resolved per OS at runtime).
pub const CONFIG_FILE_NAME: &str = "config.toml";

use directories::BaseDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the root directory where SkillGap stores data.
///
/// Order of precedence:
/// 1. `SKILLGAP_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var("SKILLGAP_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("SkillGap"))
}

/// Path to the config file under the default workspace root.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(WorkspacePaths::under(workspace_root()?).config_file())
}

/// Loads the configuration from the default location or returns defaults.
pub fn load_or_default() -> Result<AppConfig> {
    load_from(&config_file_path()?)
}

/// Persists the configuration to the default location.
pub fn save(config: &AppConfig) -> Result<()> {
    save_to(&config_file_path()?, config)
}

pub fn load_from(path: &Path) -> Result<AppConfig> {
    if path.exists() {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: AppConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        cfg.validate()
            .with_context(|| format!("Invalid settings in config file {:?}", path))?;
        Ok(cfg)
    } else {
        Ok(AppConfig::default())
    }
}

pub fn save_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let data = toml::to_string_pretty(config)?;
    fs::write(path, data).with_context(|| format!("Failed to write config file {:?}", path))?;
    Ok(())
}

/// Ensures the default workspace structure exists (config/, exports/, logs/).
pub fn ensure_workspace_structure() -> Result<WorkspacePaths> {
    let paths = WorkspacePaths::under(workspace_root()?);
    paths.ensure()?;
    Ok(paths)
}

/// Convenience struct exposing important workspace paths.
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    pub root: PathBuf,
    pub config_dir: PathBuf,
    pub exports_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl WorkspacePaths {
    pub fn under(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            config_dir: root.join("config"),
            exports_dir: root.join("exports"),
            logs_dir: root.join("logs"),
            root,
        }
    }

    pub fn ensure(&self) -> Result<()> {
        for dir in [&self.config_dir, &self.exports_dir, &self.logs_dir] {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create workspace directory {:?}", dir))?;
        }
        Ok(())
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    pub fn events_file(&self) -> PathBuf {
        self.logs_dir.join("events.jsonl")
    }
}
