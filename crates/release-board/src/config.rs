//! Runtime configuration.
//!
//! Values come from, in increasing precedence: built-in defaults, an optional
//! TOML file, then environment variables and command-line flags (both
//! resolved by clap into [`ConfigOverrides`]).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::entities::DEFAULT_OWNER;
use crate::errors::{BoardError, BoardResult};
use crate::storage::DEFAULT_TASKS_FILE;

/// Resolved configuration for a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Project owner passed to `gh --owner`
    pub owner: String,

    /// Task database path
    pub tasks_file: PathBuf,

    /// GitHub CLI executable
    pub gh_program: PathBuf,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            tasks_file: PathBuf::from(DEFAULT_TASKS_FILE),
            gh_program: PathBuf::from("gh"),
        }
    }
}

/// Values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub owner: Option<String>,
    pub tasks_file: Option<PathBuf>,
    pub gh_program: Option<PathBuf>,
}

impl BoardConfig {
    /// Parse a TOML config file. Keys that are not set keep their defaults.
    pub fn from_file(path: &Path) -> BoardResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| BoardError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&content)
            .map_err(|e| BoardError::Config(format!("{}: {e}", path.display())))
    }

    fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load defaults or `path`, then apply `overrides`.
    pub fn load(path: Option<&Path>, overrides: ConfigOverrides) -> BoardResult<Self> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(overrides))
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(owner) = overrides.owner {
            self.owner = owner;
        }
        if let Some(tasks_file) = overrides.tasks_file {
            self.tasks_file = tasks_file;
        }
        if let Some(gh_program) = overrides.gh_program {
            self.gh_program = gh_program;
        }
        self
    }
}
