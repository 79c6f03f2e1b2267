//! Runtime configuration.
//!
//! Precedence, lowest first: built-in defaults, the config file (YAML, or
//! JSON for `.json` paths), environment variables, command-line flags.

use crate::core::FieldValues;
use crate::error::{Error, Result};
use crate::task::FakeSave;
use crate::task::save::{DEFAULT_REJECTED_NAME, DEFAULT_SAVE_DELAY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const LOG_LEVEL_ENV: &str = "PERSONAL_FORM_LOG";
pub const LOG_FILE_ENV: &str = "PERSONAL_FORM_LOG_FILE";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    pub save: SaveConfig,
    pub logging: LoggingConfig,
    pub prefill: Option<FieldValues>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SaveConfig {
    pub delay_ms: u64,
    pub rejected_name: String,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_SAVE_DELAY.as_millis() as u64,
            rejected_name: DEFAULT_REJECTED_NAME.to_string(),
        }
    }
}

impl SaveConfig {
    pub fn backend(&self) -> FakeSave {
        FakeSave::new()
            .with_delay(Duration::from_millis(self.delay_ms))
            .with_rejected_name(self.rejected_name.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `personal_form=debug`.
    pub level: String,
    /// Logs are written here; without a file nothing is logged.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl FormConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::parse(&raw, path)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(raw: &str, path: &Path) -> Result<Self> {
        let config: Self = if is_json(path) {
            serde_json::from_str(raw)?
        } else if raw.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(raw)?
        };
        config.check(path)?;
        Ok(config)
    }

    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup(LOG_LEVEL_ENV).filter(|v| !v.trim().is_empty()) {
            self.logging.level = level;
        }
        if let Some(file) = lookup(LOG_FILE_ENV).filter(|v| !v.trim().is_empty()) {
            self.logging.file = Some(PathBuf::from(file));
        }
    }

    /// Rejects settings no source may leave blank. `origin` names where the
    /// offending value came from.
    pub fn check(&self, origin: &Path) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(Error::config(origin, "logging.level must not be empty"));
        }
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
