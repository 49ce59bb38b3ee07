//! TOML-based application configuration.
//!
//! Stores user defaults:
//! - Exam date offset and a default daily hour budget
//! - Calendar flag character
//!
//! Configuration is stored at `~/.config/satprep/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::calendar::{CalendarStyle, DEFAULT_MARK};
use crate::error::{ConfigError, CoreError, Result};

/// Plan defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Days from today to the exam when no date is given.
    #[serde(default = "default_exam_offset_days")]
    pub exam_offset_days: u32,
    /// Used when `--hours` is omitted.
    #[serde(default)]
    pub default_hours_per_day: Option<i32>,
}

/// Calendar rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default = "default_mark")]
    pub mark: char,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/satprep/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub plan: PlanConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
}

fn default_exam_offset_days() -> u32 {
    30
}
fn default_mark() -> char {
    DEFAULT_MARK
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            exam_offset_days: default_exam_offset_days(),
            default_hours_per_day: None,
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            mark: default_mark(),
        }
    }
}

/// Returns `~/.config/satprep[-dev]/` based on SATPREP_ENV.
///
/// Set SATPREP_ENV=dev to use development data directory.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("SATPREP_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("satprep-dev")
    } else {
        base_dir.join("satprep")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DirUnavailable {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> std::result::Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let (parent_path, leaf) = match key.rsplit_once('.') {
            Some((parent, leaf)) => (Some(parent), leaf),
            None => (None, key),
        };
        if leaf.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        if let Some(parent_path) = parent_path {
            for part in parent_path.split('.') {
                current = current.get_mut(part).ok_or_else(unknown)?;
            }
        }
        let obj = current.as_object_mut().ok_or_else(unknown)?;
        let existing = obj.get(leaf).ok_or_else(unknown)?;

        let new_value = match existing {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(
                value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
            ),
            // Optional numbers serialize as null until set.
            serde_json::Value::Number(_) | serde_json::Value::Null => {
                if value == "none" || value == "null" {
                    serde_json::Value::Null
                } else {
                    let n = value
                        .parse::<i64>()
                        .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                    serde_json::Value::Number(n.into())
                }
            }
            _ => serde_json::Value::String(value.into()),
        };

        obj.insert(leaf.to_string(), new_value);
        Ok(())
    }

    /// Default location of the config file.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Same as [`Config::load`] for an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, writing defaults");
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(CoreError::Io(e)),
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default config");
            Self::default()
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed
    /// into the field's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    pub fn calendar_style(&self) -> CalendarStyle {
        CalendarStyle {
            mark: self.calendar.mark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.plan.exam_offset_days, 30);
        assert_eq!(parsed.calendar.mark, '*');
        assert!(parsed.plan.default_hours_per_day.is_none());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("[calendar]\nmark = \"+\"\n").unwrap();
        assert_eq!(parsed.calendar.mark, '+');
        assert_eq!(parsed.plan.exam_offset_days, 30);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("plan.exam_offset_days").as_deref(), Some("30"));
        assert_eq!(cfg.get("calendar.mark").as_deref(), Some("*"));
        assert_eq!(cfg.get("plan.default_hours_per_day").as_deref(), Some("null"));
        assert!(cfg.get("plan.missing_key").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn set_updates_numbers_and_optionals() {
        let mut cfg = Config::default();
        cfg.set("plan.exam_offset_days", "45").unwrap();
        cfg.set("plan.default_hours_per_day", "3").unwrap();
        assert_eq!(cfg.plan.exam_offset_days, 45);
        assert_eq!(cfg.plan.default_hours_per_day, Some(3));

        cfg.set("plan.default_hours_per_day", "none").unwrap();
        assert_eq!(cfg.plan.default_hours_per_day, None);
    }

    #[test]
    fn set_updates_char_field() {
        let mut cfg = Config::default();
        cfg.set("calendar.mark", "#").unwrap();
        assert_eq!(cfg.calendar_style().mark, '#');
    }

    #[test]
    fn set_rejects_bad_values_and_keys() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("plan.exam_offset_days", "soon"),
            Err(CoreError::Config(ConfigError::InvalidValue { .. }))
        ));
        assert!(matches!(
            cfg.set("plan.exam_offset_days", "-3"),
            Err(CoreError::Config(ConfigError::InvalidValue { .. }))
        ));
        assert!(matches!(
            cfg.set("calendar.mark", "**"),
            Err(CoreError::Config(ConfigError::InvalidValue { .. }))
        ));
        assert!(matches!(
            cfg.set("ui.theme", "dark"),
            Err(CoreError::Config(ConfigError::UnknownKey(_)))
        ));
        assert_eq!(cfg.plan.exam_offset_days, 30);
    }

    #[test]
    fn load_from_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.plan.exam_offset_days, 30);
        assert!(path.exists());
    }

    #[test]
    fn save_then_load_preserves_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.set("plan.exam_offset_days", "60").unwrap();
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.plan.exam_offset_days, 60);
    }

    #[test]
    fn load_from_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "plan = [").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(CoreError::Config(ConfigError::LoadFailed { .. }))
        ));
    }
}
