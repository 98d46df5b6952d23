//! Configuration file handling.
//!
//! Reads from `~/.config/reservas/reservas.toml`

use anyhow::{Context, Result};
use reservas_core::controllers::HOURS_RANGE;
use reservas_core::{ChargeType, ScreenKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Smallest terminal width the form screen can be drawn in.
    #[serde(default = "default_form_min_width")]
    pub form_min_width: u16,
    /// Smallest terminal height the form screen can be drawn in.
    #[serde(default = "default_form_min_height")]
    pub form_min_height: u16,
    /// Smallest terminal width the list screen can be drawn in.
    #[serde(default = "default_list_min_width")]
    pub list_min_width: u16,
    /// Smallest terminal height the list screen can be drawn in.
    #[serde(default = "default_list_min_height")]
    pub list_min_height: u16,
    /// How long to wait for a key press before redrawing.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Initial value of the hours selector.
    #[serde(default = "default_hours")]
    pub default_hours: i64,
    /// Charge type selected when the form opens.
    #[serde(default)]
    pub default_charge: ChargeType,
}

fn default_form_min_width() -> u16 {
    46
}

fn default_form_min_height() -> u16 {
    20
}

fn default_list_min_width() -> u16 {
    86
}

fn default_list_min_height() -> u16 {
    12
}

fn default_poll_interval_ms() -> u64 {
    100
}

fn default_hours() -> i64 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            form_min_width: default_form_min_width(),
            form_min_height: default_form_min_height(),
            list_min_width: default_list_min_width(),
            list_min_height: default_list_min_height(),
            poll_interval_ms: default_poll_interval_ms(),
            default_hours: default_hours(),
            default_charge: ChargeType::default(),
        }
    }
}

impl Config {
    /// Load configuration from the config file.
    ///
    /// If `custom_path` is provided, load from that path.
    /// Otherwise, load from the default XDG config location.
    /// Creates a default config file if it doesn't exist (only for default path).
    pub fn load(custom_path: Option<PathBuf>) -> Result<Self> {
        let is_custom = custom_path.is_some();
        let config_path = match custom_path {
            Some(path) => path,
            None => Self::config_path()?,
        };

        if !config_path.exists() {
            if is_custom {
                anyhow::bail!("Config file not found: {}", config_path.display());
            }
            let config = Config::default();
            config.save_to(&config_path)?;
            tracing::info!("Created default config at {}", config_path.display());
            return Ok(config);
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        tracing::info!("Loaded config from {}: {:?}", config_path.display(), config);
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Initial hours, forced into the range the selector accepts.
    pub fn initial_hours(&self) -> i64 {
        self.default_hours
            .clamp(*HOURS_RANGE.start(), *HOURS_RANGE.end())
    }

    /// Minimum `(width, height)` needed to draw `screen`.
    pub fn min_size(&self, screen: ScreenKind) -> (u16, u16) {
        match screen {
            ScreenKind::Form => (self.form_min_width, self.form_min_height),
            ScreenKind::List => (self.list_min_width, self.list_min_height),
        }
    }

    /// Get the path to the config file.
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;

        Ok(config_dir.join("reservas").join("reservas.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reservas.toml");
        std::fs::write(&path, "default_charge = \"slow\"\nlist_min_width = 120\n").unwrap();

        let config = Config::load(Some(path)).unwrap();
        assert_eq!(config.default_charge, ChargeType::Slow);
        assert_eq!(config.list_min_width, 120);
        assert_eq!(config.form_min_width, 46);
        assert_eq!(config.poll_interval_ms, 100);
    }

    #[test]
    fn test_missing_custom_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reservas.toml");
        std::fs::write(&path, "default_charge = \"turbo\"\n").unwrap();

        assert!(Config::load(Some(path)).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("reservas.toml");
        let config = Config {
            default_hours: 4,
            ..Config::default()
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load(Some(path)).unwrap(), config);
    }

    #[test]
    fn test_initial_hours_clamped() {
        let mut config = Config::default();
        config.default_hours = 40;
        assert_eq!(config.initial_hours(), 24);
        config.default_hours = 0;
        assert_eq!(config.initial_hours(), 1);
    }

    #[test]
    fn test_min_size_per_screen() {
        let config = Config::default();
        assert_eq!(config.min_size(ScreenKind::Form), (46, 20));
        assert_eq!(config.min_size(ScreenKind::List), (86, 12));
    }
}
