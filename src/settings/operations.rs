//! Settings loading, validation, and lookup operations.

use super::model::Settings;
use crate::conf::FileKind;
use crate::context::validate_file_name;
use crate::error::{ConsoleError, Result};
use std::path::{Path, PathBuf};

/// Default settings location: `<config_dir>/hummingbird/settings.yaml`.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hummingbird").join("settings.yaml"))
}

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - Successfully loaded and validated settings
    /// * `Err(ConsoleError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ConsoleError::UserError(format!(
                "failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the settings for this run.
    ///
    /// An explicitly named file must exist. Without one, the default location
    /// is used when present and built-in defaults otherwise.
    pub fn locate(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_settings_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading settings");
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Parse settings from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let settings: Settings = if yaml.trim().is_empty() {
            Settings::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                ConsoleError::UserError(format!("failed to parse settings YAML: {}", e))
            })?
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings values.
    ///
    /// Validation rules:
    /// - `config_files` must not be empty
    /// - every name in `config_files` and `wrapped_files` must be a plain file name
    /// - `port` must be non-zero
    pub fn validate(&self) -> Result<()> {
        if self.config_files.is_empty() {
            return Err(ConsoleError::UserError(
                "settings validation failed: config_files must not be empty".to_string(),
            ));
        }

        for name in self.config_files.iter().chain(&self.wrapped_files) {
            validate_file_name(name).map_err(|e| {
                ConsoleError::UserError(format!("settings validation failed: {}", e))
            })?;
        }

        if self.port == 0 {
            return Err(ConsoleError::UserError(
                "settings validation failed: port must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Serialization rules for a file, keyed by its name.
    pub fn file_kind(&self, file_name: &str) -> FileKind {
        if self.wrapped_files.iter().any(|name| name == file_name) {
            FileKind::Overrides
        } else {
            FileKind::Plain
        }
    }
}
