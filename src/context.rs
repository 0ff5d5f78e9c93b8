//! Recipe directory and state path resolution for hummingbird.
//!
//! Every command and HTTP handler locates configuration files through this
//! module, so the CLI and the server always agree on which directory they edit.

use crate::error::{ConsoleError, Result};
use crate::settings::Settings;
use std::path::{Path, PathBuf};

/// Recipe directory name under the user's home directory.
pub const DEFAULT_RECIPE_DIR: &str = ".recipe";

/// Console state directory name within the recipe directory.
pub const STATE_DIR: &str = ".hummingbird";

/// Resolved paths for console operations. All paths are absolute when the
/// inputs they were resolved from are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleContext {
    /// Directory holding the `.conf` files (default: `~/.recipe`).
    pub recipe_dir: PathBuf,

    /// Console-owned state (default: `{recipe_dir}/.hummingbird`).
    pub state_dir: PathBuf,

    /// Audit log directory (default: `{recipe_dir}/.hummingbird/events`).
    pub events_dir: PathBuf,
}

impl ConsoleContext {
    /// Resolve the context.
    ///
    /// Precedence: explicit override (CLI flag or environment), then
    /// `settings.recipe_dir`, then `$HOME/.recipe`.
    pub fn resolve(override_dir: Option<&Path>, settings: &Settings) -> Result<Self> {
        if let Some(dir) = override_dir.or(settings.recipe_dir.as_deref()) {
            return Ok(Self::from_recipe_dir(dir));
        }

        let home = dirs::home_dir().ok_or_else(|| {
            ConsoleError::UserError(
                "could not determine the home directory; pass --recipe-dir".to_string(),
            )
        })?;
        Ok(Self::from_recipe_dir(home.join(DEFAULT_RECIPE_DIR)))
    }

    /// Build a context rooted at a specific recipe directory.
    pub fn from_recipe_dir<P: AsRef<Path>>(recipe_dir: P) -> Self {
        let recipe_dir = recipe_dir.as_ref().to_path_buf();
        let state_dir = recipe_dir.join(STATE_DIR);
        let events_dir = state_dir.join("events");

        Self {
            recipe_dir,
            state_dir,
            events_dir,
        }
    }

    /// Path of a configuration file inside the recipe directory.
    ///
    /// Rejects names that could escape the directory.
    pub fn config_path(&self, file_name: &str) -> Result<PathBuf> {
        validate_file_name(file_name)?;
        Ok(self.recipe_dir.join(file_name))
    }
}

/// Accept only a bare file name: non-empty, no separators, no `..`.
pub fn validate_file_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ConsoleError::UserError(
            "file name must not be empty".to_string(),
        ));
    }
    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(ConsoleError::UserError(format!(
            "invalid file name '{}': expected a file inside the recipe directory",
            name
        )));
    }
    Ok(())
}
