//! Settings struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for the operator console.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // =========================================================================
    // Files
    // =========================================================================
    /// Directory holding the recipe `.conf` files (default: `~/.recipe`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_dir: Option<PathBuf>,

    /// Configuration files listed by `show` and `GET /api/config`.
    #[serde(default = "default_config_files")]
    pub config_files: Vec<String>,

    /// Files serialized inside a single `overrides { }` wrapper.
    #[serde(default = "default_wrapped_files")]
    pub wrapped_files: Vec<String>,

    // =========================================================================
    // Server
    // =========================================================================
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    // =========================================================================
    // Audit
    // =========================================================================
    /// Append a `save` event to the audit log after every write.
    #[serde(default = "default_true")]
    pub audit_log: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            recipe_dir: None,
            config_files: default_config_files(),
            wrapped_files: default_wrapped_files(),
            host: default_host(),
            port: default_port(),
            audit_log: true,
        }
    }
}
