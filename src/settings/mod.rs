//! Console settings for hummingbird.
//!
//! This module defines the Settings struct loaded from `settings.yaml`. It
//! supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, and validation of the loaded values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Settings;
pub use operations::default_settings_path;
