//! Reading and writing configuration files in the recipe directory.
//!
//! Reads are lenient: a file that is absent or unreadable yields `None`
//! rather than an error, so one broken file never hides the others. Writes
//! are atomic and recorded in the audit log.

use crate::conf::{ConfigDocument, ConfigEntry};
use crate::context::ConsoleContext;
use crate::error::{ConsoleError, Result};
use crate::events::{Event, EventAction, append_event};
use crate::fs::atomic_write_file;
use crate::settings::Settings;
use serde_json::json;
use std::path::PathBuf;

/// One configured file and what could be read from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub file_name: String,
    pub path: PathBuf,
    /// `None` when the file is absent or unreadable.
    pub document: Option<ConfigDocument>,
}

/// Read and parse one configuration file.
///
/// # Returns
///
/// * `Ok(Some(doc))` - The parsed document (possibly with no entries)
/// * `Ok(None)` - The file is absent or could not be read
/// * `Err(ConsoleError::UserError)` - The file name is not a plain name
pub fn read_document(
    ctx: &ConsoleContext,
    settings: &Settings,
    file_name: &str,
) -> Result<Option<ConfigDocument>> {
    let path = ctx.config_path(file_name)?;

    match std::fs::read_to_string(&path) {
        Ok(text) => Ok(Some(ConfigDocument::parse(
            settings.file_kind(file_name),
            &text,
        ))),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "configuration file not readable");
            Ok(None)
        }
    }
}

/// Read a file that must exist, as edit commands require.
pub fn require_document(
    ctx: &ConsoleContext,
    settings: &Settings,
    file_name: &str,
) -> Result<ConfigDocument> {
    read_document(ctx, settings, file_name)?.ok_or_else(|| {
        ConsoleError::NotFound(format!(
            "configuration file '{}' not found in '{}'",
            file_name,
            ctx.recipe_dir.display()
        ))
    })
}

/// Read every configured file, in configured order.
pub fn load_all(ctx: &ConsoleContext, settings: &Settings) -> Result<Vec<ConfigFile>> {
    if !ctx.recipe_dir.is_dir() {
        return Err(ConsoleError::NotFound(format!(
            "recipe directory not found: {}",
            ctx.recipe_dir.display()
        )));
    }

    settings
        .config_files
        .iter()
        .map(|file_name| {
            Ok(ConfigFile {
                file_name: file_name.clone(),
                path: ctx.config_path(file_name)?,
                document: read_document(ctx, settings, file_name)?,
            })
        })
        .collect()
}

/// Serialize entries for a file and replace it atomically.
///
/// # Returns
///
/// * `Ok(path)` - The file that was written
/// * `Err(ConsoleError::UserError)` - The file name is not a plain name, or
///   an entry would not survive a reparse (see [`ConfigEntry::validate`])
/// * `Err(ConsoleError::WriteError)` - The file could not be written
pub fn save_document(
    ctx: &ConsoleContext,
    settings: &Settings,
    file_name: &str,
    entries: Vec<ConfigEntry>,
) -> Result<PathBuf> {
    let path = ctx.config_path(file_name)?;
    for (index, entry) in entries.iter().enumerate() {
        entry
            .validate()
            .map_err(|e| ConsoleError::UserError(format!("entry {}: {}", index, e)))?;
    }
    let document = ConfigDocument::new(settings.file_kind(file_name), entries);
    let text = document.render();

    atomic_write_file(&path, &text)?;
    tracing::info!(
        path = %path.display(),
        entries = document.len(),
        "configuration saved"
    );

    if settings.audit_log {
        let event = Event::new(EventAction::Save)
            .with_file(file_name)
            .with_details(json!({
                "entries": document.len(),
                "bytes": text.len(),
            }));
        if let Err(e) = append_event(ctx, &event) {
            tracing::warn!(error = %e, "failed to append audit event");
        }
    }

    Ok(path)
}
