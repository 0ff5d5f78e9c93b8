//! JSON envelopes shared by the HTTP API and `show --json`.

use crate::context::ConsoleContext;
use crate::store::ConfigFile;
use serde_json::{Value, json};

/// Message for a configured file that is absent or unreadable.
pub const UNREADABLE_FILE: &str = "File not found or could not be read";

/// `{fileName, items, path}`, or an empty item list with an `error` for a
/// file that could not be read.
pub fn file_json(file: &ConfigFile) -> Value {
    match &file.document {
        Some(document) => json!({
            "fileName": file.file_name,
            "items": document.entries,
            "path": file.path.display().to_string(),
        }),
        None => json!({
            "fileName": file.file_name,
            "items": [],
            "error": UNREADABLE_FILE,
            "path": file.path.display().to_string(),
        }),
    }
}

/// Envelope for every configured file.
pub fn config_listing(ctx: &ConsoleContext, files: &[ConfigFile]) -> Value {
    json!({
        "success": true,
        "data": files.iter().map(file_json).collect::<Vec<_>>(),
        "directory": ctx.recipe_dir.display().to_string(),
    })
}
