//! Implementation of the `hummingbird save` command.

use crate::cli::SaveArgs;
use crate::conf::ConfigEntry;
use crate::context::ConsoleContext;
use crate::error::{ConsoleError, Result};
use crate::settings::Settings;
use crate::store;
use std::io::Read;

/// Replace a file with entries given as a JSON array.
///
/// The array uses the same entry shape as the HTTP API:
/// `{"key", "value", "commented", "isObject"}`.
pub fn cmd_save(ctx: &ConsoleContext, settings: &Settings, args: SaveArgs) -> Result<()> {
    let json = match &args.input {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            ConsoleError::UserError(format!(
                "failed to read input file '{}': {}",
                path.display(),
                e
            ))
        })?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| ConsoleError::UserError(format!("failed to read stdin: {}", e)))?;
            buf
        }
    };

    let entries = parse_entries(&json)?;
    let path = store::save_document(ctx, settings, &args.file, entries)?;

    println!("Configuration saved to {}", path.display());
    Ok(())
}

pub(super) fn parse_entries(json: &str) -> Result<Vec<ConfigEntry>> {
    serde_json::from_str(json)
        .map_err(|e| ConsoleError::UserError(format!("invalid entries JSON: {}", e)))
}
