//! Implementation of the `hummingbird show` command.

use crate::cli::ShowArgs;
use crate::conf::{ConfigEntry, EntryValue};
use crate::context::ConsoleContext;
use crate::error::{ConsoleError, Result};
use crate::server::responses::{UNREADABLE_FILE, config_listing, file_json};
use crate::settings::Settings;
use crate::store::{self, ConfigFile};
use serde_json::Value;

/// Print every configured file, or one named file.
///
/// A named file that cannot be read is a not-found error; when listing all
/// files, unreadable ones are reported inline.
pub fn cmd_show(ctx: &ConsoleContext, settings: &Settings, args: ShowArgs) -> Result<()> {
    let files = match &args.file {
        Some(file_name) => {
            let document = store::require_document(ctx, settings, file_name)?;
            vec![ConfigFile {
                file_name: file_name.clone(),
                path: ctx.config_path(file_name)?,
                document: Some(document),
            }]
        }
        None => store::load_all(ctx, settings)?,
    };

    if args.json {
        let value = match &args.file {
            Some(_) => file_json(&files[0]),
            None => config_listing(ctx, &files),
        };
        println!("{}", to_pretty_json(&value)?);
        return Ok(());
    }

    let sections: Vec<String> = files.iter().map(render_file).collect();
    print!("{}", sections.join("\n"));
    Ok(())
}

fn to_pretty_json(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ConsoleError::UserError(format!("failed to serialize output: {}", e)))
}

/// Human-readable listing of one file, entries numbered for edit commands.
pub(super) fn render_file(file: &ConfigFile) -> String {
    let mut out = format!("{}  ({})\n", file.file_name, file.path.display());

    match &file.document {
        None => out.push_str(&format!("  ({})\n", UNREADABLE_FILE)),
        Some(document) if document.is_empty() => out.push_str("  (no entries)\n"),
        Some(document) => {
            for (index, entry) in document.entries.iter().enumerate() {
                out.push_str(&render_entry(index, entry));
            }
        }
    }

    out
}

pub(super) fn render_entry(index: usize, entry: &ConfigEntry) -> String {
    let marker = if entry.commented { "# " } else { "" };

    match &entry.value {
        EntryValue::Scalar(value) => format!("  [{}] {}{} = {}\n", index, marker, entry.key, value),
        EntryValue::List(items) => {
            let mut out = format!("  [{}] {} = [{} items]\n", index, entry.key, items.len());
            for (item_index, item) in items.iter().enumerate() {
                out.push_str(&format!("        {}  {}\n", item_index, item));
            }
            out
        }
        EntryValue::Object(text) => {
            let mut out = format!("  [{}] {}{} {{...}}\n", index, marker, entry.key);
            for line in text.lines() {
                out.push_str(&format!("        {}\n", line));
            }
            out
        }
    }
}
