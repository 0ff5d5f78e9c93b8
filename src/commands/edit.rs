//! Single-edit commands: `add`, `set`, `toggle`, `remove`, `add-item`.
//!
//! Each command reads the file, applies one edit, and writes it back.

use crate::cli::{AddArgs, AddItemArgs, RemoveArgs, SetArgs, ToggleArgs};
use crate::conf::ConfigDocument;
use crate::context::ConsoleContext;
use crate::error::Result;
use crate::settings::Settings;
use crate::store;

/// Load `file_name`, apply `edit`, save, and print the edit's message.
fn edit_and_save<F>(
    ctx: &ConsoleContext,
    settings: &Settings,
    file_name: &str,
    edit: F,
) -> Result<()>
where
    F: FnOnce(&mut ConfigDocument) -> Result<String>,
{
    let mut document = store::require_document(ctx, settings, file_name)?;
    let message = edit(&mut document)?;
    store::save_document(ctx, settings, file_name, document.entries)?;

    println!("{}", message);
    Ok(())
}

pub fn cmd_add(ctx: &ConsoleContext, settings: &Settings, args: AddArgs) -> Result<()> {
    edit_and_save(ctx, settings, &args.file, |doc| {
        let entry = doc.add_entry(&args.key, &args.value)?;
        Ok(format!("Added '{}' to {}", entry.key, args.file))
    })
}

pub fn cmd_set(ctx: &ConsoleContext, settings: &Settings, args: SetArgs) -> Result<()> {
    edit_and_save(ctx, settings, &args.file, |doc| {
        doc.set_value(args.index, &args.value)?;
        Ok(format!(
            "Updated '{}' in {}",
            doc.entries[args.index].key, args.file
        ))
    })
}

pub fn cmd_toggle(ctx: &ConsoleContext, settings: &Settings, args: ToggleArgs) -> Result<()> {
    edit_and_save(ctx, settings, &args.file, |doc| match args.item {
        Some(item) => {
            let text = doc.toggle_list_item(args.index, item)?;
            Ok(format!(
                "Item {} of '{}' is now '{}'",
                item, doc.entries[args.index].key, text
            ))
        }
        None => {
            let commented = doc.toggle_comment(args.index)?;
            let state = if commented { "commented out" } else { "enabled" };
            Ok(format!("'{}' is now {}", doc.entries[args.index].key, state))
        }
    })
}

pub fn cmd_remove(ctx: &ConsoleContext, settings: &Settings, args: RemoveArgs) -> Result<()> {
    edit_and_save(ctx, settings, &args.file, |doc| match args.item {
        Some(item) => {
            let removed = doc.remove_list_item(args.index, item)?;
            Ok(format!(
                "Removed '{}' from '{}'",
                removed, doc.entries[args.index].key
            ))
        }
        None => {
            let removed = doc.remove_entry(args.index)?;
            Ok(format!("Removed '{}' from {}", removed.key, args.file))
        }
    })
}

pub fn cmd_add_item(ctx: &ConsoleContext, settings: &Settings, args: AddItemArgs) -> Result<()> {
    edit_and_save(ctx, settings, &args.file, |doc| {
        doc.add_list_item(args.index, &args.item)?;
        Ok(format!(
            "Added '{}' to '{}'",
            args.item.trim(),
            doc.entries[args.index].key
        ))
    })
}
