//! Implementation of the `hummingbird search` command.

use super::show::render_entry;
use crate::cli::SearchArgs;
use crate::conf::ConfigDocument;
use crate::conf::search::{matching_entries, matching_items};
use crate::context::ConsoleContext;
use crate::error::Result;
use crate::settings::Settings;
use crate::store;

pub fn cmd_search(ctx: &ConsoleContext, settings: &Settings, args: SearchArgs) -> Result<()> {
    let document = store::require_document(ctx, settings, &args.file)?;
    let report = search_report(&document, &args.term);

    if report.is_empty() {
        println!("No matches for '{}' in {}", args.term.trim(), args.file);
    } else {
        print!("{}", report);
    }
    Ok(())
}

/// Entries matching `term`, then list items matching it in other lists.
pub(super) fn search_report(document: &ConfigDocument, term: &str) -> String {
    let matched = matching_entries(&document.entries, term);
    let mut out: String = matched
        .iter()
        .map(|&index| render_entry(index, &document.entries[index]))
        .collect();

    for (index, entry) in document.entries.iter().enumerate() {
        if matched.contains(&index) {
            continue;
        }
        let Some(items) = entry.items() else {
            continue;
        };
        for item_index in matching_items(items, term) {
            out.push_str(&format!(
                "  [{}] {} item {}: {}\n",
                index, entry.key, item_index, items[item_index]
            ));
        }
    }

    out
}
