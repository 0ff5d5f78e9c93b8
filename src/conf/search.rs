//! Search filters over entries and list elements.
//!
//! Short terms (two characters or fewer) only match exactly or as a prefix, so
//! typing the first letter of a service does not match half the file.

use super::model::{ConfigEntry, EntryValue};

const SUBSTRING_MIN_LEN: usize = 3;

/// Indices of entries matching `term`. A blank term matches everything.
pub fn matching_entries(entries: &[ConfigEntry], term: &str) -> Vec<usize> {
    let term = term.trim().to_lowercase();
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| term.is_empty() || entry_matches(entry, &term))
        .map(|(index, _)| index)
        .collect()
}

/// Indices of list elements matching `term`. A blank term matches everything.
///
/// Elements are opaque text; a leading `#` is ignored for matching.
pub fn matching_items(items: &[String], term: &str) -> Vec<usize> {
    let term = term.trim().to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| term.is_empty() || item_matches(item, &term))
        .map(|(index, _)| index)
        .collect()
}

fn entry_matches(entry: &ConfigEntry, term: &str) -> bool {
    let key = entry.key.trim().to_lowercase();
    match &entry.value {
        EntryValue::Object(text) => key.contains(term) || text.to_lowercase().contains(term),
        EntryValue::Scalar(value) => text_matches(&key, term) || long_term_in(value, term),
        EntryValue::List(_) => text_matches(&key, term),
    }
}

fn item_matches(item: &str, term: &str) -> bool {
    let original = item.trim().to_lowercase();
    let name = item.replacen('#', "", 1).trim().to_lowercase();
    text_matches(&name, term) || text_matches(&original, term)
}

fn text_matches(text: &str, term: &str) -> bool {
    text == term || text.starts_with(term) || long_term_in(text, term)
}

fn long_term_in(text: &str, term: &str) -> bool {
    term.chars().count() >= SUBSTRING_MIN_LEN && text.to_lowercase().contains(term)
}
