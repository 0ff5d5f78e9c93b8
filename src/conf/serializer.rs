//! Rendering entries back to `.conf` text.
//!
//! The two file kinds format lists differently and only the overrides file
//! rewrites the comment marker of object blocks. Feeding one kind's entries
//! through the other kind's rules is not expected to round-trip.

use super::model::{ConfigEntry, EntryValue, FileKind};
use std::fmt::Write;

/// Render entries as the text of a file of the given kind.
pub fn serialize(kind: FileKind, entries: &[ConfigEntry]) -> String {
    match kind {
        FileKind::Overrides => serialize_overrides(entries),
        FileKind::Plain => serialize_plain(entries),
    }
}

fn serialize_overrides(entries: &[ConfigEntry]) -> String {
    let mut out = String::from("overrides {\n");
    for entry in entries {
        match &entry.value {
            EntryValue::Object(text) => {
                out.push_str(&set_block_comment(text, entry.commented));
                out.push('\n');
            }
            EntryValue::List(items) => {
                let _ = writeln!(out, "{} = [", entry.key);
                push_items(&mut out, items);
                out.push_str("]\n");
            }
            EntryValue::Scalar(value) => push_scalar(&mut out, entry, value),
        }
    }
    out.push_str("}\n");
    out
}

fn serialize_plain(entries: &[ConfigEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        match &entry.value {
            EntryValue::Object(text) => {
                out.push_str(text);
                out.push('\n');
            }
            EntryValue::List(items) => {
                let _ = write!(out, "{} = [\n\n", entry.key);
                push_items(&mut out, items);
                out.push_str("\n]\n\n");
            }
            EntryValue::Scalar(value) => push_scalar(&mut out, entry, value),
        }
    }
    out
}

fn push_items(out: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(out, "    {},", item);
    }
}

fn push_scalar(out: &mut String, entry: &ConfigEntry, value: &str) {
    let prefix = if entry.commented { "#" } else { "" };
    let _ = writeln!(out, "{}{} = {}", prefix, entry.key, value);
}

/// Add or strip the `#` on the first line of an object block.
///
/// Only the first line is touched; indentation before a stripped `#` is kept.
/// A first line that already has the requested state is left unchanged.
pub(super) fn set_block_comment(text: &str, commented: bool) -> String {
    let (first, rest) = match text.split_once('\n') {
        Some((first, rest)) => (first, Some(rest)),
        None => (text, None),
    };

    let indent_len = first.len() - first.trim_start().len();
    let (indent, body) = first.split_at(indent_len);
    let first = match (commented, body.strip_prefix('#')) {
        (true, None) => format!("#{}", first),
        (false, Some(uncommented)) => format!("{}{}", indent, uncommented),
        _ => first.to_string(),
    };

    match rest {
        Some(rest) => format!("{}\n{}", first, rest),
        None => first,
    }
}
