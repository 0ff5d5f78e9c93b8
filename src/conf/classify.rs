//! Line classification for `.conf` files.
//!
//! Classification is only applied to lines outside any list or object block;
//! lines inside a block are handled by the parser's block states, which use
//! [`classify_list_line`] for lists and raw accumulation for objects.

use regex::Regex;
use std::sync::LazyLock;

/// Optional `#`, a bare token, then `{`.
static OBJECT_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#?)(\s*)([^=\s]+)\s*\{").expect("Invalid object-open regex")
});

/// Classification of a line outside any block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    /// Human comment (`#` or `;`) that does not carry an entry.
    Comment,
    /// `key {` or `#key {`, possibly closed on the same line.
    ObjectOpen { key: &'a str, commented: bool },
    /// `key = [` opening a multi-line list.
    ListOpen { key: &'a str },
    /// `key = [a, b]` on one line.
    InlineList { key: &'a str, items: Vec<String> },
    /// `key = value` or `#key = value`.
    KeyValue {
        key: &'a str,
        value: &'a str,
        commented: bool,
    },
    Unrecognized,
}

/// Classification of a line inside a multi-line list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListLine {
    Close,
    Item(String),
    Skip,
}

/// Classify one physical line that is not inside a list or object block.
pub fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if trimmed.starts_with(';') {
        return LineKind::Comment;
    }

    if let Some(caps) = OBJECT_OPEN.captures(trimmed) {
        let commented = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        if let Some(key) = caps.get(3) {
            return LineKind::ObjectOpen {
                key: key.as_str(),
                commented,
            };
        }
    }

    match split_key_value(trimmed) {
        Some((key, value, commented)) => classify_value(key, value, commented),
        None if trimmed.starts_with('#') => LineKind::Comment,
        None => LineKind::Unrecognized,
    }
}

/// Classify one physical line inside a multi-line list.
///
/// Elements keep a leading `#`; one trailing comma is dropped.
pub fn classify_list_line(line: &str) -> ListLine {
    let trimmed = line.trim();
    if trimmed == "]" {
        return ListLine::Close;
    }

    let item = trimmed.strip_suffix(',').map_or(trimmed, str::trim);
    if item.is_empty() {
        ListLine::Skip
    } else {
        ListLine::Item(item.to_string())
    }
}

/// Whether a trimmed line opens the top-level `overrides { }` wrapper.
pub fn is_wrapper_open(trimmed: &str) -> bool {
    trimmed
        .strip_prefix("overrides")
        .is_some_and(|rest| rest.trim_start().starts_with('{'))
}

/// Split `key = value`, stripping one leading `#` as the commented marker.
fn split_key_value(trimmed: &str) -> Option<(&str, &str, bool)> {
    let eq = trimmed.find('=')?;
    if eq == 0 {
        return None;
    }

    if let Some(rest) = trimmed.strip_prefix('#') {
        let rest = rest.trim();
        let eq = rest.find('=')?;
        if eq == 0 {
            return None;
        }
        return Some((rest[..eq].trim(), rest[eq + 1..].trim(), true));
    }

    Some((trimmed[..eq].trim(), trimmed[eq + 1..].trim(), false))
}

fn classify_value<'a>(key: &'a str, value: &'a str, commented: bool) -> LineKind<'a> {
    if value == "[" {
        return LineKind::ListOpen { key };
    }

    if let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        return LineKind::InlineList {
            key,
            items: split_inline_list(inner),
        };
    }

    LineKind::KeyValue {
        key,
        value,
        commented,
    }
}

fn split_inline_list(inner: &str) -> Vec<String> {
    inner
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
