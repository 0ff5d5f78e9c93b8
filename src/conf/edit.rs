//! In-memory editing operations on a parsed document.
//!
//! Each operation touches exactly one entry (or one list element) and leaves
//! the order of everything else unchanged.

use super::model::{ConfigDocument, ConfigEntry, EntryValue};
use super::serializer::set_block_comment;
use thiserror::Error;

/// Why an edit was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("entry index {index} is out of range ({len} entries)")]
    EntryOutOfRange { index: usize, len: usize },

    #[error("list item {item} is out of range for '{key}' ({len} items)")]
    ItemOutOfRange { key: String, item: usize, len: usize },

    #[error("entry '{0}' is not a list")]
    NotAList(String),

    #[error("entry '{0}' is a list; comment individual items instead")]
    NotCommentable(String),

    #[error("entry '{0}' is a list; edit its items instead")]
    NotEditable(String),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("invalid key '{0}': keys must be one line without '=' and must not start with '#'")]
    InvalidKey(String),

    #[error("unsafe value {0:?}: values must fit on one line and must not look like a list")]
    UnsafeValue(String),
}

/// Check a key against the rules every written entry must follow.
fn validate_key(key: &str) -> Result<(), EditError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(EditError::Empty("key"));
    }
    if key.contains('=') || key.starts_with('#') || key.contains(['\n', '\r']) {
        return Err(EditError::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// A scalar is written as `key = value`; anything that would reparse as a
/// list or spill onto another line is refused.
fn validate_scalar_value(value: &str) -> Result<(), EditError> {
    let trimmed = value.trim();
    let list_like = trimmed == "[" || (trimmed.starts_with('[') && trimmed.ends_with(']'));
    if list_like || value.contains(['\n', '\r']) {
        return Err(EditError::UnsafeValue(value.to_string()));
    }
    Ok(())
}

fn validate_list_item(item: &str) -> Result<(), EditError> {
    if item.trim().is_empty() {
        return Err(EditError::Empty("list item"));
    }
    if item.contains(['\n', '\r']) {
        return Err(EditError::UnsafeValue(item.to_string()));
    }
    Ok(())
}

impl ConfigEntry {
    /// Check that the entry survives a write followed by a reparse.
    ///
    /// Used for entries that arrive whole (wire JSON) rather than through
    /// the edit operations below.
    pub fn validate(&self) -> Result<(), EditError> {
        validate_key(&self.key)?;
        match &self.value {
            EntryValue::Scalar(value) => validate_scalar_value(value),
            EntryValue::List(items) => items.iter().try_for_each(|item| validate_list_item(item)),
            EntryValue::Object(text) if text.trim().is_empty() => {
                Err(EditError::Empty("object text"))
            }
            EntryValue::Object(_) => Ok(()),
        }
    }
}

impl ConfigDocument {
    /// Append an uncommented scalar entry.
    pub fn add_entry(&mut self, key: &str, value: &str) -> Result<&ConfigEntry, EditError> {
        let key = key.trim();
        let value = value.trim();
        validate_key(key)?;
        if value.is_empty() {
            return Err(EditError::Empty("value"));
        }
        validate_scalar_value(value)?;

        self.entries.push(ConfigEntry::scalar(key, value, false));
        Ok(&self.entries[self.entries.len() - 1])
    }

    pub fn remove_entry(&mut self, index: usize) -> Result<ConfigEntry, EditError> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    /// Replace a scalar value or the text of an object block.
    pub fn set_value(&mut self, index: usize, value: &str) -> Result<(), EditError> {
        let entry = self.entry_mut(index)?;
        match &mut entry.value {
            EntryValue::Scalar(current) => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(EditError::Empty("value"));
                }
                validate_scalar_value(value)?;
                *current = value.to_string();
            }
            EntryValue::Object(current) => {
                if value.trim().is_empty() {
                    return Err(EditError::Empty("object text"));
                }
                *current = value.to_string();
            }
            EntryValue::List(_) => return Err(EditError::NotEditable(entry.key.clone())),
        }
        Ok(())
    }

    /// Flip the commented flag of a scalar or object. Returns the new state.
    ///
    /// An object's first line gains or loses its `#` as well, so files that
    /// keep object text verbatim reflect the change.
    pub fn toggle_comment(&mut self, index: usize) -> Result<bool, EditError> {
        let entry = self.entry_mut(index)?;
        let commented = !entry.commented;
        match &mut entry.value {
            EntryValue::List(_) => return Err(EditError::NotCommentable(entry.key.clone())),
            EntryValue::Object(text) => *text = set_block_comment(text, commented),
            EntryValue::Scalar(_) => {}
        }
        entry.commented = commented;
        Ok(commented)
    }

    pub fn add_list_item(&mut self, index: usize, item: &str) -> Result<(), EditError> {
        let item = item.trim();
        validate_list_item(item)?;
        self.list_mut(index)?.1.push(item.to_string());
        Ok(())
    }

    pub fn remove_list_item(&mut self, index: usize, item: usize) -> Result<String, EditError> {
        let (key, items) = self.list_mut(index)?;
        if item >= items.len() {
            return Err(EditError::ItemOutOfRange {
                key: key.to_string(),
                item,
                len: items.len(),
            });
        }
        Ok(items.remove(item))
    }

    /// Comment or uncomment one list element. Returns the element's new text.
    ///
    /// `#name` becomes `name`; `name` becomes `# name`.
    pub fn toggle_list_item(&mut self, index: usize, item: usize) -> Result<String, EditError> {
        let (key, items) = self.list_mut(index)?;
        let len = items.len();
        let element = items.get_mut(item).ok_or_else(|| EditError::ItemOutOfRange {
            key: key.to_string(),
            item,
            len,
        })?;

        *element = match element.strip_prefix('#') {
            Some(rest) if rest.trim().is_empty() => return Err(EditError::Empty("list item")),
            Some(rest) => rest.trim().to_string(),
            None => format!("# {}", element),
        };
        Ok(element.clone())
    }

    fn check_index(&self, index: usize) -> Result<(), EditError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(EditError::EntryOutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }

    fn entry_mut(&mut self, index: usize) -> Result<&mut ConfigEntry, EditError> {
        self.check_index(index)?;
        Ok(&mut self.entries[index])
    }

    fn list_mut(&mut self, index: usize) -> Result<(&str, &mut Vec<String>), EditError> {
        let entry = self.entry_mut(index)?;
        match &mut entry.value {
            EntryValue::List(items) => Ok((entry.key.as_str(), items)),
            _ => Err(EditError::NotAList(entry.key.clone())),
        }
    }
}
