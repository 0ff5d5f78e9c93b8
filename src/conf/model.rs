//! Document model for recipe `.conf` files.

use serde::{Deserialize, Serialize};

/// File name of the configuration file wrapped in a top-level `overrides { }` block.
pub const OVERRIDES_FILE: &str = "overrides.conf";

/// File name of the plain key/value deployment configuration.
pub const DEPLOYMENT_FILE: &str = "deployment.conf";

/// Which serialization rules a file follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// Plain `key = value` file; lists are framed by blank lines.
    #[default]
    Plain,
    /// Every entry lives inside a single `overrides { ... }` wrapper.
    Overrides,
}

/// The typed value of a configuration entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValue {
    /// Single-line value; may contain `=`.
    Scalar(String),
    /// Ordered list elements. An element starting with `#` is commented out.
    List(Vec<String>),
    /// Verbatim text of a brace-delimited block, starting at its opening line.
    Object(String),
}

/// One parsed configuration item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireEntry", into = "WireEntry")]
pub struct ConfigEntry {
    pub key: String,
    pub value: EntryValue,
    /// Present-but-disabled. Meaningful for scalars and objects only.
    pub commented: bool,
}

impl ConfigEntry {
    pub fn scalar(key: impl Into<String>, value: impl Into<String>, commented: bool) -> Self {
        Self {
            key: key.into(),
            value: EntryValue::Scalar(value.into()),
            commented,
        }
    }

    pub fn list(key: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            key: key.into(),
            value: EntryValue::List(items),
            commented: false,
        }
    }

    pub fn object(key: impl Into<String>, text: impl Into<String>, commented: bool) -> Self {
        Self {
            key: key.into(),
            value: EntryValue::Object(text.into()),
            commented,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self.value, EntryValue::Object(_))
    }

    /// List elements, if this entry is a list.
    pub fn items(&self) -> Option<&[String]> {
        match &self.value {
            EntryValue::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Parsed contents of one configuration file.
///
/// Created fresh on every read, edited in memory, and discarded once written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigDocument {
    pub kind: FileKind,
    pub entries: Vec<ConfigEntry>,
}

impl ConfigDocument {
    pub fn new(kind: FileKind, entries: Vec<ConfigEntry>) -> Self {
        Self { kind, entries }
    }

    /// Parse file text into a document of the given kind.
    pub fn parse(kind: FileKind, text: &str) -> Self {
        Self::new(kind, super::parser::parse(text))
    }

    /// Render the document back to file text.
    pub fn render(&self) -> String {
        super::serializer::serialize(self.kind, &self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// JSON shape exchanged with the browser UI.
///
/// `{"key": "...", "value": "..." | [...], "commented": bool, "isObject": bool}`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireEntry {
    key: String,
    value: WireValue,
    #[serde(default)]
    commented: bool,
    #[serde(default, rename = "isObject", skip_serializing_if = "std::ops::Not::not")]
    is_object: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum WireValue {
    Text(String),
    List(Vec<String>),
}

impl From<WireEntry> for ConfigEntry {
    fn from(wire: WireEntry) -> Self {
        let value = match wire.value {
            WireValue::List(items) => EntryValue::List(items),
            WireValue::Text(text) if wire.is_object => EntryValue::Object(text),
            WireValue::Text(text) => EntryValue::Scalar(text),
        };
        let commented = wire.commented && !matches!(value, EntryValue::List(_));
        Self {
            key: wire.key,
            value,
            commented,
        }
    }
}

impl From<ConfigEntry> for WireEntry {
    fn from(entry: ConfigEntry) -> Self {
        let is_object = entry.is_object();
        let value = match entry.value {
            EntryValue::Scalar(text) | EntryValue::Object(text) => WireValue::Text(text),
            EntryValue::List(items) => WireValue::List(items),
        };
        Self {
            key: entry.key,
            value,
            commented: entry.commented,
            is_object,
        }
    }
}
