//! Reader and writer for recipe `.conf` files.
//!
//! The format is line oriented:
//! - `key = value` scalars, disabled by a leading `#`
//! - `key = [ ... ]` lists, inline or one element per line; elements are
//!   disabled individually with a leading `#`
//! - `key { ... }` object blocks, kept verbatim as one opaque text
//! - `overrides.conf` wraps everything in a single `overrides { ... }` block
//!
//! Parsing is lenient and never fails. Serializing reproduces the supported
//! shapes so that parse, edit, serialize only changes what was edited.

pub mod braces;
pub mod classify;
mod edit;
mod model;
mod parser;
pub mod search;
mod serializer;


// Re-export public API
pub use edit::EditError;
pub use model::{ConfigDocument, ConfigEntry, DEPLOYMENT_FILE, EntryValue, FileKind, OVERRIDES_FILE};
pub use parser::parse;
pub use serializer::serialize;
