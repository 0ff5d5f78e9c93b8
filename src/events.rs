//! Audit log for hummingbird.
//!
//! Every configuration save (and every server start) appends one JSON object
//! per line to `{recipe_dir}/.hummingbird/events/events.ndjson`.
//!
//! # Event Format
//!
//! - `ts`: RFC3339 timestamp
//! - `action`: `save` or `serve`
//! - `actor`: the operator (`user@HOST`)
//! - `file`: configuration file name for file-specific events
//! - `details`: freeform object with action-specific details

use crate::context::ConsoleContext;
use crate::error::{ConsoleError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// A configuration file was written
    Save,
    /// The HTTP server started listening
    Serve,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventAction::Save => "save",
            EventAction::Serve => "serve",
        };
        f.pad(name)
    }
}

/// An event record for the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub ts: DateTime<Utc>,

    pub action: EventAction,

    /// The actor who performed the action (e.g., `user@HOST`).
    pub actor: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    pub details: Value,
}

impl Event {
    /// Create a new event stamped with the current time and actor.
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            file: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    pub fn with_file(mut self, file_name: impl Into<String>) -> Self {
        self.file = Some(file_name.into());
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            ConsoleError::WriteError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Get the path to the events file.
pub fn events_file_path(ctx: &ConsoleContext) -> PathBuf {
    ctx.events_dir.join("events.ndjson")
}

/// Append an event to the audit log, creating the file if needed.
///
/// # Returns
///
/// * `Ok(())` - Event was appended and synced
/// * `Err(ConsoleError::WriteError)` - Serialization or write failed
pub fn append_event(ctx: &ConsoleContext, event: &Event) -> Result<()> {
    let events_file = events_file_path(ctx);
    let json_line = event.to_ndjson_line()?;

    if !ctx.events_dir.exists() {
        fs::create_dir_all(&ctx.events_dir).map_err(|e| {
            ConsoleError::WriteError(format!(
                "failed to create events directory '{}': {}",
                ctx.events_dir.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&events_file)
        .map_err(|e| {
            ConsoleError::WriteError(format!(
                "failed to open events file '{}': {}",
                events_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            ConsoleError::WriteError(format!(
                "failed to write event to '{}': {}",
                events_file.display(),
                e
            ))
        })?;

    Ok(())
}

/// Read all events back, skipping lines that do not parse.
pub fn read_events(ctx: &ConsoleContext) -> Result<Vec<Event>> {
    let events_file = events_file_path(ctx);
    if !events_file.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&events_file).map_err(|e| {
        ConsoleError::UserError(format!(
            "failed to read events file '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    Ok(content
        .lines()
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect())
}
