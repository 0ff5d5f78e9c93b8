//! Implementation of the `hummingbird history` command.

use crate::cli::HistoryArgs;
use crate::context::ConsoleContext;
use crate::error::Result;
use crate::events::{Event, read_events};

pub fn cmd_history(ctx: &ConsoleContext, args: HistoryArgs) -> Result<()> {
    let events = read_events(ctx)?;
    if events.is_empty() {
        println!("No recorded events in {}", ctx.events_dir.display());
        return Ok(());
    }

    let start = events.len().saturating_sub(args.limit);
    for event in &events[start..] {
        println!("{}", format_event(event));
    }
    Ok(())
}

pub(super) fn format_event(event: &Event) -> String {
    format!(
        "{}  {:<6} {}  {}",
        event.ts.format("%Y-%m-%d %H:%M:%S UTC"),
        event.action,
        event.actor,
        event.file.as_deref().unwrap_or("-")
    )
}
