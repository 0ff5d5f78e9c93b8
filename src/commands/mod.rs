//! Command implementations for hummingbird.
//!
//! This module provides the dispatcher that resolves settings and the recipe
//! directory once, then routes each CLI command to its implementation.

mod edit;
mod history;
mod save;
mod search;
mod serve;
mod show;

#[cfg(test)]
mod tests;

use crate::cli::{Cli, Command};
use crate::context::ConsoleContext;
use crate::error::Result;
use crate::settings::Settings;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let settings = Settings::locate(cli.settings.as_deref())?;
    let ctx = ConsoleContext::resolve(cli.recipe_dir.as_deref(), &settings)?;
    tracing::debug!(recipe_dir = %ctx.recipe_dir.display(), "resolved recipe directory");

    match cli.command {
        Command::Show(args) => show::cmd_show(&ctx, &settings, args),
        Command::Save(args) => save::cmd_save(&ctx, &settings, args),
        Command::Add(args) => edit::cmd_add(&ctx, &settings, args),
        Command::Set(args) => edit::cmd_set(&ctx, &settings, args),
        Command::Toggle(args) => edit::cmd_toggle(&ctx, &settings, args),
        Command::Remove(args) => edit::cmd_remove(&ctx, &settings, args),
        Command::AddItem(args) => edit::cmd_add_item(&ctx, &settings, args),
        Command::Search(args) => search::cmd_search(&ctx, &settings, args),
        Command::History(args) => history::cmd_history(&ctx, args),
        Command::Serve(args) => serve::cmd_serve(ctx, settings, args),
    }
}
