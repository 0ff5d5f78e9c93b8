//! Implementation of the `hummingbird serve` command.

use crate::cli::ServeArgs;
use crate::context::ConsoleContext;
use crate::error::{ConsoleError, Result};
use crate::server::{self, AppState};
use crate::settings::Settings;

/// Run the HTTP API on a multi-threaded runtime until Ctrl+C.
pub fn cmd_serve(ctx: ConsoleContext, settings: Settings, args: ServeArgs) -> Result<()> {
    let host = args.host.unwrap_or_else(|| settings.host.clone());
    let port = args.port.unwrap_or(settings.port);

    if !ctx.recipe_dir.is_dir() {
        tracing::warn!(
            recipe_dir = %ctx.recipe_dir.display(),
            "recipe directory does not exist; listing requests will return 404"
        );
    }

    let state = AppState::new(ctx, settings);

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| ConsoleError::ServerError(format!("failed to create runtime: {}", e)))?
        .block_on(server::serve(state, &host, port))
}
