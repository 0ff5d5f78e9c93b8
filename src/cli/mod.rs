//! CLI argument parsing for hummingbird.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Hummingbird: operator console for a deployment recipe directory.
///
/// Reads, edits and writes the recipe's `.conf` files:
/// - `deployment.conf` holds plain `key = value` settings and lists
/// - `overrides.conf` wraps its entries in one `overrides { ... }` block
/// - `serve` exposes the same operations to the browser UI over HTTP
#[derive(Parser, Debug)]
#[command(name = "hummingbird")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Recipe directory holding the configuration files (default: ~/.recipe).
    #[arg(long, global = true, env = "HUMMINGBIRD_RECIPE_DIR")]
    pub recipe_dir: Option<PathBuf>,

    /// Settings file (default: <config dir>/hummingbird/settings.yaml).
    #[arg(long, global = true, env = "HUMMINGBIRD_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for hummingbird.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the entries of every configured file, or of one file.
    ///
    /// Missing files are reported but do not fail the command.
    Show(ShowArgs),

    /// Replace a file with entries read as a JSON array.
    ///
    /// Reads from --input, or from stdin when no input file is given.
    Save(SaveArgs),

    /// Append a new `key = value` entry.
    Add(AddArgs),

    /// Change the value of a scalar or object entry.
    Set(SetArgs),

    /// Comment or uncomment an entry, or one list item with --item.
    Toggle(ToggleArgs),

    /// Remove an entry, or one list item with --item.
    Remove(RemoveArgs),

    /// Append an item to a list entry.
    #[command(name = "add-item")]
    AddItem(AddItemArgs),

    /// Find entries and list items matching a term.
    Search(SearchArgs),

    /// Show recent saves and server starts from the audit log.
    History(HistoryArgs),

    /// Run the HTTP API used by the browser UI.
    Serve(ServeArgs),
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// File to show (e.g., overrides.conf). Shows all configured files if omitted.
    pub file: Option<String>,

    /// Print the JSON envelope served by the HTTP API.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `save` command.
#[derive(Parser, Debug)]
pub struct SaveArgs {
    /// File to write (e.g., deployment.conf).
    pub file: String,

    /// JSON file holding the entries. Reads stdin if omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// Arguments for the `add` command.
#[derive(Parser, Debug)]
pub struct AddArgs {
    pub file: String,

    pub key: String,

    pub value: String,
}

/// Arguments for the `set` command.
#[derive(Parser, Debug)]
pub struct SetArgs {
    pub file: String,

    /// Entry index as printed by `show`.
    pub index: usize,

    pub value: String,
}

/// Arguments for the `toggle` command.
#[derive(Parser, Debug)]
pub struct ToggleArgs {
    pub file: String,

    /// Entry index as printed by `show`.
    pub index: usize,

    /// Toggle this list item instead of the whole entry.
    #[arg(long)]
    pub item: Option<usize>,
}

/// Arguments for the `remove` command.
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    pub file: String,

    /// Entry index as printed by `show`.
    pub index: usize,

    /// Remove this list item instead of the whole entry.
    #[arg(long)]
    pub item: Option<usize>,
}

/// Arguments for the `add-item` command.
#[derive(Parser, Debug)]
pub struct AddItemArgs {
    pub file: String,

    /// Index of the list entry.
    pub index: usize,

    pub item: String,
}

/// Arguments for the `search` command.
#[derive(Parser, Debug)]
pub struct SearchArgs {
    pub file: String,

    pub term: String,
}

/// Arguments for the `history` command.
#[derive(Parser, Debug)]
pub struct HistoryArgs {
    /// Number of most recent events to show.
    #[arg(short = 'n', long, default_value_t = 20)]
    pub limit: usize,
}

/// Arguments for the `serve` command.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind (overrides settings).
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides settings).
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
