//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands, one per dashboard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub(crate) enum Commands {
    /// Show headline metrics and every table (default)
    Summary,
    /// Show the revenue tables
    Revenue,
    /// Show the sales volume tables
    Volume,
    /// Show ranked seller tables
    Sellers,
}

impl Commands {
    pub(crate) fn or_default(command: Option<Commands>) -> Commands {
        command.unwrap_or(Commands::Summary)
    }
}
