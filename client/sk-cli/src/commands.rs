use crate::{session_commands::SessionCommands, theme_commands::ThemeCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Session operations
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },

    /// Theme preference operations
    Theme {
        #[command(subcommand)]
        action: ThemeCommands,
    },

    /// Show where the router sends a request for a screen
    Route {
        /// Screen name or path (home, login, register, forgot-password)
        route: String,
    },
}
