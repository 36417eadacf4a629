use clap::Subcommand;

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Show the stored preference and the scheme it resolves to
    Show {
        /// Resolve `system` as if the device were in dark mode
        #[arg(long)]
        device_dark: bool,
    },

    /// Store a new preference
    Set {
        /// One of: light, dark, system
        value: String,

        /// Resolve `system` as if the device were in dark mode
        #[arg(long)]
        device_dark: bool,
    },
}
