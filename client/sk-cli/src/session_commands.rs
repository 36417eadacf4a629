use clap::Subcommand;

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Show the persisted session
    Show,

    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Create an account and sign in
    Register {
        /// Display name
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Must match --password
        #[arg(long)]
        confirm_password: String,
    },

    /// Request a password reset link
    ResetPassword {
        #[arg(long)]
        email: String,
    },

    /// Sign out and forget the persisted session
    Logout,
}
