pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::auth_user::AuthUser;
pub use models::color_scheme::ColorScheme;
pub use models::identity::Identity;
pub use models::preference::Preference;
pub use models::session_state::SessionState;
