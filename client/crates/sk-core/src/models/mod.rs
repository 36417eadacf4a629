pub mod auth_user;
pub mod color_scheme;
pub mod identity;
pub mod preference;
pub mod session_state;
