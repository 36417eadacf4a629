mod auth_user;
mod identity;
mod preference;
mod session_state;
