//! Seam to the external authentication provider plus the client-side
//! navigation guard that consults the cached session.

mod auth_flow;
mod authenticator;
mod email_credentials;
mod error;
mod mock_authenticator;
mod navigation;
mod route;
mod route_guard;
mod sign_up_request;

#[cfg(test)]
mod tests;

pub use auth_flow::AuthFlow;
pub use authenticator::Authenticator;
pub use email_credentials::EmailCredentials;
pub use error::{AuthError, Result};
pub use mock_authenticator::MockAuthenticator;
pub use navigation::Navigation;
pub use route::Route;
pub use route_guard::RouteGuard;
pub use sign_up_request::SignUpRequest;

/// Id the placeholder provider assigns to every account
const MOCK_USER_ID: &str = "1";
/// Display name the placeholder provider uses for sign-in
const MOCK_USER_NAME: &str = "Test User";
