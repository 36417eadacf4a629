use crate::{EmailCredentials, Result as AuthErrorResult, SignUpRequest};

use sk_core::{AuthUser, Identity};

use async_trait::async_trait;

/// The external authentication provider.
///
/// Credential checks and session lifecycle live behind this trait; the
/// client only caches what a successful call returns.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn sign_in_email(&self, credentials: &EmailCredentials) -> AuthErrorResult<Identity>;

    async fn sign_up_email(&self, request: &SignUpRequest) -> AuthErrorResult<Identity>;

    async fn sign_out(&self) -> AuthErrorResult<()>;

    /// Sends a reset link to `email`. An empty address is a `MissingField`.
    async fn request_password_reset(&self, email: &str) -> AuthErrorResult<()>;

    /// The provider's view of who is signed in, if anyone.
    async fn current_user(&self) -> AuthErrorResult<Option<AuthUser>>;
}
