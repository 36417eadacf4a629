use crate::{AuthError, Authenticator, EmailCredentials, Result as AuthErrorResult, SignUpRequest};

use sk_core::SessionState;
use sk_store::SessionMirror;

use std::sync::Arc;

use log::{info, warn};

/// Runs sign-in, sign-up and sign-out against the provider and mirrors the
/// outcome into the local session cache.
pub struct AuthFlow<A> {
    authenticator: A,
    session: Arc<SessionMirror>,
}

impl<A: Authenticator> AuthFlow<A> {
    pub fn new(authenticator: A, session: Arc<SessionMirror>) -> Self {
        Self {
            authenticator,
            session,
        }
    }

    pub fn authenticator(&self) -> &A {
        &self.authenticator
    }

    pub fn session(&self) -> &Arc<SessionMirror> {
        &self.session
    }

    /// On success the returned identity becomes the cached session. Empty
    /// fields are reported without contacting the provider.
    pub async fn sign_in(&self, credentials: &EmailCredentials) -> AuthErrorResult<SessionState> {
        credentials.validate()?;

        let identity = self
            .authenticator
            .sign_in_email(credentials)
            .await
            .inspect_err(|e| warn!("Sign in failed: {e}"))?;

        self.session.set(identity)?;
        Ok(self.session.get())
    }

    /// Form errors are reported without contacting the provider.
    pub async fn sign_up(&self, request: &SignUpRequest) -> AuthErrorResult<SessionState> {
        request.validate()?;

        let identity = self
            .authenticator
            .sign_up_email(request)
            .await
            .inspect_err(|e| warn!("Sign up failed: {e}"))?;

        self.session.set(identity)?;
        Ok(self.session.get())
    }

    /// Clears the local session even when the provider call fails.
    pub async fn sign_out(&self) -> AuthErrorResult<()> {
        let outcome = self.authenticator.sign_out().await;
        self.session.clear();

        if let Err(e) = &outcome {
            warn!("Provider sign out failed, local session cleared anyway: {e}");
        }
        outcome
    }

    /// Asks the provider to send a reset link. The cached session is left
    /// as it is.
    pub async fn request_password_reset(&self, email: &str) -> AuthErrorResult<()> {
        if email.trim().is_empty() {
            return Err(AuthError::missing_field("email"));
        }

        self.authenticator
            .request_password_reset(email)
            .await
            .inspect_err(|e| warn!("Password reset request failed: {e}"))?;

        info!("Password reset requested");
        Ok(())
    }

    /// Replaces the cached session with the provider's current user.
    pub async fn sync_with_provider(&self) -> AuthErrorResult<SessionState> {
        match self.authenticator.current_user().await? {
            Some(user) => {
                info!("Provider reports signed-in user {}", user.id);
                self.session.set(user.into())?;
            }
            None if self.session.get().is_authenticated() => {
                info!("Provider reports no session, clearing local cache");
                self.session.clear();
            }
            None => {}
        }

        Ok(self.session.get())
    }
}
