use crate::{
    AuthError, Authenticator, EmailCredentials, MOCK_USER_ID, MOCK_USER_NAME,
    Result as AuthErrorResult, SignUpRequest,
};

use sk_core::{AuthUser, Identity};

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::info;

/// Placeholder provider used until a real auth backend is wired in.
///
/// Accepts any non-empty credentials and answers with a fixed account id.
#[derive(Debug, Default)]
pub struct MockAuthenticator {
    latency: Duration,
    failure: Option<String>,
    current: Mutex<Option<AuthUser>>,
}

impl MockAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every call by `latency` to mimic a network round trip.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Make every call fail with `AuthError::Rejected(message)`.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    async fn round_trip(&self) -> AuthErrorResult<()> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        match &self.failure {
            Some(message) => Err(AuthError::rejected(message.clone())),
            None => Ok(()),
        }
    }

    fn remember(&self, identity: &Identity) {
        let now = Utc::now();
        *self.current() = Some(AuthUser {
            id: identity.id.clone(),
            name: identity.name.clone(),
            email: identity.email.clone(),
            email_verified: false,
            image: None,
            created_at: now,
            updated_at: now,
        });
    }

    fn current(&self) -> MutexGuard<'_, Option<AuthUser>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn sign_in_email(&self, credentials: &EmailCredentials) -> AuthErrorResult<Identity> {
        credentials.validate()?;
        self.round_trip().await?;

        let identity = Identity::new(MOCK_USER_ID, MOCK_USER_NAME, credentials.email.clone());
        self.remember(&identity);

        info!("Mock sign in for {}", identity.id);
        Ok(identity)
    }

    async fn sign_up_email(&self, request: &SignUpRequest) -> AuthErrorResult<Identity> {
        request.validate()?;
        self.round_trip().await?;

        let identity = Identity::new(MOCK_USER_ID, request.name.clone(), request.email.clone());
        self.remember(&identity);

        info!("Mock sign up for {}", identity.id);
        Ok(identity)
    }

    async fn sign_out(&self) -> AuthErrorResult<()> {
        self.round_trip().await?;
        *self.current() = None;

        info!("Mock sign out");
        Ok(())
    }

    async fn request_password_reset(&self, email: &str) -> AuthErrorResult<()> {
        if email.trim().is_empty() {
            return Err(AuthError::missing_field("email"));
        }
        self.round_trip().await?;

        info!("Mock password reset sent");
        Ok(())
    }

    async fn current_user(&self) -> AuthErrorResult<Option<AuthUser>> {
        self.round_trip().await?;
        Ok(self.current().clone())
    }
}
