use crate::Result as CliErrorResult;

use sk_auth::{AuthFlow, EmailCredentials, MockAuthenticator, Route, RouteGuard, SignUpRequest};
use sk_store::{AppStores, FileStorage, PersistenceAdapter};

use std::path::Path;
use std::sync::Arc;

use log::{info, warn};
use serde_json::{Value, json};

/// One process worth of client state: both stores plus the sign-in flow,
/// all bound to the same storage.
pub struct App {
    stores: AppStores,
    auth: AuthFlow<MockAuthenticator>,
}

impl App {
    /// Opens file-backed storage under `storage_dir` and hydrates both stores.
    pub async fn open(
        storage_dir: &Path,
        authenticator: MockAuthenticator,
    ) -> CliErrorResult<Self> {
        let storage = FileStorage::open(storage_dir).await?;
        info!("Using storage directory {}", storage.dir().display());
        Ok(Self::with_adapter(Arc::new(storage), authenticator).await)
    }

    pub async fn with_adapter(
        adapter: Arc<dyn PersistenceAdapter>,
        authenticator: MockAuthenticator,
    ) -> Self {
        let stores = AppStores::new(adapter);
        stores.hydrate_all().await;
        let auth = AuthFlow::new(authenticator, Arc::clone(stores.session()));
        Self { stores, auth }
    }

    pub fn stores(&self) -> &AppStores {
        &self.stores
    }

    pub fn session_show(&self) -> CliErrorResult<Value> {
        Ok(json!({ "session": self.stores.session().get() }))
    }

    pub async fn login(&self, email: &str, password: &str) -> CliErrorResult<Value> {
        let session = self
            .auth
            .sign_in(&EmailCredentials::new(email, password))
            .await?;
        Ok(json!({
            "session": session,
            "navigate": RouteGuard::after_sign_in().path(),
        }))
    }

    pub async fn register(&self, request: &SignUpRequest) -> CliErrorResult<Value> {
        let session = self.auth.sign_up(request).await?;
        Ok(json!({
            "session": session,
            "navigate": RouteGuard::after_sign_in().path(),
        }))
    }

    pub async fn logout(&self) -> CliErrorResult<Value> {
        self.auth.sign_out().await?;
        Ok(json!({
            "session": self.stores.session().get(),
            "navigate": RouteGuard::after_sign_out().path(),
        }))
    }

    /// Requests a reset link; the screen then offers the way back to login.
    pub async fn reset_password(&self, email: &str) -> CliErrorResult<Value> {
        self.auth.request_password_reset(email).await?;
        Ok(json!({
            "submitted": true,
            "email": email,
            "navigate": Route::Login.path(),
        }))
    }

    pub fn theme_show(&self, device_is_dark: bool) -> Value {
        let preferences = self.stores.preferences();
        json!({
            "theme": preferences.get_preference(),
            "color_scheme": preferences.color_scheme(device_is_dark),
        })
    }

    pub fn theme_set(&self, value: &str, device_is_dark: bool) -> CliErrorResult<Value> {
        self.stores.preferences().set_preference_str(value)?;
        Ok(self.theme_show(device_is_dark))
    }

    /// Resolves what the router would do when `route` is requested with the
    /// current session.
    pub fn route(&self, route: &str) -> CliErrorResult<Value> {
        let route: Route = route.parse()?;
        let navigation = RouteGuard::check(route, &self.stores.session().get());
        Ok(json!({
            "requested": route.path(),
            "navigation": navigation,
            "path": navigation.target().path(),
        }))
    }

    /// Waits for every queued storage write. Failed writes are logged, not
    /// returned: the in-memory state the command reported is still correct.
    pub async fn finish(&self) {
        self.stores.flush_all().await;

        let failed = self.stores.failed_writes();
        if failed > 0 {
            warn!("{failed} storage write(s) failed; state may not survive restart");
        }
    }
}
