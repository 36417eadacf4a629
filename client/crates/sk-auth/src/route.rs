use crate::{AuthError, Result as AuthErrorResult};

use std::str::FromStr;

use serde::Serialize;

/// Screens of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Home,
    Login,
    Register,
    ForgotPassword,
}

impl Route {
    pub const ALL: [Route; 4] = [
        Self::Home,
        Self::Login,
        Self::Register,
        Self::ForgotPassword,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Login => "login",
            Self::Register => "register",
            Self::ForgotPassword => "forgot-password",
        }
    }

    /// Router path of the screen
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/(auth)/login",
            Self::Register => "/(auth)/register",
            Self::ForgotPassword => "/(auth)/forgot-password",
        }
    }

    /// Only screens outside the auth group need a session.
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Home)
    }
}

impl FromStr for Route {
    type Err = AuthError;

    #[track_caller]
    fn from_str(s: &str) -> AuthErrorResult<Self> {
        Route::ALL
            .into_iter()
            .find(|route| route.as_str() == s || route.path() == s)
            .ok_or_else(|| AuthError::unknown_route(s))
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
