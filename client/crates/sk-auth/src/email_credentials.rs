use crate::{AuthError, Result as AuthErrorResult};

/// Email/password pair entered on the login screen
#[derive(Debug, Clone)]
pub struct EmailCredentials {
    pub email: String,
    pub password: String,
}

impl EmailCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.email.trim().is_empty() {
            return Err(AuthError::missing_field("email"));
        }
        if self.password.is_empty() {
            return Err(AuthError::missing_field("password"));
        }

        Ok(())
    }
}
