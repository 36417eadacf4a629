use crate::{AuthError, Result as AuthErrorResult};

/// Fields of the registration form
#[derive(Debug, Clone)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpRequest {
    /// Checks the form before anything is sent to the provider. Password
    /// confirmation is checked first, as the registration screen does.
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.password != self.confirm_password {
            return Err(AuthError::password_mismatch());
        }
        if self.name.trim().is_empty() {
            return Err(AuthError::missing_field("name"));
        }
        if self.email.trim().is_empty() {
            return Err(AuthError::missing_field("email"));
        }
        if self.password.is_empty() {
            return Err(AuthError::missing_field("password"));
        }

        Ok(())
    }
}
