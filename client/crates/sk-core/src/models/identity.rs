use crate::{CoreError, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};

/// Locally cached view of the signed-in user.
///
/// Always replaced wholesale; the session mirror never edits fields in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque account id issued by the auth provider
    pub id: String,
    pub name: String,
    /// Not format-checked at this layer
    pub email: String,
}

impl Identity {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Rejects an identity without an account id. No other field is checked.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.id.trim().is_empty() {
            return Err(CoreError::validation("identity id must not be empty"));
        }

        Ok(())
    }
}
