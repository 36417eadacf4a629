use sk_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors from sign-in, sign-up and sign-out attempts.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Passwords don't match {location}")]
    PasswordMismatch { location: ErrorLocation },

    #[error("Missing required field: {field} {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Authentication rejected: {message} {location}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unknown route: {value} {location}")]
    UnknownRoute {
        value: String,
        location: ErrorLocation,
    },

    #[error("Session update failed: {source}")]
    Session {
        #[from]
        source: CoreError,
    },
}

impl AuthError {
    /// Message suitable for an alert shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::PasswordMismatch { .. } => "Passwords don't match".to_string(),
            Self::MissingField { field, .. } => format!("Please enter your {field}"),
            Self::Rejected { message, .. } => message.clone(),
            Self::UnknownRoute { .. } | Self::Session { .. } => {
                "An unexpected error occurred".to_string()
            }
        }
    }

    /// Creates PasswordMismatch error at caller location.
    #[track_caller]
    pub fn password_mismatch() -> Self {
        Self::PasswordMismatch {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates MissingField error at caller location.
    #[track_caller]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField {
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Rejected error at caller location.
    #[track_caller]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates UnknownRoute error at caller location.
    #[track_caller]
    pub fn unknown_route(value: impl Into<String>) -> Self {
        Self::UnknownRoute {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
