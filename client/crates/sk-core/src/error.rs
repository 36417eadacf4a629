use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid preference: {value} (expected light, dark or system) {location}")]
    InvalidPreference {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Creates Validation error at caller location.
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates InvalidPreference error at caller location.
    #[track_caller]
    pub fn invalid_preference(value: impl Into<String>) -> Self {
        Self::InvalidPreference {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
