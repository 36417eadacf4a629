use crate::{ColorScheme, CoreError, Result as CoreErrorResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display-mode preference chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    Light,
    Dark,
    /// Follow the device color scheme
    #[default]
    System,
}

impl Preference {
    pub const ALL: [Preference; 3] = [Self::Light, Self::Dark, Self::System];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Resolve to the concrete scheme to render with.
    pub fn resolve(&self, device_is_dark: bool) -> ColorScheme {
        match self {
            Self::Light => ColorScheme::Light,
            Self::Dark => ColorScheme::Dark,
            Self::System if device_is_dark => ColorScheme::Dark,
            Self::System => ColorScheme::Light,
        }
    }
}

impl FromStr for Preference {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            _ => Err(CoreError::invalid_preference(s)),
        }
    }
}

impl std::fmt::Display for Preference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
