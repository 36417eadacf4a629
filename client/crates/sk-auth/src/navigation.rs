use crate::Route;

use serde::Serialize;

/// Outcome of a route guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "route", rename_all = "snake_case")]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
}

impl Navigation {
    /// The screen that ends up on display.
    pub fn target(&self) -> Route {
        match self {
            Self::Render(route) | Self::Redirect(route) => *route,
        }
    }
}
