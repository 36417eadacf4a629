use crate::{Navigation, Route};

use sk_core::SessionState;

use log::debug;

/// Decides whether a screen renders for the cached session.
pub struct RouteGuard;

impl RouteGuard {
    pub fn check(route: Route, session: &SessionState) -> Navigation {
        if route.requires_auth() && !session.is_authenticated() {
            debug!("No session for {route}, redirecting to login");
            return Navigation::Redirect(Route::Login);
        }

        Navigation::Render(route)
    }

    pub fn after_sign_in() -> Route {
        Route::Home
    }

    pub fn after_sign_out() -> Route {
        Route::Login
    }
}
