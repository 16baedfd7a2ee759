//! Route table for the client.

use crate::guard::{Access, SessionGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Chat,
    About,
    Status,
    Contact,
}

/// What to do with a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Login,
        Route::Chat,
        Route::About,
        Route::Status,
        Route::Contact,
    ];

    /// Links shown in the navigation bar, in display order.
    pub const NAVBAR: [Route; 5] = [
        Route::Home,
        Route::Chat,
        Route::About,
        Route::Status,
        Route::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Chat => "/chat",
            Route::About => "/about",
            Route::Status => "/status",
            Route::Contact => "/contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Login => "Login",
            Route::Chat => "Chat",
            Route::About => "About",
            Route::Status => "Status",
            Route::Contact => "Contact",
        }
    }

    /// Routes that may only render behind a valid session.
    pub fn is_guarded(self) -> bool {
        matches!(self, Route::Chat)
    }

    /// Matches a path exactly, ignoring one trailing `/`.
    pub fn from_path(path: &str) -> Option<Route> {
        let normalized = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(stripped) => stripped,
        };
        Route::ALL.into_iter().find(|r| r.path() == normalized)
    }
}

/// Resolves a navigation. Unknown paths go to login; guarded routes run
/// [`SessionGuard::enforce`], which clears the store on deny.
pub fn resolve(path: &str, guard: &SessionGuard) -> Navigation {
    let Some(route) = Route::from_path(path) else {
        tracing::debug!(path, "Unknown route, redirecting to login");
        return Navigation::Redirect(Route::Login);
    };

    if route.is_guarded() && guard.enforce() == Access::Deny {
        return Navigation::Redirect(Route::Login);
    }
    Navigation::Render(route)
}
