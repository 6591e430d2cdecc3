//! Route paths and the protected-route guard.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Automations,
    Analytics,
    Settings,
}

impl Route {
    /// Screens reachable from the side menu, in menu order.
    pub const MENU: [Route; 4] = [
        Route::Dashboard,
        Route::Automations,
        Route::Analytics,
        Route::Settings,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/",
            Route::Automations => "/automations",
            Route::Analytics => "/analytics",
            Route::Settings => "/settings",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        match normalized {
            "/login" => Some(Route::Login),
            "/" | "" => Some(Route::Dashboard),
            "/automations" => Some(Route::Automations),
            "/analytics" => Some(Route::Analytics),
            "/settings" => Some(Route::Settings),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Login => "Sign in",
            Route::Dashboard => "Dashboard",
            Route::Automations => "Automations",
            Route::Analytics => "Analytics",
            Route::Settings => "Settings",
        }
    }

    pub fn requires_auth(self) -> bool {
        !matches!(self, Route::Login)
    }

    /// Position in [`Route::MENU`]; the login screen has none.
    pub fn menu_index(self) -> Option<usize> {
        Self::MENU.iter().position(|r| *r == self)
    }

    pub fn next(self) -> Self {
        match self.menu_index() {
            Some(i) => Self::MENU[(i + 1) % Self::MENU.len()],
            None => self,
        }
    }

    pub fn prev(self) -> Self {
        match self.menu_index() {
            Some(i) => Self::MENU[(i + Self::MENU.len() - 1) % Self::MENU.len()],
            None => self,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub from: Route,
    pub to: Route,
}

/// Tracks the current screen and enforces the authentication guard.
#[derive(Debug, Clone)]
pub struct Router {
    current: Route,
}

impl Router {
    pub fn new(start: Route) -> Self {
        Self { current: start }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn navigate(&mut self, route: Route) {
        if route != self.current {
            tracing::debug!(event = "ui.route.navigate", from = self.current.path(), to = route.path());
            self.current = route;
        }
    }

    /// Applies the guard for the current session.
    ///
    /// Nothing moves while the session is still loading. Protected screens
    /// require authentication; the login screen is skipped once signed in.
    pub fn resolve(&mut self, loading: bool, authenticated: bool) -> Option<Redirect> {
        if loading {
            return None;
        }
        let to = match (self.current.requires_auth(), authenticated) {
            (true, false) => Route::Login,
            (false, true) => Route::Dashboard,
            _ => return None,
        };
        let redirect = Redirect {
            from: self.current,
            to,
        };
        tracing::info!(
            event = "ui.route.redirect",
            from = redirect.from.path(),
            to = redirect.to.path()
        );
        self.current = to;
        Some(redirect)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Login)
    }
}
