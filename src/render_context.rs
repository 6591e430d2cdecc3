use crate::auth::SessionManager;
use crate::data::Store;
use crate::key_handler::Focus;
use crate::notify::Toasts;
use crate::route::Route;
use crate::state::{
    AnalyticsState, AutomationsState, DashboardState, LoginState, NotificationsState,
    SettingsState,
};

/// Everything a page may read while drawing, borrowed from the app for one
/// frame.
pub struct RenderContext<'a> {
    pub route: Route,
    pub session: &'a SessionManager,
    pub store: &'a Store,
    pub toasts: &'a Toasts,

    // Page state
    pub login: &'a LoginState,
    pub notifications: &'a NotificationsState,
    pub dashboard: &'a DashboardState,
    pub automations: &'a AutomationsState,
    pub analytics: &'a AnalyticsState,
    pub settings: &'a SettingsState,

    // Chrome
    pub focus: Focus,
    pub menu_selected_index: usize,
    pub show_help: bool,
    pub logout_pending: bool,
}

impl<'a> RenderContext<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        route: Route,
        session: &'a SessionManager,
        store: &'a Store,
        toasts: &'a Toasts,
        login: &'a LoginState,
        notifications: &'a NotificationsState,
        dashboard: &'a DashboardState,
        automations: &'a AutomationsState,
        analytics: &'a AnalyticsState,
        settings: &'a SettingsState,
    ) -> Self {
        Self {
            route,
            session,
            store,
            toasts,
            login,
            notifications,
            dashboard,
            automations,
            analytics,
            settings,
            focus: Focus::View,
            menu_selected_index: route.menu_index().unwrap_or(0),
            show_help: false,
            logout_pending: false,
        }
    }

    /// Builder method to set menu focus and selection
    pub fn with_menu(mut self, focus: Focus, selected: usize) -> Self {
        self.focus = focus;
        self.menu_selected_index = selected;
        self
    }

    /// Builder method to show the help overlay
    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    /// Builder method to flag an in-flight logout
    pub fn with_logout_pending(mut self, pending: bool) -> Self {
        self.logout_pending = pending;
        self
    }

    /// Signed-in email, if any.
    pub fn user_email(&self) -> Option<&str> {
        self.session.user().map(|u| u.email.as_str())
    }

    /// Key hints for the status bar on the current route.
    pub fn status_hint(&self) -> &'static str {
        if self.route == Route::Login {
            return "Tab: switch field  Enter: sign in  Esc: quit";
        }
        if self.focus == Focus::Menu {
            return "↑↓: choose  Enter: open  Esc: quit";
        }
        match self.route {
            Route::Login => "",
            Route::Dashboard => "↑↓: activity  p: week/year  b: notifications  L: logout  ?: help",
            Route::Automations => {
                "↑↓: select  Space: pause/resume  n: new  d: delete  f: filter  /: search  ?: help"
            }
            Route::Analytics => "r: range  p: platform  m: metric  Tab: next view  ?: help",
            Route::Settings => "←→: tab  ↑↓: row  Enter: edit/apply  s: save  ?: help",
        }
    }
}
