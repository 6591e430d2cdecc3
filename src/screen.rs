use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::Block,
    Frame,
};
use throbber_widgets_tui::ThrobberState;

use crate::pages::analytics::AnalyticsPage;
use crate::pages::automations::AutomationsPage;
use crate::pages::dashboard::Dashboard;
use crate::pages::help::HelpPage;
use crate::pages::loading::{spinner, LoadingPage};
use crate::pages::login::LoginPage;
use crate::pages::main_menu::MainMenu;
use crate::pages::notifications::{NotificationPanel, ToastOverlay};
use crate::pages::settings::SettingsPage;
use crate::render_context::RenderContext;
use crate::route::Route;
use crate::ui_utils::centered_rect;

#[derive(Debug, Default)]
pub struct Screen {
    main_menu: MainMenu,
    loading: LoadingPage,
    login: LoginPage,
    dashboard: Dashboard,
    automations: AutomationsPage,
    analytics: AnalyticsPage,
    settings: SettingsPage,
    help: HelpPage,
    notifications: NotificationPanel,
    toasts: ToastOverlay,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu(&self) -> &MainMenu {
        &self.main_menu
    }

    pub fn render(&self, frame: &mut Frame, ctx: &RenderContext, throbber: &mut ThrobberState) {
        let area = frame.area();

        if ctx.session.is_loading() {
            self.loading.render(frame, area, throbber);
            return;
        }

        if ctx.route == Route::Login {
            let block = Block::bordered().title(Line::from("SocialBoost").bold().blue());
            let inner = block.inner(area);
            frame.render_widget(block, area);
            self.login.render(frame, inner, ctx.login, throbber);
            self.toasts.render(frame, inner, ctx.toasts);
            self.render_help(frame, inner, ctx);
            return;
        }

        let title = Line::from("SocialBoost - Social Media Automation")
            .bold()
            .blue()
            .left_aligned();
        let block = Block::bordered().title(title);
        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        // Header, main content and bottom status bar
        let vlayout = Layout::new(
            Direction::Vertical,
            [Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)],
        )
        .split(inner_area);

        self.render_header(frame, vlayout[0], ctx, throbber);

        // Inside main content, split into menu and page area
        let layout = Layout::new(
            Direction::Horizontal,
            [Constraint::Length(22), Constraint::Min(0)],
        )
        .split(vlayout[1]);

        self.main_menu
            .render(frame, layout[0], ctx.menu_selected_index, ctx.focus);
        match ctx.route {
            Route::Login => {}
            Route::Dashboard => self.dashboard.render(frame, layout[1], ctx.store, ctx.dashboard),
            Route::Automations => self.automations.render(frame, layout[1], ctx.automations),
            Route::Analytics => {
                self.analytics
                    .render(frame, layout[1], ctx.analytics, &ctx.store.key_metrics)
            }
            Route::Settings => self.settings.render(frame, layout[1], ctx.settings),
        }

        // Render the status bar on bottom
        let status_line = Line::from(format!(" {}  |  {}", ctx.route.title(), ctx.status_hint()))
            .on_dark_gray()
            .white();
        frame.render_widget(status_line, vlayout[2]);

        if ctx.notifications.open {
            self.notifications.render(frame, vlayout[1], ctx.notifications);
        }
        self.toasts.render(frame, vlayout[1], ctx.toasts);
        self.render_help(frame, vlayout[1], ctx);
    }

    fn render_header(
        &self,
        frame: &mut Frame,
        area: Rect,
        ctx: &RenderContext,
        throbber: &mut ThrobberState,
    ) {
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(24)]).areas(area);

        let email = ctx.user_email().unwrap_or("not signed in");
        let bell = format!("🔔 {}", ctx.notifications.count());
        frame.render_widget(
            Line::from(vec![
                Span::raw(" "),
                Span::raw(email).cyan(),
                Span::raw("   "),
                Span::raw(bell).yellow(),
            ]),
            left,
        );

        if ctx.logout_pending {
            frame.render_stateful_widget(spinner("Signing out..."), right, throbber);
        } else {
            frame.render_widget(Line::from("L: logout  ?: help ").right_aligned().gray(), right);
        }
    }

    fn render_help(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        if ctx.show_help {
            self.help.render(frame, centered_rect(area, 78, 27));
        }
    }
}
