use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Local;
use ratatui::{DefaultTerminal, Frame};
use throbber_widgets_tui::ThrobberState;

use socialboost::async_task::{AuthOutcome, AuthRequest, TaskManager};
use socialboost::auth::{AuthProvider, LocalProvider, SessionManager};
use socialboost::config::{AppConfig, AppPaths};
use socialboost::data::Store;
use socialboost::key_handler::{ActionContext, ActionProcessor, Command, Focus, KeyHandler};
use socialboost::logging::init_logging;
use socialboost::notify::{Notify, Toasts};
use socialboost::render_context::RenderContext;
use socialboost::route::{Route, Router};
use socialboost::screen::Screen;
use socialboost::state::{
    AnalyticsState, AutomationsState, DashboardState, LoginState, NotificationsState,
    SettingsState, SettingsTab,
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let paths = AppPaths::resolve()?;
    let config = AppConfig::load(&paths)?;
    let log_file = config
        .logging
        .file
        .clone()
        .unwrap_or_else(|| paths.log_file());
    init_logging(&config.logging.level, &log_file)?;

    let terminal = ratatui::init();
    let result = App::new(&config, &paths).run(terminal);
    ratatui::restore();
    result
}

pub struct App {
    running: bool,
    screen: Screen,
    key_handler: KeyHandler,
    tick_rate: Duration,
    session: SessionManager,
    router: Router,
    tasks: TaskManager,
    toasts: Toasts,
    store: Store,
    focus: Focus,
    menu_selected_index: usize,
    show_help: bool,
    logout_pending: bool,
    throbber: ThrobberState,
    login: LoginState,
    notifications: NotificationsState,
    dashboard: DashboardState,
    automations: AutomationsState,
    analytics: AnalyticsState,
    settings: SettingsState,
}

impl App {
    pub fn new(config: &AppConfig, paths: &AppPaths) -> Self {
        let provider: Arc<dyn AuthProvider> = Arc::new(
            LocalProvider::new(config.provider.accounts.clone(), paths.session_file())
                .with_session_ttl_minutes(config.provider.session_ttl_minutes)
                .with_latency(config.provider_latency()),
        );
        let store = Store::new();
        let start = config.start_route();

        Self {
            running: false,
            screen: Screen::new(),
            key_handler: KeyHandler::new(),
            tick_rate: config.tick_rate(),
            session: SessionManager::new(provider).with_event_grace(config.event_grace()),
            router: Router::new(start),
            tasks: TaskManager::new(),
            toasts: Toasts::new(config.toast_ttl()),
            focus: Focus::View,
            menu_selected_index: start.menu_index().unwrap_or(0),
            show_help: false,
            logout_pending: false,
            throbber: ThrobberState::default(),
            login: LoginState::new(),
            notifications: NotificationsState::new(store.notifications.clone()),
            dashboard: DashboardState::new(),
            automations: AutomationsState::new(store.automations.clone()),
            analytics: AnalyticsState::new(Local::now().date_naive()),
            settings: SettingsState::new(
                store.profile.clone(),
                store.billing.clone(),
                store.notification_prefs,
                store.accounts.clone(),
            ),
            store,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        tracing::info!(event = "app.started", route = self.router.current().path());

        self.session.subscribe();
        self.tasks
            .spawn_request(self.session.provider(), AuthRequest::LoadSession);

        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            let action = self.key_handler.poll(self.tick_rate)?;
            let command = ActionProcessor::process(action, &self.action_context());
            self.handle_command(command);
            self.tick(Instant::now());
        }

        self.session.unsubscribe();
        tracing::info!(event = "app.stopped");
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let ctx = RenderContext::new(
            self.router.current(),
            &self.session,
            &self.store,
            &self.toasts,
            &self.login,
            &self.notifications,
            &self.dashboard,
            &self.automations,
            &self.analytics,
            &self.settings,
        )
        .with_menu(self.focus, self.menu_selected_index)
        .with_help(self.show_help)
        .with_logout_pending(self.logout_pending);
        self.screen.render(frame, &ctx, &mut self.throbber);
    }

    fn action_context(&self) -> ActionContext {
        let route = self.router.current();
        let text_input = match route {
            Route::Login => true,
            Route::Automations => {
                self.automations.form.is_some() || self.automations.search_active
            }
            Route::Settings => self.settings.editing,
            Route::Dashboard | Route::Analytics => false,
        };
        let modal_open = self.notifications.open
            || (route == Route::Settings && self.settings.connect.is_some());
        ActionContext {
            route,
            focus: self.focus,
            show_help: self.show_help,
            text_input,
            modal_open,
            authenticated: self.session.is_authenticated(),
            loading: self.session.is_loading(),
        }
    }

    /// Applies background results and provider events, then re-checks the
    /// route guard.
    fn tick(&mut self, now: Instant) {
        while let Some(outcome) = self.tasks.try_recv() {
            self.apply_outcome(outcome);
        }
        self.session.pump_events(&mut self.toasts);
        self.session.check_stalled(now, &mut self.toasts);

        if let Some(redirect) = self
            .router
            .resolve(self.session.is_loading(), self.session.is_authenticated())
        {
            self.on_route_changed(redirect.to);
        }

        self.toasts.prune(now);
        if self.session.is_loading() || self.login.pending || self.logout_pending {
            self.throbber.calc_next();
        }
    }

    fn apply_outcome(&mut self, outcome: AuthOutcome) {
        match outcome {
            AuthOutcome::SessionLoaded(result) => self.session.finish_initialize(result),
            AuthOutcome::LoggedIn(result) => {
                let succeeded = self.session.report_login(result, &mut self.toasts);
                self.login.finish_submit(succeeded);
            }
            AuthOutcome::LoggedOut(result) => {
                self.logout_pending = false;
                self.session.report_logout(result, &mut self.toasts);
            }
        }
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::Quit => self.quit(),
            Command::ToggleHelp => self.show_help = !self.show_help,
            Command::FocusMenu => {
                self.focus = Focus::Menu;
                self.menu_selected_index = self.router.current().menu_index().unwrap_or(0);
            }
            Command::MenuUp => {
                self.menu_selected_index = self.menu_selected_index.saturating_sub(1);
            }
            Command::MenuDown => {
                if self.menu_selected_index + 1 < self.screen.menu().get_items_count() {
                    self.menu_selected_index += 1;
                }
            }
            Command::MenuSelect => {
                if let Some(route) = self.screen.menu().route_at(self.menu_selected_index) {
                    self.navigate(route);
                }
            }
            Command::NavigateTo(route) => self.navigate(route),
            Command::Logout => self.request_logout(),
            Command::ToggleNotifications => {
                self.notifications.toggle();
            }
            other if self.notifications.open => self.handle_notifications(other),
            other => match self.router.current() {
                Route::Login => self.handle_login(other),
                Route::Dashboard => self.handle_dashboard(other),
                Route::Automations => self.handle_automations(other),
                Route::Analytics => self.handle_analytics(other),
                Route::Settings => self.handle_settings(other),
            },
        }
    }

    fn navigate(&mut self, route: Route) {
        self.router.navigate(route);
        self.on_route_changed(route);
    }

    fn on_route_changed(&mut self, route: Route) {
        self.focus = Focus::View;
        self.menu_selected_index = route.menu_index().unwrap_or(0);
        self.notifications.open = false;
    }

    fn request_login(&mut self) {
        if let Some(credentials) = self.login.begin_submit() {
            tracing::info!(event = "auth.login.submitted", email = %credentials.email);
            self.tasks
                .spawn_request(self.session.provider(), AuthRequest::Login(credentials));
        }
    }

    fn request_logout(&mut self) {
        if self.logout_pending {
            return;
        }
        self.logout_pending = true;
        tracing::info!(event = "auth.logout.submitted");
        self.tasks
            .spawn_request(self.session.provider(), AuthRequest::Logout);
    }

    fn handle_notifications(&mut self, command: Command) {
        match command {
            Command::Up => {
                self.notifications.navigate_up();
            }
            Command::Down => {
                self.notifications.navigate_down();
            }
            Command::Shortcut('x') | Command::Submit => {
                self.notifications.clear_selected();
            }
            Command::Cancel => self.notifications.open = false,
            _ => {}
        }
    }

    fn handle_login(&mut self, command: Command) {
        match command {
            Command::Char(c) => self.login.push_char(c),
            Command::Backspace => {
                self.login.pop_char();
            }
            Command::NextField | Command::PrevField | Command::Up | Command::Down => {
                if !self.login.pending {
                    self.login.next_field();
                }
            }
            Command::Submit => self.request_login(),
            _ => {}
        }
    }

    fn handle_dashboard(&mut self, command: Command) {
        match command {
            Command::Up => {
                self.dashboard.navigate_up();
            }
            Command::Down => {
                self.dashboard.navigate_down(self.store.activities.len());
            }
            Command::Shortcut('p') => {
                self.dashboard.toggle_period();
            }
            _ => {}
        }
    }

    fn handle_automations(&mut self, command: Command) {
        let automations = &mut self.automations;
        if let Some(form) = automations.form.as_mut() {
            match command {
                Command::Char(c) => form.push_char(c),
                Command::Backspace => form.pop_char(),
                Command::NextField | Command::Down => form.next_field(),
                Command::PrevField | Command::Up => form.prev_field(),
                Command::Left => form.cycle_choice(false),
                Command::Right => form.cycle_choice(true),
                Command::Submit => match automations.submit_form() {
                    Ok(id) => self.toasts.success(&format!("Automation #{id} created")),
                    Err(err) => self.toasts.error(&err.to_string()),
                },
                Command::Cancel => automations.cancel_form(),
                _ => {}
            }
            return;
        }

        if automations.search_active {
            match command {
                Command::Char(c) => automations.push_search_char(c),
                Command::Backspace => automations.pop_search_char(),
                Command::Submit | Command::Up | Command::Down => {
                    automations.search_active = false;
                }
                Command::Cancel => automations.clear_search(),
                _ => {}
            }
            return;
        }

        match command {
            Command::Up => {
                automations.navigate_up();
            }
            Command::Down => {
                automations.navigate_down();
            }
            Command::Search => automations.search_active = true,
            Command::Shortcut('f') => {
                automations.cycle_filter();
            }
            Command::Shortcut('n') => automations.open_form(),
            Command::Shortcut(' ') | Command::Submit => {
                if let Some(automation) = automations.toggle_selected() {
                    let message = format!(
                        "{} is now {}",
                        automation.name,
                        automation.status.label().to_lowercase()
                    );
                    self.toasts.info(&message);
                }
            }
            Command::Shortcut('d') => {
                if let Some(removed) = automations.delete_selected() {
                    self.toasts.info(&format!("Deleted {}", removed.name));
                }
            }
            _ => {}
        }
    }

    fn handle_analytics(&mut self, command: Command) {
        match command {
            Command::Shortcut('r') | Command::Right => {
                self.analytics.cycle_range();
            }
            Command::Shortcut('p') => {
                self.analytics.cycle_platform();
            }
            Command::Shortcut('m') => {
                self.analytics.toggle_metric();
            }
            _ => {}
        }
    }

    fn handle_settings(&mut self, command: Command) {
        let settings = &mut self.settings;
        let toasts = &mut self.toasts;

        if settings.connect.is_some() {
            match command {
                Command::Up => settings.cycle_connect_choice(false),
                Command::Down => settings.cycle_connect_choice(true),
                Command::Submit => {
                    settings.confirm_connect(toasts);
                }
                Command::Cancel => settings.close_connect(),
                _ => {}
            }
            return;
        }

        if settings.editing {
            match command {
                Command::Char(c) => settings.push_char(c),
                Command::Backspace => settings.pop_char(),
                Command::Submit | Command::Cancel => {
                    settings.toggle_editing();
                }
                _ => {}
            }
            return;
        }

        match command {
            Command::Left => settings.prev_tab(),
            Command::Right => settings.next_tab(),
            Command::Up => {
                settings.navigate_up();
            }
            Command::Down => {
                settings.navigate_down();
            }
            Command::Submit => match settings.tab {
                SettingsTab::Profile | SettingsTab::Security if settings.row_is_text() => {
                    settings.toggle_editing();
                }
                SettingsTab::Profile => settings.cycle_timezone(true),
                SettingsTab::Security => {}
                SettingsTab::Billing => settings.adjust_billing(true),
                SettingsTab::Notifications => {
                    settings.toggle_pref();
                }
                SettingsTab::Connections => {
                    settings.toggle_connection(toasts);
                }
            },
            Command::Shortcut('s') => match settings.tab {
                SettingsTab::Profile => settings.save_profile(toasts),
                SettingsTab::Security => {
                    settings.change_password(toasts);
                }
                SettingsTab::Notifications => settings.save_prefs(toasts),
                SettingsTab::Billing | SettingsTab::Connections => {}
            },
            Command::Shortcut('c') if settings.tab == SettingsTab::Connections => {
                settings.open_connect();
            }
            Command::Shortcut(' ') => {
                settings.toggle_connection(toasts);
            }
            Command::Shortcut('x') => {
                settings.remove_account(toasts);
            }
            _ => {}
        }
    }

    fn quit(&mut self) {
        self.running = false;
    }
}
