//! Settings page state.
//!
//! Five tabs share one struct. Text fields are edited in place while
//! `editing` is set; every other key works on the focused row.

use crate::data::{
    Billing, BillingCycle, ConnectedAccount, NotificationPrefs, Plan, Platform, Profile, TIMEZONES,
};
use crate::notify::Notify;

pub const PROFILE_SAVED: &str = "Profile updated successfully!";
pub const PASSWORD_MISMATCH: &str = "New passwords do not match!";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters!";
pub const PASSWORD_CHANGED: &str = "Password changed successfully!";
pub const PREFS_SAVED: &str = "Notification settings saved!";
const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    Profile,
    Security,
    Billing,
    Notifications,
    Connections,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 5] = [
        SettingsTab::Profile,
        SettingsTab::Security,
        SettingsTab::Billing,
        SettingsTab::Notifications,
        SettingsTab::Connections,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingsTab::Profile => "Profile",
            SettingsTab::Security => "Security",
            SettingsTab::Billing => "Billing",
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Connections => "Connections",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub const PROFILE_FIELDS: [&str; 5] = ["Full name", "Email", "Phone", "Timezone", "Bio"];
pub const PASSWORD_FIELDS: [&str; 3] = ["Current password", "New password", "Confirm password"];
pub const PREF_ROWS: [&str; 6] = [
    "Email: automation results",
    "Email: weekly reports",
    "Email: tips & tricks",
    "Push: automation results",
    "Push: weekly reports",
    "Push: tips & tricks",
];
const TIMEZONE_ROW: usize = 3;

#[derive(Debug, Clone)]
pub struct SettingsState {
    pub tab: SettingsTab,
    /// Focused row within the current tab.
    pub row: usize,
    pub editing: bool,
    pub profile: Profile,
    pub passwords: [String; 3],
    pub billing: Billing,
    pub prefs: NotificationPrefs,
    pub accounts: Vec<ConnectedAccount>,
    /// Platform chooser index while the connect dialog is open.
    pub connect: Option<usize>,
}

impl SettingsState {
    pub fn new(
        profile: Profile,
        billing: Billing,
        prefs: NotificationPrefs,
        accounts: Vec<ConnectedAccount>,
    ) -> Self {
        Self {
            tab: SettingsTab::Profile,
            row: 0,
            editing: false,
            profile,
            passwords: Default::default(),
            billing,
            prefs,
            accounts,
            connect: None,
        }
    }

    fn row_count(&self) -> usize {
        match self.tab {
            SettingsTab::Profile => PROFILE_FIELDS.len(),
            SettingsTab::Security => PASSWORD_FIELDS.len(),
            SettingsTab::Billing => 2,
            SettingsTab::Notifications => PREF_ROWS.len(),
            SettingsTab::Connections => self.accounts.len(),
        }
    }

    pub fn next_tab(&mut self) {
        self.switch_tab(self.tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.switch_tab(self.tab.prev());
    }

    fn switch_tab(&mut self, tab: SettingsTab) {
        self.tab = tab;
        self.row = 0;
        self.editing = false;
        self.connect = None;
    }

    pub fn navigate_up(&mut self) -> bool {
        if self.editing || self.row == 0 {
            return false;
        }
        self.row -= 1;
        true
    }

    pub fn navigate_down(&mut self) -> bool {
        if self.editing || self.row + 1 >= self.row_count() {
            return false;
        }
        self.row += 1;
        true
    }

    /// Whether the focused row is a free-text field.
    pub fn row_is_text(&self) -> bool {
        match self.tab {
            SettingsTab::Profile => self.row != TIMEZONE_ROW,
            SettingsTab::Security => true,
            _ => false,
        }
    }

    /// Starts or stops editing the focused text field.
    pub fn toggle_editing(&mut self) -> bool {
        if self.row_is_text() {
            self.editing = !self.editing;
        }
        self.editing
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        if !self.editing {
            return None;
        }
        match (self.tab, self.row) {
            (SettingsTab::Profile, 0) => Some(&mut self.profile.name),
            (SettingsTab::Profile, 1) => Some(&mut self.profile.email),
            (SettingsTab::Profile, 2) => Some(&mut self.profile.phone),
            (SettingsTab::Profile, 4) => Some(&mut self.profile.bio),
            (SettingsTab::Security, row) => self.passwords.get_mut(row),
            _ => None,
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(text) = self.focused_text_mut() {
            text.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.pop();
        }
    }

    pub fn timezone_label(&self) -> &'static str {
        TIMEZONES
            .iter()
            .find(|(id, _)| *id == self.profile.timezone)
            .map_or("Unknown", |(_, label)| label)
    }

    pub fn cycle_timezone(&mut self, forward: bool) {
        let len = TIMEZONES.len();
        let current = TIMEZONES
            .iter()
            .position(|(id, _)| *id == self.profile.timezone)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.profile.timezone = TIMEZONES[next].0.to_string();
    }

    pub fn save_profile(&mut self, notifier: &mut impl Notify) {
        self.editing = false;
        tracing::info!(event = "ui.settings.profile_saved", timezone = %self.profile.timezone);
        notifier.success(PROFILE_SAVED);
    }

    /// Validates and applies the password change.
    ///
    /// A mismatch is reported before the length check. Fields are cleared
    /// only on success.
    pub fn change_password(&mut self, notifier: &mut impl Notify) -> bool {
        self.editing = false;
        let [_, new, confirm] = &self.passwords;
        if new != confirm {
            notifier.error(PASSWORD_MISMATCH);
            return false;
        }
        if new.chars().count() < MIN_PASSWORD_LEN {
            notifier.error(PASSWORD_TOO_SHORT);
            return false;
        }
        tracing::info!(event = "ui.settings.password_changed");
        self.passwords = Default::default();
        notifier.success(PASSWORD_CHANGED);
        true
    }

    pub fn cycle_plan(&mut self, forward: bool) -> Plan {
        let len = Plan::ALL.len();
        let current = Plan::ALL
            .iter()
            .position(|p| *p == self.billing.plan)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.billing.plan = Plan::ALL[next];
        self.billing.plan
    }

    pub fn toggle_billing_cycle(&mut self) -> BillingCycle {
        self.billing.cycle = match self.billing.cycle {
            BillingCycle::Monthly => BillingCycle::Annual,
            BillingCycle::Annual => BillingCycle::Monthly,
        };
        self.billing.cycle
    }

    /// Applies the focused billing row's change in the given direction.
    pub fn adjust_billing(&mut self, forward: bool) {
        match self.row {
            0 => {
                self.cycle_plan(forward);
            }
            _ => {
                self.toggle_billing_cycle();
            }
        }
    }

    pub fn pref_value(&self, row: usize) -> bool {
        let prefs = &self.prefs;
        match row {
            0 => prefs.email.automation_results,
            1 => prefs.email.weekly_reports,
            2 => prefs.email.tips,
            3 => prefs.push.automation_results,
            4 => prefs.push.weekly_reports,
            _ => prefs.push.tips,
        }
    }

    pub fn toggle_pref(&mut self) -> bool {
        let prefs = &mut self.prefs;
        let flag = match self.row {
            0 => &mut prefs.email.automation_results,
            1 => &mut prefs.email.weekly_reports,
            2 => &mut prefs.email.tips,
            3 => &mut prefs.push.automation_results,
            4 => &mut prefs.push.weekly_reports,
            _ => &mut prefs.push.tips,
        };
        *flag = !*flag;
        *flag
    }

    pub fn save_prefs(&self, notifier: &mut impl Notify) {
        notifier.success(PREFS_SAVED);
    }

    pub fn selected_account(&self) -> Option<&ConnectedAccount> {
        match self.tab {
            SettingsTab::Connections => self.accounts.get(self.row),
            _ => None,
        }
    }

    pub fn open_connect(&mut self) {
        self.connect = Some(0);
    }

    pub fn close_connect(&mut self) {
        self.connect = None;
    }

    pub fn connect_choice(&self) -> Option<Platform> {
        self.connect
            .map(|i| Platform::CONNECT_CHOICES[i % Platform::CONNECT_CHOICES.len()])
    }

    pub fn cycle_connect_choice(&mut self, forward: bool) {
        let len = Platform::CONNECT_CHOICES.len();
        if let Some(i) = self.connect.as_mut() {
            *i = if forward {
                (*i + 1) % len
            } else {
                (*i + len - 1) % len
            };
        }
    }

    /// Connects the platform chosen in the dialog.
    pub fn confirm_connect(&mut self, notifier: &mut impl Notify) -> Option<&ConnectedAccount> {
        let platform = self.connect_choice()?;
        self.connect = None;
        let id = self.accounts.iter().map(|a| a.id).max().map_or(1, |m| m + 1);
        self.accounts.push(ConnectedAccount {
            id,
            platform,
            username: format!("johndoe_{}", platform.slug()),
            connected: true,
        });
        tracing::info!(event = "ui.settings.account_connected", platform = platform.slug());
        notifier.success(&format!("Connected to {} successfully!", platform.slug()));
        self.accounts.last()
    }

    /// Disconnects a connected account or reconnects a disconnected one.
    pub fn toggle_connection(&mut self, notifier: &mut impl Notify) -> Option<bool> {
        if self.tab != SettingsTab::Connections {
            return None;
        }
        let account = self.accounts.get_mut(self.row)?;
        account.connected = !account.connected;
        tracing::info!(
            event = "ui.settings.account_toggled",
            id = account.id,
            connected = account.connected
        );
        if account.connected {
            notifier.success("Account reconnected");
        } else {
            notifier.info("Account disconnected");
        }
        Some(account.connected)
    }

    pub fn remove_account(&mut self, notifier: &mut impl Notify) -> Option<ConnectedAccount> {
        if self.tab != SettingsTab::Connections || self.row >= self.accounts.len() {
            return None;
        }
        let removed = self.accounts.remove(self.row);
        self.row = self.row.min(self.accounts.len().saturating_sub(1));
        tracing::info!(event = "ui.settings.account_removed", id = removed.id);
        notifier.info("Account removed");
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Store;
    use crate::notify::{Severity, Toasts};

    fn state() -> SettingsState {
        let store = Store::new();
        SettingsState::new(
            store.profile,
            store.billing,
            store.notification_prefs,
            store.accounts,
        )
    }

    fn security(new: &str, confirm: &str) -> SettingsState {
        let mut state = state();
        state.next_tab();
        state.passwords = ["old".into(), new.into(), confirm.into()];
        state
    }

    #[test]
    fn test_tab_cycle_resets_row() {
        let mut state = state();
        state.navigate_down();
        state.next_tab();
        assert_eq!(state.tab, SettingsTab::Security);
        assert_eq!(state.row, 0);
        state.prev_tab();
        state.prev_tab();
        assert_eq!(state.tab, SettingsTab::Connections);
    }

    #[test]
    fn test_edit_profile_name() {
        let mut state = state();
        assert!(state.toggle_editing());
        state.push_char('!');
        assert_eq!(state.profile.name, "John Doe!");
        state.pop_char();
        state.pop_char();
        assert_eq!(state.profile.name, "John Do");
        assert!(!state.navigate_down());
    }

    #[test]
    fn test_timezone_row_is_not_text() {
        let mut state = state();
        for _ in 0..3 {
            state.navigate_down();
        }
        assert!(!state.toggle_editing());
        state.cycle_timezone(true);
        assert_eq!(state.profile.timezone, "America/Chicago");
        state.cycle_timezone(false);
        state.cycle_timezone(false);
        assert_eq!(state.profile.timezone, "Asia/Tokyo");
        assert_eq!(state.timezone_label(), "Tokyo (JST)");
    }

    #[test]
    fn test_save_profile_notifies() {
        let mut state = state();
        let mut toasts = Toasts::default();
        state.save_profile(&mut toasts);
        assert_eq!(toasts.latest().map(|t| t.message.as_str()), Some(PROFILE_SAVED));
    }

    #[test]
    fn test_password_mismatch_checked_first() {
        let mut state = security("short", "other");
        let mut toasts = Toasts::default();
        assert!(!state.change_password(&mut toasts));
        assert_eq!(toasts.latest().map(|t| t.message.as_str()), Some(PASSWORD_MISMATCH));
        assert_eq!(state.passwords[1], "short");
    }

    #[test]
    fn test_password_too_short() {
        let mut state = security("short", "short");
        let mut toasts = Toasts::default();
        assert!(!state.change_password(&mut toasts));
        assert_eq!(toasts.latest().map(|t| t.message.as_str()), Some(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn test_password_change_clears_fields() {
        let mut state = security("longenough", "longenough");
        let mut toasts = Toasts::default();
        assert!(state.change_password(&mut toasts));
        assert!(state.passwords.iter().all(String::is_empty));
        assert_eq!(toasts.count(Severity::Success), 1);
    }

    #[test]
    fn test_billing_plan_and_cycle() {
        let mut state = state();
        assert_eq!(state.cycle_plan(true), Plan::Business);
        assert_eq!(state.cycle_plan(true), Plan::Basic);
        assert_eq!(state.toggle_billing_cycle(), BillingCycle::Annual);
    }

    #[test]
    fn test_toggle_pref() {
        let mut state = state();
        state.tab = SettingsTab::Notifications;
        state.row = 2;
        assert!(!state.pref_value(2));
        assert!(state.toggle_pref());
        assert!(state.prefs.email.tips);
    }

    #[test]
    fn test_connect_adds_account() {
        let mut state = state();
        state.tab = SettingsTab::Connections;
        state.open_connect();
        state.cycle_connect_choice(false);
        let mut toasts = Toasts::default();
        let account = state.confirm_connect(&mut toasts).unwrap();
        assert_eq!(account.platform, Platform::Pinterest);
        assert_eq!(account.username, "johndoe_pinterest");
        assert_eq!(account.id, 4);
        assert!(account.connected);
        assert_eq!(
            toasts.latest().map(|t| t.message.as_str()),
            Some("Connected to pinterest successfully!")
        );
        assert!(state.connect.is_none());
    }

    #[test]
    fn test_disconnect_reconnect_remove() {
        let mut state = state();
        state.tab = SettingsTab::Connections;
        let mut toasts = Toasts::default();

        assert_eq!(state.toggle_connection(&mut toasts), Some(false));
        assert_eq!(toasts.latest().map(|t| t.severity), Some(Severity::Info));
        assert_eq!(state.accounts[0].status_label(), "disconnected");

        assert_eq!(state.toggle_connection(&mut toasts), Some(true));
        assert_eq!(toasts.latest().map(|t| t.severity), Some(Severity::Success));

        state.row = 2;
        let removed = state.remove_account(&mut toasts).unwrap();
        assert_eq!(removed.id, 3);
        assert_eq!(state.accounts.len(), 2);
        assert_eq!(state.row, 1);
        assert_eq!(toasts.latest().map(|t| t.message.as_str()), Some("Account removed"));
    }

    #[test]
    fn test_connection_actions_ignored_on_other_tabs() {
        let mut state = state();
        let mut toasts = Toasts::default();
        assert_eq!(state.toggle_connection(&mut toasts), None);
        assert!(state.remove_account(&mut toasts).is_none());
        assert!(toasts.is_empty());
    }
}
