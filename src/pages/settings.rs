use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::data::{BillingCycle, Plan, Platform};
use crate::state::{SettingsState, SettingsTab, PASSWORD_FIELDS, PREF_ROWS, PROFILE_FIELDS};
use crate::ui_utils::{centered_rect, create_list_state, focused_block, input_line};

#[derive(Debug)]
pub struct SettingsPage;

impl Default for SettingsPage {
    fn default() -> Self {
        Self::new()
    }
}

fn toggle(on: bool) -> Span<'static> {
    if on {
        Span::styled("[x]", Style::new().green())
    } else {
        Span::styled("[ ]", Style::new().gray())
    }
}

impl SettingsPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &SettingsState) {
        let [tabs_area, body] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let tabs = Tabs::new(SettingsTab::ALL.iter().map(|t| t.label()))
            .select(state.tab.index())
            .highlight_style(Style::new().yellow().bold())
            .block(Block::bordered().title("Settings"));
        frame.render_widget(tabs, tabs_area);

        match state.tab {
            SettingsTab::Profile => self.render_profile(frame, body, state),
            SettingsTab::Security => self.render_security(frame, body, state),
            SettingsTab::Billing => self.render_billing(frame, body, state),
            SettingsTab::Notifications => self.render_notifications(frame, body, state),
            SettingsTab::Connections => self.render_connections(frame, body, state),
        }
    }

    fn render_profile(&self, frame: &mut Frame, area: Rect, state: &SettingsState) {
        let profile = &state.profile;
        let values = [
            profile.name.clone(),
            profile.email.clone(),
            profile.phone.clone(),
            format!("◀ {} ▶", state.timezone_label()),
            profile.bio.clone(),
        ];
        let mut lines: Vec<Line> = PROFILE_FIELDS
            .iter()
            .zip(values.iter())
            .enumerate()
            .map(|(i, (label, value))| {
                let focused = state.row == i;
                input_line(label, value, focused, focused && state.editing)
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from("Enter: edit field or next timezone  s: save profile").gray());
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(focused_block("Profile", state.editing)),
            area,
        );
    }

    fn render_security(&self, frame: &mut Frame, area: Rect, state: &SettingsState) {
        let mut lines: Vec<Line> = PASSWORD_FIELDS
            .iter()
            .zip(state.passwords.iter())
            .enumerate()
            .map(|(i, (label, value))| {
                let focused = state.row == i;
                let masked = "•".repeat(value.chars().count());
                input_line(label, &masked, focused, focused && state.editing)
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from("Enter: edit field  s: update password").gray());
        frame.render_widget(
            Paragraph::new(lines).block(focused_block("Change password", state.editing)),
            area,
        );
    }

    fn render_billing(&self, frame: &mut Frame, area: Rect, state: &SettingsState) {
        let billing = &state.billing;
        let plans: Vec<Span> = Plan::ALL
            .iter()
            .flat_map(|plan| {
                let text = format!(" {} ${}/mo ", plan.label(), plan.monthly_price());
                let span = if *plan == billing.plan {
                    Span::styled(text, Style::new().reversed())
                } else {
                    Span::raw(text)
                };
                [span, Span::raw(" ")]
            })
            .collect();
        let cycle = match billing.cycle {
            BillingCycle::Monthly => "Monthly".to_string(),
            BillingCycle::Annual => "Annual (Save 20%)".to_string(),
        };
        let marker = |row: usize| if state.row == row { ">> " } else { "   " };
        let lines = vec![
            Line::from([vec![Span::raw(marker(0)), Span::raw("Plan: ")], plans].concat()),
            Line::from(format!("{}Billing cycle: ◀ {} ▶", marker(1), cycle)),
            Line::from(""),
            Line::from(format!(
                "Next billing date: {}",
                billing.next_billing_date.format("%B %-d, %Y")
            )),
            Line::from(format!(
                "Payment method: •••• {}  (expires {})",
                billing.card_last4, billing.card_expiry
            )),
            Line::from(""),
            Line::from("↑↓: row  Enter: change").gray(),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(Block::bordered().title("Subscription")),
            area,
        );
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect, state: &SettingsState) {
        let items: Vec<ListItem> = PREF_ROWS
            .iter()
            .enumerate()
            .map(|(i, label)| {
                ListItem::new(Line::from(vec![
                    toggle(state.pref_value(i)),
                    Span::raw(format!(" {label}")),
                ]))
            })
            .collect();
        let mut list_state = create_list_state(state.row, items.len());
        frame.render_stateful_widget(
            List::new(items)
                .block(Block::bordered().title("Notifications  (Enter: toggle, s: save)"))
                .highlight_symbol(">> ")
                .highlight_style(Style::new().reversed()),
            area,
            &mut list_state,
        );
    }

    fn render_connections(&self, frame: &mut Frame, area: Rect, state: &SettingsState) {
        let items: Vec<ListItem> = state
            .accounts
            .iter()
            .map(|account| {
                let status = if account.connected {
                    Span::styled(account.status_label(), Style::new().green())
                } else {
                    Span::styled(account.status_label(), Style::new().red())
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<10}", account.platform.label()), Style::new().bold()),
                    Span::raw(format!(" {:<20} ", account.username)),
                    status,
                ]))
            })
            .collect();
        let mut list_state = create_list_state(state.row, items.len());
        frame.render_stateful_widget(
            List::new(items)
                .block(Block::bordered().title(
                    "Connected accounts  (c: connect, Space: disconnect/reconnect, x: remove)",
                ))
                .highlight_symbol(">> ")
                .highlight_style(Style::new().reversed()),
            area,
            &mut list_state,
        );

        if let Some(choice) = state.connect {
            let popup = centered_rect(area, 36, Platform::CONNECT_CHOICES.len() as u16 + 4);
            frame.render_widget(Clear, popup);
            let options: Vec<ListItem> = Platform::CONNECT_CHOICES
                .iter()
                .map(|p| ListItem::new(p.label()))
                .collect();
            let mut chooser = create_list_state(choice, options.len());
            frame.render_stateful_widget(
                List::new(options)
                    .block(focused_block("Connect account (Enter / Esc)", true))
                    .highlight_symbol(">> ")
                    .highlight_style(Style::new().reversed()),
                popup,
                &mut chooser,
            );
        }
    }
}
