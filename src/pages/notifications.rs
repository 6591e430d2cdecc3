use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::notify::{Severity, Toasts};
use crate::state::NotificationsState;
use crate::ui_utils::create_list_state;

/// Bell drop-down listing header notifications.
#[derive(Debug, Default)]
pub struct NotificationPanel;

impl NotificationPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &NotificationsState) {
        let width = 44.min(area.width);
        let height = (state.count() as u16 * 2 + 3).min(area.height);
        let popup = Rect::new(area.right().saturating_sub(width), area.y, width, height);
        frame.render_widget(Clear, popup);

        let block = Block::bordered()
            .title("Notifications  (x: clear, b: close)")
            .border_style(Style::new().yellow());
        if state.items.is_empty() {
            frame.render_widget(Paragraph::new("No new notifications").block(block), popup);
            return;
        }
        let items: Vec<ListItem> = state
            .items
            .iter()
            .map(|n| {
                ListItem::new(vec![
                    Line::from(n.text.clone()),
                    Line::from(n.time.clone()).gray(),
                ])
            })
            .collect();
        let mut list_state = create_list_state(state.selected_index, items.len());
        frame.render_stateful_widget(
            List::new(items)
                .block(block)
                .highlight_symbol(">> ")
                .highlight_style(Style::new().reversed()),
            popup,
            &mut list_state,
        );
    }
}

/// Stack of live toasts in the bottom-right corner.
#[derive(Debug, Default)]
pub struct ToastOverlay;

impl ToastOverlay {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, toasts: &Toasts) {
        if toasts.is_empty() {
            return;
        }
        let width = toasts
            .iter()
            .map(|t| t.text().chars().count() as u16 + 4)
            .max()
            .unwrap_or(0)
            .min(area.width);
        let height = (toasts.len() as u16 * 3).min(area.height);
        let stack = Rect::new(
            area.right().saturating_sub(width),
            area.bottom().saturating_sub(height),
            width,
            height,
        );
        let rows = Layout::vertical(vec![Constraint::Length(3); toasts.len()]).split(stack);
        for (toast, row) in toasts.iter().zip(rows.iter()) {
            let style = match toast.severity {
                Severity::Success => Style::new().green(),
                Severity::Error => Style::new().red(),
                Severity::Info => Style::new().cyan(),
            };
            frame.render_widget(Clear, *row);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(toast.text(), style)))
                    .block(Block::bordered().border_style(style)),
                *row,
            );
        }
    }
}
