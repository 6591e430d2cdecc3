use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

#[derive(Debug)]
pub struct HelpPage;

impl Default for HelpPage {
    fn default() -> Self {
        Self::new()
    }
}

fn key_line(key: &'static str, pad: usize, text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(key, Style::new().bold().cyan()),
        Span::raw(format!("{:pad$}{}", "", text, pad = pad)),
    ])
}

fn view_line(view: &'static str, pad: usize, text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(view, Style::new().bold().magenta()),
        Span::raw(format!("{:pad$}{}", "", text, pad = pad)),
    ])
}

impl HelpPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9),
                Constraint::Length(7),
                Constraint::Min(0),
            ])
            .split(area);

        let nav_help = vec![
            key_line("↑↓ / k j", 5, "Navigate items"),
            key_line("←→ / h l", 5, "Change tab or option"),
            key_line("Tab / S-Tab", 2, "Next / previous view (or field in forms)"),
            key_line("1-4", 10, "Jump to Dashboard, Automations, Analytics, Settings"),
            key_line("Enter", 8, "Select / confirm"),
            key_line("Esc", 10, "Cancel, then back to menu"),
            key_line("q / Ctrl-C", 3, "Quit"),
        ];
        frame.render_widget(
            Paragraph::new(nav_help).block(Block::bordered().title("Navigation")),
            sections[0],
        );

        let account_help = vec![
            key_line("L", 12, "Sign out"),
            key_line("b", 12, "Notification panel (↑↓ select, x clear)"),
            key_line("?", 12, "Toggle this help"),
        ];
        frame.render_widget(
            Paragraph::new(account_help).block(Block::bordered().title("Account")),
            sections[1],
        );

        let view_help = vec![
            view_line("Dashboard", 3, "p: switch week / year chart"),
            view_line("Automations", 1, "Space: pause/resume  n: new  d: delete"),
            view_line("", 12, "f: status filter  / or Ctrl-F: search by name"),
            view_line("Analytics", 3, "r: date range  p: platform  m: followers / engagement"),
            view_line("Settings", 4, "Enter: edit field or apply  s: save / submit"),
            view_line("", 12, "Connections: c connect, Space disconnect/reconnect, x remove"),
        ];
        frame.render_widget(
            Paragraph::new(view_help).block(Block::bordered().title("Views")),
            sections[2],
        );
    }
}
