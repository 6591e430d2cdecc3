use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};
use throbber_widgets_tui::ThrobberState;

use crate::pages::loading::spinner;
use crate::state::{LoginField, LoginState};
use crate::ui_utils::{centered_rect, focused_block, input_line};

#[derive(Debug, Default)]
pub struct LoginPage;

impl LoginPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        login: &LoginState,
        throbber: &mut ThrobberState,
    ) {
        let card = centered_rect(area, 56, 12);
        let block = focused_block("Sign in to SocialBoost", !login.pending);
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let [intro, fields, footer] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(Line::from("Automate your social media growth").gray()).centered(),
            intro,
        );

        let email_focused = login.field == LoginField::Email;
        let lines = vec![
            input_line("Email", &login.email, email_focused, email_focused && !login.pending),
            Line::from(""),
            input_line(
                "Password",
                &login.masked_password(),
                !email_focused,
                !email_focused && !login.pending,
            ),
        ];
        frame.render_widget(Paragraph::new(lines), fields);

        if login.pending {
            frame.render_stateful_widget(spinner("Signing in..."), footer, throbber);
        } else {
            frame.render_widget(
                Paragraph::new(Line::from("Enter: sign in  Tab: next field").style(Style::new().dark_gray()))
                    .block(Block::new()),
                footer,
            );
        }
    }
}
