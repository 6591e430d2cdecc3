use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    widgets::Block,
    Frame,
};
use throbber_widgets_tui::{Throbber, ThrobberState, WhichUse, BRAILLE_SIX};

use crate::ui_utils::centered_rect;

/// Full-screen placeholder shown until the initial session query completes.
#[derive(Debug, Default)]
pub struct LoadingPage;

impl LoadingPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, throbber: &mut ThrobberState) {
        let block = Block::bordered().title("SocialBoost").blue();
        let inner = block.inner(area);
        frame.render_widget(block, area);

        frame.render_stateful_widget(
            spinner("Loading session..."),
            centered_rect(inner, 24, 1),
            throbber,
        );
    }
}

/// Spinner used for every pending provider call.
pub fn spinner(label: &str) -> Throbber<'_> {
    Throbber::default()
        .label(label)
        .style(Style::new().cyan())
        .throbber_style(Style::new().cyan().bold())
        .throbber_set(BRAILLE_SIX)
        .use_type(WhichUse::Spin)
}
