use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::data::{Automation, AutomationStatus};
use crate::state::{AutomationForm, AutomationsState, FormField};
use crate::ui_utils::{centered_rect, create_list_state, focused_block, input_line};

#[derive(Debug, Default)]
pub struct AutomationsPage;

fn status_span(status: AutomationStatus) -> Span<'static> {
    match status {
        AutomationStatus::Active => Span::styled("● Active", Style::new().green()),
        AutomationStatus::Paused => Span::styled("● Paused", Style::new().yellow()),
    }
}

impl AutomationsPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AutomationsState) {
        let [toolbar, body] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let search = if state.search_active || !state.search.is_empty() {
            format!("Search: {}{}", state.search, if state.search_active { "▏" } else { "" })
        } else {
            "Search: (press /)".to_string()
        };
        let toolbar_line = Line::from(vec![
            Span::styled(format!("Status: {}", state.filter.label()), Style::new().cyan()),
            Span::raw("   "),
            Span::raw(search),
        ]);
        frame.render_widget(
            Paragraph::new(toolbar_line).block(focused_block("Automations", state.search_active)),
            toolbar,
        );

        let [list_area, detail_area] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(body);

        let visible = state.visible();
        let items: Vec<ListItem> = visible
            .iter()
            .map(|a| {
                ListItem::new(Line::from(vec![
                    status_span(a.status),
                    Span::raw("  "),
                    Span::raw(a.name.clone()),
                    Span::styled(format!("  [{}]", a.platform.label()), Style::new().gray()),
                ]))
            })
            .collect();
        let title = format!("Automations ({}/{})", visible.len(), state.items.len());
        let mut list_state = create_list_state(state.selected_index, items.len());
        frame.render_stateful_widget(
            List::new(items)
                .block(Block::bordered().title(title))
                .highlight_symbol(">> ")
                .repeat_highlight_symbol(true)
                .highlight_style(Style::new().reversed()),
            list_area,
            &mut list_state,
        );

        match visible.get(state.selected_index) {
            Some(automation) => self.render_detail(frame, detail_area, automation),
            None => frame.render_widget(
                Paragraph::new("No automations match the current filter")
                    .block(Block::bordered().title("Details")),
                detail_area,
            ),
        }

        if let Some(form) = state.form.as_ref() {
            self.render_form(frame, area, form);
        }
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect, automation: &Automation) {
        let mut lines = vec![
            Line::from(automation.name.clone()).bold(),
            Line::from(vec![
                status_span(automation.status),
                Span::raw(format!("  {}", automation.platform.label())),
            ]),
            Line::from(""),
            Line::from(automation.description.clone()),
            Line::from(""),
            Line::from(format!("Schedule: {}", automation.schedule)),
            Line::from(format!("Last run: {}", automation.last_run)),
            Line::from(format!("Next run: {}", automation.next_run_label())),
            Line::from(""),
        ];
        lines.extend(automation.stats.iter().map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label}: "), Style::new().gray()),
                Span::raw(value.clone()).bold(),
            ])
        }));
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::bordered().title("Details")),
            area,
        );
    }

    fn render_form(&self, frame: &mut Frame, area: Rect, form: &AutomationForm) {
        let popup = centered_rect(area, 60, 11);
        frame.render_widget(Clear, popup);

        let field = form.field;
        let lines = vec![
            input_line("Name", &form.name, field == FormField::Name, field == FormField::Name),
            input_line(
                "Description",
                &form.description,
                field == FormField::Description,
                field == FormField::Description,
            ),
            input_line(
                "Platform",
                &format!("◀ {} ▶", form.platform().label()),
                field == FormField::Platform,
                false,
            ),
            input_line(
                "Schedule",
                &format!("◀ {} ▶", form.schedule()),
                field == FormField::Schedule,
                false,
            ),
            Line::from(""),
            Line::from(Span::styled("Tab: next field  ←→: change option", Style::new().gray())),
            Line::from(Span::styled("Press Enter to create", Style::new().gray())),
            Line::from(Span::styled("Press Esc to cancel", Style::new().gray())),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(focused_block("New automation", true)),
            popup,
        );
    }
}
