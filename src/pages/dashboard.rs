use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Chart, Dataset, GraphType, List, ListItem, Paragraph},
    Frame,
};

use crate::data::{growth_series, ActivityStatus, Store, Trend};
use crate::notify::{ERROR, SUCCESS};
use crate::state::DashboardState;
use crate::ui_utils::create_list_state;

#[derive(Debug)]
pub struct Dashboard;

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, store: &Store, state: &DashboardState) {
        let block = Block::bordered().title("Dashboard").blue();
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [cards, body] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(inner);
        self.render_cards(frame, cards, store);

        let [chart, activity] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(body);
        self.render_chart(frame, chart, state);
        self.render_activity(frame, activity, store, state);
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect, store: &Store) {
        let columns = Layout::horizontal(vec![Constraint::Ratio(1, 4); store.stats.len().max(1)])
            .split(area);
        for (stat, column) in store.stats.iter().zip(columns.iter()) {
            let change = match stat.trend {
                Trend::Increase => Span::styled(format!("↑ {}", stat.change), Style::new().green()),
                Trend::Decrease => Span::styled(format!("↓ {}", stat.change), Style::new().red()),
            };
            let text = vec![
                Line::from(stat.value).bold(),
                Line::from(vec![change, Span::raw(" from last week").gray()]),
            ];
            frame.render_widget(
                Paragraph::new(text).block(Block::bordered().title(stat.name)),
                *column,
            );
        }
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let series = growth_series(state.period);
        let followers: Vec<(f64, f64)> = series
            .followers
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v as f64))
            .collect();
        let engagement: Vec<(f64, f64)> = series
            .engagement
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v as f64))
            .collect();
        let y_max = series.followers.iter().copied().max().unwrap_or(0) as f64 * 1.1;
        let x_max = series.labels.len().saturating_sub(1) as f64;

        let datasets = vec![
            Dataset::default()
                .name("Followers")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::new().fg(Color::Magenta))
                .data(&followers),
            Dataset::default()
                .name("Engagement")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::new().fg(Color::Cyan))
                .data(&engagement),
        ];
        let first = series.labels.first().copied().unwrap_or_default();
        let last = series.labels.last().copied().unwrap_or_default();
        let chart = Chart::new(datasets)
            .block(Block::bordered().title(format!("Growth ({})  p: toggle", state.period.label())))
            .x_axis(
                Axis::default()
                    .bounds([0.0, x_max])
                    .labels(vec![first, last])
                    .style(Style::new().gray()),
            )
            .y_axis(
                Axis::default()
                    .bounds([0.0, y_max])
                    .labels(vec!["0".to_string(), format!("{:.0}", y_max)])
                    .style(Style::new().gray()),
            );
        frame.render_widget(chart, area);
    }

    fn render_activity(&self, frame: &mut Frame, area: Rect, store: &Store, state: &DashboardState) {
        let items: Vec<ListItem> = store
            .activities
            .iter()
            .map(|a| {
                let symbol = match a.status {
                    ActivityStatus::Success => Span::styled(SUCCESS, Style::new().green()),
                    ActivityStatus::Warning => Span::styled(ERROR, Style::new().yellow()),
                };
                ListItem::new(vec![
                    Line::from(vec![
                        symbol,
                        Span::raw(" "),
                        Span::styled(a.platform.label(), Style::new().bold()),
                    ]),
                    Line::from(format!("  {} · {}", a.action, a.time)).gray(),
                ])
            })
            .collect();
        let mut list_state = create_list_state(state.selected_index, items.len());
        *list_state.offset_mut() = state.scroll;
        frame.render_stateful_widget(
            List::new(items)
                .block(Block::bordered().title("Recent Activity"))
                .highlight_symbol(">> ")
                .highlight_style(Style::new().reversed()),
            area,
            &mut list_state,
        );
    }
}
