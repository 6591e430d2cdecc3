use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Chart, Dataset, Gauge, GraphType, Paragraph, Row,
        Table,
    },
    Frame,
};

use crate::analytics::{Metric, Series, DISTRIBUTION, PERFORMANCE};
use crate::data::{KeyMetric, Platform};
use crate::state::AnalyticsState;

#[derive(Debug, Default)]
pub struct AnalyticsPage;

fn platform_color(platform: Platform) -> Color {
    match platform {
        Platform::Instagram => Color::Magenta,
        Platform::TikTok => Color::White,
        Platform::Facebook => Color::Blue,
        _ => Color::Gray,
    }
}

impl AnalyticsPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &AnalyticsState,
        key_metrics: &[KeyMetric],
    ) {
        let [filters, metrics, chart, bottom] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(8),
        ])
        .areas(area);

        let filter_line = Line::from(vec![
            Span::styled("Range ", Style::new().gray()),
            Span::raw(state.range.label()).bold(),
            Span::styled("   Platform ", Style::new().gray()),
            Span::raw(state.platform.label()).bold(),
            Span::styled("   Metric ", Style::new().gray()),
            Span::raw(state.metric.label()).bold(),
        ]);
        frame.render_widget(
            Paragraph::new(filter_line).block(Block::bordered().title("Analytics")),
            filters,
        );

        self.render_key_metrics(frame, metrics, key_metrics);

        match state.metric {
            Metric::Followers => self.render_line_chart(frame, chart, &state.series),
            Metric::Engagement => self.render_bar_chart(frame, chart, &state.series),
        }

        let [distribution, performance] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(bottom);
        self.render_distribution(frame, distribution);
        self.render_performance(frame, performance);
    }

    fn render_key_metrics(&self, frame: &mut Frame, area: Rect, key_metrics: &[KeyMetric]) {
        let columns =
            Layout::horizontal(vec![Constraint::Ratio(1, 4); key_metrics.len().max(1)]).split(area);
        for (metric, column) in key_metrics.iter().zip(columns.iter()) {
            let change_style = if metric.positive {
                Style::new().green()
            } else {
                Style::new().red()
            };
            let text = vec![
                Line::from(metric.value).bold(),
                Line::from(Span::styled(metric.change, change_style)),
            ];
            frame.render_widget(
                Paragraph::new(text).block(Block::bordered().title(metric.title)),
                *column,
            );
        }
    }

    fn render_line_chart(&self, frame: &mut Frame, area: Rect, series: &Series) {
        let points: Vec<(Platform, Vec<(f64, f64)>)> = series
            .datasets
            .iter()
            .map(|d| {
                let data = d
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (i as f64, *v as f64))
                    .collect();
                (d.platform, data)
            })
            .collect();
        let datasets = points
            .iter()
            .map(|(platform, data)| {
                Dataset::default()
                    .name(platform.label())
                    .marker(Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::new().fg(platform_color(*platform)))
                    .data(data)
            })
            .collect();

        let y_max = (series.max_value() as f64 * 1.2).max(1.0);
        let x_max = series.labels.len().saturating_sub(1).max(1) as f64;
        let chart = Chart::new(datasets)
            .block(Block::bordered().title("Follower growth"))
            .x_axis(
                Axis::default()
                    .bounds([0.0, x_max])
                    .labels(series.labels.clone())
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

    fn render_bar_chart(&self, frame: &mut Frame, area: Rect, series: &Series) {
        let mut chart = BarChart::default()
            .block(Block::bordered().title("Engagement"))
            .bar_width(4)
            .bar_gap(1)
            .group_gap(3);
        for (i, label) in series.labels.iter().enumerate() {
            let bars: Vec<Bar> = series
                .datasets
                .iter()
                .filter_map(|d| d.values.get(i).map(|v| (d.platform, *v)))
                .map(|(platform, value)| {
                    Bar::default()
                        .value(value)
                        .style(Style::new().fg(platform_color(platform)))
                })
                .collect();
            chart = chart.data(BarGroup::default().label(Line::from(label.clone())).bars(&bars));
        }
        frame.render_widget(chart, area);
    }

    fn render_distribution(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title("Platform distribution");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical(vec![Constraint::Length(1); DISTRIBUTION.len()]).split(inner);
        for ((platform, percent), row) in DISTRIBUTION.iter().zip(rows.iter()) {
            frame.render_widget(
                Gauge::default()
                    .gauge_style(Style::new().fg(platform_color(*platform)))
                    .percent(*percent as u16)
                    .label(format!("{} {}%", platform.label(), percent)),
                *row,
            );
        }
    }

    fn render_performance(&self, frame: &mut Frame, area: Rect) {
        let rows = PERFORMANCE.iter().map(|(name, success, engagement)| {
            Row::new(vec![
                name.to_string(),
                format!("{success}%"),
                format!("{engagement}%"),
            ])
        });
        let table = Table::new(
            rows,
            [
                Constraint::Percentage(50),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ],
        )
        .header(Row::new(vec!["Automation", "Success", "Engagement"]).bold())
        .block(Block::bordered().title("Automation performance"));
        frame.render_widget(table, area);
    }
}
