//! Analytics page state.
//!
//! Every filter change regenerates the chart series.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::analytics::{self, DateRange, Metric, PlatformFilter, Series};

pub struct AnalyticsState {
    pub range: DateRange,
    pub platform: PlatformFilter,
    pub metric: Metric,
    pub series: Series,
    today: NaiveDate,
    rng: StdRng,
}

impl AnalyticsState {
    pub fn new(today: NaiveDate) -> Self {
        Self::with_rng(today, StdRng::from_os_rng())
    }

    /// Uses a caller-supplied generator so series are reproducible.
    pub fn with_rng(today: NaiveDate, mut rng: StdRng) -> Self {
        let range = DateRange::Last7Days;
        let platform = PlatformFilter::All;
        let metric = Metric::Followers;
        let series = analytics::generate(range, platform, metric, today, &mut rng);
        Self {
            range,
            platform,
            metric,
            series,
            today,
            rng,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    fn regenerate(&mut self) {
        self.series =
            analytics::generate(self.range, self.platform, self.metric, self.today, &mut self.rng);
        tracing::debug!(
            event = "ui.analytics.regenerated",
            range = self.range.key(),
            platform = self.platform.label(),
            metric = self.metric.label(),
            datasets = self.series.datasets.len()
        );
    }

    pub fn cycle_range(&mut self) -> DateRange {
        self.range = self.range.next();
        self.regenerate();
        self.range
    }

    pub fn cycle_platform(&mut self) -> PlatformFilter {
        self.platform = self.platform.next();
        self.regenerate();
        self.platform
    }

    pub fn toggle_metric(&mut self) -> Metric {
        self.metric = self.metric.toggled();
        self.regenerate();
        self.metric
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Platform;

    fn state() -> AnalyticsState {
        AnalyticsState::with_rng(
            NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            StdRng::seed_from_u64(42),
        )
    }

    #[test]
    fn test_initial_series() {
        let state = state();
        assert_eq!(state.series.labels.len(), 7);
        assert_eq!(state.series.datasets.len(), 3);
        assert_eq!(state.series.labels.last().map(String::as_str), Some("May 20"));
    }

    #[test]
    fn test_range_change_regenerates_labels() {
        let mut state = state();
        assert_eq!(state.cycle_range(), DateRange::Last30Days);
        assert_eq!(state.series.labels.len(), 5);
        assert_eq!(state.cycle_range(), DateRange::Last90Days);
        assert_eq!(state.series.labels, vec!["Mar", "Apr", "May"]);
    }

    #[test]
    fn test_platform_filter_limits_datasets() {
        let mut state = state();
        assert_eq!(state.cycle_platform(), PlatformFilter::Only(Platform::Instagram));
        assert_eq!(state.series.datasets.len(), 1);
        assert_eq!(state.series.datasets[0].platform, Platform::Instagram);
    }

    #[test]
    fn test_metric_switch_uses_engagement_ranges() {
        let mut state = state();
        assert_eq!(state.toggle_metric(), Metric::Engagement);
        for dataset in &state.series.datasets {
            let (min, max) = Metric::Engagement.range(dataset.platform);
            assert!(dataset.values.iter().all(|v| *v >= min && *v <= max));
        }
    }
}
