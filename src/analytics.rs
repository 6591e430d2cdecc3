//! Mock analytics series.
//!
//! Label generation is deterministic for a given day. Values are drawn from
//! fixed per-platform ranges with whatever [`Rng`] the caller supplies, so
//! tests can seed them.

use chrono::{Days, Months, NaiveDate};
use rand::Rng;

use crate::data::Platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    Last7Days,
    Last30Days,
    Last90Days,
}

impl DateRange {
    pub const ALL: [DateRange; 3] = [
        DateRange::Last7Days,
        DateRange::Last30Days,
        DateRange::Last90Days,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DateRange::Last7Days => "7days",
            DateRange::Last30Days => "30days",
            DateRange::Last90Days => "90days",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateRange::Last7Days => "Last 7 days",
            DateRange::Last30Days => "Last 30 days",
            DateRange::Last90Days => "Last 90 days",
        }
    }

    /// Number of points on the x axis.
    pub fn points(self) -> usize {
        match self {
            DateRange::Last7Days => 7,
            DateRange::Last30Days => 5,
            DateRange::Last90Days => 3,
        }
    }

    pub fn next(self) -> Self {
        match self {
            DateRange::Last7Days => DateRange::Last30Days,
            DateRange::Last30Days => DateRange::Last90Days,
            DateRange::Last90Days => DateRange::Last7Days,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFilter {
    All,
    Only(Platform),
}

impl PlatformFilter {
    pub const CYCLE: [PlatformFilter; 4] = [
        PlatformFilter::All,
        PlatformFilter::Only(Platform::Instagram),
        PlatformFilter::Only(Platform::TikTok),
        PlatformFilter::Only(Platform::Facebook),
    ];

    pub fn includes(self, platform: Platform) -> bool {
        match self {
            PlatformFilter::All => true,
            PlatformFilter::Only(p) => p == platform,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlatformFilter::All => "All platforms",
            PlatformFilter::Only(p) => p.label(),
        }
    }

    pub fn next(self) -> Self {
        let i = Self::CYCLE.iter().position(|f| *f == self).unwrap_or(0);
        Self::CYCLE[(i + 1) % Self::CYCLE.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Followers,
    Engagement,
}

impl Metric {
    pub fn label(self) -> &'static str {
        match self {
            Metric::Followers => "Follower growth",
            Metric::Engagement => "Engagement",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Metric::Followers => Metric::Engagement,
            Metric::Engagement => Metric::Followers,
        }
    }

    /// Inclusive value range for `platform`.
    pub fn range(self, platform: Platform) -> (u64, u64) {
        match (self, platform) {
            (Metric::Followers, Platform::Instagram) => (10, 50),
            (Metric::Followers, Platform::TikTok) => (20, 80),
            (Metric::Followers, _) => (5, 30),
            (Metric::Engagement, Platform::Instagram) => (100, 500),
            (Metric::Engagement, Platform::TikTok) => (200, 800),
            (Metric::Engagement, _) => (50, 300),
        }
    }
}

/// Platforms charted on the analytics screen, in legend order.
pub const CHARTED: [Platform; 3] = [Platform::Instagram, Platform::TikTok, Platform::Facebook];

/// Share of followers per platform, in percent.
pub const DISTRIBUTION: [(Platform, u64); 3] = [
    (Platform::Instagram, 45),
    (Platform::TikTok, 35),
    (Platform::Facebook, 20),
];

/// Automation name, success rate, engagement rate.
pub const PERFORMANCE: [(&str, u64, u64); 4] = [
    ("Follow/Unfollow", 87, 65),
    ("Content Liker", 92, 72),
    ("Comment Engagement", 78, 58),
    ("Group Networker", 85, 63),
];

/// X-axis labels ending at `today`, oldest first.
pub fn date_labels(range: DateRange, today: NaiveDate) -> Vec<String> {
    let mut labels: Vec<String> = match range {
        DateRange::Last7Days => (0..7u64)
            .filter_map(|i| today.checked_sub_days(Days::new(i)))
            .map(|d| d.format("%b %-d").to_string())
            .collect(),
        DateRange::Last30Days => (0..5u64)
            .filter_map(|i| today.checked_sub_days(Days::new(i * 7)))
            .map(|d| d.format("%b %-d").to_string())
            .collect(),
        DateRange::Last90Days => (0..3u32)
            .filter_map(|i| today.checked_sub_months(Months::new(i)))
            .map(|d| d.format("%b").to_string())
            .collect(),
    };
    labels.reverse();
    labels
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub platform: Platform,
    pub values: Vec<u64>,
}

/// Labels plus one dataset per selected platform.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl Series {
    pub fn max_value(&self) -> u64 {
        self.datasets
            .iter()
            .flat_map(|d| d.values.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

pub fn generate(
    range: DateRange,
    filter: PlatformFilter,
    metric: Metric,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Series {
    let labels = date_labels(range, today);
    let datasets = CHARTED
        .iter()
        .filter(|p| filter.includes(**p))
        .map(|&platform| {
            let (min, max) = metric.range(platform);
            Dataset {
                platform,
                values: (0..labels.len())
                    .map(|_| rng.random_range(min..=max))
                    .collect(),
            }
        })
        .collect();
    Series { labels, datasets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_seven_day_labels_end_today() {
        let labels = date_labels(DateRange::Last7Days, day(2024, 3, 3));
        assert_eq!(
            labels,
            vec!["Feb 26", "Feb 27", "Feb 28", "Feb 29", "Mar 1", "Mar 2", "Mar 3"]
        );
    }

    #[test]
    fn test_thirty_day_labels_are_weekly() {
        let labels = date_labels(DateRange::Last30Days, day(2024, 3, 31));
        assert_eq!(labels, vec!["Mar 3", "Mar 10", "Mar 17", "Mar 24", "Mar 31"]);
    }

    #[test]
    fn test_ninety_day_labels_are_monthly() {
        let labels = date_labels(DateRange::Last90Days, day(2024, 1, 15));
        assert_eq!(labels, vec!["Nov", "Dec", "Jan"]);
    }

    #[test]
    fn test_label_counts_match_points() {
        for range in DateRange::ALL {
            assert_eq!(date_labels(range, day(2024, 6, 1)).len(), range.points());
        }
    }

    #[test]
    fn test_values_stay_within_platform_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for metric in [Metric::Followers, Metric::Engagement] {
            let series = generate(
                DateRange::Last7Days,
                PlatformFilter::All,
                metric,
                day(2024, 6, 1),
                &mut rng,
            );
            assert_eq!(series.datasets.len(), 3);
            for dataset in &series.datasets {
                let (min, max) = metric.range(dataset.platform);
                assert_eq!(dataset.values.len(), 7);
                assert!(dataset.values.iter().all(|v| (min..=max).contains(v)));
            }
        }
    }

    #[test]
    fn test_unselected_platforms_are_omitted() {
        let mut rng = StdRng::seed_from_u64(1);
        let series = generate(
            DateRange::Last90Days,
            PlatformFilter::Only(Platform::TikTok),
            Metric::Engagement,
            day(2024, 6, 1),
            &mut rng,
        );
        assert_eq!(series.datasets.len(), 1);
        assert_eq!(series.datasets[0].platform, Platform::TikTok);
        assert_eq!(series.datasets[0].values.len(), 3);
    }

    #[test]
    fn test_filter_cycle_wraps() {
        let mut filter = PlatformFilter::All;
        for _ in 0..PlatformFilter::CYCLE.len() {
            filter = filter.next();
        }
        assert_eq!(filter, PlatformFilter::All);
    }

    #[test]
    fn test_distribution_sums_to_hundred() {
        assert_eq!(DISTRIBUTION.iter().map(|(_, p)| p).sum::<u64>(), 100);
    }
}
