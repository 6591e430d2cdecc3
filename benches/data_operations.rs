use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use socialboost::analytics::{self, DateRange, Metric, PlatformFilter};
use socialboost::data::{Automation, AutomationStatus, Platform};
use socialboost::state::AutomationsState;

/// Create an automations list with N entries, every third one paused
fn create_automations(count: usize) -> AutomationsState {
    let items = (0..count)
        .map(|i| Automation {
            id: i as u32 + 1,
            name: format!("Automation {}", i),
            platform: Platform::AUTOMATION_CHOICES[i % Platform::AUTOMATION_CHOICES.len()],
            status: if i % 3 == 0 {
                AutomationStatus::Paused
            } else {
                AutomationStatus::Active
            },
            schedule: "Daily".to_string(),
            last_run: "Never".to_string(),
            next_run: "Tomorrow at 9:00 AM".to_string(),
            description: "Bench".to_string(),
            stats: Vec::new(),
        })
        .collect();
    AutomationsState::new(items)
}

/// Benchmark filtering with a status filter and a search term
fn bench_visible_automations(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_automations");

    for count in [10, 100, 1000].iter() {
        let mut state = create_automations(*count);
        state.cycle_filter();
        "automation 1".chars().for_each(|ch| state.push_search_char(ch));

        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| black_box(state.visible().len()));
        });
    }
    group.finish();
}

/// Benchmark computing the next free automation id
fn bench_next_id(c: &mut Criterion) {
    let state = create_automations(1000);

    c.bench_function("next_automation_id", |b| {
        b.iter(|| black_box(state.next_id()));
    });
}

/// Benchmark regenerating the analytics chart series
fn bench_generate_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_series");
    let today = NaiveDate::from_ymd_opt(2023, 7, 15).unwrap_or_default();
    let mut rng = StdRng::seed_from_u64(7);

    for range in DateRange::ALL.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(range.key()), range, |b, range| {
            b.iter(|| {
                analytics::generate(
                    black_box(*range),
                    PlatformFilter::All,
                    Metric::Followers,
                    today,
                    &mut rng,
                )
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_visible_automations,
    bench_next_id,
    bench_generate_series,
);

criterion_main!(benches);
