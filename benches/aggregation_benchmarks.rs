//! Performance benchmarks for the attendance engine.
//!
//! The aggregation path is called per employee per dashboard render, so the
//! targets are generous but worth watching:
//! - Single day categorization: < 50μs mean
//! - One employee-month, cold cache: < 2ms mean
//! - One employee-month, warm cache: < 10μs mean
//! - Batch of 100 employee-months: < 200ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;

use attendance_engine::calculation::{
    MonthlyAggregator, ShiftKind, categorize_work_time, classify_day, classify_date, days_in_month,
    is_weekend,
};
use attendance_engine::config::EngineConfig;
use attendance_engine::models::{
    AttendanceRecord, Employee, PayType, TimeOfDay, WorkType,
};
use attendance_engine::store::InMemoryStore;

fn employee(id: &str) -> Employee {
    Employee {
        id: id.to_string(),
        name: "김철수".to_string(),
        department: "생산부".to_string(),
        sub_department: Some("인발".to_string()),
        position: None,
        pay_type: PayType::Hourly,
        work_type: WorkType::Day,
    }
}

fn record(id: &str, date: NaiveDate, check_in: &str, check_out: &str) -> AttendanceRecord {
    AttendanceRecord {
        employee_id: id.to_string(),
        date,
        check_in: check_in.to_string(),
        check_out: check_out.to_string(),
        shift_tag: None,
        kind: None,
    }
}

/// A store with a full month of attendance for the given employee ids.
fn populated_store(ids: &[String]) -> InMemoryStore {
    let mut store = InMemoryStore::new();
    store.add_statutory_holidays(2025);
    for id in ids {
        store.add_employee(employee(id));
        for day in 1..=days_in_month(2025, 3) {
            let date = NaiveDate::from_ymd_opt(2025, 3, day).expect("valid day");
            if !is_weekend(date) {
                store.add_record(record(id, date, "08:30", "19:30"));
            }
        }
    }
    store
}

fn bench_categorize_work_time(c: &mut Criterion) {
    let bands = EngineConfig::default().work_bands;
    let check_in = TimeOfDay::parse_opt("18:55").expect("valid time");
    let check_out = TimeOfDay::parse_opt("03:00").expect("valid time");

    c.bench_function("categorize_overnight_interval", |b| {
        b.iter(|| {
            categorize_work_time(
                black_box(check_in),
                black_box(check_out),
                black_box(false),
                &bands,
            )
        })
    });
}

fn bench_classify_day(c: &mut Criterion) {
    let config = EngineConfig::default();
    let store = InMemoryStore::new();
    let date = NaiveDate::from_ymd_opt(2025, 3, 4).expect("valid day");
    let record = record("emp_001", date, "08:45", "17:00");
    let verdict = classify_date(&store, "emp_001", date);

    c.bench_function("classify_single_day", |b| {
        b.iter(|| {
            classify_day(
                black_box(&record),
                black_box(&verdict),
                ShiftKind::Day,
                &config,
            )
        })
    });
}

fn bench_monthly_stats(c: &mut Criterion) {
    let ids = vec!["emp_001".to_string()];
    let store = populated_store(&ids);
    let aggregator = MonthlyAggregator::new(store, EngineConfig::default());

    c.bench_function("monthly_stats_cold", |b| {
        b.iter(|| {
            aggregator.invalidate("emp_001", 2025, 3);
            aggregator.monthly_stats(black_box("emp_001"), 2025, 3)
        })
    });

    aggregator.monthly_stats("emp_001", 2025, 3);
    c.bench_function("monthly_stats_warm", |b| {
        b.iter(|| aggregator.monthly_stats(black_box("emp_001"), 2025, 3))
    });
}

fn bench_monthly_stats_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("monthly_stats_batch");
    for size in [10usize, 100] {
        let ids: Vec<String> = (0..size).map(|i| format!("emp_{:03}", i)).collect();
        let store = populated_store(&ids);
        let aggregator = MonthlyAggregator::new(store, EngineConfig::default());

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &ids, |b, ids| {
            b.iter(|| {
                aggregator.clear_cache();
                for id in ids {
                    black_box(aggregator.monthly_stats(id, 2025, 3));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_categorize_work_time,
    bench_classify_day,
    bench_monthly_stats,
    bench_monthly_stats_batch
);
criterion_main!(benches);
