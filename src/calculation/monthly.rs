//! Monthly aggregation of daily classifications, with a guarded cache.
//!
//! The aggregator is the only component exposed to external callers. It
//! walks every day of a target month through the calendar classifier, shift
//! resolver, and day categorizer, folds the results into a
//! [`MonthlyStats`], and memoizes the record under (employee, year, month).
//! Cache invalidation on data mutation is the caller's responsibility.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::models::{AttendanceRecord, DayClassification, DayStatus, MonthlyStats, RecordKind};
use crate::store::AttendanceStore;

use super::calendar::classify_date;
use super::day_status::classify_day;
use super::shift_resolver::resolve_shift;

/// Number of days in a Gregorian month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .and_then(|d| d.pred_opt())
        .map(|d| chrono::Datelike::day(&d))
        .unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct StatsKey {
    employee_id: String,
    year: i32,
    month: u32,
}

/// Computes and caches per-employee monthly statistics.
///
/// The cache holds its lock across the read-check/compute/write sequence so
/// concurrent callers in a multi-threaded host never recompute the same key
/// twice. Computation is bounded (one calendar month), so the critical
/// section stays short.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::MonthlyAggregator;
/// use attendance_engine::config::EngineConfig;
/// use attendance_engine::store::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// let aggregator = MonthlyAggregator::new(store, EngineConfig::default());
///
/// let stats = aggregator.monthly_stats("emp_001", 2025, 3);
/// assert_eq!(stats.absence_days, 21); // every weekday of 2025-03 empty
/// ```
pub struct MonthlyAggregator<S> {
    store: S,
    config: EngineConfig,
    cache: Mutex<HashMap<StatsKey, MonthlyStats>>,
    recomputes: AtomicU64,
}

impl<S: AttendanceStore> MonthlyAggregator<S> {
    /// Creates an aggregator over the given store and configuration.
    pub fn new(store: S, config: EngineConfig) -> Self {
        Self {
            store,
            config,
            cache: Mutex::new(HashMap::new()),
            recomputes: AtomicU64::new(0),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The configuration in force.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the monthly statistics for one employee, computing them on
    /// first query and serving the cached record afterwards.
    pub fn monthly_stats(&self, employee_id: &str, year: i32, month: u32) -> MonthlyStats {
        let key = StatsKey {
            employee_id: employee_id.to_string(),
            year,
            month,
        };

        let mut cache = self.cache.lock().expect("stats cache poisoned");
        if let Some(cached) = cache.get(&key) {
            debug!(employee_id, year, month, "monthly stats cache hit");
            return cached.clone();
        }

        debug!(employee_id, year, month, "computing monthly stats");
        let stats = self.compute(employee_id, year, month);
        cache.insert(key, stats.clone());
        stats
    }

    /// Drops the cached record for one (employee, year, month) key.
    ///
    /// Returns true when an entry was actually evicted. Callers must invoke
    /// this (or [`clear_cache`](MonthlyAggregator::clear_cache)) after
    /// mutating attendance or leave data for the month.
    pub fn invalidate(&self, employee_id: &str, year: i32, month: u32) -> bool {
        let key = StatsKey {
            employee_id: employee_id.to_string(),
            year,
            month,
        };
        self.cache
            .lock()
            .expect("stats cache poisoned")
            .remove(&key)
            .is_some()
    }

    /// Drops every cached record.
    pub fn clear_cache(&self) {
        self.cache.lock().expect("stats cache poisoned").clear();
    }

    /// How many times a month has actually been computed (cache misses).
    pub fn recompute_count(&self) -> u64 {
        self.recomputes.load(Ordering::Relaxed)
    }

    /// Classifies a single day for calendar and dashboard views.
    ///
    /// Runs the same pipeline as the monthly walk — calendar verdict, shift
    /// resolution, status derivation, hour categorization — without touching
    /// the monthly cache.
    pub fn day_classification(&self, employee_id: &str, date: NaiveDate) -> DayClassification {
        let employee = self.store.employee(employee_id);
        let verdict = classify_date(&self.store, employee_id, date);
        let record = self
            .store
            .attendance(employee_id, date)
            .unwrap_or_else(|| AttendanceRecord::empty(employee_id, date));
        let shift = resolve_shift(employee.as_ref(), &record, &self.config.shift_detection);
        classify_day(&record, &verdict, shift, &self.config)
    }

    fn compute(&self, employee_id: &str, year: i32, month: u32) -> MonthlyStats {
        self.recomputes.fetch_add(1, Ordering::Relaxed);

        let employee = self.store.employee(employee_id);
        if employee.is_none() {
            warn!(employee_id, "employee not found; using day-shift defaults");
        }

        let mut stats = MonthlyStats::empty(employee_id, year, month);

        for day in 1..=days_in_month(year, month) {
            let date = NaiveDate::from_ymd_opt(year, month, day)
                .expect("day is within the month");

            let verdict = classify_date(&self.store, employee_id, date);
            let record = self
                .store
                .attendance(employee_id, date)
                .unwrap_or_else(|| AttendanceRecord::empty(employee_id, date));
            let shift = resolve_shift(employee.as_ref(), &record, &self.config.shift_detection);
            let outcome = classify_day(&record, &verdict, shift, &self.config);

            let Some(status) = outcome.status else {
                continue;
            };

            if status.is_attendance() {
                stats.work_days += 1;
            }
            match status {
                DayStatus::Absence => stats.absence_days += 1,
                DayStatus::Late => stats.late_days += 1,
                DayStatus::EarlyLeave => stats.early_leave_days += 1,
                DayStatus::LateEarlyLeave => {
                    stats.late_days += 1;
                    stats.early_leave_days += 1;
                }
                DayStatus::AnnualLeave => {
                    let credit = match verdict.leave {
                        Some(kind) if kind.is_half_day() => Decimal::new(5, 1),
                        _ => Decimal::ONE,
                    };
                    stats.annual_leave_days += credit;
                }
                _ => {}
            }
            match record.kind {
                Some(RecordKind::Outing) => stats.outing_days += 1,
                Some(RecordKind::EarlyLeaveMarked) => stats.early_leave_days += 1,
                None => {}
            }

            stats.hours.accumulate(&outcome.hours);
        }

        stats.total_hours = stats.hours.total();
        stats
    }
}
