//! Monthly statistics models.
//!
//! This module contains the [`MonthlyStats`] record produced by the monthly
//! aggregator and consumed by attendance tables, dashboards, and payroll
//! hour summation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DailyHours, PayCategory};

/// Converts a minute count to a decimal hour value.
pub(crate) fn minutes_to_hours(minutes: u32) -> Decimal {
    Decimal::new(i64::from(minutes), 0) / Decimal::new(60, 0)
}

/// Hour sums per pay category for a month, as decimal hours.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{CategoryHours, DailyHours};
/// use rust_decimal::Decimal;
///
/// let mut sums = CategoryHours::default();
/// sums.accumulate(&DailyHours { regular: 90, ..DailyHours::default() });
/// assert_eq!(sums.regular, Decimal::new(15, 1)); // 1.5 hours
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryHours {
    /// Regular hours (기본).
    pub regular: Decimal,
    /// Early-work hours (조출).
    pub early: Decimal,
    /// Overtime hours (연장).
    pub overtime: Decimal,
    /// Night hours (야간).
    pub night: Decimal,
    /// Overtime-night hours (연장야간).
    pub overtime_night: Decimal,
    /// Holiday hours (휴일).
    pub holiday: Decimal,
    /// Holiday-overtime hours (휴일연장).
    pub holiday_overtime: Decimal,
    /// Holiday-early hours (조출휴일).
    pub early_holiday: Decimal,
}

impl CategoryHours {
    /// Folds one day's minute breakdown into the running hour sums.
    pub fn accumulate(&mut self, day: &DailyHours) {
        self.regular += minutes_to_hours(day.regular);
        self.early += minutes_to_hours(day.early);
        self.overtime += minutes_to_hours(day.overtime);
        self.night += minutes_to_hours(day.night);
        self.overtime_night += minutes_to_hours(day.overtime_night);
        self.holiday += minutes_to_hours(day.holiday);
        self.holiday_overtime += minutes_to_hours(day.holiday_overtime);
        self.early_holiday += minutes_to_hours(day.early_holiday);
    }

    /// The hour sum for one category.
    pub fn hours(&self, category: PayCategory) -> Decimal {
        match category {
            PayCategory::Regular => self.regular,
            PayCategory::Early => self.early,
            PayCategory::Overtime => self.overtime,
            PayCategory::Night => self.night,
            PayCategory::OvertimeNight => self.overtime_night,
            PayCategory::Holiday => self.holiday,
            PayCategory::HolidayOvertime => self.holiday_overtime,
            PayCategory::EarlyHoliday => self.early_holiday,
        }
    }

    /// Sum over all categories.
    pub fn total(&self) -> Decimal {
        PayCategory::ALL.iter().map(|c| self.hours(*c)).sum()
    }
}

/// Per-employee, per-month aggregate of status counts and hour sums.
///
/// Created on first query and cached by the aggregator; cache invalidation
/// on data mutation is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStats {
    /// Unique identifier for this computation.
    pub stats_id: Uuid,
    /// When the statistics were computed.
    pub computed_at: DateTime<Utc>,
    /// The version of the engine that computed them.
    pub engine_version: String,
    /// The employee the statistics are for.
    pub employee_id: String,
    /// Target year.
    pub year: i32,
    /// Target month (1..=12).
    pub month: u32,
    /// Days with an attendance status that counts as presence.
    pub work_days: u32,
    /// Annual-leave days; a half day contributes 0.5.
    pub annual_leave_days: Decimal,
    /// Days classified as absence.
    pub absence_days: u32,
    /// Days with a late arrival.
    pub late_days: u32,
    /// Days with an early departure (including pre-marked 조퇴 records).
    pub early_leave_days: u32,
    /// Days with an outing record (외출).
    pub outing_days: u32,
    /// Total worked hours across all categories.
    pub total_hours: Decimal,
    /// Hour sums per pay category.
    pub hours: CategoryHours,
}

impl MonthlyStats {
    /// A zeroed statistics record for the given employee and month.
    pub fn empty(employee_id: &str, year: i32, month: u32) -> Self {
        Self {
            stats_id: Uuid::new_v4(),
            computed_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            employee_id: employee_id.to_string(),
            year,
            month,
            work_days: 0,
            annual_leave_days: Decimal::ZERO,
            absence_days: 0,
            late_days: 0,
            early_leave_days: 0,
            outing_days: 0,
            total_hours: Decimal::ZERO,
            hours: CategoryHours::default(),
        }
    }
}
