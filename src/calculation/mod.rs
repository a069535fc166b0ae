//! Calculation logic for the attendance engine.
//!
//! This module contains the four computational stages: calendar
//! classification (weekends, holidays, leave coverage), shift resolution
//! (which threshold set applies), daily status derivation with work-time
//! categorization, and monthly aggregation with a guarded cache.

mod calendar;
mod day_status;
mod monthly;
mod shift_resolver;
mod work_time;

pub use calendar::{CalendarVerdict, classify_date, is_weekend, statutory_holidays};
pub use day_status::{
    DayContext, RuleVerdict, STATUS_RULES, StatusRule, classify_day, derive_status,
};
pub use monthly::{MonthlyAggregator, days_in_month};
pub use shift_resolver::{ShiftKind, resolve_shift};
pub use work_time::{RawCategory, categorize_work_time, classify_minute, fold};
