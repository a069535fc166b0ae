//! Core data models for the attendance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod daily;
mod employee;
mod leave;
mod monthly_stats;
mod time_of_day;

pub use attendance::{AttendanceRecord, RecordKind, ShiftTag};
pub use daily::{DayClassification, DayStatus, DailyHours, PayCategory};
pub use employee::{Employee, PayType, WorkType};
pub use leave::{LeaveKind, LeaveRecord, LeaveStatus};
pub use monthly_stats::{CategoryHours, MonthlyStats};
pub use time_of_day::TimeOfDay;
