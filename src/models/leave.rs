//! Leave request model.
//!
//! An approved leave request spans an inclusive date interval. The calendar
//! classifier matches target dates against these intervals; everything else
//! about leave workflow (application, approval) lives outside the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The classification of an approved absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveKind {
    /// Full-day annual leave (연차).
    #[serde(rename = "연차")]
    Annual,
    /// Morning half-day leave (오전반차).
    #[serde(rename = "오전반차")]
    HalfDayMorning,
    /// Afternoon half-day leave (오후반차).
    #[serde(rename = "오후반차")]
    HalfDayAfternoon,
    /// Extended unpaid leave (휴직). Suppresses attendance evaluation
    /// entirely: no status is emitted for covered days, not even absence.
    #[serde(rename = "휴직")]
    UnpaidExtended,
}

impl LeaveKind {
    /// True for the two half-day variants.
    pub fn is_half_day(self) -> bool {
        matches!(self, LeaveKind::HalfDayMorning | LeaveKind::HalfDayAfternoon)
    }

    /// True when covered days must produce no attendance status at all.
    pub fn suppresses_attendance(self) -> bool {
        self == LeaveKind::UnpaidExtended
    }
}

/// Workflow status of a leave request. Only approved requests affect
/// classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveStatus {
    /// Approved (승인).
    #[serde(rename = "승인")]
    Approved,
    /// Awaiting decision (대기).
    #[serde(rename = "대기")]
    Pending,
    /// Rejected (반려).
    #[serde(rename = "반려")]
    Rejected,
}

/// A leave request covering an inclusive date interval.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{LeaveKind, LeaveRecord, LeaveStatus};
/// use chrono::NaiveDate;
///
/// let leave = LeaveRecord {
///     employee_id: "emp_001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
///     kind: LeaveKind::Annual,
///     status: LeaveStatus::Approved,
/// };
/// assert!(leave.covers(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()));
/// assert!(leave.covers(NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()));
/// assert!(!leave.covers(NaiveDate::from_ymd_opt(2025, 3, 13).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// The employee the leave belongs to.
    pub employee_id: String,
    /// First covered date (inclusive).
    pub start_date: NaiveDate,
    /// Last covered date (inclusive).
    pub end_date: NaiveDate,
    /// The leave classification.
    pub kind: LeaveKind,
    /// Workflow status of the request.
    pub status: LeaveStatus,
}

impl LeaveRecord {
    /// Checks whether the given date falls inside the leave interval,
    /// inclusive of both ends.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// True when the request has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }
}
