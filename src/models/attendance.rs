//! Attendance record model.
//!
//! One record per (employee, calendar date). Check-in/check-out arrive as raw
//! `"HH:MM"` strings from the editing layer — possibly empty, possibly
//! malformed — and the record keeps them verbatim so that classification can
//! degrade gracefully instead of rejecting the document.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::TimeOfDay;

/// Explicit per-record shift tag, set by the editing layer.
///
/// When present this always wins over automatic shift inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftTag {
    /// Day shift (주간).
    #[serde(rename = "주간")]
    Day,
    /// Night shift (야간).
    #[serde(rename = "야간")]
    Night,
}

/// Optional record type marking a sub-mode of presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    /// Outing during the day (외출).
    #[serde(rename = "외출")]
    Outing,
    /// Early leave granted in advance (조퇴).
    #[serde(rename = "조퇴")]
    EarlyLeaveMarked,
}

/// A single day's raw attendance data for one employee.
///
/// # Example
///
/// ```
/// use attendance_engine::models::AttendanceRecord;
/// use chrono::NaiveDate;
///
/// let record = AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
///     check_in: "08:45".to_string(),
///     check_out: "17:00".to_string(),
///     shift_tag: None,
///     kind: None,
/// };
/// assert_eq!(record.check_in_time().unwrap().to_string(), "08:45");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// Raw check-in time, `"HH:MM"` or empty.
    #[serde(default)]
    pub check_in: String,
    /// Raw check-out time, `"HH:MM"` or empty. An overnight shift records
    /// the next morning's clock time here (e.g., `"03:00"`).
    #[serde(default)]
    pub check_out: String,
    /// Explicit shift tag, when the editing layer set one.
    #[serde(default)]
    pub shift_tag: Option<ShiftTag>,
    /// Record type for outings and pre-marked early leaves.
    #[serde(default)]
    pub kind: Option<RecordKind>,
}

impl AttendanceRecord {
    /// A placeholder record for a day with no stored document.
    ///
    /// Used by the monthly aggregator so that every day of a month goes
    /// through the same classification path.
    pub fn empty(employee_id: &str, date: NaiveDate) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            date,
            check_in: String::new(),
            check_out: String::new(),
            shift_tag: None,
            kind: None,
        }
    }

    /// The parsed check-in time, if the raw field holds a valid clock time.
    pub fn check_in_time(&self) -> Option<TimeOfDay> {
        TimeOfDay::parse_opt(&self.check_in)
    }

    /// The parsed check-out time, if the raw field holds a valid clock time.
    pub fn check_out_time(&self) -> Option<TimeOfDay> {
        TimeOfDay::parse_opt(&self.check_out)
    }

    /// True when neither time field parses to a clock time.
    pub fn has_no_times(&self) -> bool {
        self.check_in_time().is_none() && self.check_out_time().is_none()
    }
}
