//! Calendar classification: weekends, public holidays, and leave coverage.
//!
//! This is the leaf stage every other stage consumes. A date is classified
//! against the plain Gregorian calendar (dates are already local calendar
//! dates, so there is no timezone ambiguity), the externally supplied
//! holiday set, and the employee's approved leave intervals.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::{LeaveKind, LeaveRecord};
use crate::store::AttendanceStore;

/// The calendar's verdict for one (employee, date) pair.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::CalendarVerdict;
///
/// let verdict = CalendarVerdict {
///     is_weekend: true,
///     is_public_holiday: false,
///     leave: None,
/// };
/// assert!(verdict.is_rest_day());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarVerdict {
    /// Saturday or Sunday.
    pub is_weekend: bool,
    /// Member of the external holiday set.
    pub is_public_holiday: bool,
    /// The covering approved leave kind, if any.
    pub leave: Option<LeaveKind>,
}

impl CalendarVerdict {
    /// True when the day is a weekend or public holiday — a day the
    /// employee is not expected to attend.
    pub fn is_rest_day(&self) -> bool {
        self.is_weekend || self.is_public_holiday
    }
}

/// Returns true for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Classifies one date for one employee.
///
/// Weekends come from the Gregorian calendar, holidays from the store's
/// membership predicate, and leave coverage from the employee's approved
/// leave intervals (inclusive both ends). Extended unpaid leave (휴직) wins
/// over any other covering kind on the same date because it suppresses
/// attendance evaluation entirely. Absent data simply yields
/// `false`/`None`; this function has no failure modes.
pub fn classify_date<S: AttendanceStore>(
    store: &S,
    employee_id: &str,
    date: NaiveDate,
) -> CalendarVerdict {
    let leaves = store.leave_records(employee_id);
    let covering: Vec<&LeaveRecord> = leaves
        .iter()
        .filter(|l| l.is_approved() && l.covers(date))
        .collect();

    let leave = covering
        .iter()
        .find(|l| l.kind.suppresses_attendance())
        .or_else(|| covering.first())
        .map(|l| l.kind);

    CalendarVerdict {
        is_weekend: is_weekend(date),
        is_public_holiday: store.is_public_holiday(date),
        leave,
    }
}

/// South Korea's fixed-date public holidays for a year.
///
/// Covers New Year's Day, Independence Movement Day, Labour Day, Children's
/// Day, Memorial Day, Liberation Day, National Foundation Day, Hangul Day,
/// and Christmas Day. Lunar-calendar holidays (설날, 부처님오신날, 추석) and
/// substitute holidays vary yearly and must come from the external holiday
/// source.
pub fn statutory_holidays(year: i32) -> Vec<NaiveDate> {
    [
        (1, 1),   // New Year's Day
        (3, 1),   // Independence Movement Day
        (5, 1),   // Labour Day
        (5, 5),   // Children's Day
        (6, 6),   // Memorial Day
        (8, 15),  // Liberation Day
        (10, 3),  // National Foundation Day
        (10, 9),  // Hangul Day
        (12, 25), // Christmas Day
    ]
    .iter()
    .filter_map(|&(month, day)| NaiveDate::from_ymd_opt(year, month, day))
    .collect()
}
