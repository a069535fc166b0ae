//! Per-day classification outputs.
//!
//! This module contains the [`DayStatus`] verdict consumed by calendar and
//! dashboard views, the [`PayCategory`] buckets used for payroll hour
//! partitioning, and the [`DailyHours`] minute breakdown produced for a
//! single day.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The single day-level attendance verdict.
///
/// # Example
///
/// ```
/// use attendance_engine::models::DayStatus;
///
/// assert_eq!(DayStatus::Late.to_string(), "지각");
/// assert_eq!(DayStatus::LateEarlyLeave.to_string(), "지각+조퇴");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Normal presence (출근), including holiday work and outing days.
    Present,
    /// Checked in strictly after the shift's lateness cutoff (지각).
    Late,
    /// Checked out before the shift's early-leave cutoff (조퇴).
    EarlyLeave,
    /// Both late and early-leave on the same day.
    LateEarlyLeave,
    /// Covered by approved annual leave, full or half day (연차).
    AnnualLeave,
    /// Expected to attend but no times recorded (결근).
    Absence,
    /// Checked in with no check-out yet — an open shift (근무중).
    Working,
    /// Fallback for data shapes none of the rules recognize (기타).
    Other,
}

impl DayStatus {
    /// True for statuses that count toward worked days: the employee was on
    /// site for at least part of the day.
    pub fn is_attendance(self) -> bool {
        matches!(
            self,
            DayStatus::Present
                | DayStatus::Late
                | DayStatus::EarlyLeave
                | DayStatus::LateEarlyLeave
                | DayStatus::Working
        )
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DayStatus::Present => "출근",
            DayStatus::Late => "지각",
            DayStatus::EarlyLeave => "조퇴",
            DayStatus::LateEarlyLeave => "지각+조퇴",
            DayStatus::AnnualLeave => "연차",
            DayStatus::Absence => "결근",
            DayStatus::Working => "근무중",
            DayStatus::Other => "기타",
        };
        write!(f, "{}", label)
    }
}

/// A pay-relevant time bucket after composite merging.
///
/// Raw band combinations that payroll does not track separately are folded
/// before they reach this enum (see the work-time categorizer), so these
/// eight buckets are mutually exclusive and jointly cover every worked
/// minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayCategory {
    /// Hours inside the regular window on a normal workday (기본).
    Regular,
    /// Hours before the regular window starts (조출).
    Early,
    /// Hours after the regular window ends, outside the night band (연장).
    Overtime,
    /// Hours in the night band that are not overtime (야간).
    Night,
    /// Overtime hours falling in the night band (연장야간).
    OvertimeNight,
    /// Weekend/holiday hours inside the regular window (휴일).
    Holiday,
    /// Weekend/holiday overtime, including its night portion (휴일연장).
    HolidayOvertime,
    /// Weekend/holiday hours before the regular window (조출휴일).
    EarlyHoliday,
}

impl PayCategory {
    /// All categories, in display order.
    pub const ALL: [PayCategory; 8] = [
        PayCategory::Regular,
        PayCategory::Early,
        PayCategory::Overtime,
        PayCategory::Night,
        PayCategory::OvertimeNight,
        PayCategory::Holiday,
        PayCategory::HolidayOvertime,
        PayCategory::EarlyHoliday,
    ];
}

impl fmt::Display for PayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PayCategory::Regular => "기본",
            PayCategory::Early => "조출",
            PayCategory::Overtime => "연장",
            PayCategory::Night => "야간",
            PayCategory::OvertimeNight => "연장야간",
            PayCategory::Holiday => "휴일",
            PayCategory::HolidayOvertime => "휴일연장",
            PayCategory::EarlyHoliday => "조출휴일",
        };
        write!(f, "{}", label)
    }
}

/// Worked minutes of a single day, partitioned by pay category.
///
/// Invariant: categories never overlap in time, so [`total_minutes`] equals
/// the elapsed check-in-to-check-out duration whenever both times were valid.
///
/// [`total_minutes`]: DailyHours::total_minutes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHours {
    /// Regular-window minutes (기본).
    pub regular: u32,
    /// Early-work minutes (조출).
    pub early: u32,
    /// Overtime minutes (연장).
    pub overtime: u32,
    /// Night minutes (야간).
    pub night: u32,
    /// Overtime-in-night-band minutes (연장야간).
    pub overtime_night: u32,
    /// Holiday minutes (휴일).
    pub holiday: u32,
    /// Holiday-overtime minutes (휴일연장).
    pub holiday_overtime: u32,
    /// Holiday-early minutes (조출휴일).
    pub early_holiday: u32,
}

impl DailyHours {
    /// The minute count for one category.
    pub fn minutes(&self, category: PayCategory) -> u32 {
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

    /// Adds minutes to one category.
    pub fn add(&mut self, category: PayCategory, minutes: u32) {
        let slot = match category {
            PayCategory::Regular => &mut self.regular,
            PayCategory::Early => &mut self.early,
            PayCategory::Overtime => &mut self.overtime,
            PayCategory::Night => &mut self.night,
            PayCategory::OvertimeNight => &mut self.overtime_night,
            PayCategory::Holiday => &mut self.holiday,
            PayCategory::HolidayOvertime => &mut self.holiday_overtime,
            PayCategory::EarlyHoliday => &mut self.early_holiday,
        };
        *slot += minutes;
    }

    /// Total worked minutes across all categories.
    pub fn total_minutes(&self) -> u32 {
        PayCategory::ALL.iter().map(|c| self.minutes(*c)).sum()
    }

    /// True when no minute was recorded in any category.
    pub fn is_zero(&self) -> bool {
        self.total_minutes() == 0
    }
}

/// The outcome of classifying one day.
///
/// `status` is `None` when no status should be recorded at all — rest days
/// without attendance and days covered by extended unpaid leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayClassification {
    /// The attendance verdict for the day, if one applies.
    pub status: Option<DayStatus>,
    /// The day's worked minutes, partitioned by pay category.
    pub hours: DailyHours,
}
