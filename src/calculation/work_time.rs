//! Work-time categorization: partitioning a worked interval into pay buckets.
//!
//! Every minute between check-in and check-out is assigned exactly one raw
//! band based on its clock position (regular window, early, overtime, night
//! band, with holiday variants on rest days), then composite bands payroll
//! does not track separately are folded into their payout bucket. A day is
//! at most 1440 steps, so the walk stays trivially bounded.

use crate::config::WorkBands;
use crate::models::{DailyHours, PayCategory, TimeOfDay};

const MINUTES_PER_DAY: u32 = 1440;

/// A raw band before composite merging.
///
/// The merge table in [`fold`] maps these onto the payout buckets of
/// [`PayCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawCategory {
    /// Inside the regular window on a workday.
    Regular,
    /// Before the regular window on a workday.
    Early,
    /// After the regular window, outside the night band.
    Overtime,
    /// In the night band, not overtime.
    Night,
    /// After the regular window and in the night band.
    OvertimeNight,
    /// Inside the regular window on a rest day.
    Holiday,
    /// Before the regular window on a rest day.
    HolidayEarly,
    /// After the regular window on a rest day, outside the night band.
    HolidayOvertime,
    /// In the night band on a rest day, not overtime.
    HolidayNight,
    /// After the regular window and in the night band, on a rest day.
    HolidayOvertimeNight,
}

/// Folds a raw band into its payout bucket.
///
/// Holiday-night pays as plain holiday work, holiday-overtime keeps its own
/// bucket whether or not the minutes were also at night, and holiday early
/// work pays as early-holiday.
pub fn fold(raw: RawCategory) -> PayCategory {
    match raw {
        RawCategory::Regular => PayCategory::Regular,
        RawCategory::Early => PayCategory::Early,
        RawCategory::Overtime => PayCategory::Overtime,
        RawCategory::Night => PayCategory::Night,
        RawCategory::OvertimeNight => PayCategory::OvertimeNight,
        RawCategory::Holiday => PayCategory::Holiday,
        RawCategory::HolidayNight => PayCategory::Holiday,
        RawCategory::HolidayOvertime => PayCategory::HolidayOvertime,
        RawCategory::HolidayOvertimeNight => PayCategory::HolidayOvertime,
        RawCategory::HolidayEarly => PayCategory::EarlyHoliday,
    }
}

/// Whether a clock minute falls in the (possibly wrapping) night band.
fn in_night_band(clock: u32, bands: &WorkBands) -> bool {
    let start = bands.night_start.minutes();
    let end = bands.night_end.minutes();
    if start <= end {
        clock >= start && clock < end
    } else {
        clock >= start || clock < end
    }
}

/// Assigns one clock minute its raw band.
pub fn classify_minute(clock: u32, rest_day: bool, bands: &WorkBands) -> RawCategory {
    let night = in_night_band(clock, bands);
    let before_regular = clock < bands.regular_start.minutes();
    let after_regular = clock >= bands.regular_end.minutes();

    if rest_day {
        if night {
            if after_regular {
                RawCategory::HolidayOvertimeNight
            } else {
                RawCategory::HolidayNight
            }
        } else if before_regular {
            RawCategory::HolidayEarly
        } else if after_regular {
            RawCategory::HolidayOvertime
        } else {
            RawCategory::Holiday
        }
    } else if night {
        if after_regular {
            RawCategory::OvertimeNight
        } else {
            RawCategory::Night
        }
    } else if before_regular {
        RawCategory::Early
    } else if after_regular {
        RawCategory::Overtime
    } else {
        RawCategory::Regular
    }
}

/// Partitions a check-in-to-check-out interval into pay buckets.
///
/// A check-out earlier on the clock than the check-in is read as the next
/// calendar day (overnight shift); minutes past midnight are classified by
/// their own clock position. The whole interval is judged against the
/// record date's rest-day flag, matching how the records are keyed.
///
/// The sum of all buckets always equals the elapsed interval: no minute is
/// dropped or double-counted.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::categorize_work_time;
/// use attendance_engine::config::WorkBands;
/// use attendance_engine::models::TimeOfDay;
///
/// let bands = WorkBands::default();
/// let check_in = TimeOfDay::parse_opt("08:45").unwrap();
/// let check_out = TimeOfDay::parse_opt("17:00").unwrap();
///
/// let hours = categorize_work_time(check_in, check_out, false, &bands);
/// assert_eq!(hours.regular, 495);
/// assert_eq!(hours.total_minutes(), 495);
/// ```
pub fn categorize_work_time(
    check_in: TimeOfDay,
    check_out: TimeOfDay,
    rest_day: bool,
    bands: &WorkBands,
) -> DailyHours {
    let start = check_in.minutes();
    let end = check_out.minutes();
    let duration = if end >= start {
        end - start
    } else {
        end + MINUTES_PER_DAY - start
    };

    let mut hours = DailyHours::default();
    for offset in 0..duration {
        let clock = (start + offset) % MINUTES_PER_DAY;
        hours.add(fold(classify_minute(clock, rest_day, bands)), 1);
    }
    hours
}
