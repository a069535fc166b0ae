//! Daily status derivation: the ordered rule table.
//!
//! The status verdict for a day is decided by the first matching rule in a
//! fixed list, which keeps the precedence between leave coverage, presence
//! markers, rest days, and threshold checks auditable rule by rule. The
//! rules carry no state between days.

use tracing::warn;

use crate::config::{EngineConfig, ShiftRules};
use crate::models::{
    AttendanceRecord, DayClassification, DayStatus, DailyHours, LeaveKind, RecordKind, TimeOfDay,
};

use super::calendar::CalendarVerdict;
use super::shift_resolver::ShiftKind;
use super::work_time::categorize_work_time;

/// Everything a status rule may look at for one day.
#[derive(Debug, Clone, Copy)]
pub struct DayContext<'a> {
    /// Parsed check-in time, if the raw field held one.
    pub check_in: Option<TimeOfDay>,
    /// Parsed check-out time, if the raw field held one.
    pub check_out: Option<TimeOfDay>,
    /// The record's presence marker (외출/조퇴), if any.
    pub kind: Option<RecordKind>,
    /// The calendar classifier's verdict for the date.
    pub verdict: &'a CalendarVerdict,
    /// The resolved shift for the day.
    pub shift: ShiftKind,
    /// The lateness/early-leave cutoffs in force.
    pub rules: &'a ShiftRules,
}

/// What a matching rule decides for the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleVerdict {
    /// No status is recorded for the day at all.
    NoRecord,
    /// The day gets this status.
    Status(DayStatus),
}

/// One guard/result pair in the decision table.
pub struct StatusRule {
    /// Short identifier used in tests and tracing.
    pub name: &'static str,
    apply: fn(&DayContext<'_>) -> Option<RuleVerdict>,
}

impl StatusRule {
    /// Runs the rule; `None` means it does not apply to this day.
    pub fn apply(&self, ctx: &DayContext<'_>) -> Option<RuleVerdict> {
        (self.apply)(ctx)
    }
}

fn rule_unpaid_leave(ctx: &DayContext<'_>) -> Option<RuleVerdict> {
    match ctx.verdict.leave {
        Some(kind) if kind.suppresses_attendance() => Some(RuleVerdict::NoRecord),
        _ => None,
    }
}

fn rule_half_day_leave(ctx: &DayContext<'_>) -> Option<RuleVerdict> {
    match ctx.verdict.leave {
        Some(kind) if kind.is_half_day() => Some(RuleVerdict::Status(DayStatus::AnnualLeave)),
        _ => None,
    }
}

fn rule_annual_leave(ctx: &DayContext<'_>) -> Option<RuleVerdict> {
    match ctx.verdict.leave {
        Some(LeaveKind::Annual) => Some(RuleVerdict::Status(DayStatus::AnnualLeave)),
        _ => None,
    }
}

fn rule_presence_marker(ctx: &DayContext<'_>) -> Option<RuleVerdict> {
    // Outings and pre-marked early leaves are sub-modes of presence.
    ctx.kind.map(|_| RuleVerdict::Status(DayStatus::Present))
}

fn rule_rest_day(ctx: &DayContext<'_>) -> Option<RuleVerdict> {
    if !ctx.verdict.is_rest_day() {
        return None;
    }
    // Holiday work is simply presence; a rest day without attendance is
    // not an absence.
    Some(if ctx.check_in.is_some() {
        RuleVerdict::Status(DayStatus::Present)
    } else {
        RuleVerdict::NoRecord
    })
}

fn rule_no_times(ctx: &DayContext<'_>) -> Option<RuleVerdict> {
    if ctx.check_in.is_none() && ctx.check_out.is_none() {
        Some(RuleVerdict::Status(DayStatus::Absence))
    } else {
        None
    }
}

fn rule_open_shift(ctx: &DayContext<'_>) -> Option<RuleVerdict> {
    if ctx.check_in.is_some() && ctx.check_out.is_none() {
        Some(RuleVerdict::Status(DayStatus::Working))
    } else {
        None
    }
}

/// Night-shift clock times are compared on an overnight axis: anything
/// before noon belongs to the following day, so a 23:00 departure still
/// counts as earlier than an 03:50 cutoff.
fn overnight_minutes(time: TimeOfDay) -> u32 {
    if time.minutes() < 720 {
        time.minutes() + 1440
    } else {
        time.minutes()
    }
}

fn rule_thresholds(ctx: &DayContext<'_>) -> Option<RuleVerdict> {
    let check_in = ctx.check_in?;
    let check_out = ctx.check_out?;

    let (late, early) = match ctx.shift {
        ShiftKind::Day => {
            let cutoffs = &ctx.rules.day;
            (
                check_in > cutoffs.late_after,
                check_out < cutoffs.early_leave_before,
            )
        }
        ShiftKind::Night => {
            let cutoffs = &ctx.rules.night;
            (
                overnight_minutes(check_in) > overnight_minutes(cutoffs.late_after),
                overnight_minutes(check_out) < overnight_minutes(cutoffs.early_leave_before),
            )
        }
    };

    let status = match (late, early) {
        (true, true) => DayStatus::LateEarlyLeave,
        (true, false) => DayStatus::Late,
        (false, true) => DayStatus::EarlyLeave,
        (false, false) => DayStatus::Present,
    };
    Some(RuleVerdict::Status(status))
}

fn rule_fallback(_ctx: &DayContext<'_>) -> Option<RuleVerdict> {
    Some(RuleVerdict::Status(DayStatus::Other))
}

/// The decision table, in precedence order. The first rule that returns a
/// verdict wins; the fallback always matches.
pub const STATUS_RULES: &[StatusRule] = &[
    StatusRule { name: "unpaid_leave", apply: rule_unpaid_leave },
    StatusRule { name: "half_day_leave", apply: rule_half_day_leave },
    StatusRule { name: "annual_leave", apply: rule_annual_leave },
    StatusRule { name: "presence_marker", apply: rule_presence_marker },
    StatusRule { name: "rest_day", apply: rule_rest_day },
    StatusRule { name: "no_times", apply: rule_no_times },
    StatusRule { name: "open_shift", apply: rule_open_shift },
    StatusRule { name: "thresholds", apply: rule_thresholds },
    StatusRule { name: "fallback", apply: rule_fallback },
];

/// Runs the decision table and returns the day's status, or `None` when no
/// status should be recorded.
pub fn derive_status(ctx: &DayContext<'_>) -> Option<DayStatus> {
    for rule in STATUS_RULES {
        if let Some(verdict) = rule.apply(ctx) {
            return match verdict {
                RuleVerdict::NoRecord => None,
                RuleVerdict::Status(status) => Some(status),
            };
        }
    }
    // The fallback rule matches unconditionally.
    None
}

fn parse_logged(raw: &str, field: &str, record: &AttendanceRecord) -> Option<TimeOfDay> {
    let parsed = TimeOfDay::parse_opt(raw);
    if parsed.is_none() && !raw.trim().is_empty() {
        warn!(
            employee_id = %record.employee_id,
            date = %record.date,
            field,
            value = raw,
            "unparseable clock time treated as missing"
        );
    }
    parsed
}

/// Classifies one day: status verdict plus the pay-category minute
/// breakdown.
///
/// Extended unpaid leave suppresses the whole evaluation — no status, zero
/// hours — regardless of any attendance fields present. Otherwise hours are
/// partitioned whenever both clock times parse; the interval is judged
/// under holiday banding when the date is a weekend or public holiday.
pub fn classify_day(
    record: &AttendanceRecord,
    verdict: &CalendarVerdict,
    shift: ShiftKind,
    config: &EngineConfig,
) -> DayClassification {
    let check_in = parse_logged(&record.check_in, "check_in", record);
    let check_out = parse_logged(&record.check_out, "check_out", record);

    let ctx = DayContext {
        check_in,
        check_out,
        kind: record.kind,
        verdict,
        shift,
        rules: &config.shift_rules,
    };
    let status = derive_status(&ctx);

    let suppressed = verdict
        .leave
        .is_some_and(LeaveKind::suppresses_attendance);
    let hours = match (suppressed, check_in, check_out) {
        (false, Some(start), Some(end)) => {
            categorize_work_time(start, end, verdict.is_rest_day(), &config.work_bands)
        }
        _ => DailyHours::default(),
    };

    DayClassification { status, hours }
}
