//! Shift resolution: which threshold set a day's record is judged under.
//!
//! Resolution is a fixed priority chain: an explicit per-record tag always
//! wins; eligible hourly production workers get automatic inference from the
//! check-in clock hour; everyone else falls back to their declared work
//! type. The whole chain is pure so that cached monthly statistics stay
//! valid.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ShiftDetection;
use crate::models::{AttendanceRecord, Employee, ShiftTag, WorkType};

/// The resolved shift for one day's record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftKind {
    /// Judged under day-shift thresholds.
    Day,
    /// Judged under night-shift thresholds.
    Night,
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftKind::Day => write!(f, "주간"),
            ShiftKind::Night => write!(f, "야간"),
        }
    }
}

/// Infers a shift from the check-in clock hour, when one exists.
fn infer_from_check_in(record: &AttendanceRecord, detection: &ShiftDetection) -> Option<ShiftKind> {
    let check_in = record.check_in_time()?;
    if detection.hour_is_day(check_in.hour()) {
        Some(ShiftKind::Day)
    } else {
        Some(ShiftKind::Night)
    }
}

/// Resolves the shift for one day's attendance record.
///
/// Priority chain:
/// 1. the record's explicit shift tag;
/// 2. automatic inference from the check-in hour, for hourly employees in
///    an eligible production sub-department;
/// 3. the employee's declared work type (a rotating worker is inferred from
///    the check-in hour, since there is no single declared shift);
/// 4. day shift.
///
/// A missing employee (`None`) skips straight to the day-shift default: no
/// auto-detection eligibility without a profile.
pub fn resolve_shift(
    employee: Option<&Employee>,
    record: &AttendanceRecord,
    detection: &ShiftDetection,
) -> ShiftKind {
    if let Some(tag) = record.shift_tag {
        return match tag {
            ShiftTag::Day => ShiftKind::Day,
            ShiftTag::Night => ShiftKind::Night,
        };
    }

    let Some(employee) = employee else {
        return ShiftKind::Day;
    };

    let unit = employee
        .sub_department
        .as_deref()
        .unwrap_or(&employee.department);
    let eligible = employee.is_hourly() && detection.department_is_eligible(unit);

    if eligible {
        if let Some(inferred) = infer_from_check_in(record, detection) {
            return inferred;
        }
    }

    match employee.work_type {
        WorkType::Day => ShiftKind::Day,
        WorkType::Night => ShiftKind::Night,
        WorkType::Rotating => infer_from_check_in(record, detection).unwrap_or(ShiftKind::Day),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PayType;
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn employee(
        sub_department: Option<&str>,
        pay_type: PayType,
        work_type: WorkType,
    ) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            name: "김철수".to_string(),
            department: "생산부".to_string(),
            sub_department: sub_department.map(|s| s.to_string()),
            position: None,
            pay_type,
            work_type,
        }
    }

    fn record_with(check_in: &str, tag: Option<ShiftTag>) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: "emp_001".to_string(),
            date: make_date("2025-03-04"),
            check_in: check_in.to_string(),
            check_out: String::new(),
            shift_tag: tag,
            kind: None,
        }
    }

    fn detection() -> ShiftDetection {
        ShiftDetection::default()
    }

    /// SR-001: explicit tag always wins
    #[test]
    fn test_explicit_tag_wins() {
        let emp = employee(Some("인발"), PayType::Hourly, WorkType::Day);
        // Tag says night even though the check-in hour looks like day work.
        let record = record_with("08:30", Some(ShiftTag::Night));
        assert_eq!(
            resolve_shift(Some(&emp), &record, &detection()),
            ShiftKind::Night
        );

        let record = record_with("20:00", Some(ShiftTag::Day));
        assert_eq!(
            resolve_shift(Some(&emp), &record, &detection()),
            ShiftKind::Day
        );
    }

    /// SR-002: eligible hourly worker is inferred from check-in hour
    #[test]
    fn test_eligible_worker_inferred_from_check_in() {
        let emp = employee(Some("인발"), PayType::Hourly, WorkType::Day);

        assert_eq!(
            resolve_shift(Some(&emp), &record_with("06:00", None), &detection()),
            ShiftKind::Day
        );
        assert_eq!(
            resolve_shift(Some(&emp), &record_with("17:59", None), &detection()),
            ShiftKind::Day
        );
        assert_eq!(
            resolve_shift(Some(&emp), &record_with("18:00", None), &detection()),
            ShiftKind::Night
        );
        assert_eq!(
            resolve_shift(Some(&emp), &record_with("05:59", None), &detection()),
            ShiftKind::Night
        );
    }

    /// SR-003: salaried workers are never auto-detected
    #[test]
    fn test_salaried_worker_uses_declared_work_type() {
        let emp = employee(Some("인발"), PayType::Salaried, WorkType::Night);
        // Day-looking check-in, but declared type wins for salaried staff.
        assert_eq!(
            resolve_shift(Some(&emp), &record_with("08:30", None), &detection()),
            ShiftKind::Night
        );
    }

    /// SR-004: off-list departments use the declared work type
    #[test]
    fn test_ineligible_department_uses_declared_work_type() {
        let emp = employee(Some("관리"), PayType::Hourly, WorkType::Night);
        assert_eq!(
            resolve_shift(Some(&emp), &record_with("08:30", None), &detection()),
            ShiftKind::Night
        );

        let emp = employee(Some("관리"), PayType::Hourly, WorkType::Day);
        assert_eq!(
            resolve_shift(Some(&emp), &record_with("20:00", None), &detection()),
            ShiftKind::Day
        );
    }

    /// SR-005: eligibility also matches on the department field itself
    #[test]
    fn test_department_field_matches_allow_list() {
        let mut emp = employee(None, PayType::Hourly, WorkType::Day);
        emp.department = "검사".to_string();

        assert_eq!(
            resolve_shift(Some(&emp), &record_with("19:30", None), &detection()),
            ShiftKind::Night
        );
    }

    /// SR-006: eligible worker with no check-in falls back to declared type
    #[test]
    fn test_eligible_without_check_in_uses_declared_type() {
        let emp = employee(Some("검사"), PayType::Hourly, WorkType::Night);
        assert_eq!(
            resolve_shift(Some(&emp), &record_with("", None), &detection()),
            ShiftKind::Night
        );
    }

    /// SR-007: rotating work type is inferred from the check-in hour
    #[test]
    fn test_rotating_inferred_from_check_in() {
        let emp = employee(Some("관리"), PayType::Salaried, WorkType::Rotating);

        assert_eq!(
            resolve_shift(Some(&emp), &record_with("08:30", None), &detection()),
            ShiftKind::Day
        );
        assert_eq!(
            resolve_shift(Some(&emp), &record_with("19:00", None), &detection()),
            ShiftKind::Night
        );
        // No check-in at all: day.
        assert_eq!(
            resolve_shift(Some(&emp), &record_with("", None), &detection()),
            ShiftKind::Day
        );
    }

    /// SR-008: unknown employee defaults to day shift
    #[test]
    fn test_missing_employee_defaults_to_day() {
        assert_eq!(
            resolve_shift(None, &record_with("20:00", None), &detection()),
            ShiftKind::Day
        );
        // ...unless the record carries an explicit tag.
        assert_eq!(
            resolve_shift(None, &record_with("20:00", Some(ShiftTag::Night)), &detection()),
            ShiftKind::Night
        );
    }

    /// SR-009: malformed check-in degrades like a missing one
    #[test]
    fn test_malformed_check_in_degrades() {
        let emp = employee(Some("표면"), PayType::Hourly, WorkType::Night);
        assert_eq!(
            resolve_shift(Some(&emp), &record_with("9h30", None), &detection()),
            ShiftKind::Night
        );
    }

    #[test]
    fn test_shift_kind_display() {
        assert_eq!(ShiftKind::Day.to_string(), "주간");
        assert_eq!(ShiftKind::Night.to_string(), "야간");
    }

    #[test]
    fn test_shift_kind_serialization() {
        assert_eq!(serde_json::to_string(&ShiftKind::Day).unwrap(), "\"day\"");
        let kind: ShiftKind = serde_json::from_str("\"night\"").unwrap();
        assert_eq!(kind, ShiftKind::Night);
    }
}
