//! Data-access seam for the attendance engine.
//!
//! The engine never talks to a database. [`AttendanceStore`] describes the
//! four read-only collaborators the surrounding application must supply: an
//! employee directory, an attendance accessor, the leave-request list, and a
//! holiday membership predicate. [`InMemoryStore`] is a complete
//! implementation used by tests and by hosts that already hold the month's
//! data in memory.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::calculation::statutory_holidays;
use crate::models::{AttendanceRecord, Employee, LeaveRecord};

/// Read access to the data the engine classifies.
///
/// Implementations must be cheap to query repeatedly: the monthly aggregator
/// calls into the store once per calendar day.
pub trait AttendanceStore {
    /// Looks up an employee by id. `None` degrades classification to
    /// day-shift defaults rather than failing.
    fn employee(&self, employee_id: &str) -> Option<Employee>;

    /// Fetches the attendance record for one employee and date, if any.
    fn attendance(&self, employee_id: &str, date: NaiveDate) -> Option<AttendanceRecord>;

    /// All leave records for an employee. The calendar classifier filters
    /// for approved status itself, so unfiltered lists are fine.
    fn leave_records(&self, employee_id: &str) -> Vec<LeaveRecord>;

    /// Whether the given date is a public holiday.
    fn is_public_holiday(&self, date: NaiveDate) -> bool;
}

impl<T: AttendanceStore> AttendanceStore for &T {
    fn employee(&self, employee_id: &str) -> Option<Employee> {
        (*self).employee(employee_id)
    }

    fn attendance(&self, employee_id: &str, date: NaiveDate) -> Option<AttendanceRecord> {
        (*self).attendance(employee_id, date)
    }

    fn leave_records(&self, employee_id: &str) -> Vec<LeaveRecord> {
        (*self).leave_records(employee_id)
    }

    fn is_public_holiday(&self, date: NaiveDate) -> bool {
        (*self).is_public_holiday(date)
    }
}

/// An [`AttendanceStore`] backed by plain maps.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{AttendanceRecord, Employee, PayType, WorkType};
/// use attendance_engine::store::{AttendanceStore, InMemoryStore};
/// use chrono::NaiveDate;
///
/// let mut store = InMemoryStore::new();
/// store.add_employee(Employee {
///     id: "emp_001".to_string(),
///     name: "김철수".to_string(),
///     department: "생산부".to_string(),
///     sub_department: None,
///     position: None,
///     pay_type: PayType::Salaried,
///     work_type: WorkType::Day,
/// });
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
/// assert!(store.employee("emp_001").is_some());
/// assert!(store.attendance("emp_001", date).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    employees: HashMap<String, Employee>,
    attendance: HashMap<(String, NaiveDate), AttendanceRecord>,
    leaves: Vec<LeaveRecord>,
    holidays: HashSet<NaiveDate>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an employee, replacing any previous entry with the same id.
    pub fn add_employee(&mut self, employee: Employee) {
        self.employees.insert(employee.id.clone(), employee);
    }

    /// Stores an attendance record under its (employee, date) key.
    pub fn add_record(&mut self, record: AttendanceRecord) {
        self.attendance
            .insert((record.employee_id.clone(), record.date), record);
    }

    /// Appends a leave record.
    pub fn add_leave(&mut self, leave: LeaveRecord) {
        self.leaves.push(leave);
    }

    /// Marks a single date as a public holiday.
    pub fn add_holiday(&mut self, date: NaiveDate) {
        self.holidays.insert(date);
    }

    /// Marks all of South Korea's fixed-date public holidays for a year.
    ///
    /// Lunar-calendar holidays still have to be added individually via
    /// [`add_holiday`](InMemoryStore::add_holiday).
    pub fn add_statutory_holidays(&mut self, year: i32) {
        for date in statutory_holidays(year) {
            self.holidays.insert(date);
        }
    }
}

impl AttendanceStore for InMemoryStore {
    fn employee(&self, employee_id: &str) -> Option<Employee> {
        self.employees.get(employee_id).cloned()
    }

    fn attendance(&self, employee_id: &str, date: NaiveDate) -> Option<AttendanceRecord> {
        self.attendance
            .get(&(employee_id.to_string(), date))
            .cloned()
    }

    fn leave_records(&self, employee_id: &str) -> Vec<LeaveRecord> {
        self.leaves
            .iter()
            .filter(|l| l.employee_id == employee_id)
            .cloned()
            .collect()
    }

    fn is_public_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }
}
