//! Employee model and related types.
//!
//! This module defines the Employee struct with its pay-type and work-type
//! enums. The engine only reads employee data; the directory that owns it is
//! an external collaborator.

use serde::{Deserialize, Serialize};

/// How an employee is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayType {
    /// Hourly pay (시급). Only hourly production workers are eligible for
    /// automatic shift inference.
    Hourly,
    /// Monthly salary (월급).
    Salaried,
}

/// The declared work pattern for an employee.
///
/// Legacy records stored this under several differently-named fields; the
/// loading boundary is expected to have normalized them into this single
/// enum before the engine sees the employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkType {
    /// Day work (주간).
    #[default]
    Day,
    /// Night work (야간).
    Night,
    /// Alternating day/night rotation (주야교대).
    Rotating,
}

/// An employee subject to attendance classification.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{Employee, PayType, WorkType};
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "김철수".to_string(),
///     department: "생산부".to_string(),
///     sub_department: Some("인발".to_string()),
///     position: Some("사원".to_string()),
///     pay_type: PayType::Hourly,
///     work_type: WorkType::Day,
/// };
/// assert!(employee.is_hourly());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// Top-level department (e.g., "생산부").
    pub department: String,
    /// Production sub-department, when assigned (e.g., "인발", "검사").
    #[serde(default)]
    pub sub_department: Option<String>,
    /// Role or position title.
    #[serde(default)]
    pub position: Option<String>,
    /// How the employee is paid.
    pub pay_type: PayType,
    /// Declared work pattern; defaults to day work when unset.
    #[serde(default)]
    pub work_type: WorkType,
}

impl Employee {
    /// Returns true if the employee is on hourly pay.
    pub fn is_hourly(&self) -> bool {
        self.pay_type == PayType::Hourly
    }
}
