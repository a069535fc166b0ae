//! Configuration types for attendance classification.
//!
//! This module contains the strongly-typed configuration structures that are
//! deserialized from the engine's YAML configuration file. Every threshold
//! the classification rules compare against lives here; nothing is
//! hard-coded, because several of these values (notably the shift-detection
//! day window) have been revised over the product's history.

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::TimeOfDay;

/// Lateness and early-leave cutoffs for one shift kind.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftThresholds {
    /// Check-in strictly after this time is late, at minute granularity.
    pub late_after: TimeOfDay,
    /// Check-out strictly before this time is an early leave.
    pub early_leave_before: TimeOfDay,
}

/// Threshold pairs for the day and night shifts.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftRules {
    /// Day-shift cutoffs.
    pub day: ShiftThresholds,
    /// Night-shift cutoffs. Compared on an overnight axis: clock times
    /// before noon are read as the following day.
    pub night: ShiftThresholds,
}

/// Time-of-day bands used to partition worked minutes into pay categories.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkBands {
    /// Start of the regular working window; minutes before it are early work.
    pub regular_start: TimeOfDay,
    /// End of the regular working window; minutes after it are overtime.
    pub regular_end: TimeOfDay,
    /// Start of the night band (wraps past midnight).
    pub night_start: TimeOfDay,
    /// End of the night band.
    pub night_end: TimeOfDay,
}

/// Automatic shift inference settings.
///
/// Only hourly employees in the listed production sub-departments have their
/// shift inferred from the check-in hour; everyone else falls back to their
/// declared work type.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftDetection {
    /// Check-in hours at or after this count as day shift.
    pub day_window_start_hour: u32,
    /// Check-in hours before this (and at/after the start) count as day
    /// shift; outside the window means night shift.
    pub day_window_end_hour: u32,
    /// Production sub-departments eligible for automatic inference.
    pub eligible_sub_departments: Vec<String>,
}

impl ShiftDetection {
    /// Whether a check-in at the given clock hour falls in the day window.
    pub fn hour_is_day(&self, hour: u32) -> bool {
        hour >= self.day_window_start_hour && hour < self.day_window_end_hour
    }

    /// Whether the given sub-department (or department) name is on the
    /// auto-detection allow-list.
    pub fn department_is_eligible(&self, name: &str) -> bool {
        self.eligible_sub_departments.iter().any(|d| d == name)
    }
}

/// The complete engine configuration.
///
/// `Default` carries the same values as the shipped `config/default.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Lateness/early-leave thresholds per shift.
    #[serde(default)]
    pub shift_rules: ShiftRules,
    /// Pay-category time bands.
    #[serde(default)]
    pub work_bands: WorkBands,
    /// Automatic shift inference settings.
    #[serde(default)]
    pub shift_detection: ShiftDetection,
}

impl Default for ShiftRules {
    fn default() -> Self {
        Self {
            day: ShiftThresholds {
                late_after: TimeOfDay::from_hm(8, 30).expect("valid clock time"),
                early_leave_before: TimeOfDay::from_hm(17, 20).expect("valid clock time"),
            },
            night: ShiftThresholds {
                late_after: TimeOfDay::from_hm(19, 0).expect("valid clock time"),
                early_leave_before: TimeOfDay::from_hm(3, 50).expect("valid clock time"),
            },
        }
    }
}

impl Default for WorkBands {
    fn default() -> Self {
        Self {
            regular_start: TimeOfDay::from_hm(8, 30).expect("valid clock time"),
            regular_end: TimeOfDay::from_hm(17, 30).expect("valid clock time"),
            night_start: TimeOfDay::from_hm(22, 0).expect("valid clock time"),
            night_end: TimeOfDay::from_hm(6, 0).expect("valid clock time"),
        }
    }
}

impl Default for ShiftDetection {
    fn default() -> Self {
        Self {
            // 06-18 is the later of the two windows the product has used;
            // pending product-owner confirmation it stays configurable.
            day_window_start_hour: 6,
            day_window_end_hour: 18,
            eligible_sub_departments: ["열", "표면", "구부", "인발", "교정·절단", "검사"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            shift_rules: ShiftRules::default(),
            work_bands: WorkBands::default(),
            shift_detection: ShiftDetection::default(),
        }
    }
}

impl EngineConfig {
    /// Checks the configuration for values that cannot work together.
    pub fn validate(&self) -> EngineResult<()> {
        if self.work_bands.regular_start >= self.work_bands.regular_end {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "regular window start {} must be before end {}",
                    self.work_bands.regular_start, self.work_bands.regular_end
                ),
            });
        }
        let detection = &self.shift_detection;
        if detection.day_window_start_hour >= detection.day_window_end_hour {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "shift-detection day window start hour {} must be before end hour {}",
                    detection.day_window_start_hour, detection.day_window_end_hour
                ),
            });
        }
        if detection.day_window_end_hour > 24 {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "shift-detection day window end hour {} exceeds 24",
                    detection.day_window_end_hour
                ),
            });
        }
        Ok(())
    }
}
