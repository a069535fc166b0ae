//! Attendance classification and monthly work-hour aggregation engine.
//!
//! This crate determines a day's attendance status (present, late,
//! early-leave, absence, on leave, ...) from raw check-in/check-out times and
//! partitions worked time into pay categories (regular, early, overtime,
//! night, holiday and their composites), then aggregates both into cached
//! per-employee monthly statistics.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
