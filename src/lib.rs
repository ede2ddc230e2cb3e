//! Attendance-based payroll engine.
//!
//! This crate computes monthly payslips from basic salary and daily
//! attendance, accumulates batch totals and a salary distribution, and
//! writes per-employee payslips, a distribution table and a summary report.
//! It also serves a working-hours ranking over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod batch;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod roster;
