//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod payslip;
mod timesheet;

pub use employee::EmployeeRecord;
pub use payslip::PayslipResult;
pub use timesheet::WeeklyTimesheet;
