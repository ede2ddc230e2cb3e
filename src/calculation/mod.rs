//! Calculation logic for the payroll engine.
//!
//! This module contains the attendance-based payslip calculation, the
//! salary bracket classification used for distribution reporting, and the
//! working-hours ranking behind the top-employees query.

mod bracket;
mod payslip;
mod working_hours;

pub use bracket::SalaryBracket;
pub use payslip::{compute_payslip, compute_payslip_with};
pub use working_hours::{
    DEFAULT_MIN_AVERAGE_HOURS, DEFAULT_TOP_LIMIT, by_average_hours_asc, by_average_hours_desc,
    by_name_asc, top_by_average_hours,
};
