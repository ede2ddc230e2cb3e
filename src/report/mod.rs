//! Report artifacts for a payroll batch.
//!
//! This module renders per-employee payslips as text, the salary
//! distribution as a CSV table, and the batch totals as a summary file.

mod format;
mod writer;

pub use format::{format_amount, payslip_filename, render_payslip, sanitize_name};
pub use writer::{
    DISTRIBUTION_FILE, PAYSLIP_DIR, ReportWriter, SUMMARY_FILE, read_distribution,
};
