//! Payslip result model.
//!
//! A [`PayslipResult`] captures every amount derived for one employee in one
//! pay period. It is produced by the payroll calculator and consumed by the
//! aggregator and the report writer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The computed pay for one employee.
///
/// Allowances, PF contributions and gross pay are pro-rated by the
/// attendance factor. The basic salary is carried unprorated for display.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayslipResult;
/// use rust_decimal::Decimal;
///
/// let payslip = PayslipResult {
///     employee_id: "E001".to_string(),
///     basic_salary: Decimal::new(10000, 0),
///     days_present: 20,
///     days_in_period: 20,
///     attendance_factor: Decimal::ONE,
///     hra: Decimal::new(2000, 0),
///     special_allowance: Decimal::new(1000, 0),
///     gross_pay: Decimal::new(13000, 0),
///     pf_employee: Decimal::new(1200, 0),
///     pf_employer: Decimal::new(1200, 0),
///     professional_tax: Decimal::ZERO,
///     total_deductions: Decimal::new(1200, 0),
///     net_pay: Decimal::new(11800, 0),
/// };
/// assert_eq!(payslip.gross_pay - payslip.total_deductions, payslip.net_pay);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipResult {
    /// The ID of the employee this payslip is for.
    pub employee_id: String,
    /// Basic monthly salary, unprorated.
    pub basic_salary: Decimal,
    /// Days marked present in the period.
    pub days_present: usize,
    /// Days in the period.
    pub days_in_period: usize,
    /// `days_present / days_in_period`, always within `[0, 1]`.
    pub attendance_factor: Decimal,
    /// House rent allowance after pro-rating.
    pub hra: Decimal,
    /// Special allowance after pro-rating.
    pub special_allowance: Decimal,
    /// Gross monthly pay after pro-rating.
    pub gross_pay: Decimal,
    /// Employee provident fund contribution (deducted).
    pub pf_employee: Decimal,
    /// Employer provident fund contribution (informational, not deducted).
    pub pf_employer: Decimal,
    /// Flat professional tax.
    pub professional_tax: Decimal,
    /// Employee PF plus professional tax.
    pub total_deductions: Decimal,
    /// Gross pay less total deductions.
    pub net_pay: Decimal,
}
