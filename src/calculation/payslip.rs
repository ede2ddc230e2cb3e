//! Attendance-based payslip calculation.
//!
//! This module turns one [`EmployeeRecord`] into a [`PayslipResult`]. The
//! salary structure is basic + HRA + special allowance, pro-rated by the
//! share of period days the employee was present. Deductions are the
//! employee provident fund contribution and a flat professional tax.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PayrollRates;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{EmployeeRecord, PayslipResult};

/// Computes a payslip using the standard rates.
///
/// This is [`compute_payslip_with`] with [`PayrollRates::default`]: HRA 20%,
/// special allowance 10%, PF 12%, professional tax 200 above a gross of 15000.
///
/// # Errors
///
/// Returns `InvalidRecord` when the attendance sequence is empty or the
/// basic salary is negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_payslip;
/// use payroll_engine::models::EmployeeRecord;
/// use rust_decimal::Decimal;
///
/// let mut attendance = vec![true; 22];
/// attendance.extend([false; 3]);
///
/// let record = EmployeeRecord {
///     id: "E001".to_string(),
///     name: "Asha Rao".to_string(),
///     basic_salary: Decimal::new(30000, 0),
///     join_date: "2021-04-01".to_string(),
///     attendance,
/// };
///
/// let payslip = compute_payslip(&record).unwrap();
/// assert_eq!(payslip.attendance_factor, Decimal::new(88, 2));
/// assert_eq!(payslip.gross_pay, Decimal::new(34320, 0));
/// assert_eq!(payslip.net_pay, Decimal::new(30952, 0));
/// ```
pub fn compute_payslip(record: &EmployeeRecord) -> PayrollResult<PayslipResult> {
    compute_payslip_with(record, &PayrollRates::default())
}

/// Computes a payslip using the given rates.
///
/// # Arguments
///
/// * `record` - The employee to pay
/// * `rates` - Allowance, PF and professional tax settings
///
/// # Errors
///
/// Returns `InvalidRecord` when the attendance sequence is empty (the
/// attendance factor would be undefined), the basic salary is negative, or
/// the id contains a path separator. Returns `CalculationError` when an
/// amount falls outside the decimal range.
pub fn compute_payslip_with(
    record: &EmployeeRecord,
    rates: &PayrollRates,
) -> PayrollResult<PayslipResult> {
    if record.basic_salary < Decimal::ZERO {
        return Err(PayrollError::InvalidRecord {
            employee_id: record.id.clone(),
            message: format!("basic salary {} is negative", record.basic_salary),
        });
    }

    if record.id.contains(['/', '\\', '\0']) {
        return Err(PayrollError::InvalidRecord {
            employee_id: record.id.clone(),
            message: "id must not contain a path separator".to_string(),
        });
    }

    let days_in_period = record.days_in_period();
    if days_in_period == 0 {
        return Err(PayrollError::InvalidRecord {
            employee_id: record.id.clone(),
            message: "attendance covers zero days".to_string(),
        });
    }
    let days_present = record.days_present();

    let attendance_factor = Decimal::from(days_present) / Decimal::from(days_in_period);

    let overflow = || PayrollError::CalculationError {
        message: format!("pay for '{}' exceeds the representable range", record.id),
    };

    let basic = record.basic_salary;
    let hra = basic.checked_mul(rates.hra).ok_or_else(overflow)?;
    let special_allowance = basic
        .checked_mul(rates.special_allowance)
        .ok_or_else(overflow)?;
    let gross_pay = basic
        .checked_add(hra)
        .and_then(|sum| sum.checked_add(special_allowance))
        .and_then(|sum| sum.checked_mul(attendance_factor))
        .ok_or_else(overflow)?;

    let pf_employee = basic
        .checked_mul(rates.provident_fund)
        .and_then(|pf| pf.checked_mul(attendance_factor))
        .ok_or_else(overflow)?;
    let pf_employer = pf_employee;

    let professional_tax = if gross_pay > rates.professional_tax.gross_threshold {
        rates.professional_tax.amount
    } else {
        Decimal::ZERO
    };

    let total_deductions = pf_employee
        .checked_add(professional_tax)
        .ok_or_else(overflow)?;
    let net_pay = gross_pay
        .checked_sub(total_deductions)
        .ok_or_else(overflow)?;
    let hra = hra.checked_mul(attendance_factor).ok_or_else(overflow)?;
    let special_allowance = special_allowance
        .checked_mul(attendance_factor)
        .ok_or_else(overflow)?;

    debug!(
        employee_id = %record.id,
        days_present,
        days_in_period,
        gross_pay = %gross_pay,
        net_pay = %net_pay,
        "Computed payslip"
    );

    Ok(PayslipResult {
        employee_id: record.id.clone(),
        basic_salary: basic,
        days_present,
        days_in_period,
        attendance_factor,
        hra,
        special_allowance,
        gross_pay,
        pf_employee,
        pf_employer,
        professional_tax,
        total_deductions,
        net_pay,
    })
}
