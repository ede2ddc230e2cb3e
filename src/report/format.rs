//! Text rendering for payslip artifacts.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{EmployeeRecord, PayslipResult};

const RULE: &str = "----------------------------------------";

/// Renders an amount with at most two decimal places.
///
/// Halves round up (away from zero) and trailing zeros are dropped, so
/// `30952.00` renders as `30952` and `0.875` as `0.88`.
///
/// # Examples
///
/// ```
/// use payroll_engine::report::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(3095200, 2)), "30952");
/// assert_eq!(format_amount(Decimal::new(875, 3)), "0.88");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

/// Replaces every character that is not an ASCII letter or digit with `_`.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Returns the payslip filename for an employee: `{id}_{sanitized name}.txt`.
///
/// The name is deterministic so re-running a batch overwrites the previous
/// payslip instead of adding a new file.
pub fn payslip_filename(record: &EmployeeRecord) -> String {
    format!("{}_{}.txt", record.id, sanitize_name(&record.name))
}

/// Renders the payslip text block, one line per entry, newline terminated.
pub fn render_payslip(record: &EmployeeRecord, payslip: &PayslipResult) -> String {
    let lines = [
        format!("Payslip for: {} ({})", record.name, record.id),
        format!("Joining Date: {}", record.join_date),
        RULE.to_string(),
        format!("Basic Salary : {}", format_amount(payslip.basic_salary)),
        format!(
            "Days Present  : {} / {}",
            payslip.days_present, payslip.days_in_period
        ),
        format!(
            "Attendance Factor: {}",
            format_amount(payslip.attendance_factor)
        ),
        format!("HRA (20%)     : {}", format_amount(payslip.hra)),
        format!(
            "Special Allow.: {}",
            format_amount(payslip.special_allowance)
        ),
        format!("Gross Salary  : {}", format_amount(payslip.gross_pay)),
        format!(
            "PF (Employee 12% on basic): {}",
            format_amount(payslip.pf_employee)
        ),
        format!(
            "Professional Tax: {}",
            format_amount(payslip.professional_tax)
        ),
        format!(
            "Total Deductions: {}",
            format_amount(payslip.total_deductions)
        ),
        format!("Net Pay       : {}", format_amount(payslip.net_pay)),
        format!(
            "Employer PF contribution (record): {}",
            format_amount(payslip.pf_employer)
        ),
        RULE.to_string(),
    ];

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
