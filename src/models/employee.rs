//! Employee record model.
//!
//! This module defines the [`EmployeeRecord`] struct representing one
//! employee's salary and attendance for a single pay period.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Represents an employee to be paid for one period.
///
/// Records are immutable input to the payroll pipeline. Field names accept
/// both snake_case and the camelCase spelling used by older exports
/// (`basicSalary`, `joiningDate`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Identifier, unique within a batch.
    pub id: String,
    /// Display name, also used to derive the payslip filename.
    pub name: String,
    /// Base monthly salary before allowances.
    #[serde(alias = "basicSalary")]
    pub basic_salary: Decimal,
    /// Join date as supplied. Not parsed or validated.
    #[serde(alias = "joiningDate", default)]
    pub join_date: String,
    /// One flag per day of the period; `null` entries count as absent.
    #[serde(deserialize_with = "deserialize_attendance")]
    pub attendance: Vec<bool>,
}

impl EmployeeRecord {
    /// Returns the number of days marked present.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::EmployeeRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let record = EmployeeRecord {
    ///     id: "E001".to_string(),
    ///     name: "Asha Rao".to_string(),
    ///     basic_salary: Decimal::new(30000, 0),
    ///     join_date: "2021-04-01".to_string(),
    ///     attendance: vec![true, false, true],
    /// };
    /// assert_eq!(record.days_present(), 2);
    /// assert_eq!(record.days_in_period(), 3);
    /// ```
    pub fn days_present(&self) -> usize {
        self.attendance.iter().filter(|present| **present).count()
    }

    /// Returns the length of the period in days.
    pub fn days_in_period(&self) -> usize {
        self.attendance.len()
    }
}

fn deserialize_attendance<'de, D>(deserializer: D) -> Result<Vec<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let flags: Vec<Option<bool>> = Vec::deserialize(deserializer)?;
    Ok(flags.into_iter().map(|flag| flag.unwrap_or(false)).collect())
}
