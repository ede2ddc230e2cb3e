//! Running totals across a payroll batch.
//!
//! [`Aggregate`] is the only state shared between batch workers. Totals are
//! atomic counters and the bracket histogram sits behind a mutex, so
//! accumulation is safe from any number of threads and independent of the
//! order in which payslips arrive.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::calculation::SalaryBracket;
use crate::models::PayslipResult;

/// Thread-safe accumulator of batch totals and the salary distribution.
#[derive(Debug, Default)]
pub struct Aggregate {
    total_employees: AtomicU64,
    total_gross: AtomicI64,
    total_net: AtomicI64,
    distribution: Mutex<BTreeMap<SalaryBracket, u64>>,
}

/// A point-in-time copy of an [`Aggregate`].
///
/// The distribution is keyed by bracket label, so iteration follows the
/// ascending lexical order used in the distribution table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateSnapshot {
    /// Number of payslips accumulated.
    pub total_employees: u64,
    /// Sum of each payslip's gross pay rounded to a whole unit.
    pub total_gross: i64,
    /// Sum of each payslip's net pay rounded to a whole unit.
    pub total_net: i64,
    /// Bracket label to number of employees. Empty brackets are absent.
    pub distribution: BTreeMap<String, u64>,
}

impl Aggregate {
    /// Creates an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one payslip to the totals and to the bracket of its basic salary.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::batch::Aggregate;
    /// use payroll_engine::calculation::compute_payslip;
    /// use payroll_engine::models::EmployeeRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let record = EmployeeRecord {
    ///     id: "E001".to_string(),
    ///     name: "Asha Rao".to_string(),
    ///     basic_salary: Decimal::new(10000, 0),
    ///     join_date: String::new(),
    ///     attendance: vec![true; 20],
    /// };
    ///
    /// let aggregate = Aggregate::new();
    /// aggregate.accumulate(&compute_payslip(&record).unwrap());
    ///
    /// let snapshot = aggregate.snapshot();
    /// assert_eq!(snapshot.total_employees, 1);
    /// assert_eq!(snapshot.total_gross, 13000);
    /// assert_eq!(snapshot.total_net, 11800);
    /// assert_eq!(snapshot.distribution["<25k"], 1);
    /// ```
    pub fn accumulate(&self, payslip: &PayslipResult) {
        self.total_employees.fetch_add(1, Ordering::Relaxed);
        self.total_gross
            .fetch_add(whole_units(payslip.gross_pay), Ordering::Relaxed);
        self.total_net
            .fetch_add(whole_units(payslip.net_pay), Ordering::Relaxed);

        let bracket = SalaryBracket::for_basic(payslip.basic_salary);
        let mut distribution = self
            .distribution
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *distribution.entry(bracket).or_insert(0) += 1;
    }

    /// Returns a copy of the current totals.
    pub fn snapshot(&self) -> AggregateSnapshot {
        let distribution = self
            .distribution
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(bracket, count)| (bracket.label().to_string(), *count))
            .collect();

        AggregateSnapshot {
            total_employees: self.total_employees.load(Ordering::Relaxed),
            total_gross: self.total_gross.load(Ordering::Relaxed),
            total_net: self.total_net.load(Ordering::Relaxed),
            distribution,
        }
    }
}

/// Rounds an amount to the nearest whole unit, halves away from zero.
/// Amounts outside the `i64` range saturate.
fn whole_units(amount: Decimal) -> i64 {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}
