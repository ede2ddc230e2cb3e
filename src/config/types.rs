//! Configuration types for payroll processing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every section has a
//! default, so a partial file only overrides what it names.

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Percentages and thresholds used to build a payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollRates {
    /// House rent allowance as a fraction of basic salary.
    pub hra: Decimal,
    /// Special allowance as a fraction of basic salary.
    pub special_allowance: Decimal,
    /// Provident fund contribution as a fraction of basic salary.
    pub provident_fund: Decimal,
    /// Professional tax settings.
    pub professional_tax: ProfessionalTax,
}

impl Default for PayrollRates {
    fn default() -> Self {
        Self {
            hra: Decimal::new(20, 2),
            special_allowance: Decimal::new(10, 2),
            provident_fund: Decimal::new(12, 2),
            professional_tax: ProfessionalTax::default(),
        }
    }
}

/// Flat professional tax charged once gross pay passes a threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfessionalTax {
    /// The flat amount charged.
    pub amount: Decimal,
    /// Gross pay must be strictly greater than this for the tax to apply.
    pub gross_threshold: Decimal,
}

impl Default for ProfessionalTax {
    fn default() -> Self {
        Self {
            amount: Decimal::new(200, 0),
            gross_threshold: Decimal::new(15000, 0),
        }
    }
}

/// Settings for the batch payslip run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchSettings {
    /// Maximum number of records computed at once. `None` uses the
    /// available parallelism of the host.
    pub workers: Option<usize>,
    /// Root directory for payslips, the distribution table and the summary.
    pub output_dir: PathBuf,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            workers: None,
            output_dir: PathBuf::from("output"),
        }
    }
}

impl BatchSettings {
    /// Resolves the worker count, never returning zero.
    pub fn worker_count(&self) -> usize {
        self.workers
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(4)
            })
            .max(1)
    }
}

/// The complete payroll configuration loaded from YAML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Rates used by the payroll calculator.
    pub rates: PayrollRates,
    /// Batch run settings.
    pub batch: BatchSettings,
}
