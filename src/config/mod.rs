//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load payroll configuration from a
//! YAML file: allowance and deduction rates, the professional tax rule, and
//! batch run settings.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("PF rate: {}", config.rates().provident_fund);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BatchSettings, PayrollConfig, PayrollRates, ProfessionalTax};
