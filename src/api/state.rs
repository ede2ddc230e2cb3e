//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PayrollRates;
use crate::models::WeeklyTimesheet;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// timesheets loaded at startup and the payroll rates.
#[derive(Clone)]
pub struct AppState {
    /// Timesheets served by the top-employees query.
    timesheets: Arc<Vec<WeeklyTimesheet>>,
    /// Rates used by the payslip endpoint.
    rates: Arc<PayrollRates>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(timesheets: Vec<WeeklyTimesheet>, rates: PayrollRates) -> Self {
        Self {
            timesheets: Arc::new(timesheets),
            rates: Arc::new(rates),
        }
    }

    /// Returns the loaded timesheets.
    pub fn timesheets(&self) -> &[WeeklyTimesheet] {
        &self.timesheets
    }

    /// Returns the payroll rates.
    pub fn rates(&self) -> &PayrollRates {
        &self.rates
    }
}
