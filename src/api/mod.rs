//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for the top-employees
//! working-hours query and single-payslip calculation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::TopEmployeesQuery;
pub use response::{ApiError, TopEmployee};
pub use state::AppState;
