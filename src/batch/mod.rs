//! Batch payslip generation.
//!
//! This module runs the payroll calculation over a list of employee records
//! concurrently, accumulates batch totals, and emits the report artifacts.

mod aggregate;
mod runner;

pub use aggregate::{Aggregate, AggregateSnapshot};
pub use runner::{
    ArtifactFailure, BatchReport, BatchRunner, ProcessedEmployee, RejectedRecord, run_batch,
};
