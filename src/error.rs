//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading input, computing
//! payslips and writing reports.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::InvalidRecord {
///     employee_id: "E001".to_string(),
///     message: "attendance is empty".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid employee record 'E001': attendance is empty");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Input data file was not found at the specified path.
    #[error("Data file not found: {path}")]
    DataNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Input data file could not be parsed.
    #[error("Failed to parse data file '{path}': {message}")]
    DataParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An employee record cannot be paid as given.
    #[error("Invalid employee record '{employee_id}': {message}")]
    InvalidRecord {
        /// The ID of the offending employee.
        employee_id: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A report artifact could not be written.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// The file or directory being written.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl PayrollError {
    /// Wraps an I/O error together with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PayrollError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this error describes a bad input record rather than
    /// an environmental failure.
    pub fn is_data_error(&self) -> bool {
        matches!(self, PayrollError::InvalidRecord { .. })
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
