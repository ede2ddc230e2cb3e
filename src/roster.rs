//! Loading employee and timesheet lists from JSON files.
//!
//! Loading is an explicit call made at startup. Callers that prefer to run
//! with no data over failing can use [`load_timesheets_or_empty`], which logs
//! the problem and falls back to an empty list.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{EmployeeRecord, WeeklyTimesheet};

/// Loads a JSON array of employee records.
///
/// # Errors
///
/// Returns `DataNotFound` if the file cannot be read and `DataParseError`
/// if it is not a JSON array of records.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::roster::load_employees;
///
/// let employees = load_employees("./data/employees.json")?;
/// println!("Loaded employees: {}", employees.len());
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
pub fn load_employees<P: AsRef<Path>>(path: P) -> PayrollResult<Vec<EmployeeRecord>> {
    let employees: Vec<EmployeeRecord> = load_json(path.as_ref())?;
    info!(
        path = %path.as_ref().display(),
        count = employees.len(),
        "Loaded employee records"
    );
    Ok(employees)
}

/// Loads a JSON array of weekly timesheets.
///
/// # Errors
///
/// Returns `DataNotFound` if the file cannot be read and `DataParseError`
/// if it is not a JSON array of timesheets.
pub fn load_timesheets<P: AsRef<Path>>(path: P) -> PayrollResult<Vec<WeeklyTimesheet>> {
    let timesheets: Vec<WeeklyTimesheet> = load_json(path.as_ref())?;
    info!(
        path = %path.as_ref().display(),
        count = timesheets.len(),
        "Loaded timesheets"
    );
    Ok(timesheets)
}

/// Loads timesheets, returning an empty list if the file is missing or
/// malformed.
///
/// The failure is logged at `warn` level. Use this where an empty query
/// result is an acceptable way to run without data.
pub fn load_timesheets_or_empty<P: AsRef<Path>>(path: P) -> Vec<WeeklyTimesheet> {
    load_timesheets(path).unwrap_or_else(|err| {
        warn!(error = %err, "Timesheets unavailable, continuing with none");
        Vec::new()
    })
}

fn load_json<T: DeserializeOwned>(path: &Path) -> PayrollResult<T> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| PayrollError::DataNotFound {
        path: path_str.clone(),
    })?;

    serde_json::from_str(&content).map_err(|e| PayrollError::DataParseError {
        path: path_str,
        message: e.to_string(),
    })
}
