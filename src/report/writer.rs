//! Report artifact writing.
//!
//! This module provides the [`ReportWriter`] type, which owns the output
//! directory layout:
//!
//! ```text
//! output/
//! ├── payslips/
//! │   └── {id}_{sanitized name}.txt
//! ├── salary_distribution.csv
//! └── summary.txt
//! ```
//!
//! Every write overwrites an existing file of the same name. Writes are not
//! atomic.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::batch::AggregateSnapshot;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{EmployeeRecord, PayslipResult};

use super::format::{payslip_filename, render_payslip};

/// Name of the per-employee payslip directory under the output root.
pub const PAYSLIP_DIR: &str = "payslips";

/// Filename of the salary distribution table.
pub const DISTRIBUTION_FILE: &str = "salary_distribution.csv";

/// Filename of the batch summary.
pub const SUMMARY_FILE: &str = "summary.txt";

const DISTRIBUTION_HEADER: [&str; 2] = ["Bracket", "Count"];

/// Writes payslips, the distribution table and the summary under one root.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    root: PathBuf,
    payslip_dir: PathBuf,
}

impl ReportWriter {
    /// Creates the output tree (root and payslip directory) if absent.
    ///
    /// Paths are resolved to absolute form so the summary can report where
    /// payslips were written.
    ///
    /// # Errors
    ///
    /// Returns `Io` if a directory cannot be created.
    pub fn create<P: AsRef<Path>>(root: P) -> PayrollResult<Self> {
        let root = root.as_ref();
        let root = std::path::absolute(root).map_err(|e| PayrollError::io(root, e))?;
        let payslip_dir = root.join(PAYSLIP_DIR);

        fs::create_dir_all(&payslip_dir).map_err(|e| PayrollError::io(&payslip_dir, e))?;
        debug!(root = %root.display(), "Prepared output directory");

        Ok(Self { root, payslip_dir })
    }

    /// Returns the absolute output root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the absolute payslip directory.
    pub fn payslip_dir(&self) -> &Path {
        &self.payslip_dir
    }

    /// Returns the path the payslip for `record` is written to.
    pub fn payslip_path(&self, record: &EmployeeRecord) -> PathBuf {
        self.payslip_dir.join(payslip_filename(record))
    }

    /// Writes one employee's payslip, replacing any previous version.
    pub fn write_payslip(
        &self,
        record: &EmployeeRecord,
        payslip: &PayslipResult,
    ) -> PayrollResult<PathBuf> {
        let path = self.payslip_path(record);
        fs::write(&path, render_payslip(record, payslip)).map_err(|e| PayrollError::io(&path, e))?;
        debug!(employee_id = %record.id, path = %path.display(), "Wrote payslip");
        Ok(path)
    }

    /// Writes `salary_distribution.csv`: a `Bracket,Count` header and one row
    /// per non-empty bracket in ascending label order.
    pub fn write_distribution(&self, snapshot: &AggregateSnapshot) -> PayrollResult<PathBuf> {
        let path = self.root.join(DISTRIBUTION_FILE);
        let to_io = |e: csv::Error| PayrollError::io(&path, e.into());

        let mut writer = csv::Writer::from_path(&path).map_err(to_io)?;
        writer.write_record(DISTRIBUTION_HEADER).map_err(to_io)?;
        for (label, count) in &snapshot.distribution {
            let count = count.to_string();
            writer
                .write_record([label.as_str(), count.as_str()])
                .map_err(to_io)?;
        }
        writer.flush().map_err(|e| PayrollError::io(&path, e))?;

        info!(
            path = %path.display(),
            brackets = snapshot.distribution.len(),
            "Wrote salary distribution"
        );
        Ok(path)
    }

    /// Writes `summary.txt` with the batch totals and the payslip directory.
    pub fn write_summary(&self, snapshot: &AggregateSnapshot) -> PayrollResult<PathBuf> {
        let path = self.root.join(SUMMARY_FILE);
        let text = format!(
            "Total employees processed: {}\n\
             Total gross (approx): {}\n\
             Total net (approx): {}\n\
             Payslips directory: {}\n",
            snapshot.total_employees,
            snapshot.total_gross,
            snapshot.total_net,
            self.payslip_dir.display()
        );

        fs::write(&path, text).map_err(|e| PayrollError::io(&path, e))?;
        info!(path = %path.display(), "Wrote summary");
        Ok(path)
    }
}

/// Reads a distribution table written by [`ReportWriter::write_distribution`]
/// back into a label to count mapping.
///
/// # Errors
///
/// Returns `DataNotFound` if the file cannot be opened and `DataParseError`
/// if a row is not a `label,count` pair.
pub fn read_distribution<P: AsRef<Path>>(path: P) -> PayrollResult<BTreeMap<String, u64>> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let mut reader = csv::Reader::from_path(path).map_err(|_| PayrollError::DataNotFound {
        path: path_str.clone(),
    })?;

    let mut distribution = BTreeMap::new();
    for row in reader.deserialize::<(String, u64)>() {
        let (label, count) = row.map_err(|e| PayrollError::DataParseError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;
        distribution.insert(label, count);
    }

    Ok(distribution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::Aggregate;
    use crate::calculation::compute_payslip;
    use rust_decimal::Decimal;

    fn create_record(id: &str, name: &str, basic: i64, present: usize) -> EmployeeRecord {
        let mut attendance = vec![true; present];
        attendance.extend(std::iter::repeat_n(false, 20 - present));
        EmployeeRecord {
            id: id.to_string(),
            name: name.to_string(),
            basic_salary: Decimal::new(basic, 0),
            join_date: "2022-01-10".to_string(),
            attendance,
        }
    }

    #[test]
    fn test_create_makes_payslip_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("output");

        let writer = ReportWriter::create(&root).unwrap();

        assert!(writer.payslip_dir().is_dir());
        assert!(writer.root().is_absolute());
        assert!(writer.payslip_dir().ends_with(PAYSLIP_DIR));
    }

    #[test]
    fn test_write_payslip_overwrites_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::create(dir.path()).unwrap();

        let first = create_record("E001", "Asha Rao", 30000, 20);
        writer
            .write_payslip(&first, &compute_payslip(&first).unwrap())
            .unwrap();

        let second = create_record("E001", "Asha Rao", 10000, 10);
        let path = writer
            .write_payslip(&second, &compute_payslip(&second).unwrap())
            .unwrap();

        assert_eq!(path.file_name().unwrap(), "E001_Asha_Rao.txt");
        assert_eq!(fs::read_dir(writer.payslip_dir()).unwrap().count(), 1);
        let text = fs::read_to_string(path).unwrap();
        assert!(text.contains("Basic Salary : 10000"));
        assert!(text.contains("Days Present  : 10 / 20"));
    }

    #[test]
    fn test_distribution_csv_layout_and_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::create(dir.path()).unwrap();

        let aggregate = Aggregate::new();
        for (i, basic) in [10000, 30000, 45000, 150000, 500000].into_iter().enumerate() {
            let record = create_record(&format!("E{i}"), "X", basic, 20);
            aggregate.accumulate(&compute_payslip(&record).unwrap());
        }
        let snapshot = aggregate.snapshot();

        let path = writer.write_distribution(&snapshot).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "Bracket,Count\n100k-200k,1\n25k-50k,2\n<25k,1\n>=200k,1\n"
        );

        assert_eq!(read_distribution(&path).unwrap(), snapshot.distribution);
    }

    #[test]
    fn test_empty_distribution_has_only_header() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::create(dir.path()).unwrap();

        let path = writer
            .write_distribution(&AggregateSnapshot::default())
            .unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "Bracket,Count\n");
    }

    #[test]
    fn test_summary_lines() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::create(dir.path()).unwrap();
        let snapshot = AggregateSnapshot {
            total_employees: 2,
            total_gross: 47320,
            total_net: 42752,
            distribution: BTreeMap::new(),
        };

        let path = writer.write_summary(&snapshot).unwrap();
        let text = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Total employees processed: 2");
        assert_eq!(lines[1], "Total gross (approx): 47320");
        assert_eq!(lines[2], "Total net (approx): 42752");
        assert_eq!(
            lines[3],
            format!("Payslips directory: {}", writer.payslip_dir().display())
        );
    }

    #[test]
    fn test_read_distribution_missing_file() {
        let result = read_distribution("/nonexistent/salary_distribution.csv");
        assert!(matches!(result, Err(PayrollError::DataNotFound { .. })));
    }

    #[test]
    fn test_read_distribution_rejects_bad_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DISTRIBUTION_FILE);
        fs::write(&path, "Bracket,Count\n<25k,many\n").unwrap();

        let result = read_distribution(&path);
        assert!(matches!(result, Err(PayrollError::DataParseError { .. })));
    }
}
