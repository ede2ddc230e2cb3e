//! Concurrent payslip batch processing.
//!
//! Each employee record is computed on tokio's blocking pool, with a
//! semaphore capping how many run at once. A worker computes the payslip,
//! adds it to the shared [`Aggregate`] and writes the employee's payslip
//! file. Once every worker has finished, the distribution table and the
//! summary are written from the final totals.
//!
//! Failures are isolated: a bad record or a failed payslip write is
//! reported in the [`BatchReport`] and the batch carries on.

use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use crate::calculation::compute_payslip_with;
use crate::config::{PayrollConfig, PayrollRates};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{EmployeeRecord, PayslipResult};
use crate::report::{DISTRIBUTION_FILE, ReportWriter, SUMMARY_FILE, payslip_filename};

use super::aggregate::{Aggregate, AggregateSnapshot};

/// An employee whose payslip was computed.
#[derive(Debug, Clone)]
pub struct ProcessedEmployee {
    /// The input record.
    pub record: EmployeeRecord,
    /// The computed payslip.
    pub payslip: PayslipResult,
    /// Where the payslip was written, or `None` if the write failed.
    pub payslip_path: Option<PathBuf>,
}

/// A record excluded from the batch because it could not be paid.
#[derive(Debug)]
pub struct RejectedRecord {
    /// The ID of the rejected employee.
    pub employee_id: String,
    /// Why the record was rejected.
    pub error: PayrollError,
}

/// An output file that could not be written.
#[derive(Debug)]
pub struct ArtifactFailure {
    /// File name of the artifact.
    pub artifact: String,
    /// The write error.
    pub error: PayrollError,
}

/// Everything a batch run produced.
#[derive(Debug)]
pub struct BatchReport {
    /// Paid employees, in input order.
    pub processed: Vec<ProcessedEmployee>,
    /// Records excluded from every artifact, in input order.
    pub rejected: Vec<RejectedRecord>,
    /// Artifacts that could not be written.
    pub failures: Vec<ArtifactFailure>,
    /// Final totals and salary distribution.
    pub aggregate: AggregateSnapshot,
    /// The distribution table, if written.
    pub distribution_path: Option<PathBuf>,
    /// The summary, if written.
    pub summary_path: Option<PathBuf>,
    /// Absolute output root.
    pub output_dir: PathBuf,
}

impl BatchReport {
    /// Returns true when every record was paid and every artifact written.
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty() && self.failures.is_empty()
    }
}

enum RecordOutcome {
    Processed(ProcessedEmployee, Option<PayrollError>),
    Rejected(RejectedRecord),
}

/// Runs payroll batches with a fixed rate set, output location and
/// concurrency limit.
#[derive(Debug, Clone)]
pub struct BatchRunner {
    rates: Arc<PayrollRates>,
    writer: Arc<ReportWriter>,
    workers: usize,
}

impl BatchRunner {
    /// Creates a runner. A `workers` value of zero is treated as one.
    pub fn new(rates: PayrollRates, writer: ReportWriter, workers: usize) -> Self {
        Self {
            rates: Arc::new(rates),
            writer: Arc::new(writer),
            workers: workers.max(1),
        }
    }

    /// Returns the report writer used for output.
    pub fn writer(&self) -> &ReportWriter {
        &self.writer
    }

    /// Processes every record and writes all report artifacts.
    ///
    /// # Errors
    ///
    /// Per-record and per-artifact failures are reported in the returned
    /// [`BatchReport`]. An `Err` is returned only if the worker pool itself
    /// stops accepting work.
    pub async fn run(&self, records: Vec<EmployeeRecord>) -> PayrollResult<BatchReport> {
        let start_time = Instant::now();
        let record_count = records.len();
        info!(
            records = record_count,
            workers = self.workers,
            output_dir = %self.writer.root().display(),
            "Starting payroll batch"
        );

        let aggregate = Arc::new(Aggregate::new());
        let permits = Arc::new(Semaphore::new(self.workers));
        let mut tasks = JoinSet::new();
        let employee_ids: Vec<String> = records.iter().map(|record| record.id.clone()).collect();

        for (index, record) in records.into_iter().enumerate() {
            let permit = Arc::clone(&permits)
                .acquire_owned()
                .await
                .map_err(|_| PayrollError::CalculationError {
                    message: "worker pool closed".to_string(),
                })?;
            let rates = Arc::clone(&self.rates);
            let writer = Arc::clone(&self.writer);
            let aggregate = Arc::clone(&aggregate);

            tasks.spawn_blocking(move || {
                let _permit = permit;
                (index, process_record(record, &rates, &writer, &aggregate))
            });
        }

        let mut outcomes = Vec::with_capacity(record_count);
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(err) => error!(error = %err, "Payroll worker did not complete"),
            }
        }
        let outcomes = reconcile_outcomes(employee_ids, outcomes);

        let mut processed = Vec::new();
        let mut rejected = Vec::new();
        let mut failures = Vec::new();
        for (_, outcome) in outcomes {
            match outcome {
                RecordOutcome::Processed(employee, write_error) => {
                    if let Some(error) = write_error {
                        failures.push(ArtifactFailure {
                            artifact: payslip_filename(&employee.record),
                            error,
                        });
                    }
                    processed.push(employee);
                }
                RecordOutcome::Rejected(record) => rejected.push(record),
            }
        }

        let snapshot = aggregate.snapshot();

        let distribution_path = match self.writer.write_distribution(&snapshot) {
            Ok(path) => Some(path),
            Err(error) => {
                error!(error = %error, "Failed to write salary distribution");
                failures.push(ArtifactFailure {
                    artifact: DISTRIBUTION_FILE.to_string(),
                    error,
                });
                None
            }
        };

        let summary_path = match self.writer.write_summary(&snapshot) {
            Ok(path) => Some(path),
            Err(error) => {
                error!(error = %error, "Failed to write summary");
                failures.push(ArtifactFailure {
                    artifact: SUMMARY_FILE.to_string(),
                    error,
                });
                None
            }
        };

        let duration = start_time.elapsed();
        info!(
            processed = processed.len(),
            rejected = rejected.len(),
            failed_artifacts = failures.len(),
            total_gross = snapshot.total_gross,
            total_net = snapshot.total_net,
            duration_us = duration.as_micros(),
            "Payroll batch completed"
        );

        Ok(BatchReport {
            processed,
            rejected,
            failures,
            aggregate: snapshot,
            distribution_path,
            summary_path,
            output_dir: self.writer.root().to_path_buf(),
        })
    }
}

/// Creates the output tree named in `config` and runs one batch over
/// `records`.
///
/// # Errors
///
/// Returns `Io` if the output directory cannot be created. Other failures
/// are reported in the [`BatchReport`].
pub async fn run_batch(
    records: Vec<EmployeeRecord>,
    config: &PayrollConfig,
) -> PayrollResult<BatchReport> {
    let writer = ReportWriter::create(&config.batch.output_dir)?;
    BatchRunner::new(config.rates.clone(), writer, config.batch.worker_count())
        .run(records)
        .await
}

/// Puts worker outcomes back in input order. A record whose worker never
/// reported back is rejected with a `CalculationError`.
fn reconcile_outcomes(
    employee_ids: Vec<String>,
    mut outcomes: Vec<(usize, RecordOutcome)>,
) -> Vec<(usize, RecordOutcome)> {
    let mut reported = vec![false; employee_ids.len()];
    for (index, _) in &outcomes {
        reported[*index] = true;
    }

    for (index, employee_id) in employee_ids.into_iter().enumerate() {
        if !reported[index] {
            warn!(employee_id = %employee_id, "No outcome for employee record");
            outcomes.push((
                index,
                RecordOutcome::Rejected(RejectedRecord {
                    error: PayrollError::CalculationError {
                        message: format!("payroll worker for '{}' did not complete", employee_id),
                    },
                    employee_id,
                }),
            ));
        }
    }

    outcomes.sort_by_key(|(index, _)| *index);
    outcomes
}

fn process_record(
    record: EmployeeRecord,
    rates: &PayrollRates,
    writer: &ReportWriter,
    aggregate: &Aggregate,
) -> RecordOutcome {
    let computed = panic::catch_unwind(AssertUnwindSafe(|| compute_payslip_with(&record, rates)))
        .unwrap_or_else(|_| {
            Err(PayrollError::CalculationError {
                message: format!("payslip calculation panicked for '{}'", record.id),
            })
        });

    let payslip = match computed {
        Ok(payslip) => payslip,
        Err(error) => {
            warn!(employee_id = %record.id, error = %error, "Skipping employee record");
            return RecordOutcome::Rejected(RejectedRecord {
                employee_id: record.id,
                error,
            });
        }
    };

    aggregate.accumulate(&payslip);

    let (payslip_path, write_error) = match writer.write_payslip(&record, &payslip) {
        Ok(path) => (Some(path), None),
        Err(error) => {
            error!(employee_id = %record.id, error = %error, "Failed to write payslip");
            (None, Some(error))
        }
    };

    RecordOutcome::Processed(
        ProcessedEmployee {
            record,
            payslip,
            payslip_path,
        },
        write_error,
    )
}
