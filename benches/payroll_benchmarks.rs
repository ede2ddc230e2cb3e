//! Performance benchmarks for the payroll engine.
//!
//! Covers single payslip calculation, aggregation, and full batches of 100
//! and 1000 records including report writing.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::batch::{Aggregate, BatchRunner};
use payroll_engine::calculation::compute_payslip;
use payroll_engine::config::PayrollRates;
use payroll_engine::models::EmployeeRecord;
use payroll_engine::report::ReportWriter;

/// Creates `count` records with varied salaries and attendance.
fn create_records(count: usize) -> Vec<EmployeeRecord> {
    (0..count)
        .map(|i| {
            let present = 18 + i % 8;
            let mut attendance = vec![true; present];
            attendance.extend(std::iter::repeat_n(false, 26 - present));
            EmployeeRecord {
                id: format!("B{:05}", i),
                name: format!("Bench Employee {}", i),
                basic_salary: Decimal::new(8_000 + (i as i64 * 1_733) % 250_000, 0),
                join_date: "2020-01-01".to_string(),
                attendance,
            }
        })
        .collect()
}

fn bench_single_payslip(c: &mut Criterion) {
    let record = create_records(1).remove(0);

    c.bench_function("single_payslip", |b| {
        b.iter(|| compute_payslip(black_box(&record)).unwrap())
    });
}

fn bench_aggregate_1000(c: &mut Criterion) {
    let payslips: Vec<_> = create_records(1000)
        .iter()
        .map(|r| compute_payslip(r).unwrap())
        .collect();

    let mut group = c.benchmark_group("aggregate");
    group.throughput(Throughput::Elements(1000));
    group.bench_function("accumulate_1000", |b| {
        b.iter(|| {
            let aggregate = Aggregate::new();
            for payslip in &payslips {
                aggregate.accumulate(black_box(payslip));
            }
            aggregate.snapshot()
        })
    });
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let mut group = c.benchmark_group("batch");
    group.sample_size(10);

    for count in [100usize, 1000] {
        let records = create_records(count);
        let runner = BatchRunner::new(
            PayrollRates::default(),
            ReportWriter::create(dir.path().join(count.to_string())).unwrap(),
            8,
        );

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &records, |b, records| {
            b.to_async(&rt).iter(|| async {
                let report = runner.run(black_box(records.clone())).await.unwrap();
                assert_eq!(report.processed.len(), records.len());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_payslip,
    bench_aggregate_1000,
    bench_batch
);
criterion_main!(benches);
