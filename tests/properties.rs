//! Property tests for the payroll calculation and aggregation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use payroll_engine::batch::Aggregate;
use payroll_engine::calculation::{SalaryBracket, compute_payslip, top_by_average_hours};
use payroll_engine::models::{EmployeeRecord, PayslipResult, WeeklyTimesheet};

fn salary() -> impl Strategy<Value = Decimal> {
    // Whole cents up to 1,000,000.00
    (0i64..=100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn employee() -> impl Strategy<Value = EmployeeRecord> {
    (salary(), prop::collection::vec(any::<bool>(), 1..32)).prop_map(|(basic, attendance)| {
        EmployeeRecord {
            id: "P001".to_string(),
            name: "Prop Test".to_string(),
            basic_salary: basic,
            join_date: String::new(),
            attendance,
        }
    })
}

fn payslip(record: &EmployeeRecord) -> PayslipResult {
    compute_payslip(record).expect("generated records are valid")
}

proptest! {
    #[test]
    fn attendance_factor_is_a_fraction(record in employee()) {
        let result = payslip(&record);
        prop_assert!(result.attendance_factor >= Decimal::ZERO);
        prop_assert!(result.attendance_factor <= Decimal::ONE);
        prop_assert!(result.gross_pay >= Decimal::ZERO);
        prop_assert_eq!(result.days_in_period, record.attendance.len());
    }

    #[test]
    fn professional_tax_is_flat(record in employee()) {
        let result = payslip(&record);
        prop_assert!(
            result.professional_tax == Decimal::ZERO
                || result.professional_tax == Decimal::new(200, 0)
        );
        prop_assert_eq!(
            result.professional_tax > Decimal::ZERO,
            result.gross_pay > Decimal::new(15000, 0)
        );
    }

    #[test]
    fn full_attendance_net_has_closed_form(basic in salary(), days in 1usize..32) {
        let record = EmployeeRecord {
            id: "P002".to_string(),
            name: "Always Here".to_string(),
            basic_salary: basic,
            join_date: String::new(),
            attendance: vec![true; days],
        };
        let result = payslip(&record);

        let gross = basic * Decimal::new(130, 2);
        let tax = if gross > Decimal::new(15000, 0) {
            Decimal::new(200, 0)
        } else {
            Decimal::ZERO
        };
        prop_assert_eq!(result.net_pay, gross - basic * Decimal::new(12, 2) - tax);
    }

    #[test]
    fn brackets_partition_non_negative_salaries(basic in salary()) {
        let bracket = SalaryBracket::for_basic(basic);
        let matching = SalaryBracket::ALL
            .iter()
            .filter(|candidate| **candidate == bracket)
            .count();
        prop_assert_eq!(matching, 1);
        prop_assert_eq!(SalaryBracket::from_label(bracket.label()), Some(bracket));
    }

    #[test]
    fn accumulation_is_order_independent(records in prop::collection::vec(employee(), 0..20)) {
        let payslips: Vec<PayslipResult> = records.iter().map(payslip).collect();

        let forward = Aggregate::new();
        for result in &payslips {
            forward.accumulate(result);
        }

        let backward = Aggregate::new();
        for result in payslips.iter().rev() {
            backward.accumulate(result);
        }

        prop_assert_eq!(forward.snapshot(), backward.snapshot());
        prop_assert_eq!(forward.snapshot().total_employees, payslips.len() as u64);
    }

    #[test]
    fn top_employees_are_sorted_and_bounded(
        weeks in prop::collection::vec(prop::collection::vec(0.0f64..16.0, 0..8), 0..30),
        threshold in 0.0f64..12.0,
        limit in 0usize..40,
    ) {
        let sheets: Vec<WeeklyTimesheet> = weeks
            .into_iter()
            .enumerate()
            .map(|(i, daily_hours)| WeeklyTimesheet {
                id: i as u64,
                name: format!("W{i}"),
                daily_hours,
            })
            .collect();

        let top = top_by_average_hours(&sheets, threshold, limit);

        prop_assert!(top.len() <= limit);
        prop_assert!(top.iter().all(|sheet| sheet.average_hours() > threshold));
        for pair in top.windows(2) {
            prop_assert!(pair[0].average_hours() >= pair[1].average_hours());
        }
    }
}
