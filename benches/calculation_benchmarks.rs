//! Performance benchmarks for the Benefits Deduction Engine.
//!
//! This benchmark suite verifies that the calculation engine meets performance targets:
//! - Single paycheck calculation: < 10μs mean
//! - Paycheck with 100 dependents: < 100μs mean
//! - Batch of 1000 paychecks: < 10ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use uuid::Uuid;

use benefits_engine::calculation::calculate_paycheck;
use benefits_engine::config::BenefitConfig;
use benefits_engine::models::{Dependent, Employee, Relationship};

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
}

/// Creates an employee with the given number of dependents, alternating
/// ages around the threshold.
fn create_employee(dependent_count: usize) -> Employee {
    let dependents = (0..dependent_count)
        .map(|i| {
            let years = if i % 2 == 0 { 20 } else { 60 };
            Dependent {
                id: Uuid::from_u128(i as u128),
                first_name: format!("Dependent{i}"),
                last_name: "Bench".to_string(),
                date_of_birth: as_of()
                    .checked_sub_months(Months::new(years * 12))
                    .unwrap(),
                relationship: Relationship::Child,
            }
        })
        .collect();

    Employee {
        id: Uuid::nil(),
        first_name: "Bench".to_string(),
        last_name: "Employee".to_string(),
        annual_salary: Decimal::new(9236522, 2),
        date_of_birth: NaiveDate::from_ymd_opt(1985, 3, 15).unwrap(),
        dependents,
    }
}

fn bench_single_calculation(c: &mut Criterion) {
    let config = BenefitConfig::default();

    let mut group = c.benchmark_group("single_calculation");
    for dependent_count in [0usize, 2, 10, 100] {
        let employee = create_employee(dependent_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(dependent_count),
            &employee,
            |b, employee| {
                b.iter(|| calculate_paycheck(black_box(employee), as_of(), black_box(&config)));
            },
        );
    }
    group.finish();
}

fn bench_batch_calculation(c: &mut Criterion) {
    let config = BenefitConfig::default();

    let mut group = c.benchmark_group("batch_calculation");
    for batch_size in [100usize, 1000] {
        let employees: Vec<Employee> = (0..batch_size).map(|i| create_employee(i % 4)).collect();
        group.throughput(Throughput::Elements(batch_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &employees,
            |b, employees| {
                b.iter(|| {
                    for employee in employees {
                        let _ = calculate_paycheck(black_box(employee), as_of(), &config);
                    }
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_single_calculation, bench_batch_calculation);
criterion_main!(benches);
