//! Base salary calculation functionality.
//!
//! This module computes the salary portion of a single paycheck: the annual
//! salary spread as evenly as possible across the configured number of
//! paychecks.

use rust_decimal::Decimal;

use crate::config::BenefitConfig;
use crate::models::{AuditStep, Employee};

use super::rounding::round_currency;

/// The result of a base salary calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct BaseSalaryResult {
    /// The salary portion per paycheck, before any deductions.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the per-paycheck salary portion for an employee.
///
/// The annual salary is divided by the configured paycheck count and
/// rounded to two decimal places.
///
/// The caller is responsible for validating the configuration first; a
/// positive paycheck count is assumed here.
///
/// # Arguments
///
/// * `employee` - The employee whose salary is being spread
/// * `config` - The benefit configuration supplying the paycheck count
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::calculate_base_salary;
/// use benefits_engine::config::BenefitConfig;
/// use benefits_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use uuid::Uuid;
///
/// let employee = Employee {
///     id: Uuid::nil(),
///     first_name: "LeBron".to_string(),
///     last_name: "James".to_string(),
///     annual_salary: Decimal::from(80_000),
///     date_of_birth: NaiveDate::from_ymd_opt(1984, 12, 30).unwrap(),
///     dependents: vec![],
/// };
///
/// let result = calculate_base_salary(&employee, &BenefitConfig::default(), 1);
/// assert_eq!(result.amount, Decimal::from_str("3076.92").unwrap());
/// ```
pub fn calculate_base_salary(
    employee: &Employee,
    config: &BenefitConfig,
    step_number: u32,
) -> BaseSalaryResult {
    let paychecks = Decimal::from(config.paychecks_per_year);
    let amount = round_currency(employee.annual_salary / paychecks);

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_salary".to_string(),
        rule_name: "Base Salary".to_string(),
        input: serde_json::json!({
            "annual_salary": employee.annual_salary.to_string(),
            "paychecks_per_year": config.paychecks_per_year
        }),
        output: serde_json::json!({
            "base_salary": amount.to_string()
        }),
        reasoning: format!(
            "${} / {} paychecks = ${}",
            employee.annual_salary.normalize(),
            config.paychecks_per_year,
            amount
        ),
    };

    BaseSalaryResult { amount, audit_step }
}
