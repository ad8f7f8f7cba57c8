//! Salary-based benefit surcharge calculation functionality.
//!
//! Employees whose annual salary exceeds the configured threshold incur an
//! additional benefit cost of a fixed fraction of their yearly salary,
//! spread across the paychecks of a year.

use rust_decimal::Decimal;

use crate::config::BenefitConfig;
use crate::models::{AuditStep, Employee};

use super::rounding::round_currency;

/// The result of the salary surcharge calculation, including the audit
/// step.
#[derive(Debug, Clone)]
pub struct SalarySurchargeResult {
    /// The surcharge per paycheck, zero when the salary is at or below the
    /// threshold.
    pub amount: Decimal,
    /// Whether the surcharge applied to this employee.
    pub applied: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the salary-based benefit surcharge per paycheck.
///
/// The comparison is strictly greater-than: an employee exactly at the
/// threshold does not incur the surcharge. When it applies, the surcharge
/// is the configured rate of the full annual salary divided by the paycheck
/// count, rounded to two decimal places.
///
/// # Arguments
///
/// * `employee` - The employee whose salary is being checked
/// * `config` - The benefit configuration supplying the threshold and rate
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::calculate_salary_surcharge;
/// use benefits_engine::config::BenefitConfig;
/// use benefits_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use uuid::Uuid;
///
/// let employee = Employee {
///     id: Uuid::nil(),
///     first_name: "Michael".to_string(),
///     last_name: "Jordan".to_string(),
///     annual_salary: Decimal::from(260_000),
///     date_of_birth: NaiveDate::from_ymd_opt(1963, 2, 17).unwrap(),
///     dependents: vec![],
/// };
///
/// let result = calculate_salary_surcharge(&employee, &BenefitConfig::default(), 1);
/// assert!(result.applied);
/// assert_eq!(result.amount, Decimal::from_str("200.00").unwrap());
/// ```
pub fn calculate_salary_surcharge(
    employee: &Employee,
    config: &BenefitConfig,
    step_number: u32,
) -> SalarySurchargeResult {
    let applied = employee.annual_salary > config.annual_salary_threshold;

    let amount = if applied {
        let paychecks = Decimal::from(config.paychecks_per_year);
        round_currency(employee.annual_salary * config.annual_salary_cost_rate / paychecks)
    } else {
        Decimal::ZERO
    };

    let reasoning = if applied {
        format!(
            "${} > ${} threshold: ${} x {} / {} paychecks = ${}",
            employee.annual_salary.normalize(),
            config.annual_salary_threshold.normalize(),
            employee.annual_salary.normalize(),
            config.annual_salary_cost_rate.normalize(),
            config.paychecks_per_year,
            amount
        )
    } else {
        format!(
            "${} does not exceed ${} threshold, no surcharge",
            employee.annual_salary.normalize(),
            config.annual_salary_threshold.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "salary_surcharge".to_string(),
        rule_name: "Salary Benefit Surcharge".to_string(),
        input: serde_json::json!({
            "annual_salary": employee.annual_salary.to_string(),
            "annual_salary_threshold": config.annual_salary_threshold.to_string(),
            "annual_salary_cost_rate": config.annual_salary_cost_rate.to_string()
        }),
        output: serde_json::json!({
            "salary_benefit_cost": amount.to_string(),
            "surcharge_applied": applied
        }),
        reasoning,
    };

    SalarySurchargeResult {
        amount,
        applied,
        audit_step,
    }
}
