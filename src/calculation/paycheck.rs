//! Paycheck calculation orchestration.
//!
//! This module ties the individual benefit-cost rules together into the
//! single entry point that produces a [`CalculationResult`] for an
//! employee.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::BenefitConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditTrace, CalculationResult, Employee, PaycheckBreakdown};

use super::base_benefit::calculate_base_benefit_cost;
use super::base_salary::calculate_base_salary;
use super::dependent_cost::calculate_dependent_cost;
use super::rounding::round_currency;
use super::salary_surcharge::calculate_salary_surcharge;

/// Calculates the per-paycheck net-pay breakdown for an employee.
///
/// Applies the benefit-cost rules in order: base salary per paycheck, the
/// employee's flat benefit cost, the salary-based surcharge, and the
/// dependent benefit cost. Each sub-result is rounded to two decimal places
/// before the net pay is derived from them.
///
/// Dependent ages are measured against `as_of`, supplied by the caller so
/// the calculation stays pure: no clock is read anywhere in the engine, and
/// identical inputs always produce an identical result.
///
/// # Arguments
///
/// * `employee` - The employee snapshot, with dependents resolved
/// * `as_of` - The evaluation date dependent ages are measured against
/// * `config` - The benefit-cost rule set
///
/// # Errors
///
/// - [`EngineError::InvalidConfiguration`] when the configuration fails
///   validation (e.g., a zero paycheck count)
/// - [`EngineError::InvalidEmployee`] when the annual salary is negative
///
/// Every other input is a valid boundary case, not an error: zero salary,
/// zero dependents, a salary exactly at the threshold, and a dependent
/// exactly at the age threshold all produce a normal result.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::calculate_paycheck;
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
///     annual_salary: Decimal::from(26_000),
///     date_of_birth: NaiveDate::from_ymd_opt(1984, 12, 30).unwrap(),
///     dependents: vec![],
/// };
/// let as_of = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
///
/// let result = calculate_paycheck(&employee, as_of, &BenefitConfig::default()).unwrap();
/// assert_eq!(result.breakdown.base_salary, Decimal::from_str("1000.00").unwrap());
/// ```
pub fn calculate_paycheck(
    employee: &Employee,
    as_of: NaiveDate,
    config: &BenefitConfig,
) -> EngineResult<CalculationResult> {
    config.validate()?;

    if employee.annual_salary < Decimal::ZERO {
        return Err(EngineError::InvalidEmployee {
            field: "annual_salary".to_string(),
            message: "cannot be negative".to_string(),
        });
    }

    let mut steps = Vec::with_capacity(4);
    let mut step_number: u32 = 1;

    let base_salary = calculate_base_salary(employee, config, step_number);
    debug!(employee_id = %employee.id, base_salary = %base_salary.amount, "Calculated base salary");
    steps.push(base_salary.audit_step);
    step_number += 1;

    let base_benefit = calculate_base_benefit_cost(config, step_number);
    debug!(employee_id = %employee.id, base_benefit_cost = %base_benefit.amount, "Calculated base benefit cost");
    steps.push(base_benefit.audit_step);
    step_number += 1;

    let surcharge = calculate_salary_surcharge(employee, config, step_number);
    debug!(
        employee_id = %employee.id,
        salary_benefit_cost = %surcharge.amount,
        applied = surcharge.applied,
        "Calculated salary surcharge"
    );
    steps.push(surcharge.audit_step);
    step_number += 1;

    let dependent_cost = calculate_dependent_cost(&employee.dependents, as_of, config, step_number);
    debug!(
        employee_id = %employee.id,
        dependent_benefit_cost = %dependent_cost.amount,
        dependent_count = dependent_cost.dependent_count,
        over_threshold_count = dependent_cost.over_threshold_count,
        "Calculated dependent benefit cost"
    );
    steps.push(dependent_cost.audit_step);

    // Inputs are already rounded, so this final rounding only guards the
    // subtraction itself.
    let net_pay = round_currency(
        base_salary.amount - base_benefit.amount - surcharge.amount - dependent_cost.amount,
    );

    Ok(CalculationResult {
        as_of,
        breakdown: PaycheckBreakdown {
            employee_id: employee.id,
            base_salary: base_salary.amount,
            base_benefit_cost: base_benefit.amount,
            dependent_benefit_cost: dependent_cost.amount,
            salary_benefit_cost: surcharge.amount,
            net_pay,
        },
        audit_trace: AuditTrace {
            steps,
            warnings: dependent_cost.warnings,
        },
    })
}
