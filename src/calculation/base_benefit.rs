//! Employee base benefit cost calculation functionality.
//!
//! Every employee carries a flat monthly benefit cost. This module spreads
//! that cost as evenly as possible across the paychecks of a year.

use rust_decimal::Decimal;

use crate::config::BenefitConfig;
use crate::models::AuditStep;

use super::rounding::round_currency;

/// Months in a benefits year.
const MONTHS_PER_YEAR: u32 = 12;

/// The result of the base benefit cost calculation, including the audit
/// step.
#[derive(Debug, Clone)]
pub struct BaseBenefitResult {
    /// The employee's flat benefit cost per paycheck.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the employee's flat benefit cost per paycheck.
///
/// The monthly cost is annualized and divided by the paycheck count, then
/// rounded to two decimal places. The cost depends only on the
/// configuration, not on the employee.
///
/// # Arguments
///
/// * `config` - The benefit configuration supplying the monthly cost and
///   paycheck count
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::calculate_base_benefit_cost;
/// use benefits_engine::config::BenefitConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_base_benefit_cost(&BenefitConfig::default(), 1);
/// assert_eq!(result.amount, Decimal::from_str("461.54").unwrap());
/// ```
pub fn calculate_base_benefit_cost(config: &BenefitConfig, step_number: u32) -> BaseBenefitResult {
    let paychecks = Decimal::from(config.paychecks_per_year);
    let annual_cost = config.base_benefit_monthly_cost * Decimal::from(MONTHS_PER_YEAR);
    let amount = round_currency(annual_cost / paychecks);

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_benefit_cost".to_string(),
        rule_name: "Base Benefit Cost".to_string(),
        input: serde_json::json!({
            "base_benefit_monthly_cost": config.base_benefit_monthly_cost.to_string(),
            "paychecks_per_year": config.paychecks_per_year
        }),
        output: serde_json::json!({
            "base_benefit_cost": amount.to_string()
        }),
        reasoning: format!(
            "${} x 12 / {} paychecks = ${}",
            config.base_benefit_monthly_cost.normalize(),
            config.paychecks_per_year,
            amount
        ),
    };

    BaseBenefitResult { amount, audit_step }
}
