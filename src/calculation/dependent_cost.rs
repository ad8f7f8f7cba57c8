//! Dependent benefit cost aggregation functionality.
//!
//! Each dependent adds a base monthly cost, and dependents at or above the
//! configured age threshold add a further monthly surcharge on top of the
//! base cost. The combined monthly total is annualized and spread across
//! the paychecks of a year.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;

use crate::config::BenefitConfig;
use crate::models::{AuditStep, AuditWarning, Dependent};

use super::rounding::round_currency;

/// Months in a benefits year.
const MONTHS_PER_YEAR: u32 = 12;

/// The result of the dependent cost aggregation, including the audit step.
#[derive(Debug, Clone)]
pub struct DependentCostResult {
    /// The total dependent benefit cost per paycheck.
    pub amount: Decimal,
    /// How many dependents were counted.
    pub dependent_count: usize,
    /// How many dependents were at or above the age threshold.
    pub over_threshold_count: usize,
    /// Warnings for anomalous dependent records.
    pub warnings: Vec<AuditWarning>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the latest birthdate that puts a person at or above
/// `threshold_years` completed years of age on `as_of`.
///
/// Subtracting whole months keeps the day of month where possible and
/// clamps to the end of the month otherwise, so a Feb 29 birthdate measured
/// in a non-leap year resolves to Feb 28. Returns `None` when the cutoff
/// would fall before the representable date range, in which case no
/// birthdate can qualify.
fn age_threshold_cutoff(as_of: NaiveDate, threshold_years: u32) -> Option<NaiveDate> {
    as_of.checked_sub_months(Months::new(threshold_years.saturating_mul(MONTHS_PER_YEAR)))
}

/// Returns true when the dependent's age in completed years on `as_of` is
/// at least `threshold_years`.
///
/// A dependent who turns the threshold age exactly on `as_of` qualifies;
/// one born a day later does not.
pub fn is_at_or_over_age_threshold(
    date_of_birth: NaiveDate,
    as_of: NaiveDate,
    threshold_years: u32,
) -> bool {
    match age_threshold_cutoff(as_of, threshold_years) {
        Some(cutoff) => date_of_birth <= cutoff,
        None => false,
    }
}

/// Aggregates the dependent benefit cost per paycheck.
///
/// Every dependent contributes the base monthly cost; dependents at or
/// above the age threshold contribute the additional monthly cost on top of
/// the base, never instead of it. The combined monthly total is annualized,
/// divided by the paycheck count, and rounded to two decimal places once.
///
/// An empty dependent list yields exactly zero.
///
/// Dependents born after `as_of` still carry the base cost but are
/// reported as warnings, since a future birthdate usually means bad input
/// data upstream.
///
/// # Arguments
///
/// * `dependents` - The employee's dependents
/// * `as_of` - The evaluation date dependent ages are measured against
/// * `config` - The benefit configuration supplying costs and the threshold
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::calculate_dependent_cost;
/// use benefits_engine::config::BenefitConfig;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let as_of = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let result = calculate_dependent_cost(&[], as_of, &BenefitConfig::default(), 1);
/// assert_eq!(result.amount, Decimal::ZERO);
/// ```
pub fn calculate_dependent_cost(
    dependents: &[Dependent],
    as_of: NaiveDate,
    config: &BenefitConfig,
    step_number: u32,
) -> DependentCostResult {
    let dependent_count = dependents.len();
    let over_threshold_count = dependents
        .iter()
        .filter(|d| {
            is_at_or_over_age_threshold(d.date_of_birth, as_of, config.dependent_age_threshold)
        })
        .count();

    let warnings: Vec<AuditWarning> = dependents
        .iter()
        .filter(|d| d.date_of_birth > as_of)
        .map(|d| AuditWarning {
            code: "dependent_dob_in_future".to_string(),
            message: format!(
                "Dependent {} has date of birth {} after the evaluation date {}",
                d.id, d.date_of_birth, as_of
            ),
            severity: "low".to_string(),
        })
        .collect();

    let paychecks = Decimal::from(config.paychecks_per_year);
    let monthly_total = Decimal::from(dependent_count as u64)
        * config.dependent_base_benefit_monthly_cost
        + Decimal::from(over_threshold_count as u64)
            * config.dependent_additional_benefit_monthly_cost;
    let amount = round_currency(monthly_total * Decimal::from(MONTHS_PER_YEAR) / paychecks);

    let audit_step = AuditStep {
        step_number,
        rule_id: "dependent_cost".to_string(),
        rule_name: "Dependent Benefit Cost".to_string(),
        input: serde_json::json!({
            "dependent_count": dependent_count,
            "over_threshold_count": over_threshold_count,
            "dependent_base_benefit_monthly_cost":
                config.dependent_base_benefit_monthly_cost.to_string(),
            "dependent_additional_benefit_monthly_cost":
                config.dependent_additional_benefit_monthly_cost.to_string(),
            "dependent_age_threshold": config.dependent_age_threshold,
            "as_of": as_of.to_string()
        }),
        output: serde_json::json!({
            "dependent_benefit_cost": amount.to_string()
        }),
        reasoning: format!(
            "({} x ${} + {} x ${}) x 12 / {} paychecks = ${}",
            dependent_count,
            config.dependent_base_benefit_monthly_cost.normalize(),
            over_threshold_count,
            config.dependent_additional_benefit_monthly_cost.normalize(),
            config.paychecks_per_year,
            amount
        ),
    };

    DependentCostResult {
        amount,
        dependent_count,
        over_threshold_count,
        warnings,
        audit_step,
    }
}
