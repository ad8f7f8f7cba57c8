//! Configuration types for benefit-cost rules.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from a YAML configuration file.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The benefit-cost parameters applied to every paycheck calculation.
///
/// The configuration is immutable once loaded. [`BenefitConfig::default`]
/// reproduces the reference business rule set, so callers that supply no
/// configuration file still get the documented behavior.
///
/// # Example
///
/// ```
/// use benefits_engine::config::BenefitConfig;
///
/// let config = BenefitConfig::default();
/// assert_eq!(config.paychecks_per_year, 26);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitConfig {
    /// How many paychecks an annual salary is spread across. Must be
    /// positive.
    pub paychecks_per_year: u32,
    /// The employee's flat monthly benefit cost.
    pub base_benefit_monthly_cost: Decimal,
    /// The monthly benefit cost added per dependent.
    pub dependent_base_benefit_monthly_cost: Decimal,
    /// The age in completed years at which a dependent starts incurring the
    /// additional monthly cost.
    pub dependent_age_threshold: u32,
    /// The monthly cost added per dependent at or above the age threshold.
    pub dependent_additional_benefit_monthly_cost: Decimal,
    /// Annual salaries strictly above this amount incur the salary
    /// surcharge.
    pub annual_salary_threshold: Decimal,
    /// The fraction of annual salary charged to employees above the salary
    /// threshold. Must be within [0, 1].
    pub annual_salary_cost_rate: Decimal,
}

impl Default for BenefitConfig {
    /// The reference rule set: 26 paychecks per year, $1,000/month base
    /// benefit cost, $600/month per dependent, $200/month additional for
    /// dependents aged 51 or over, and a 2% surcharge on salaries above
    /// $80,000.
    fn default() -> Self {
        Self {
            paychecks_per_year: 26,
            base_benefit_monthly_cost: Decimal::from(1000),
            dependent_base_benefit_monthly_cost: Decimal::from(600),
            dependent_age_threshold: 51,
            dependent_additional_benefit_monthly_cost: Decimal::from(200),
            annual_salary_threshold: Decimal::from(80_000),
            annual_salary_cost_rate: Decimal::new(2, 2),
        }
    }
}

impl BenefitConfig {
    /// Checks the semantic constraints on the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] when:
    /// - `paychecks_per_year` is zero
    /// - any monthly cost or the salary threshold is negative
    /// - `annual_salary_cost_rate` lies outside [0, 1]
    pub fn validate(&self) -> EngineResult<()> {
        if self.paychecks_per_year == 0 {
            return Err(EngineError::InvalidConfiguration {
                message: "paychecks_per_year must be positive".to_string(),
            });
        }

        let non_negative = [
            ("base_benefit_monthly_cost", self.base_benefit_monthly_cost),
            (
                "dependent_base_benefit_monthly_cost",
                self.dependent_base_benefit_monthly_cost,
            ),
            (
                "dependent_additional_benefit_monthly_cost",
                self.dependent_additional_benefit_monthly_cost,
            ),
            ("annual_salary_threshold", self.annual_salary_threshold),
        ];
        for (field, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidConfiguration {
                    message: format!("{field} cannot be negative"),
                });
            }
        }

        if self.annual_salary_cost_rate < Decimal::ZERO
            || self.annual_salary_cost_rate > Decimal::ONE
        {
            return Err(EngineError::InvalidConfiguration {
                message: "annual_salary_cost_rate must be within [0, 1]".to_string(),
            });
        }

        Ok(())
    }
}
