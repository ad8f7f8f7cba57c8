//! Paycheck result models for the Benefits Deduction Engine.
//!
//! This module contains the [`PaycheckBreakdown`] type and the
//! [`CalculationResult`] aggregate that captures all outputs from a paycheck
//! calculation, including the audit trace.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The per-paycheck net-pay breakdown for an employee.
///
/// Every monetary field is rounded to two decimal places independently
/// before being combined into `net_pay`.
///
/// # Example
///
/// ```
/// use benefits_engine::models::PaycheckBreakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use uuid::Uuid;
///
/// let breakdown = PaycheckBreakdown {
///     employee_id: Uuid::nil(),
///     base_salary: Decimal::from_str("3076.92").unwrap(),
///     base_benefit_cost: Decimal::from_str("461.54").unwrap(),
///     dependent_benefit_cost: Decimal::from_str("646.15").unwrap(),
///     salary_benefit_cost: Decimal::ZERO,
///     net_pay: Decimal::from_str("1969.23").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaycheckBreakdown {
    /// The ID of the employee this paycheck is for.
    pub employee_id: Uuid,
    /// The salary portion per paycheck, before benefit deductions.
    pub base_salary: Decimal,
    /// The employee's flat benefit cost per paycheck.
    pub base_benefit_cost: Decimal,
    /// The total dependent benefit cost per paycheck.
    pub dependent_benefit_cost: Decimal,
    /// The salary-based surcharge per paycheck, zero for employees at or
    /// below the annual salary threshold.
    pub salary_benefit_cost: Decimal,
    /// The amount paid out after all deductions.
    pub net_pay: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule
/// application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// Records every decision made during the calculation process for
/// transparency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete result of a paycheck calculation.
///
/// Contains the net-pay breakdown together with the evaluation date the
/// dependent ages were measured against and the audit trace. The result
/// carries no clock reads or generated identifiers, so identical inputs
/// always produce an identical result.
///
/// # Example
///
/// ```
/// use benefits_engine::models::{AuditTrace, CalculationResult, PaycheckBreakdown};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = CalculationResult {
///     as_of: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     breakdown: PaycheckBreakdown {
///         employee_id: Uuid::nil(),
///         base_salary: Decimal::ZERO,
///         base_benefit_cost: Decimal::ZERO,
///         dependent_benefit_cost: Decimal::ZERO,
///         salary_benefit_cost: Decimal::ZERO,
///         net_pay: Decimal::ZERO,
///     },
///     audit_trace: AuditTrace {
///         steps: vec![],
///         warnings: vec![],
///     },
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The evaluation date dependent ages were measured against.
    pub as_of: NaiveDate,
    /// The per-paycheck net-pay breakdown.
    pub breakdown: PaycheckBreakdown,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
