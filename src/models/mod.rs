//! Core data models for the Benefits Deduction Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod paycheck;

pub use employee::{Dependent, Employee, Relationship};
pub use paycheck::{AuditStep, AuditTrace, AuditWarning, CalculationResult, PaycheckBreakdown};
