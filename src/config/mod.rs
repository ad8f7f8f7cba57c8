//! Configuration loading and management for the Benefits Deduction Engine.
//!
//! This module provides the strongly-typed benefit-cost parameters and the
//! functionality to load them from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use benefits_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/benefits.yaml").unwrap();
//! println!("Paychecks per year: {}", loader.config().paychecks_per_year);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::BenefitConfig;
