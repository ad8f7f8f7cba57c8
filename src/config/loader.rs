//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading benefit-cost
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::BenefitConfig;

/// Loads and provides access to the benefit configuration.
///
/// The `ConfigLoader` reads a single YAML configuration file and validates
/// it before handing it to the calculation layer.
///
/// # File Structure
///
/// ```text
/// config/
/// └── benefits.yaml   # Benefit-cost rule set
/// ```
///
/// # Example
///
/// ```no_run
/// use benefits_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/benefits.yaml").unwrap();
/// println!("Age threshold: {}", loader.config().dependent_age_threshold);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: BenefitConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./config/benefits.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or is missing a required field
    ///   (`ConfigParseError`)
    /// - The parsed configuration violates a semantic constraint
    ///   (`InvalidConfiguration`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use benefits_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/benefits.yaml")?;
    /// # Ok::<(), benefits_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Loads configuration from a file, falling back to the reference rule
    /// set when the file does not exist.
    ///
    /// Parse and validation failures of an existing file are still
    /// reported; only a missing file selects the default configuration.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!(
                path = %path.display(),
                "No configuration file found, using the reference rule set"
            );
            return Ok(Self {
                config: BenefitConfig::default(),
            });
        }
        Self::load(path)
    }

    /// Parses configuration from an in-memory YAML string.
    ///
    /// `origin` labels the source in error messages, typically the file
    /// path.
    pub fn parse(content: &str, origin: &str) -> EngineResult<Self> {
        let config: BenefitConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        config.validate()?;

        info!(
            origin = origin,
            paychecks_per_year = config.paychecks_per_year,
            "Loaded benefit configuration"
        );

        Ok(Self { config })
    }

    /// Returns the loaded benefit configuration.
    pub fn config(&self) -> &BenefitConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> BenefitConfig {
        self.config
    }
}
