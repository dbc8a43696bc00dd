//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::{PayPolicy, PayrollConfig};

/// Loads and provides access to the payroll configuration.
///
/// # File Format
///
/// ```text
/// policy:
///   hra_rate: "0.20"
///   da_rate: "0.10"
///   tax_rate: "0.10"
/// display:
///   currency: "Rs."
/// ```
///
/// Every key is optional.
///
/// # Example
///
/// ```no_run
/// use payroll_register::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml")?;
/// println!("Tax rate: {}", loader.policy().tax_rate);
/// # Ok::<(), payroll_register::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown value types (`ConfigParseError`)
    /// - A policy rate lies outside `[0, 1]` (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses configuration from YAML text.
    ///
    /// `origin` names the source in error messages.
    pub fn from_yaml_str(content: &str, origin: &str) -> PayrollResult<Self> {
        let config: PayrollConfig =
            serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        config.policy.validate()?;
        debug!(
            origin,
            hra_rate = %config.policy.hra_rate,
            da_rate = %config.policy.da_rate,
            tax_rate = %config.policy.tax_rate,
            "Loaded payroll configuration"
        );

        Ok(Self { config })
    }

    /// Returns a loader holding the built-in defaults.
    pub fn defaults() -> Self {
        Self::default()
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the salary policy rates.
    pub fn policy(&self) -> &PayPolicy {
        &self.config.policy
    }

    /// Returns the currency label printed on pay slips.
    pub fn currency(&self) -> &str {
        &self.config.display.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> String {
        format!("{}/config/payroll.yaml", env!("CARGO_MANIFEST_DIR"))
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_sample_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.policy(), &PayPolicy::default());
        assert_eq!(loader.currency(), "Rs.");
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/payroll.yaml");

        match result {
            Err(PayrollError::ConfigNotFound { path }) => {
                assert!(path.contains("payroll.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let loader = ConfigLoader::from_yaml_str("display:\n  currency: \"INR\"\n", "inline")
            .unwrap();

        assert_eq!(loader.currency(), "INR");
        assert_eq!(loader.policy(), &PayPolicy::default());
    }

    #[test]
    fn test_policy_overrides_are_applied() {
        let yaml = "policy:\n  hra_rate: \"0.25\"\n  tax_rate: \"0.05\"\n";
        let loader = ConfigLoader::from_yaml_str(yaml, "inline").unwrap();

        assert_eq!(loader.policy().hra_rate, dec("0.25"));
        assert_eq!(loader.policy().da_rate, dec("0.10"));
        assert_eq!(loader.policy().tax_rate, dec("0.05"));
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("policy: [unclosed", "broken.yaml");

        match result {
            Err(PayrollError::ConfigParseError { path, .. }) => {
                assert_eq!(path, "broken.yaml");
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_rate_is_rejected() {
        let result = ConfigLoader::from_yaml_str("policy:\n  tax_rate: \"2\"\n", "inline");
        assert!(matches!(result, Err(PayrollError::InvalidConfig { .. })));
    }

    #[test]
    fn test_defaults_match_default_config() {
        let loader = ConfigLoader::defaults();
        assert_eq!(loader.config(), &PayrollConfig::default());
    }
}
