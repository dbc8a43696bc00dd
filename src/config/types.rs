//! Configuration types for the payroll register.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section is
//! optional; missing values fall back to the built-in pay policy.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Rates applied when computing a salaried employee's net salary.
///
/// Rates are fractions of the relevant amount: allowances are taken from the
/// monthly salary, tax from the gross pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayPolicy {
    /// House rent allowance as a fraction of monthly salary.
    pub hra_rate: Decimal,
    /// Dearness allowance as a fraction of monthly salary.
    pub da_rate: Decimal,
    /// Tax as a fraction of gross pay.
    pub tax_rate: Decimal,
}

impl Default for PayPolicy {
    fn default() -> Self {
        Self {
            hra_rate: Decimal::new(20, 2),
            da_rate: Decimal::new(10, 2),
            tax_rate: Decimal::new(10, 2),
        }
    }
}

impl PayPolicy {
    /// Checks that every rate lies in `[0, 1]`.
    pub fn validate(&self) -> PayrollResult<()> {
        for (field, rate) in [
            ("hra_rate", self.hra_rate),
            ("da_rate", self.da_rate),
            ("tax_rate", self.tax_rate),
        ] {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(PayrollError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("must be between 0 and 1, got {}", rate),
                });
            }
        }
        Ok(())
    }
}

/// Display options for printed output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Currency label printed before the net salary.
    pub currency: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: "Rs.".to_string(),
        }
    }
}

/// The complete payroll configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Salary policy rates.
    pub policy: PayPolicy,
    /// Output display options.
    pub display: DisplayConfig,
}
