//! Salary breakdown models.
//!
//! This module contains the [`SalaryBreakdown`] type and its associated structures
//! that itemise a net salary calculation: base pay, allowances, tax, and the
//! sequence of calculation steps that produced them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An allowance added on top of base pay.
///
/// # Example
///
/// ```
/// use payroll_register::models::Allowance;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let hra = Allowance {
///     allowance_type: "hra".to_string(),
///     description: "House rent allowance".to_string(),
///     rate: Decimal::from_str("0.20").unwrap(),
///     amount: Decimal::from_str("10000.00").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allowance {
    /// The type of allowance (e.g., "hra", "da").
    #[serde(rename = "type")]
    pub allowance_type: String,
    /// A description of the allowance.
    pub description: String,
    /// The fraction of base pay this allowance represents.
    pub rate: Decimal,
    /// The allowance amount.
    pub amount: Decimal,
}

/// A single step recording one rule applied during a salary calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationStep {
    /// The sequential step number, starting at 1.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the step.
    pub reasoning: String,
}

/// Itemised result of computing one employee's net salary.
///
/// For hourly employees `allowances` is empty and `tax` is zero, so
/// `gross_pay == base_pay == net_salary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Pay before allowances (monthly salary, or hours times rate).
    pub base_pay: Decimal,
    /// Allowances added to base pay.
    pub allowances: Vec<Allowance>,
    /// Base pay plus all allowances.
    pub gross_pay: Decimal,
    /// Tax deducted from gross pay.
    pub tax: Decimal,
    /// Gross pay minus tax.
    pub net_salary: Decimal,
    /// The steps that produced this breakdown, in order.
    pub steps: Vec<CalculationStep>,
}

impl SalaryBreakdown {
    /// Returns the sum of all allowance amounts.
    pub fn allowances_total(&self) -> Decimal {
        self.allowances.iter().map(|a| a.amount).sum()
    }
}
