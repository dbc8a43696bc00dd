//! Salaried (full-time) pay calculation.
//!
//! A salaried employee's net salary is the monthly salary plus house rent and
//! dearness allowances, less a flat tax on the resulting gross pay.

use rust_decimal::Decimal;

use super::in_range;
use crate::config::PayPolicy;
use crate::error::PayrollResult;
use crate::models::{Allowance, CalculationStep, SalaryBreakdown};

/// Computes the salary breakdown for a salaried employee.
///
/// The calculation proceeds in five steps:
/// 1. `hra = hra_rate × monthly_salary`
/// 2. `da = da_rate × monthly_salary`
/// 3. `gross = monthly_salary + hra + da`
/// 4. `tax = tax_rate × gross`
/// 5. `net = gross − tax`
///
/// With the default policy (20% HRA, 10% DA, 10% tax) the net salary is
/// exactly `1.17 × monthly_salary`. Negative salaries are not rejected and
/// flow through the same formula. A salary large enough to push any step past
/// the range of [`Decimal`] returns [`PayrollError::AmountOutOfRange`].
///
/// [`PayrollError::AmountOutOfRange`]: crate::error::PayrollError::AmountOutOfRange
///
/// # Examples
///
/// ```
/// use payroll_register::calculation::calculate_salaried;
/// use payroll_register::config::PayPolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = calculate_salaried(Decimal::from_str("50000").unwrap(), &PayPolicy::default())?;
/// assert_eq!(breakdown.gross_pay, Decimal::from_str("65000").unwrap());
/// assert_eq!(breakdown.tax, Decimal::from_str("6500").unwrap());
/// assert_eq!(breakdown.net_salary, Decimal::from_str("58500").unwrap());
/// # Ok::<(), payroll_register::error::PayrollError>(())
/// ```
pub fn calculate_salaried(
    monthly_salary: Decimal,
    policy: &PayPolicy,
) -> PayrollResult<SalaryBreakdown> {
    let hra = in_range(monthly_salary.checked_mul(policy.hra_rate), "hra")?;
    let da = in_range(monthly_salary.checked_mul(policy.da_rate), "da")?;
    let gross_pay = in_range(
        monthly_salary
            .checked_add(hra)
            .and_then(|sum| sum.checked_add(da)),
        "gross_pay",
    )?;
    let tax = in_range(gross_pay.checked_mul(policy.tax_rate), "income_tax")?;
    let net_salary = in_range(gross_pay.checked_sub(tax), "net_salary")?;

    let steps = vec![
        CalculationStep {
            step_number: 1,
            rule_id: "hra".to_string(),
            rule_name: "House Rent Allowance".to_string(),
            input: serde_json::json!({
                "monthly_salary": monthly_salary.to_string(),
                "rate": policy.hra_rate.to_string()
            }),
            output: serde_json::json!({ "amount": hra.to_string() }),
            reasoning: format!(
                "HRA of {} at {} of monthly salary {}",
                hra, policy.hra_rate, monthly_salary
            ),
        },
        CalculationStep {
            step_number: 2,
            rule_id: "da".to_string(),
            rule_name: "Dearness Allowance".to_string(),
            input: serde_json::json!({
                "monthly_salary": monthly_salary.to_string(),
                "rate": policy.da_rate.to_string()
            }),
            output: serde_json::json!({ "amount": da.to_string() }),
            reasoning: format!(
                "DA of {} at {} of monthly salary {}",
                da, policy.da_rate, monthly_salary
            ),
        },
        CalculationStep {
            step_number: 3,
            rule_id: "gross_pay".to_string(),
            rule_name: "Gross Pay".to_string(),
            input: serde_json::json!({
                "monthly_salary": monthly_salary.to_string(),
                "hra": hra.to_string(),
                "da": da.to_string()
            }),
            output: serde_json::json!({ "gross_pay": gross_pay.to_string() }),
            reasoning: format!("Gross pay {} = {} + {} + {}", gross_pay, monthly_salary, hra, da),
        },
        CalculationStep {
            step_number: 4,
            rule_id: "income_tax".to_string(),
            rule_name: "Income Tax".to_string(),
            input: serde_json::json!({
                "gross_pay": gross_pay.to_string(),
                "rate": policy.tax_rate.to_string()
            }),
            output: serde_json::json!({ "tax": tax.to_string() }),
            reasoning: format!(
                "Tax of {} at {} of gross pay {}",
                tax, policy.tax_rate, gross_pay
            ),
        },
        CalculationStep {
            step_number: 5,
            rule_id: "net_salary".to_string(),
            rule_name: "Net Salary".to_string(),
            input: serde_json::json!({
                "gross_pay": gross_pay.to_string(),
                "tax": tax.to_string()
            }),
            output: serde_json::json!({ "net_salary": net_salary.to_string() }),
            reasoning: format!("Net salary {} = {} - {}", net_salary, gross_pay, tax),
        },
    ];

    Ok(SalaryBreakdown {
        base_pay: monthly_salary,
        allowances: vec![
            Allowance {
                allowance_type: "hra".to_string(),
                description: "House rent allowance".to_string(),
                rate: policy.hra_rate,
                amount: hra,
            },
            Allowance {
                allowance_type: "da".to_string(),
                description: "Dearness allowance".to_string(),
                rate: policy.da_rate,
                amount: da,
            },
        ],
        gross_pay,
        tax,
        net_salary,
        steps,
    })
}
