//! Hourly (part-time) pay calculation.

use rust_decimal::Decimal;

use super::in_range;
use crate::error::PayrollResult;
use crate::models::{CalculationStep, SalaryBreakdown};

/// Computes the salary breakdown for an hourly employee.
///
/// Net salary is `hours_worked × hourly_rate`. Hourly employees receive no
/// allowances and no tax is deducted, so gross and net pay are equal. A
/// product beyond the range of [`Decimal`] is reported as
/// [`AmountOutOfRange`](crate::error::PayrollError::AmountOutOfRange).
///
/// # Examples
///
/// ```
/// use payroll_register::calculation::calculate_hourly;
/// use rust_decimal::Decimal;
///
/// let breakdown = calculate_hourly(40, Decimal::new(500, 0))?;
/// assert_eq!(breakdown.net_salary, Decimal::new(20000, 0));
/// assert!(breakdown.allowances.is_empty());
/// # Ok::<(), payroll_register::error::PayrollError>(())
/// ```
pub fn calculate_hourly(hours_worked: i64, hourly_rate: Decimal) -> PayrollResult<SalaryBreakdown> {
    let base_pay = in_range(Decimal::from(hours_worked).checked_mul(hourly_rate), "hourly_pay")?;

    let step = CalculationStep {
        step_number: 1,
        rule_id: "hourly_pay".to_string(),
        rule_name: "Hourly Pay".to_string(),
        input: serde_json::json!({
            "hours_worked": hours_worked,
            "hourly_rate": hourly_rate.to_string()
        }),
        output: serde_json::json!({ "net_salary": base_pay.to_string() }),
        reasoning: format!(
            "{} hours at {} per hour = {}, no allowances or tax",
            hours_worked, hourly_rate, base_pay
        ),
    };

    Ok(SalaryBreakdown {
        base_pay,
        allowances: vec![],
        gross_pay: base_pay,
        tax: Decimal::ZERO,
        net_salary: base_pay,
        steps: vec![step],
    })
}
