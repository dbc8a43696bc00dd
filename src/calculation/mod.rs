//! Salary calculation for the payroll register.
//!
//! This module maps an employee's [`Compensation`] to a net salary. Salaried
//! employees receive allowances and pay a flat tax; hourly employees are paid
//! hours times rate with no additions or deductions. All functions are pure.
//!
//! Arithmetic is checked: an amount outside the range of [`Decimal`] yields
//! [`PayrollError::AmountOutOfRange`] instead of a panic.

mod hourly;
mod rounding;
mod salaried;

pub use hourly::calculate_hourly;
pub use rounding::{DISPLAY_DECIMAL_PLACES, format_amount};
pub use salaried::calculate_salaried;

use rust_decimal::Decimal;

use crate::config::PayPolicy;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Compensation, SalaryBreakdown};

/// Turns the result of a checked decimal operation into a `PayrollResult`.
pub(crate) fn in_range(value: Option<Decimal>, step: &str) -> PayrollResult<Decimal> {
    value.ok_or_else(|| PayrollError::AmountOutOfRange {
        step: step.to_string(),
    })
}

/// Computes the itemised salary breakdown for a compensation variant.
///
/// `policy` only affects salaried employees.
pub fn calculate_breakdown(
    compensation: &Compensation,
    policy: &PayPolicy,
) -> PayrollResult<SalaryBreakdown> {
    match compensation {
        Compensation::Salaried { monthly_salary } => calculate_salaried(*monthly_salary, policy),
        Compensation::Hourly {
            hours_worked,
            hourly_rate,
        } => calculate_hourly(*hours_worked, *hourly_rate),
    }
}

/// Computes the net salary for a compensation variant.
///
/// # Examples
///
/// ```
/// use payroll_register::calculation::calculate_net_salary;
/// use payroll_register::config::PayPolicy;
/// use payroll_register::models::Compensation;
/// use rust_decimal::Decimal;
///
/// let hourly = Compensation::Hourly { hours_worked: 40, hourly_rate: Decimal::new(500, 0) };
/// assert_eq!(calculate_net_salary(&hourly, &PayPolicy::default())?, Decimal::new(20000, 0));
/// # Ok::<(), payroll_register::error::PayrollError>(())
/// ```
pub fn calculate_net_salary(compensation: &Compensation, policy: &PayPolicy) -> PayrollResult<Decimal> {
    Ok(calculate_breakdown(compensation, policy)?.net_salary)
}
