//! Pay slip model.
//!
//! A [`PaySlip`] is produced by the register for one employee and carries
//! the identity fields, the employment category, the computed salary
//! breakdown and the net salary already formatted for display.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::format_amount;

use super::{Employee, EmploymentCategory, SalaryBreakdown};

const RULE: &str = "==================================";
const DIVIDER: &str = "----------------------------------";

/// A generated pay slip.
///
/// # Example
///
/// ```
/// use payroll_register::calculation::calculate_breakdown;
/// use payroll_register::config::PayPolicy;
/// use payroll_register::models::{Employee, PaySlip};
/// use rust_decimal::Decimal;
///
/// let employee = Employee::salaried("Vikram", 101, "Manager", Decimal::new(50000, 0));
/// let breakdown = calculate_breakdown(employee.compensation(), &PayPolicy::default())?;
/// let slip = PaySlip::new(&employee, breakdown);
///
/// assert_eq!(slip.category_label(), "Full-Time");
/// assert_eq!(slip.net_salary_formatted, "58500.00");
/// # Ok::<(), payroll_register::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaySlip {
    /// Unique identifier for this slip.
    pub slip_id: Uuid,
    /// When the slip was generated.
    pub generated_at: DateTime<Utc>,
    /// The employee's id.
    pub employee_id: i64,
    /// The employee's name.
    pub name: String,
    /// The employee's designation.
    pub designation: String,
    /// Full-time or part-time.
    pub category: EmploymentCategory,
    /// The net salary at full precision.
    pub net_salary: Decimal,
    /// The net salary with exactly two fractional digits.
    pub net_salary_formatted: String,
    /// Itemised calculation behind the net salary.
    pub breakdown: SalaryBreakdown,
}

impl PaySlip {
    /// Builds a slip for `employee` from an already computed breakdown.
    pub fn new(employee: &Employee, breakdown: SalaryBreakdown) -> Self {
        let net_salary = breakdown.net_salary;
        Self {
            slip_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            employee_id: employee.id(),
            name: employee.name().to_string(),
            designation: employee.designation().to_string(),
            category: employee.category(),
            net_salary,
            net_salary_formatted: format_amount(net_salary),
            breakdown,
        }
    }

    /// Returns `"Full-Time"` or `"Part-Time"`.
    pub fn category_label(&self) -> &'static str {
        self.category.label()
    }

    /// Renders the slip as the text block printed by the command loop.
    ///
    /// `currency` is printed before the net salary (e.g. `"Rs."`).
    pub fn render(&self, currency: &str) -> String {
        let lines = [
            RULE.to_string(),
            "       🧾 SALARY PAY SLIP".to_string(),
            RULE.to_string(),
            format!("Employee ID   : {}", self.employee_id),
            format!("Name          : {}", self.name),
            format!("Designation   : {}", self.designation),
            DIVIDER.to_string(),
            format!("Type          : {}", self.category.description()),
            DIVIDER.to_string(),
            format!("💰 NET SALARY : {} {}", currency, self.net_salary_formatted),
            RULE.to_string(),
        ];
        lines.join("\n")
    }

    /// Renders the slip as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
