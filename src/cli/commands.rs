//! Menu action handlers.
//!
//! Each handler receives the register explicitly and writes its user-facing
//! result to `out`. Not-found and out-of-range outcomes are reported here and
//! never surface as errors; only stream failures are returned.

use std::io::Write;

use crate::error::{PayrollError, PayrollResult};
use crate::models::Employee;
use crate::register::{EmployeeListing, PayrollRegister};

use super::args::SlipFormat;

pub(crate) const ADDED: &str = "✅ Employee Added Successfully!";
pub(crate) const REMOVED: &str = "🗑 Employee Removed.";
pub(crate) const REMOVE_NOT_FOUND: &str = "❌ Employee not found!";
pub(crate) const LIST_HEADING: &str = "--- 👥 Employee List ---";
pub(crate) const LIST_EMPTY: &str = "No employees found.";
pub(crate) const SLIP_NOT_FOUND: &str = "❌ Employee ID not found.";
pub(crate) const SLIP_OUT_OF_RANGE: &str = "❌ Salary too large to calculate.";

/// How pay slips are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlipOptions {
    /// Currency label for the text rendering.
    pub currency: String,
    /// Text block or JSON.
    pub format: SlipFormat,
}

impl Default for SlipOptions {
    fn default() -> Self {
        Self {
            currency: "Rs.".to_string(),
            format: SlipFormat::Text,
        }
    }
}

/// Adds `employee` and confirms.
pub fn add_employee<W: Write>(
    register: &mut PayrollRegister,
    employee: Employee,
    out: &mut W,
) -> PayrollResult<()> {
    register.add(employee);
    writeln!(out, "{}", ADDED)?;
    Ok(())
}

/// Removes the first employee with `id`, reporting either outcome.
pub fn remove_employee<W: Write>(
    register: &mut PayrollRegister,
    id: i64,
    out: &mut W,
) -> PayrollResult<()> {
    match register.remove(id) {
        Ok(_) => writeln!(out, "{}", REMOVED)?,
        Err(PayrollError::EmployeeNotFound { .. }) => writeln!(out, "{}", REMOVE_NOT_FOUND)?,
        Err(err) => return Err(err),
    }
    Ok(())
}

/// Prints every employee, one per line, or the empty message.
pub fn list_employees<W: Write>(register: &PayrollRegister, out: &mut W) -> PayrollResult<()> {
    writeln!(out)?;
    writeln!(out, "{}", LIST_HEADING)?;
    match register.list_all() {
        EmployeeListing::Empty => writeln!(out, "{}", LIST_EMPTY)?,
        EmployeeListing::Employees(employees) => {
            for employee in employees {
                writeln!(out, "{}", employee)?;
            }
        }
    }
    Ok(())
}

/// Prints the pay slip for `id`, or a message when there is none to print.
pub fn print_pay_slip<W: Write>(
    register: &PayrollRegister,
    id: i64,
    options: &SlipOptions,
    out: &mut W,
) -> PayrollResult<()> {
    let slip = match register.generate_pay_slip(id) {
        Ok(slip) => slip,
        Err(PayrollError::EmployeeNotFound { .. }) => {
            writeln!(out, "{}", SLIP_NOT_FOUND)?;
            return Ok(());
        }
        Err(PayrollError::AmountOutOfRange { .. }) => {
            writeln!(out, "{}", SLIP_OUT_OF_RANGE)?;
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    match options.format {
        SlipFormat::Text => {
            writeln!(out)?;
            writeln!(out, "{}", slip.render(&options.currency))?;
            writeln!(out)?;
        }
        SlipFormat::Json => {
            let json = slip.to_json().map_err(std::io::Error::from)?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}
