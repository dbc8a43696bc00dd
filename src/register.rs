//! The in-memory payroll register.
//!
//! [`PayrollRegister`] owns every [`Employee`] in insertion order. Lookups by
//! id scan the list front to back and the first match wins; ids are not
//! required to be unique.

use tracing::{debug, info, warn};

use crate::calculation::calculate_breakdown;
use crate::config::PayPolicy;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, PaySlip};

/// The result of listing the register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeListing<'a> {
    /// The register holds no employees.
    Empty,
    /// All employees in insertion order. Never an empty slice.
    Employees(&'a [Employee]),
}

impl<'a> EmployeeListing<'a> {
    /// Returns the listed employees, or an empty slice for [`EmployeeListing::Empty`].
    pub fn employees(&self) -> &'a [Employee] {
        match *self {
            EmployeeListing::Empty => &[],
            EmployeeListing::Employees(employees) => employees,
        }
    }

    /// Returns true for [`EmployeeListing::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, EmployeeListing::Empty)
    }
}

/// An ordered, in-memory collection of employees.
///
/// # Example
///
/// ```
/// use payroll_register::register::PayrollRegister;
/// use payroll_register::models::Employee;
/// use rust_decimal::Decimal;
///
/// let mut register = PayrollRegister::new();
/// register.add(Employee::hourly("Rahul", 102, "Intern", 40, Decimal::new(500, 0)));
///
/// let slip = register.generate_pay_slip(102)?;
/// assert_eq!(slip.category_label(), "Part-Time");
/// assert_eq!(slip.net_salary_formatted, "20000.00");
///
/// register.remove(102)?;
/// assert!(register.list_all().is_empty());
/// # Ok::<(), payroll_register::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PayrollRegister {
    employees: Vec<Employee>,
    policy: PayPolicy,
}

impl PayrollRegister {
    /// Creates an empty register using the default pay policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty register that computes salaried pay with `policy`.
    pub fn with_policy(policy: PayPolicy) -> Self {
        Self {
            employees: Vec::new(),
            policy,
        }
    }

    /// Returns the pay policy used for pay slips.
    pub fn policy(&self) -> &PayPolicy {
        &self.policy
    }

    /// Appends an employee. Always succeeds, duplicate ids included.
    pub fn add(&mut self, employee: Employee) -> &Employee {
        info!(
            employee_id = employee.id(),
            category = %employee.category(),
            "Employee added"
        );
        let index = self.employees.len();
        self.employees.push(employee);
        &self.employees[index]
    }

    /// Removes the first employee whose id is `id` and returns it.
    ///
    /// Returns `EmployeeNotFound` when no employee matches, leaving the
    /// register untouched.
    pub fn remove(&mut self, id: i64) -> PayrollResult<Employee> {
        let position = self.position(id).ok_or_else(|| {
            debug!(employee_id = id, "Remove found no matching employee");
            PayrollError::EmployeeNotFound { id }
        })?;

        let removed = self.employees.remove(position);
        info!(employee_id = id, remaining = self.employees.len(), "Employee removed");
        Ok(removed)
    }

    /// Lists all employees in insertion order.
    pub fn list_all(&self) -> EmployeeListing<'_> {
        if self.employees.is_empty() {
            EmployeeListing::Empty
        } else {
            EmployeeListing::Employees(&self.employees)
        }
    }

    /// Returns the first employee whose id is `id`.
    pub fn find(&self, id: i64) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id() == id)
    }

    /// Generates a pay slip for the first employee whose id is `id`.
    ///
    /// Returns `EmployeeNotFound` when no employee matches and
    /// `AmountOutOfRange` when the employee's pay cannot be represented. The
    /// register is never modified.
    pub fn generate_pay_slip(&self, id: i64) -> PayrollResult<PaySlip> {
        let employee = self
            .find(id)
            .ok_or(PayrollError::EmployeeNotFound { id })?;

        let breakdown = calculate_breakdown(employee.compensation(), &self.policy)
            .inspect_err(|err| warn!(employee_id = id, error = %err, "Pay slip calculation failed"))?;
        let slip = PaySlip::new(employee, breakdown);
        info!(
            employee_id = id,
            slip_id = %slip.slip_id,
            net_salary = %slip.net_salary,
            "Pay slip generated"
        );
        Ok(slip)
    }

    /// Returns the number of employees held.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the register holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.employees.iter().position(|e| e.id() == id)
    }
}
