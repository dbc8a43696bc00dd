//! Employee model and related types.
//!
//! This module defines the [`Employee`] record, the [`Compensation`] variant
//! that decides how an employee is paid, and the [`EmploymentCategory`]
//! derived from it.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How an employee is paid.
///
/// The variant is chosen when the employee is created and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Compensation {
    /// A fixed monthly salary, subject to allowances and a flat tax.
    Salaried {
        /// The basic monthly salary before allowances and tax.
        monthly_salary: Decimal,
    },
    /// Hours worked times an hourly rate, with no allowances or deductions.
    Hourly {
        /// The number of hours worked in the pay period.
        hours_worked: i64,
        /// The rate paid per hour.
        hourly_rate: Decimal,
    },
}

impl Compensation {
    /// Returns the employment category implied by this compensation.
    pub fn category(&self) -> EmploymentCategory {
        match self {
            Compensation::Salaried { .. } => EmploymentCategory::FullTime,
            Compensation::Hourly { .. } => EmploymentCategory::PartTime,
        }
    }
}

/// The employment category shown on pay slips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentCategory {
    /// Salaried employees.
    FullTime,
    /// Hourly employees.
    PartTime,
}

impl EmploymentCategory {
    /// Returns the short label, `"Full-Time"` or `"Part-Time"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_register::models::EmploymentCategory;
    ///
    /// assert_eq!(EmploymentCategory::FullTime.label(), "Full-Time");
    /// assert_eq!(EmploymentCategory::PartTime.label(), "Part-Time");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentCategory::FullTime => "Full-Time",
            EmploymentCategory::PartTime => "Part-Time",
        }
    }

    /// Returns the label together with a note on how pay is computed.
    pub fn description(&self) -> &'static str {
        match self {
            EmploymentCategory::FullTime => "Full-Time (Tax/HRA Applied)",
            EmploymentCategory::PartTime => "Part-Time (Hourly)",
        }
    }
}

impl fmt::Display for EmploymentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An employee held by the payroll register.
///
/// All fields are fixed at construction; only read accessors are exposed.
/// The `id` is the lookup key but is not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    id: i64,
    name: String,
    designation: String,
    compensation: Compensation,
}

impl Employee {
    /// Creates an employee with the given compensation.
    pub fn new(
        name: impl Into<String>,
        id: i64,
        designation: impl Into<String>,
        compensation: Compensation,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            designation: designation.into(),
            compensation,
        }
    }

    /// Creates a salaried (full-time) employee.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_register::models::{Employee, EmploymentCategory};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::salaried("Vikram", 101, "Manager", Decimal::new(50000, 0));
    /// assert_eq!(employee.category(), EmploymentCategory::FullTime);
    /// assert_eq!(employee.to_string(), "ID: 101 | Name: Vikram | Role: Manager");
    /// ```
    pub fn salaried(
        name: impl Into<String>,
        id: i64,
        designation: impl Into<String>,
        monthly_salary: Decimal,
    ) -> Self {
        Self::new(
            name,
            id,
            designation,
            Compensation::Salaried { monthly_salary },
        )
    }

    /// Creates an hourly (part-time) employee.
    pub fn hourly(
        name: impl Into<String>,
        id: i64,
        designation: impl Into<String>,
        hours_worked: i64,
        hourly_rate: Decimal,
    ) -> Self {
        Self::new(
            name,
            id,
            designation,
            Compensation::Hourly {
                hours_worked,
                hourly_rate,
            },
        )
    }

    /// Returns the employee id.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the employee name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the employee designation (role).
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// Returns how the employee is paid.
    pub fn compensation(&self) -> &Compensation {
        &self.compensation
    }

    /// Returns the employment category derived from the compensation.
    pub fn category(&self) -> EmploymentCategory {
        self.compensation.category()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Role: {}",
            self.id, self.name, self.designation
        )
    }
}
