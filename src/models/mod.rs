//! Core data models for the payroll register.
//!
//! This module contains the domain models shared by the calculator, the
//! register and the command loop.

mod employee;
mod pay_slip;
mod salary_breakdown;

pub use employee::{Compensation, Employee, EmploymentCategory};
pub use pay_slip::PaySlip;
pub use salary_breakdown::{Allowance, CalculationStep, SalaryBreakdown};
