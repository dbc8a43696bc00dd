//! Interactive command-line front end.
//!
//! This module provides the menu loop that reads choices and field values
//! from a text stream, calls into the [`PayrollRegister`](crate::register::PayrollRegister),
//! and prints the results. It also defines the binary's argument parser.

mod args;
mod commands;
mod input;
mod menu;
mod session;

pub use args::{Cli, SlipFormat};
pub use commands::{SlipOptions, add_employee, list_employees, print_pay_slip, remove_employee};
pub use input::TokenReader;
pub use menu::{MENU_HEADER, MENU_ITEMS, MenuChoice, render_menu};
pub use session::{CommandLoop, SessionEnd};

use rust_decimal::Decimal;

use crate::models::Employee;

/// The two sample employees loaded by `--seed-demo`.
pub fn demo_employees() -> Vec<Employee> {
    vec![
        Employee::salaried("Vikram", 101, "Manager", Decimal::new(50000, 0)),
        Employee::hourly("Rahul", 102, "Intern", 40, Decimal::new(500, 0)),
    ]
}
