//! The interactive menu loop.

use std::io::{BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::error::PayrollResult;
use crate::models::Employee;
use crate::register::PayrollRegister;

use super::args::SlipFormat;
use super::commands::{self, SlipOptions};
use super::input::TokenReader;
use super::menu::{MenuChoice, render_menu};

pub(crate) const INVALID_CHOICE: &str = "Invalid Choice!";
pub(crate) const INVALID_NUMBER: &str = "⚠ Invalid input, please enter a number.";
pub(crate) const GOODBYE: &str = "Exiting System. Goodbye!";

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose Exit.
    Exit,
    /// The input stream ran out.
    EndOfInput,
}

/// Drives the payroll menu over a token input stream and a text output stream.
///
/// The loop owns the register for its whole lifetime and hands it to each
/// menu action in turn.
///
/// # Example
///
/// ```
/// use payroll_register::cli::{CommandLoop, SessionEnd};
/// use payroll_register::register::PayrollRegister;
/// use std::io::Cursor;
///
/// let input = Cursor::new("2 Rahul 102 Intern 40 500\n6\n");
/// let mut output = Vec::new();
/// let mut session = CommandLoop::new(input, &mut output, PayrollRegister::new());
///
/// assert_eq!(session.run()?, SessionEnd::Exit);
/// assert_eq!(session.register().len(), 1);
/// # Ok::<(), payroll_register::error::PayrollError>(())
/// ```
pub struct CommandLoop<R, W> {
    input: TokenReader<R>,
    output: W,
    register: PayrollRegister,
    slip_options: SlipOptions,
}

impl<R: BufRead, W: Write> CommandLoop<R, W> {
    /// Creates a loop over `input` and `output` managing `register`.
    pub fn new(input: R, output: W, register: PayrollRegister) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
            register,
            slip_options: SlipOptions::default(),
        }
    }

    /// Sets the currency label printed on text pay slips.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.slip_options.currency = currency.into();
        self
    }

    /// Sets how pay slips are printed.
    pub fn with_slip_format(mut self, format: SlipFormat) -> Self {
        self.slip_options.format = format;
        self
    }

    /// Returns the register managed by this loop.
    pub fn register(&self) -> &PayrollRegister {
        &self.register
    }

    /// Consumes the loop and returns its register.
    pub fn into_register(self) -> PayrollRegister {
        self.register
    }

    /// Runs until the user exits or the input ends.
    ///
    /// Only failures of the underlying streams are returned as errors.
    pub fn run(&mut self) -> PayrollResult<SessionEnd> {
        info!(employees = self.register.len(), "Payroll session started");
        loop {
            if let Some(end) = self.step()? {
                self.output.flush()?;
                info!(?end, employees = self.register.len(), "Payroll session ended");
                return Ok(end);
            }
        }
    }

    /// Shows the menu and performs one action. `Some` ends the session.
    fn step(&mut self) -> PayrollResult<Option<SessionEnd>> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", render_menu())?;

        let Some(number) = self.prompt_number::<i64>("Enter Choice: ")? else {
            return Ok(Some(SessionEnd::EndOfInput));
        };
        let Some(choice) = MenuChoice::from_number(number) else {
            debug!(number, "Invalid menu choice");
            writeln!(self.output, "{}", INVALID_CHOICE)?;
            return Ok(None);
        };
        debug!(?choice, "Menu choice selected");

        let completed = match choice {
            MenuChoice::AddFullTime => self.add_full_time()?,
            MenuChoice::AddPartTime => self.add_part_time()?,
            MenuChoice::Remove => self.remove()?,
            MenuChoice::List => {
                commands::list_employees(&self.register, &mut self.output)?;
                Some(())
            }
            MenuChoice::PaySlip => self.pay_slip()?,
            MenuChoice::Exit => {
                writeln!(self.output, "{}", GOODBYE)?;
                return Ok(Some(SessionEnd::Exit));
            }
        };

        Ok(match completed {
            Some(()) => None,
            None => Some(SessionEnd::EndOfInput),
        })
    }

    fn add_full_time(&mut self) -> PayrollResult<Option<()>> {
        let Some((name, id, designation)) = self.prompt_identity()? else {
            return Ok(None);
        };
        let Some(monthly_salary) = self.prompt_number::<Decimal>("Monthly Salary: ")? else {
            return Ok(None);
        };

        let employee = Employee::salaried(name, id, designation, monthly_salary);
        commands::add_employee(&mut self.register, employee, &mut self.output)?;
        Ok(Some(()))
    }

    fn add_part_time(&mut self) -> PayrollResult<Option<()>> {
        let Some((name, id, designation)) = self.prompt_identity()? else {
            return Ok(None);
        };
        let Some(hours_worked) = self.prompt_number::<i64>("Hours Worked: ")? else {
            return Ok(None);
        };
        let Some(hourly_rate) = self.prompt_number::<Decimal>("Hourly Rate: ")? else {
            return Ok(None);
        };

        let employee = Employee::hourly(name, id, designation, hours_worked, hourly_rate);
        commands::add_employee(&mut self.register, employee, &mut self.output)?;
        Ok(Some(()))
    }

    fn remove(&mut self) -> PayrollResult<Option<()>> {
        let Some(id) = self.prompt_number::<i64>("Enter ID to Remove: ")? else {
            return Ok(None);
        };
        commands::remove_employee(&mut self.register, id, &mut self.output)?;
        Ok(Some(()))
    }

    fn pay_slip(&mut self) -> PayrollResult<Option<()>> {
        let Some(id) = self.prompt_number::<i64>("Enter Employee ID for Pay Slip: ")? else {
            return Ok(None);
        };
        commands::print_pay_slip(&self.register, id, &self.slip_options, &mut self.output)?;
        Ok(Some(()))
    }

    /// Prompts for name, id and designation in that order.
    fn prompt_identity(&mut self) -> PayrollResult<Option<(String, i64, String)>> {
        let Some(name) = self.prompt_token("Name: ")? else {
            return Ok(None);
        };
        let Some(id) = self.prompt_number::<i64>("ID: ")? else {
            return Ok(None);
        };
        let Some(designation) = self.prompt_token("Designation: ")? else {
            return Ok(None);
        };
        Ok(Some((name, id, designation)))
    }

    fn prompt_token(&mut self, prompt: &str) -> PayrollResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.input.next_token()
    }

    /// Prompts until a token parses as `T`, re-asking after each bad token.
    fn prompt_number<T: FromStr>(&mut self, prompt: &str) -> PayrollResult<Option<T>> {
        loop {
            let Some(token) = self.prompt_token(prompt)? else {
                return Ok(None);
            };
            match token.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    warn!(token = %token, prompt, "Rejected non-numeric input");
                    writeln!(self.output, "{}", INVALID_NUMBER)?;
                }
            }
        }
    }
}
