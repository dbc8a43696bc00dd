//! Error types for the payroll register.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while managing the register,
//! loading configuration, or driving the interactive command loop.

use thiserror::Error;

/// The main error type for the payroll register.
///
/// Lookups that miss return [`PayrollError::EmployeeNotFound`], which callers
/// are expected to report and move past rather than treat as fatal.
///
/// # Example
///
/// ```
/// use payroll_register::error::PayrollError;
///
/// let error = PayrollError::EmployeeNotFound { id: 404 };
/// assert_eq!(error.to_string(), "Employee not found: 404");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// No employee with the given id is held by the register.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: i64,
    },

    /// A salary amount exceeded the range of the decimal type.
    ///
    /// Reported to the operator like a lookup miss; the register is untouched.
    #[error("Amount out of range while computing {step}")]
    AmountOutOfRange {
        /// The calculation step that overflowed.
        step: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was outside its accepted range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Reading from or writing to the interactive streams failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
