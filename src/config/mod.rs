//! Configuration loading and management for the payroll register.
//!
//! This module loads the salary policy rates and display options from a
//! YAML file, falling back to built-in defaults for anything not given.
//!
//! # Example
//!
//! ```no_run
//! use payroll_register::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Currency: {}", config.currency());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DisplayConfig, PayPolicy, PayrollConfig};
