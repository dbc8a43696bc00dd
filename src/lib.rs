//! In-memory employee payroll register.
//!
//! This crate records salaried and hourly employees, computes their net
//! salary, and prints pay slips through an interactive menu loop.

#![warn(missing_docs)]

pub mod calculation;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod register;
