//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Interactive employee payroll register.
///
/// Presents a numbered menu on standard output and reads choices and field
/// values from standard input. Nothing is persisted between runs.
#[derive(Parser, Debug)]
#[command(name = "payroll-register")]
#[command(version)]
#[command(about = "Interactive employee payroll register")]
pub struct Cli {
    /// YAML file with pay policy rates and display options
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// How pay slips are printed
    #[arg(long, value_enum, default_value_t = SlipFormat::Text)]
    pub slip_format: SlipFormat,

    /// Start with two demo employees already registered
    #[arg(long)]
    pub seed_demo: bool,
}

/// Pay slip output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SlipFormat {
    /// The boxed text block
    #[default]
    Text,
    /// Pretty-printed JSON including the salary breakdown
    Json,
}
