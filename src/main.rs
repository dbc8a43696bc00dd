use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use payroll_register::cli::{Cli, CommandLoop, demo_employees};
use payroll_register::config::ConfigLoader;
use payroll_register::error::PayrollResult;
use payroll_register::register::PayrollRegister;

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with the menu on stdout
    let filter = EnvFilter::try_from_env("PAYROLL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Payroll register failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> PayrollResult<()> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::defaults(),
    };

    let mut register = PayrollRegister::with_policy(loader.policy().clone());
    if cli.seed_demo {
        for employee in demo_employees() {
            register.add(employee);
        }
        info!(employees = register.len(), "Seeded demo employees");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = CommandLoop::new(stdin.lock(), stdout.lock(), register)
        .with_currency(loader.currency())
        .with_slip_format(cli.slip_format);
    session.run()?;
    Ok(())
}
