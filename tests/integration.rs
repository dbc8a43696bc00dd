//! End-to-end tests for the payroll register.
//!
//! This suite drives the interactive command loop with scripted input and
//! checks the printed transcript and the final register state, covering:
//! - Adding full-time and part-time employees
//! - Listing (populated and empty)
//! - Removing (found, not found, duplicate ids)
//! - Pay slips (text and JSON, found and not found)
//! - Configured policy rates and currency
//! - Invalid menu choices and malformed numbers
//! - Amounts too large to calculate

use std::io::Cursor;

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use payroll_register::cli::{CommandLoop, SessionEnd, SlipFormat, demo_employees};
use payroll_register::config::ConfigLoader;
use payroll_register::register::PayrollRegister;

// =============================================================================
// Test Helpers
// =============================================================================

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

struct Transcript {
    end: SessionEnd,
    register: PayrollRegister,
    output: String,
}

fn run_with(register: PayrollRegister, format: SlipFormat, currency: &str, input: &str) -> Transcript {
    let mut output = Vec::new();
    let mut session = CommandLoop::new(Cursor::new(input.to_string()), &mut output, register)
        .with_currency(currency)
        .with_slip_format(format);
    let end = session.run().expect("session failed");
    let register = session.into_register();

    Transcript {
        end,
        register,
        output: String::from_utf8(output).expect("output is not UTF-8"),
    }
}

fn run(input: &str) -> Transcript {
    run_with(PayrollRegister::new(), SlipFormat::Text, "Rs.", input)
}

fn seeded() -> PayrollRegister {
    let mut register = PayrollRegister::new();
    for employee in demo_employees() {
        register.add(employee);
    }
    register
}

fn listed_ids(register: &PayrollRegister) -> Vec<i64> {
    register.list_all().employees().iter().map(|e| e.id()).collect()
}

// =============================================================================
// Adding and listing
// =============================================================================

#[test]
fn test_add_both_kinds_then_list() {
    let t = run(
        "1\nVikram\n101\nManager\n50000.0\n\
         2\nRahul\n102\nIntern\n40\n500.0\n\
         4\n6\n",
    );

    assert_eq!(t.end, SessionEnd::Exit);
    assert_eq!(listed_ids(&t.register), vec![101, 102]);
    assert_eq!(t.output.matches("✅ Employee Added Successfully!").count(), 2);
    assert!(t.output.contains(
        "--- 👥 Employee List ---\n\
         ID: 101 | Name: Vikram | Role: Manager\n\
         ID: 102 | Name: Rahul | Role: Intern\n"
    ));
    assert!(t.output.ends_with("Exiting System. Goodbye!\n"));
}

#[test]
fn test_list_empty_register() {
    let t = run("4\n6\n");

    assert!(t.output.contains("--- 👥 Employee List ---\nNo employees found.\n"));
    assert!(!t.output.contains("ID: "));
}

#[test]
fn test_menu_reprinted_after_every_action() {
    let t = run("4\n4\n6\n");

    assert_eq!(t.output.matches("=== 💼 EMPLOYEE PAYROLL SYSTEM ===").count(), 3);
    assert_eq!(t.output.matches("6. Exit").count(), 3);
}

// =============================================================================
// Removing
// =============================================================================

#[test]
fn test_remove_existing_then_again() {
    let t = run_with(seeded(), SlipFormat::Text, "Rs.", "3\n101\n3\n101\n6\n");

    assert!(t.output.contains("Enter ID to Remove: 🗑 Employee Removed.\n"));
    assert!(t.output.contains("Enter ID to Remove: ❌ Employee not found!\n"));
    assert_eq!(listed_ids(&t.register), vec![102]);
}

#[test]
fn test_remove_duplicate_id_removes_first_only() {
    let t = run(
        "1 First 7 Dev 100\n\
         2 Middle 8 Dev 1 1\n\
         1 Second 7 Dev 200\n\
         3 7\n6\n",
    );

    let names: Vec<&str> = t
        .register
        .list_all()
        .employees()
        .iter()
        .map(|e| e.name())
        .collect();
    assert_eq!(names, vec!["Middle", "Second"]);
}

#[test]
fn test_remove_from_empty_register() {
    let t = run("3\n1\n6\n");

    assert!(t.output.contains("❌ Employee not found!"));
    assert!(t.register.is_empty());
}

// =============================================================================
// Pay slips
// =============================================================================

#[test]
fn test_full_time_pay_slip_block() {
    let t = run_with(seeded(), SlipFormat::Text, "Rs.", "5\n101\n6\n");

    let expected = [
        "Enter Employee ID for Pay Slip: ",
        "==================================",
        "       🧾 SALARY PAY SLIP",
        "==================================",
        "Employee ID   : 101",
        "Name          : Vikram",
        "Designation   : Manager",
        "----------------------------------",
        "Type          : Full-Time (Tax/HRA Applied)",
        "----------------------------------",
        "💰 NET SALARY : Rs. 58500.00",
        "==================================",
        "",
        "",
    ]
    .join("\n");
    assert!(
        t.output.contains(&expected),
        "pay slip block missing from:\n{}",
        t.output
    );
}

#[test]
fn test_part_time_pay_slip() {
    let t = run_with(seeded(), SlipFormat::Text, "Rs.", "5\n102\n6\n");

    assert!(t.output.contains("Type          : Part-Time (Hourly)"));
    assert!(t.output.contains("💰 NET SALARY : Rs. 20000.00"));
}

#[test]
fn test_pay_slip_not_found_does_not_mutate() {
    let t = run_with(seeded(), SlipFormat::Text, "Rs.", "5\n999\n6\n");

    assert!(t.output.contains("❌ Employee ID not found."));
    assert_eq!(listed_ids(&t.register), vec![101, 102]);
}

#[test]
fn test_pay_slip_rounds_to_two_places() {
    let t = run("2 Temp 5 Helper 3 12.345\n5 5\n6\n");

    // 3 × 12.345 = 37.035
    assert!(t.output.contains("💰 NET SALARY : Rs. 37.04"));
}

#[test]
fn test_salary_too_large_is_reported_and_session_continues() {
    let t = run("1 Big 1 Boss 70000000000000000000000000000\n5 1\n4\n6\n");

    assert!(t.output.contains(
        "Enter Employee ID for Pay Slip: ❌ Salary too large to calculate.\n"
    ));
    assert!(t.output.contains("ID: 1 | Name: Big | Role: Boss"));
    assert_eq!(t.end, SessionEnd::Exit);
    assert_eq!(listed_ids(&t.register), vec![1]);
}

#[test]
fn test_hourly_pay_too_large_is_reported_and_session_continues() {
    let t = run("2 Big 2 Temp 9223372036854775807 100000000000\n5 2\n5 2\n6\n");

    assert_eq!(t.output.matches("❌ Salary too large to calculate.").count(), 2);
    assert!(t.output.ends_with("Exiting System. Goodbye!\n"));
    assert_eq!(listed_ids(&t.register), vec![2]);
}

#[test]
fn test_json_pay_slip() {
    let t = run_with(seeded(), SlipFormat::Json, "Rs.", "5\n101\n6\n");

    let start = t.output.find('{').expect("no JSON object in output");
    let end = t.output.rfind('}').expect("no JSON object in output");
    let slip: Value = serde_json::from_str(&t.output[start..=end]).unwrap();

    assert_eq!(slip["employee_id"], 101);
    assert_eq!(slip["name"], "Vikram");
    assert_eq!(slip["category"], "full_time");
    assert_eq!(slip["net_salary_formatted"], "58500.00");
    assert_eq!(
        decimal(slip["breakdown"]["gross_pay"].as_str().unwrap()),
        decimal("65000")
    );
    assert_eq!(
        decimal(slip["breakdown"]["tax"].as_str().unwrap()),
        decimal("6500")
    );
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_configured_policy_and_currency() {
    let yaml = "policy:\n  hra_rate: \"0\"\n  da_rate: \"0\"\n  tax_rate: \"0.01\"\ndisplay:\n  currency: \"INR\"\n";
    let loader = ConfigLoader::from_yaml_str(yaml, "inline").unwrap();

    let mut register = PayrollRegister::with_policy(loader.policy().clone());
    for employee in demo_employees() {
        register.add(employee);
    }
    let t = run_with(register, SlipFormat::Text, loader.currency(), "5 101 6");

    assert!(t.output.contains("💰 NET SALARY : INR 49500.00"));
}

#[test]
fn test_sample_config_file_loads() {
    let path = format!("{}/config/payroll.yaml", env!("CARGO_MANIFEST_DIR"));
    let loader = ConfigLoader::load(path).unwrap();

    assert_eq!(loader.policy().hra_rate, decimal("0.20"));
    assert_eq!(loader.currency(), "Rs.");
}

// =============================================================================
// Input handling
// =============================================================================

#[test]
fn test_invalid_choice_then_exit() {
    let t = run("0\n7\n6\n");

    assert_eq!(t.output.matches("Invalid Choice!").count(), 2);
    assert_eq!(t.end, SessionEnd::Exit);
}

#[test]
fn test_malformed_salary_is_reprompted() {
    let t = run("1\nVikram\n101\nManager\nlots\n50000\n6\n");

    assert!(t.output.contains(
        "Monthly Salary: ⚠ Invalid input, please enter a number.\nMonthly Salary: ✅"
    ));
    assert_eq!(t.register.len(), 1);
}

#[test]
fn test_end_of_input_stops_quietly() {
    let t = run("4\n");

    assert_eq!(t.end, SessionEnd::EndOfInput);
    assert!(!t.output.contains("Goodbye"));
}
