//! The numbered main menu.

/// Header printed above the menu.
pub const MENU_HEADER: &str = "=== 💼 EMPLOYEE PAYROLL SYSTEM ===";

/// Menu entries in display order, numbered from 1.
pub const MENU_ITEMS: [&str; 6] = [
    "Add Full-Time Employee",
    "Add Part-Time Employee",
    "Remove Employee",
    "List All Employees",
    "Generate Pay Slip",
    "Exit",
];

/// A valid menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1: add a salaried employee.
    AddFullTime,
    /// 2: add an hourly employee.
    AddPartTime,
    /// 3: remove an employee by id.
    Remove,
    /// 4: list all employees.
    List,
    /// 5: print a pay slip.
    PaySlip,
    /// 6: leave the loop.
    Exit,
}

impl MenuChoice {
    /// Maps a typed number to a choice; anything outside 1..=6 is `None`.
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(MenuChoice::AddFullTime),
            2 => Some(MenuChoice::AddPartTime),
            3 => Some(MenuChoice::Remove),
            4 => Some(MenuChoice::List),
            5 => Some(MenuChoice::PaySlip),
            6 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Renders the header and numbered entries, one per line.
pub fn render_menu() -> String {
    let mut text = String::from(MENU_HEADER);
    for (index, item) in MENU_ITEMS.iter().enumerate() {
        text.push('\n');
        text.push_str(&format!("{}. {}", index + 1, item));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_number_maps_all_entries() {
        assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::AddFullTime));
        assert_eq!(MenuChoice::from_number(2), Some(MenuChoice::AddPartTime));
        assert_eq!(MenuChoice::from_number(3), Some(MenuChoice::Remove));
        assert_eq!(MenuChoice::from_number(4), Some(MenuChoice::List));
        assert_eq!(MenuChoice::from_number(5), Some(MenuChoice::PaySlip));
        assert_eq!(MenuChoice::from_number(6), Some(MenuChoice::Exit));
    }

    #[test]
    fn test_from_number_rejects_out_of_range() {
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(7), None);
        assert_eq!(MenuChoice::from_number(-1), None);
    }

    #[test]
    fn test_render_menu() {
        let expected = "\
=== 💼 EMPLOYEE PAYROLL SYSTEM ===
1. Add Full-Time Employee
2. Add Part-Time Employee
3. Remove Employee
4. List All Employees
5. Generate Pay Slip
6. Exit";
        assert_eq!(render_menu(), expected);
    }
}
