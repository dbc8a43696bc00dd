//! Display rounding for monetary amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits shown for money.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Formats `value` with exactly two fractional digits.
///
/// Midpoints round away from zero (`0.125` becomes `0.13`). Rounding only
/// happens here; calculations keep full precision.
///
/// # Examples
///
/// ```
/// use payroll_register::calculation::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(58500, 0)), "58500.00");
/// assert_eq!(format_amount(Decimal::new(37035, 3)), "37.04");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    );
    rounded.rescale(DISPLAY_DECIMAL_PLACES);
    rounded.to_string()
}
