//! Prices

use rust_decimal::Decimal;

use crate::items::OrderItem;

/// Largest total a stored order can hold (`NUMERIC(10, 2)`).
pub const MAX_TOTAL_PRICE: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

/// Fraction digits kept on a total.
pub const TOTAL_PRICE_SCALE: u32 = 2;

/// Calculates the total price of a list of items as `Σ price × quantity`, rounded to cents.
///
/// Returns `None` when the sum overflows the decimal range.
pub fn total_price(items: &[OrderItem]) -> Option<Decimal> {
    let total = items.iter().try_fold(Decimal::ZERO, |acc, item| {
        item.line_total().and_then(|line| acc.checked_add(line))
    })?;

    Some(total.round_dp(TOTAL_PRICE_SCALE))
}
