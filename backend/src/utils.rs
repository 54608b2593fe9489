//! Shared helpers for fixed-point money handling.
//!
//! Amounts are stored as integer cents and exposed over the API as
//! two-decimal `Decimal` values.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

pub const MONEY_SCALE: u32 = 2;

/// Converts an amount with at most two decimal places to cents.
///
/// Returns `None` for amounts with finer precision or outside the `i64` range.
pub fn to_cents(amount: Decimal) -> Option<i64> {
    if amount.normalize().scale() > MONEY_SCALE {
        return None;
    }
    amount.checked_mul(Decimal::ONE_HUNDRED)?.to_i64()
}

pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, MONEY_SCALE)
}
