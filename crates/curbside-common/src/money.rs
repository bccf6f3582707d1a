//! Money rounding
//!
//! Every amount in a breakdown is rounded to cents before it is summed. Ties round
//! toward positive infinity, so `1.575` becomes `1.58` and `-1.575` becomes `-1.57`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept on every money amount
pub const MONEY_SCALE: u32 = 2;

/// Round to two decimal places, ties toward positive infinity.
///
/// The result carries a scale of two, so `20` is returned as `20.00`. Values whose
/// integer part already fills the 96-bit mantissa (near `Decimal::MAX`) cannot be
/// widened and keep the scale they have after rounding.
pub fn round2(value: Decimal) -> Decimal {
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    let mut rounded = value.round_dp_with_strategy(MONEY_SCALE, strategy);
    rounded.rescale(MONEY_SCALE);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}
