//! Jurisdiction tax on a base amount

use curbside_common::{round2, TaxPolicy};
use rust_decimal::Decimal;

/// Tax owed on `base_amount` in `jurisdiction`, rounded to cents.
///
/// Zero when the base is zero or the jurisdiction is absent or not taxable.
pub fn compute_tax(
    policy: &TaxPolicy,
    base_amount: Decimal,
    jurisdiction: Option<&str>,
) -> Decimal {
    if base_amount.is_zero() || !policy.is_taxable(jurisdiction) {
        return round2(Decimal::ZERO);
    }
    round2(base_amount * policy.rate())
}
