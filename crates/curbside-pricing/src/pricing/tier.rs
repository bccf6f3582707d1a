//! Rate tier selection
//!
//! Tiers are tried in a fixed order, first match wins:
//!
//! ```text
//! 1. hourly   if hours < 24
//! 2. daily    if days >= 1                 (days = ceil(hours / 24))
//! 3. weekly   if days >= 7                 billed per ceil(days / 7)
//! 4. monthly  if days >= 30                billed per ceil(days / 30)
//! 5. hourly   regardless of duration
//! ```
//!
//! Reordering changes what bookings straddling a tier boundary cost.

use curbside_common::{
    PricingError, RateSchedule, RateTier, DAYS_PER_MONTH, DAYS_PER_WEEK, HOURS_PER_DAY,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tier chosen for a duration and the unrounded amount it bills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSelection {
    pub tier: RateTier,
    /// Hours, days, weeks, or months billed
    pub units: Decimal,
    /// `rate * units`, not yet rounded
    pub amount: Decimal,
}

impl TierSelection {
    fn bill(tier: RateTier, rate: Decimal, units: Decimal) -> Result<Self, PricingError> {
        let amount = rate.checked_mul(units).ok_or(PricingError::Overflow)?;
        Ok(Self {
            tier,
            units,
            amount,
        })
    }
}

/// Pick the billing tier for a duration of `total_hours`.
///
/// Fails with [`PricingError::NoTierConfigured`] when no tier's guard holds and
/// there is no hourly rate to fall back on.
pub fn select_tier(
    schedule: &RateSchedule,
    total_hours: Decimal,
) -> Result<TierSelection, PricingError> {
    let total_days = (total_hours / Decimal::from(HOURS_PER_DAY)).ceil();
    let week = Decimal::from(DAYS_PER_WEEK);
    let month = Decimal::from(DAYS_PER_MONTH);

    let selection = match schedule {
        RateSchedule {
            hourly_rate: Some(rate),
            ..
        } if total_hours < Decimal::from(HOURS_PER_DAY) => {
            TierSelection::bill(RateTier::Hourly, *rate, total_hours)?
        }
        RateSchedule {
            daily_rate: Some(rate),
            ..
        } if total_days >= Decimal::ONE => {
            TierSelection::bill(RateTier::Daily, *rate, total_days)?
        }
        RateSchedule {
            weekly_rate: Some(rate),
            ..
        } if total_days >= week => {
            TierSelection::bill(RateTier::Weekly, *rate, (total_days / week).ceil())?
        }
        RateSchedule {
            monthly_rate: Some(rate),
            ..
        } if total_days >= month => {
            TierSelection::bill(RateTier::Monthly, *rate, (total_days / month).ceil())?
        }
        RateSchedule {
            hourly_rate: Some(rate),
            ..
        } => TierSelection::bill(RateTier::Hourly, *rate, total_hours)?,
        _ => return Err(PricingError::NoTierConfigured),
    };

    debug!(
        tier = %selection.tier,
        units = %selection.units,
        total_hours = %total_hours,
        "Selected rate tier"
    );

    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn all_tiers() -> RateSchedule {
        RateSchedule::new()
            .with_hourly_rate(dec!(5))
            .with_daily_rate(dec!(30))
            .with_weekly_rate(dec!(150))
            .with_monthly_rate(dec!(500))
    }

    #[test]
    fn test_hourly_under_a_day() {
        let sel = select_tier(&all_tiers(), dec!(23.5)).unwrap();
        assert_eq!(sel.tier, RateTier::Hourly);
        assert_eq!(sel.units, dec!(23.5));
        assert_eq!(sel.amount, dec!(117.5));
    }

    #[test]
    fn test_hourly_wins_even_when_daily_is_cheaper() {
        let schedule = RateSchedule::new()
            .with_hourly_rate(dec!(10))
            .with_daily_rate(dec!(20));
        let sel = select_tier(&schedule, dec!(5)).unwrap();
        assert_eq!(sel.tier, RateTier::Hourly);
        assert_eq!(sel.amount, dec!(50));
    }

    #[test]
    fn test_daily_at_exactly_24_hours() {
        let sel = select_tier(&all_tiers(), dec!(24)).unwrap();
        assert_eq!(sel.tier, RateTier::Daily);
        assert_eq!(sel.units, dec!(1));
        assert_eq!(sel.amount, dec!(30));
    }

    #[test]
    fn test_daily_rounds_started_days_up() {
        let sel = select_tier(&all_tiers(), dec!(25)).unwrap();
        assert_eq!(sel.units, dec!(2));
        assert_eq!(sel.amount, dec!(60));
    }

    #[test]
    fn test_daily_preempts_weekly_and_monthly() {
        let sel = select_tier(&all_tiers(), dec!(24) * dec!(45)).unwrap();
        assert_eq!(sel.tier, RateTier::Daily);
        assert_eq!(sel.units, dec!(45));
    }

    #[test]
    fn test_daily_for_sub_day_window_without_hourly() {
        let schedule = RateSchedule::new().with_daily_rate(dec!(30));
        let sel = select_tier(&schedule, dec!(2)).unwrap();
        assert_eq!(sel.tier, RateTier::Daily);
        assert_eq!(sel.units, dec!(1));
    }

    #[test]
    fn test_weekly_per_started_week() {
        let schedule = RateSchedule::new().with_weekly_rate(dec!(150));
        let sel = select_tier(&schedule, dec!(24) * dec!(8)).unwrap();
        assert_eq!(sel.tier, RateTier::Weekly);
        assert_eq!(sel.units, dec!(2));
        assert_eq!(sel.amount, dec!(300));
    }

    #[test]
    fn test_weekly_guard_falls_through_to_hourly() {
        let schedule = RateSchedule::new()
            .with_hourly_rate(dec!(2))
            .with_weekly_rate(dec!(150));
        let sel = select_tier(&schedule, dec!(48)).unwrap();
        assert_eq!(sel.tier, RateTier::Hourly);
        assert_eq!(sel.amount, dec!(96));
    }

    #[test]
    fn test_monthly_per_started_month() {
        let schedule = RateSchedule::new().with_monthly_rate(dec!(500));
        let sel = select_tier(&schedule, dec!(24) * dec!(31)).unwrap();
        assert_eq!(sel.tier, RateTier::Monthly);
        assert_eq!(sel.units, dec!(2));
        assert_eq!(sel.amount, dec!(1000));
    }

    #[test]
    fn test_weekly_preempts_monthly() {
        let schedule = RateSchedule::new()
            .with_weekly_rate(dec!(150))
            .with_monthly_rate(dec!(500));
        let sel = select_tier(&schedule, dec!(24) * dec!(30)).unwrap();
        assert_eq!(sel.tier, RateTier::Weekly);
        assert_eq!(sel.units, dec!(5));
    }

    #[test]
    fn test_monthly_guard_unmet_without_hourly_fails() {
        let schedule = RateSchedule::new().with_monthly_rate(dec!(500));
        assert_eq!(
            select_tier(&schedule, dec!(24) * dec!(10)),
            Err(PricingError::NoTierConfigured)
        );
    }

    #[test]
    fn test_no_tiers_fails() {
        assert_eq!(
            select_tier(&RateSchedule::new(), dec!(3)),
            Err(PricingError::NoTierConfigured)
        );
    }

    #[test]
    fn test_zero_length_window() {
        let schedule = RateSchedule::new().with_hourly_rate(dec!(10));
        let sel = select_tier(&schedule, Decimal::ZERO).unwrap();
        assert_eq!(sel.amount, Decimal::ZERO);

        let schedule = RateSchedule::new().with_daily_rate(dec!(30));
        assert_eq!(
            select_tier(&schedule, Decimal::ZERO),
            Err(PricingError::NoTierConfigured)
        );
    }
}
