//! Booking pricing engine
//!
//! Produces a [`PricingBreakdown`] from a listing's [`RateSchedule`] and a booking
//! window:
//! - Base amount from the selected rate tier, rounded to cents
//! - Service fee split evenly between booker and host
//! - Jurisdiction tax on the rounded base
//! - Booker total = base + booker fee + tax
//!
//! Every addend is rounded before it is summed, so the quote shown at booking, the
//! amount captured at payment and the host's earnings agree for the same inputs.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use curbside_common::{
    round2, BookingWindow, PricingBreakdown, PricingError, PricingPolicy, RateSchedule,
};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use super::tax::compute_tax;
use super::tier::select_tier;

/// Fractional hours between `start` and `end`, unrounded; negative if reversed
pub fn duration(start: DateTime<Utc>, end: DateTime<Utc>) -> Decimal {
    BookingWindow::new(start, end).hours()
}

/// Stateless pricer bound to one policy snapshot
#[derive(Debug, Clone)]
pub struct PricingEngine {
    policy: Arc<PricingPolicy>,
}

impl PricingEngine {
    pub fn new(policy: Arc<PricingPolicy>) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Tax on a base amount for a jurisdiction, in isolation from a full breakdown
    pub fn compute_tax(&self, base_amount: Decimal, jurisdiction: Option<&str>) -> Decimal {
        compute_tax(&self.policy.tax, base_amount, jurisdiction)
    }

    /// Price a booking from `start` to `end`
    pub fn price_booking(
        &self,
        schedule: &RateSchedule,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<PricingBreakdown, PricingError> {
        self.price_window(schedule, &BookingWindow::new(start, end))
    }

    /// Price a booking window
    #[instrument(skip(self, schedule), fields(jurisdiction = ?schedule.jurisdiction))]
    pub fn price_window(
        &self,
        schedule: &RateSchedule,
        window: &BookingWindow,
    ) -> Result<PricingBreakdown, PricingError> {
        if window.is_reversed() {
            return Err(PricingError::InvalidWindow {
                start: window.start,
                end: window.end,
            });
        }
        schedule.validate()?;

        let selection = select_tier(schedule, window.hours())?;
        let base_amount = round2(selection.amount);

        let fee_share = schedule.effective_service_fee_percentage() / Decimal::TWO;
        let host_service_fee = fee_of(base_amount, fee_share)?;
        let booker_service_fee = fee_of(base_amount, fee_share)?;

        let tax_amount = self.compute_tax(base_amount, schedule.jurisdiction.as_deref());

        let total_amount = base_amount
            .checked_add(booker_service_fee)
            .and_then(|sum| sum.checked_add(tax_amount))
            .map(round2)
            .ok_or(PricingError::Overflow)?;

        debug!(
            tier = %selection.tier,
            base = %base_amount,
            booker_fee = %booker_service_fee,
            host_fee = %host_service_fee,
            tax = %tax_amount,
            total = %total_amount,
            "Priced booking"
        );

        Ok(PricingBreakdown {
            base_amount,
            booker_service_fee,
            host_service_fee,
            tax_amount,
            total_amount,
            tier: selection.tier,
            units: selection.units,
        })
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(Arc::new(PricingPolicy::default()))
    }
}

/// `percentage`% of `amount`, rounded to cents
fn fee_of(amount: Decimal, percentage: Decimal) -> Result<Decimal, PricingError> {
    amount
        .checked_mul(percentage)
        .map(|fee| round2(fee / Decimal::ONE_HUNDRED))
        .ok_or(PricingError::Overflow)
}
