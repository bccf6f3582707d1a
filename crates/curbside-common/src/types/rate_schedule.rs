//! Rate Schedule - a listing's pricing configuration
//!
//! A schedule may set any combination of four tiers:
//! - Hourly: billed on exact fractional hours
//! - Daily: billed per started day
//! - Weekly: billed per started week
//! - Monthly: billed per started 30-day month
//!
//! The booking pricer picks exactly one tier per booking.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PricingError;
use crate::DEFAULT_SERVICE_FEE_PERCENTAGE;

/// Rate tier selected for a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateTier {
    Hourly,
    Daily,
    Weekly,
    Monthly,
}

impl RateTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateTier::Hourly => "hourly",
            RateTier::Daily => "daily",
            RateTier::Weekly => "weekly",
            RateTier::Monthly => "monthly",
        }
    }
}

impl std::fmt::Display for RateTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pricing configuration of a single listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateSchedule {
    /// Price per hour
    pub hourly_rate: Option<Decimal>,

    /// Price per started day
    pub daily_rate: Option<Decimal>,

    /// Price per started week
    pub weekly_rate: Option<Decimal>,

    /// Price per started 30-day month
    pub monthly_rate: Option<Decimal>,

    /// Total marketplace fee in percent, split evenly between booker and host
    pub service_fee_percentage: Option<Decimal>,

    /// Province/state code of the listing, any case or padding
    pub jurisdiction: Option<String>,
}

impl RateSchedule {
    /// Create an empty schedule
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hourly_rate(mut self, rate: Decimal) -> Self {
        self.hourly_rate = Some(rate);
        self
    }

    pub fn with_daily_rate(mut self, rate: Decimal) -> Self {
        self.daily_rate = Some(rate);
        self
    }

    pub fn with_weekly_rate(mut self, rate: Decimal) -> Self {
        self.weekly_rate = Some(rate);
        self
    }

    pub fn with_monthly_rate(mut self, rate: Decimal) -> Self {
        self.monthly_rate = Some(rate);
        self
    }

    pub fn with_service_fee_percentage(mut self, percentage: Decimal) -> Self {
        self.service_fee_percentage = Some(percentage);
        self
    }

    pub fn with_jurisdiction(mut self, jurisdiction: impl Into<String>) -> Self {
        self.jurisdiction = Some(jurisdiction.into());
        self
    }

    /// Rate configured for a tier, if any
    pub fn rate(&self, tier: RateTier) -> Option<Decimal> {
        match tier {
            RateTier::Hourly => self.hourly_rate,
            RateTier::Daily => self.daily_rate,
            RateTier::Weekly => self.weekly_rate,
            RateTier::Monthly => self.monthly_rate,
        }
    }

    /// Whether at least one tier is set
    pub fn has_any_tier(&self) -> bool {
        self.hourly_rate.is_some()
            || self.daily_rate.is_some()
            || self.weekly_rate.is_some()
            || self.monthly_rate.is_some()
    }

    /// Total service fee percentage, falling back to the marketplace default
    pub fn effective_service_fee_percentage(&self) -> Decimal {
        self.service_fee_percentage
            .unwrap_or_else(|| Decimal::from(DEFAULT_SERVICE_FEE_PERCENTAGE))
    }

    /// Reject negative rates and fee percentages.
    ///
    /// A schedule without tiers passes; the pricer reports that case itself.
    pub fn validate(&self) -> Result<(), PricingError> {
        for tier in [
            RateTier::Hourly,
            RateTier::Daily,
            RateTier::Weekly,
            RateTier::Monthly,
        ] {
            if let Some(rate) = self.rate(tier) {
                if rate.is_sign_negative() && !rate.is_zero() {
                    return Err(PricingError::NegativeRate { tier, rate });
                }
            }
        }

        if let Some(fee) = self.service_fee_percentage {
            if fee.is_sign_negative() && !fee.is_zero() {
                return Err(PricingError::NegativeServiceFee(fee));
            }
        }

        Ok(())
    }
}
