//! Pricing Breakdown - Total = Base + Booker Fee + Tax
//!
//! The booker pays the base amount, their half of the service fee, and tax.
//! The host's half of the service fee is withheld from the payout and never
//! appears in the booker's total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rate_schedule::RateTier;

/// Cost breakdown of one booking, every amount rounded to cents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    /// Pre-fee, pre-tax charge for the duration
    pub base_amount: Decimal,

    /// Service fee added to the booker's charge
    pub booker_service_fee: Decimal,

    /// Service fee withheld from the host's payout
    pub host_service_fee: Decimal,

    /// Jurisdiction tax on the base amount
    pub tax_amount: Decimal,

    /// Amount charged to the booker
    pub total_amount: Decimal,

    /// Tier the base amount was billed on
    pub tier: RateTier,

    /// Hours, days, weeks, or months billed at the tier's rate
    pub units: Decimal,
}

impl PricingBreakdown {
    /// Earnings shown to the host: base amount less the host's fee share
    pub fn host_payout(&self) -> Decimal {
        self.base_amount - self.host_service_fee
    }

    /// Marketplace revenue from both fee shares
    pub fn platform_revenue(&self) -> Decimal {
        self.booker_service_fee + self.host_service_fee
    }
}
