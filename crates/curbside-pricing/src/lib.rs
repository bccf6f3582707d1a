//! # Curbside Pricing
//!
//! Booking pricing, tax, and signup routing for the Curbside parking marketplace.
//!
//! ## Pricing Formula
//!
//! ```text
//! Total = Base + BookerFee + Tax
//! ```
//!
//! Where:
//! - Base: selected tier rate × billed units, rounded to cents
//! - BookerFee: half the service fee percentage of Base (default fee 10%)
//! - Tax: jurisdiction tax rate × Base, zero outside taxable jurisdictions
//!
//! The host's half of the fee is reported separately and withheld from payout.

pub mod handle;
pub mod pricing;

use chrono::{DateTime, Utc};
use curbside_common::{
    PolicyConfig, PricingBreakdown, PricingPolicy, RateSchedule, Result, SignupDecision,
};
use rust_decimal::Decimal;
use tracing::info;

pub use handle::PolicyHandle;
pub use pricing::{compute_tax, duration, select_tier, PricingEngine, TierSelection};

/// Entry point shared by booking creation, payment capture, and earnings display
#[derive(Debug, Default)]
pub struct Curbside {
    policy: PolicyHandle,
}

impl Curbside {
    pub fn new(policy: PricingPolicy) -> Self {
        Self {
            policy: PolicyHandle::new(policy),
        }
    }

    /// Build from an explicit configuration
    pub fn from_config(config: &PolicyConfig) -> Result<Self> {
        Ok(Self::new(PricingPolicy::from_config(config)?))
    }

    /// Build from `.env` and the process environment
    pub fn load() -> Result<Self> {
        let config = PolicyConfig::load();
        info!(
            tax_rate = %config.tax_rate,
            taxable = ?config.taxable_jurisdictions,
            signup_gate = config.signup_gate_enabled,
            allowed = %config.allowed_jurisdiction,
            "Loaded pricing policy"
        );
        Self::from_config(&config)
    }

    /// Replace the active policy; calls already running keep their snapshot
    pub fn reload(&self, config: &PolicyConfig) -> Result<()> {
        self.policy.replace(PricingPolicy::from_config(config)?);
        Ok(())
    }

    /// Engine bound to the current policy snapshot
    pub fn engine(&self) -> PricingEngine {
        PricingEngine::new(self.policy.snapshot())
    }

    /// Price a booking
    pub fn price_booking(
        &self,
        schedule: &RateSchedule,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<PricingBreakdown> {
        Ok(self.engine().price_booking(schedule, start, end)?)
    }

    /// Tax on a base amount, for earnings and statistics displays
    pub fn compute_tax(&self, base_amount: Decimal, jurisdiction: Option<&str>) -> Decimal {
        self.engine().compute_tax(base_amount, jurisdiction)
    }

    /// Whether the signup gate is switched on
    pub fn gate_enabled(&self) -> bool {
        self.policy.snapshot().signup.gate_enabled()
    }

    /// Whether a signup jurisdiction matches the allowed one, ignoring the gate flag
    pub fn is_allowed_for_signup(&self, jurisdiction: Option<&str>) -> bool {
        self.policy.snapshot().signup.is_allowed_for_signup(jurisdiction)
    }

    /// Admit or waitlist a new signup
    pub fn route_signup(&self, jurisdiction: Option<&str>) -> SignupDecision {
        self.policy.snapshot().signup.route(jurisdiction)
    }
}
