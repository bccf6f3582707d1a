//! # Curbside Common
//!
//! Shared types, errors, money rounding, and jurisdiction policy for the Curbside
//! parking marketplace.
//!
//! ## Core Types
//!
//! - [`RateSchedule`]: A listing's hourly/daily/weekly/monthly rates and fee split
//! - [`BookingWindow`]: Requested start and end instants
//! - [`PricingBreakdown`]: Base amount, service fees, tax, and total of a booking
//!
//! ## Policy
//!
//! - [`policy::jurisdiction`]: Jurisdiction code normalization
//! - [`policy::tax`]: Taxable jurisdiction set and tax rate
//! - [`policy::signup`]: Regional signup gate
//! - [`config`]: Environment-backed policy configuration

pub mod config;
pub mod error;
pub mod money;
pub mod policy;
pub mod types;

// Re-export commonly used types at crate root
pub use config::PolicyConfig;
pub use error::{CurbsideError, PricingError, Result};
pub use money::round2;
pub use policy::{
    jurisdiction::JurisdictionCode,
    signup::{SignupDecision, SignupGate},
    tax::TaxPolicy,
    PricingPolicy,
};
pub use types::{
    booking::BookingWindow,
    breakdown::PricingBreakdown,
    rate_schedule::{RateSchedule, RateTier},
};

/// Curbside version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service fee percentage applied when a schedule does not set one
pub const DEFAULT_SERVICE_FEE_PERCENTAGE: u32 = 10;

/// Hours in a billable day
pub const HOURS_PER_DAY: u32 = 24;

/// Days in a billable week
pub const DAYS_PER_WEEK: u32 = 7;

/// Days in a billable month
pub const DAYS_PER_MONTH: u32 = 30;
