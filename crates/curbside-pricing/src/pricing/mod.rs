//! Pricing module
//!
//! Provides booking price calculation with:
//! - Ordered rate tier selection
//! - Cent rounding of every amount before summation
//! - Even service fee split between booker and host
//! - Jurisdiction-gated tax

pub mod engine;
pub mod tax;
pub mod tier;

pub use engine::{duration, PricingEngine};
pub use tax::compute_tax;
pub use tier::{select_tier, TierSelection};
