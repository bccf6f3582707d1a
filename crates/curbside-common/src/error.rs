//! Error types for Curbside
//!
//! Provides a unified error type and the pricing error variants

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::rate_schedule::RateTier;

/// Result type alias using CurbsideError
pub type Result<T> = std::result::Result<T, CurbsideError>;

/// Unified error type for Curbside operations
#[derive(Debug, Error)]
pub enum CurbsideError {
    // Pricing errors
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Pricing calculation errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PricingError {
    #[error("No pricing tier configured")]
    NoTierConfigured,

    #[error("Booking window ends before it starts: {start} > {end}")]
    InvalidWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Negative {tier} rate: {rate}")]
    NegativeRate { tier: RateTier, rate: Decimal },

    #[error("Negative service fee percentage: {0}")]
    NegativeServiceFee(Decimal),

    #[error("Pricing calculation overflow")]
    Overflow,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = CurbsideError::from(PricingError::NoTierConfigured);
        assert_eq!(err.to_string(), "Pricing error: No pricing tier configured");
    }

    #[test]
    fn test_negative_rate_names_tier() {
        let err = PricingError::NegativeRate {
            tier: RateTier::Weekly,
            rate: dec!(-5),
        };
        assert!(err.to_string().contains("weekly"));
        assert!(err.to_string().contains("-5"));
    }
}
