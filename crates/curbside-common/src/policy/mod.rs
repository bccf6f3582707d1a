//! Jurisdiction policy
//!
//! Provides the process-wide policy consulted by pricing and signup:
//! - Jurisdiction normalization
//! - Taxable jurisdictions and tax rate
//! - Regional signup gate

pub mod jurisdiction;
pub mod signup;
pub mod tax;

use serde::{Deserialize, Serialize};

use crate::config::PolicyConfig;
use crate::error::Result;
use signup::SignupGate;
use tax::TaxPolicy;

/// Immutable policy built once from configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    pub tax: TaxPolicy,
    pub signup: SignupGate,
}

impl PricingPolicy {
    pub fn new(tax: TaxPolicy, signup: SignupGate) -> Self {
        Self { tax, signup }
    }

    /// Build from configuration, rejecting values outside their domain
    pub fn from_config(config: &PolicyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &PolicyConfig) -> Self {
        Self {
            tax: TaxPolicy::new(config.tax_rate, &config.taxable_jurisdictions),
            signup: SignupGate::new(config.signup_gate_enabled, &config.allowed_jurisdiction),
        }
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self::build(&PolicyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_policy() {
        let policy = PricingPolicy::default();
        assert_eq!(policy.tax.rate(), dec!(0.15));
        assert!(policy.tax.is_taxable(Some("ns")));
        assert!(!policy.signup.gate_enabled());
        assert_eq!(
            policy.signup.allowed_jurisdiction().map(|c| c.as_str()),
            Some("NS")
        );
    }

    #[test]
    fn test_from_config_matches_default() {
        let policy = PricingPolicy::from_config(&PolicyConfig::default()).unwrap();
        assert_eq!(policy, PricingPolicy::default());
    }

    #[test]
    fn test_from_config_rejects_blank_allowed() {
        let config = PolicyConfig {
            allowed_jurisdiction: "  ".to_string(),
            ..PolicyConfig::default()
        };
        assert!(PricingPolicy::from_config(&config).is_err());
    }

    #[test]
    fn test_from_config_rejects_out_of_range_rate() {
        let config = PolicyConfig {
            tax_rate: dec!(1.5),
            ..PolicyConfig::default()
        };
        assert!(PricingPolicy::from_config(&config).is_err());
    }

    #[test]
    fn test_deserialized_policy_matches_any_casing() {
        let json = r#"{
            "tax": {"taxable": ["ns"], "rate": "0.15"},
            "signup": {"enabled": true, "allowed": " ns"}
        }"#;
        let policy: PricingPolicy = serde_json::from_str(json).unwrap();
        for code in ["NS", "ns"] {
            assert!(policy.tax.is_taxable(Some(code)));
            assert!(policy.signup.is_allowed_for_signup(Some(code)));
        }
        assert_eq!(policy.signup, SignupGate::new(true, "NS"));
    }

    #[test]
    fn test_deserialize_rejects_blank_codes() {
        let json = r#"{
            "tax": {"taxable": [" "], "rate": "0.15"},
            "signup": {"enabled": false, "allowed": null}
        }"#;
        assert!(serde_json::from_str::<PricingPolicy>(json).is_err());
    }
}
