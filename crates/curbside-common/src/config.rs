//! Policy configuration
//!
//! All defaults live here. [`PolicyConfig::load`] reads the process environment
//! once at startup; [`PolicyConfig::from_lookup`] applies the same parsing to any
//! key source so tests never mutate global state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{CurbsideError, Result};
use crate::policy::jurisdiction::JurisdictionCode;

/// Fallback tax rate (15%)
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Fallback jurisdiction for both the taxable set and the signup gate
pub const DEFAULT_JURISDICTION: &str = "NS";

pub const ENV_TAX_RATE: &str = "CURBSIDE_TAX_RATE";
pub const ENV_TAXABLE_JURISDICTIONS: &str = "CURBSIDE_TAXABLE_JURISDICTIONS";
pub const ENV_SIGNUP_GATE_ENABLED: &str = "CURBSIDE_SIGNUP_GATE_ENABLED";
pub const ENV_ALLOWED_JURISDICTION: &str = "CURBSIDE_ALLOWED_JURISDICTION";

/// Pricing and signup policy settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Tax rate as a fraction in [0, 1]
    pub tax_rate: Decimal,
    /// Normalized taxable jurisdiction codes
    pub taxable_jurisdictions: Vec<String>,
    /// Whether signups outside the allowed jurisdiction are waitlisted
    pub signup_gate_enabled: bool,
    /// Normalized jurisdiction admitted by the signup gate
    pub allowed_jurisdiction: String,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            taxable_jurisdictions: vec![DEFAULT_JURISDICTION.to_string()],
            signup_gate_enabled: false,
            allowed_jurisdiction: DEFAULT_JURISDICTION.to_string(),
        }
    }
}

impl PolicyConfig {
    /// Load configuration from `.env` and the process environment
    pub fn load() -> Self {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Missing or malformed values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(raw) = lookup(ENV_TAX_RATE) {
            match parse_tax_rate(&raw) {
                Some(rate) => cfg.tax_rate = rate,
                None => warn!(
                    key = ENV_TAX_RATE,
                    value = %raw,
                    fallback = %DEFAULT_TAX_RATE,
                    "Malformed tax rate, using default"
                ),
            }
        }

        if let Some(raw) = lookup(ENV_TAXABLE_JURISDICTIONS) {
            let codes = parse_jurisdiction_list(&raw);
            if codes.is_empty() {
                warn!(
                    key = ENV_TAXABLE_JURISDICTIONS,
                    value = %raw,
                    fallback = DEFAULT_JURISDICTION,
                    "No taxable jurisdictions listed, using default"
                );
            } else {
                cfg.taxable_jurisdictions = codes;
            }
        }

        if let Some(raw) = lookup(ENV_SIGNUP_GATE_ENABLED) {
            match parse_flag(&raw) {
                Some(enabled) => cfg.signup_gate_enabled = enabled,
                None => warn!(
                    key = ENV_SIGNUP_GATE_ENABLED,
                    value = %raw,
                    "Malformed flag, signup gate stays disabled"
                ),
            }
        }

        if let Some(raw) = lookup(ENV_ALLOWED_JURISDICTION) {
            match JurisdictionCode::parse(&raw) {
                Some(code) => cfg.allowed_jurisdiction = code.to_string(),
                None => warn!(
                    key = ENV_ALLOWED_JURISDICTION,
                    fallback = DEFAULT_JURISDICTION,
                    "Blank allowed jurisdiction, using default"
                ),
            }
        }

        cfg
    }

    /// Check a directly constructed configuration
    pub fn validate(&self) -> Result<()> {
        if self.tax_rate < Decimal::ZERO || self.tax_rate > Decimal::ONE {
            return Err(CurbsideError::Config(format!(
                "tax rate {} outside [0, 1]",
                self.tax_rate
            )));
        }
        if JurisdictionCode::parse(&self.allowed_jurisdiction).is_none() {
            return Err(CurbsideError::Config(
                "allowed jurisdiction is blank".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_tax_rate(raw: &str) -> Option<Decimal> {
    raw.trim()
        .parse::<Decimal>()
        .ok()
        .filter(|rate| *rate >= Decimal::ZERO && *rate <= Decimal::ONE)
}

fn parse_jurisdiction_list(raw: &str) -> Vec<String> {
    let mut codes: Vec<String> = Vec::new();
    for code in raw.split(',').filter_map(JurisdictionCode::parse) {
        let code = code.to_string();
        if !codes.contains(&code) {
            codes.push(code);
        }
    }
    codes
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
