//! Regional signup gate
//!
//! When enabled, only signups from the allowed jurisdiction get a full account;
//! everyone else is waitlisted.

use serde::{Deserialize, Serialize};

use super::jurisdiction::JurisdictionCode;

/// Outcome of routing a new signup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignupDecision {
    /// Create a full account
    Admit,
    /// Place on the waitlist
    Waitlist,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupGate {
    enabled: bool,
    allowed: Option<JurisdictionCode>,
}

impl SignupGate {
    /// Build a gate; a blank allowed jurisdiction admits nobody through the predicate
    pub fn new(enabled: bool, allowed: &str) -> Self {
        Self {
            enabled,
            allowed: JurisdictionCode::parse(allowed),
        }
    }

    /// Whether callers should consult [`Self::is_allowed_for_signup`] at all
    pub fn gate_enabled(&self) -> bool {
        self.enabled
    }

    pub fn allowed_jurisdiction(&self) -> Option<&JurisdictionCode> {
        self.allowed.as_ref()
    }

    /// Whether the normalized jurisdiction equals the allowed one.
    ///
    /// Ignores the enabled flag.
    pub fn is_allowed_for_signup(&self, jurisdiction: Option<&str>) -> bool {
        match (JurisdictionCode::parse_opt(jurisdiction), &self.allowed) {
            (Some(code), Some(allowed)) => &code == allowed,
            _ => false,
        }
    }

    /// Route a signup, admitting everyone while the gate is disabled
    pub fn route(&self, jurisdiction: Option<&str>) -> SignupDecision {
        if !self.enabled || self.is_allowed_for_signup(jurisdiction) {
            SignupDecision::Admit
        } else {
            SignupDecision::Waitlist
        }
    }
}
