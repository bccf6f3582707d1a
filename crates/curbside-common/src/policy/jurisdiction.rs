//! Jurisdiction code normalization
//!
//! Both the tax check and the signup gate compare codes through
//! [`JurisdictionCode::parse`], so `"ns"`, `"NS"` and `"  NS  "` are one code and an
//! absent or blank input is no code at all.

use serde::{Deserialize, Serialize};

use crate::error::CurbsideError;

/// Normalized province/state code: trimmed and uppercased, never empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JurisdictionCode(String);

impl JurisdictionCode {
    /// Normalize a raw jurisdiction string.
    ///
    /// Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_uppercase()))
        }
    }

    /// Normalize an optional raw jurisdiction string
    pub fn parse_opt(raw: Option<&str>) -> Option<Self> {
        raw.and_then(Self::parse)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for JurisdictionCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for JurisdictionCode {
    type Error = CurbsideError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw).ok_or_else(|| CurbsideError::Config("blank jurisdiction code".into()))
    }
}

impl From<JurisdictionCode> for String {
    fn from(code: JurisdictionCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for JurisdictionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_uppercases() {
        assert_eq!(JurisdictionCode::parse("ns").unwrap().as_str(), "NS");
        assert_eq!(JurisdictionCode::parse("  Ns \t").unwrap().as_str(), "NS");
        assert_eq!(JurisdictionCode::parse("NS"), JurisdictionCode::parse(" ns "));
    }

    #[test]
    fn test_blank_is_none() {
        assert_eq!(JurisdictionCode::parse(""), None);
        assert_eq!(JurisdictionCode::parse("   "), None);
        assert_eq!(JurisdictionCode::parse_opt(None), None);
    }

    #[test]
    fn test_inner_whitespace_kept() {
        let code = JurisdictionCode::parse(" new brunswick ").unwrap();
        assert_eq!(code.as_str(), "NEW BRUNSWICK");
    }

    #[test]
    fn test_deserialize_normalizes() {
        let code: JurisdictionCode = serde_json::from_str("\" ns\"").unwrap();
        assert_eq!(code.as_str(), "NS");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"NS\"");
    }

    #[test]
    fn test_deserialize_rejects_blank() {
        assert!(serde_json::from_str::<JurisdictionCode>("\"  \"").is_err());
    }
}
