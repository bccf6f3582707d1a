//! Taxable jurisdiction set and tax rate

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::jurisdiction::JurisdictionCode;

/// Which jurisdictions are taxed, and at what rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxPolicy {
    taxable: BTreeSet<JurisdictionCode>,
    rate: Decimal,
}

impl TaxPolicy {
    /// Build a policy from raw codes; blank codes are dropped
    pub fn new<I, S>(rate: Decimal, jurisdictions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let taxable = jurisdictions
            .into_iter()
            .filter_map(|raw| JurisdictionCode::parse(raw.as_ref()))
            .collect();
        Self { taxable, rate }
    }

    /// Whether the normalized jurisdiction is in the taxable set.
    ///
    /// Absent or blank jurisdictions are never taxable.
    pub fn is_taxable(&self, jurisdiction: Option<&str>) -> bool {
        JurisdictionCode::parse_opt(jurisdiction)
            .map(|code| self.taxable.contains(&code))
            .unwrap_or(false)
    }

    /// Tax rate as a fraction (0.15 = 15%)
    pub fn rate(&self) -> Decimal {
        self.rate
    }

    pub fn taxable_jurisdictions(&self) -> impl Iterator<Item = &JurisdictionCode> {
        self.taxable.iter()
    }
}
