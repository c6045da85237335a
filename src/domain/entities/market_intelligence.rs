use serde::Serialize;

use crate::domain::error::DomainError;

/// What the resolver infers about a product: its HS code and the largest
/// importing country for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketIntelligence {
    pub hs_code: String,
    pub target_country_iso: String,
    pub country_name: String,
}

impl MarketIntelligence {
    /// Validates and normalizes all three fields. HS codes may arrive as
    /// `0802.21`; the dots are dropped. No field may be empty.
    pub fn new(hs_code: &str, target_country_iso: &str, country_name: &str) -> Result<Self, DomainError> {
        let hs_code: String = hs_code.trim().chars().filter(|c| *c != '.').collect();
        if !(2..=6).contains(&hs_code.len()) || !hs_code.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::Resolution(format!(
                "HS code must be 2-6 digits, got {hs_code:?}"
            )));
        }

        let iso = target_country_iso.trim();
        if !(1..=3).contains(&iso.len()) || !iso.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::Resolution(format!(
                "country code must be a 1-3 digit ISO numeric code, got {iso:?}"
            )));
        }

        let country_name = country_name.trim();
        if country_name.is_empty() {
            return Err(DomainError::Resolution("country name is empty".into()));
        }

        Ok(Self {
            hs_code,
            target_country_iso: iso.to_string(),
            country_name: country_name.to_string(),
        })
    }

    /// Same checks as `new`, for values typed by the user: failures are
    /// input errors, not resolution errors.
    pub fn supplied(hs_code: &str, target_country_iso: &str, country_name: &str) -> Result<Self, DomainError> {
        Self::new(hs_code, target_country_iso, country_name).map_err(|e| match e {
            DomainError::Resolution(reason) => DomainError::InvalidInput(reason),
            other => other,
        })
    }

    pub fn summary(&self) -> String {
        format!(
            "HS {} → {} ({})",
            self.hs_code, self.country_name, self.target_country_iso
        )
    }
}
