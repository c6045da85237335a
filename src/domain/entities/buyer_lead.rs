use serde::Serialize;

use crate::domain::values::lead_email::LeadEmail;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuyerLead {
    pub company_name: String,
    pub domain: String,
    pub email: LeadEmail,
}

impl BuyerLead {
    pub fn new(company_name: &str, display_link: &str) -> Self {
        Self {
            company_name: company_name.trim().to_string(),
            domain: normalize_domain(display_link),
            email: LeadEmail::NotFound,
        }
    }

    pub fn with_email(mut self, email: LeadEmail) -> Self {
        self.email = email;
        self
    }
}

/// Lowercases and strips one leading `www.`.
pub fn normalize_domain(display_link: &str) -> String {
    let d = display_link.trim().to_lowercase();
    match d.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => d,
    }
}

/// Result of the discovery step. When the search call itself failed,
/// `leads` is empty and `diagnostic` says why.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuyerDiscovery {
    pub leads: Vec<BuyerLead>,
    pub diagnostic: Option<String>,
}

impl BuyerDiscovery {
    pub fn found(leads: Vec<BuyerLead>) -> Self {
        Self {
            leads,
            diagnostic: None,
        }
    }

    pub fn failed(diagnostic: String) -> Self {
        Self {
            leads: vec![],
            diagnostic: Some(diagnostic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_domain() {
        assert_eq!(normalize_domain("www.nuts.de"), "nuts.de");
        assert_eq!(normalize_domain("WWW.Nuts.DE"), "nuts.de");
        assert_eq!(normalize_domain("shop.nuts.de"), "shop.nuts.de");
        assert_eq!(normalize_domain("www.www.x.com"), "www.x.com");
    }

    #[test]
    fn test_new_lead_defaults_to_sentinel() {
        let lead = BuyerLead::new(" Nut Importers GmbH ", "www.nuts.de");
        assert_eq!(lead.company_name, "Nut Importers GmbH");
        assert_eq!(lead.email.as_str(), "not found");
    }
}
