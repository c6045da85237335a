use crate::domain::entities::buyer_lead::{BuyerDiscovery, BuyerLead};
use crate::domain::ports::email_lookup::EmailLookup;
use crate::domain::ports::web_search::WebSearch;
use crate::domain::values::lead_email::LeadEmail;
use crate::domain::values::product_query::ProductQuery;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Upper bound on leads per run, whatever the search API returns.
pub const MAX_LEADS: usize = 5;

/// Social and pin-board sites that rank well but never list importers.
const EXCLUDED_SITES: [&str; 3] = ["pinterest.*", "facebook.com", "instagram.com"];

pub fn search_query(product: &str, country_name: &str) -> String {
    let exclusions: Vec<String> = EXCLUDED_SITES.iter().map(|s| format!("-site:{s}")).collect();
    format!(
        "top {product} importers distributors {country_name} {}",
        exclusions.join(" ")
    )
}

pub struct DiscoverBuyersUseCase {
    search: Arc<dyn WebSearch>,
    emails: Option<Arc<dyn EmailLookup>>,
}

impl DiscoverBuyersUseCase {
    pub fn new(search: Arc<dyn WebSearch>, emails: Option<Arc<dyn EmailLookup>>) -> Self {
        Self { search, emails }
    }

    pub async fn execute(&self, product: &ProductQuery, country_name: &str) -> BuyerDiscovery {
        let query = search_query(product.as_str(), country_name);

        let hits = match self.search.search(&query, MAX_LEADS).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!(source = self.search.name(), error = %e, "Buyer search failed");
                return BuyerDiscovery::failed(format!("Search error: {e}"));
            }
        };

        let mut leads = Vec::with_capacity(MAX_LEADS);
        for hit in hits.into_iter().take(MAX_LEADS) {
            let lead = BuyerLead::new(&hit.title, &hit.display_link);
            let email = self.lookup_email(&lead.domain).await;
            leads.push(lead.with_email(email));
        }

        info!(
            leads = leads.len(),
            with_email = leads.iter().filter(|l| l.email.is_found()).count(),
            "Buyer discovery complete"
        );

        BuyerDiscovery::found(leads)
    }

    /// Any failure here only affects this one lead.
    async fn lookup_email(&self, domain: &str) -> LeadEmail {
        let Some(emails) = &self.emails else {
            return LeadEmail::NotFound;
        };
        if domain.is_empty() {
            return LeadEmail::NotFound;
        }

        match emails.first_email(domain).await {
            Ok(found) => LeadEmail::from_lookup(found.as_deref()),
            Err(e) => {
                debug!(domain, source = emails.name(), error = %e, "Email lookup failed");
                LeadEmail::NotFound
            }
        }
    }
}
