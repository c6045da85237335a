use crate::application::parser::parse_intelligence;
use crate::application::prompts::resolver_prompt;
use crate::domain::entities::market_intelligence::MarketIntelligence;
use crate::domain::error::DomainError;
use crate::domain::ports::language_model::LanguageModel;
use crate::domain::values::product_query::ProductQuery;
use std::sync::Arc;
use tracing::{info, warn};

pub struct ResolveProductUseCase {
    model: Arc<dyn LanguageModel>,
}

impl ResolveProductUseCase {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Asks the model for HS code, top importer and its name. Not retried:
    /// an unparsable answer ends the run.
    pub async fn execute(&self, product: &ProductQuery) -> Result<MarketIntelligence, DomainError> {
        let prompt = resolver_prompt(product.as_str());
        let raw = self
            .model
            .generate(&prompt)
            .await
            .map_err(|e| DomainError::LanguageModel(e.to_string()))?;

        match parse_intelligence(&raw) {
            Ok(mi) => {
                info!(
                    product = %product,
                    hs_code = %mi.hs_code,
                    country = %mi.country_name,
                    "Product resolved"
                );
                Ok(mi)
            }
            Err(e) => {
                warn!(product = %product, model = self.model.name(), error = %e, "Resolver output rejected");
                Err(e)
            }
        }
    }
}
