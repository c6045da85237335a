use crate::application::prompts::report_prompt;
use crate::domain::entities::buyer_lead::BuyerLead;
use crate::domain::entities::market_intelligence::MarketIntelligence;
use crate::domain::entities::market_stats::MarketData;
use crate::domain::error::DomainError;
use crate::domain::ports::language_model::LanguageModel;
use crate::domain::values::output_language::OutputLanguage;
use crate::domain::values::product_query::ProductQuery;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

pub struct SynthesizeReportUseCase {
    model: Arc<dyn LanguageModel>,
}

impl SynthesizeReportUseCase {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    pub async fn execute(
        &self,
        product: &ProductQuery,
        intelligence: &MarketIntelligence,
        market_data: &MarketData,
        leads: &[BuyerLead],
        language: OutputLanguage,
    ) -> Result<String, DomainError> {
        let prompt = report_prompt(
            product.as_str(),
            intelligence,
            &market_data.display(),
            leads,
            language,
        );

        let start = Instant::now();
        let report = self
            .model
            .generate(&prompt)
            .await
            .map_err(|e| DomainError::LanguageModel(e.to_string()))?;

        info!(
            model = self.model.name(),
            chars = report.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Report generated"
        );

        Ok(report)
    }
}
