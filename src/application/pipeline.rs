use crate::application::discover_buyers::DiscoverBuyersUseCase;
use crate::application::market_data::MarketDataUseCase;
use crate::application::resolve_product::ResolveProductUseCase;
use crate::application::session::Session;
use crate::application::synthesize_report::SynthesizeReportUseCase;
use crate::domain::entities::market_intelligence::MarketIntelligence;
use crate::domain::entities::run_report::RunReport;
use crate::domain::error::DomainError;
use crate::domain::values::product_query::ProductQuery;
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, info_span, warn, Instrument};

/// Where the HS code and target country come from.
#[derive(Debug, Clone)]
pub enum Target {
    /// Ask the language model.
    Resolve,
    /// Supplied by the user; the resolver is skipped.
    Manual(MarketIntelligence),
}

impl Target {
    /// User-supplied HS code, country code and country name: all three
    /// skip the resolver, none asks the model, anything else is an error.
    pub fn from_parts(
        hs_code: Option<String>,
        country_code: Option<String>,
        country_name: Option<String>,
    ) -> Result<Self, DomainError> {
        match (hs_code, country_code, country_name) {
            (None, None, None) => Ok(Target::Resolve),
            (Some(hs), Some(iso), Some(name)) => {
                MarketIntelligence::supplied(&hs, &iso, &name).map(Target::Manual)
            }
            _ => Err(DomainError::InvalidInput(
                "--hs-code, --country-code and --country-name must be given together".into(),
            )),
        }
    }
}

/// The four phases, strictly in order. Only a failed product resolution
/// stops the run; every later phase degrades instead.
pub struct PipelineUseCase {
    resolve: Arc<ResolveProductUseCase>,
    market_data: Arc<MarketDataUseCase>,
    buyers: Arc<DiscoverBuyersUseCase>,
    report: Arc<SynthesizeReportUseCase>,
}

impl PipelineUseCase {
    pub fn new(
        resolve: Arc<ResolveProductUseCase>,
        market_data: Arc<MarketDataUseCase>,
        buyers: Arc<DiscoverBuyersUseCase>,
        report: Arc<SynthesizeReportUseCase>,
    ) -> Self {
        Self {
            resolve,
            market_data,
            buyers,
            report,
        }
    }

    pub async fn execute(
        &self,
        session: &Session,
        product: &ProductQuery,
        target: Target,
    ) -> Result<RunReport, DomainError> {
        let run = session.next_run();
        let span = info_span!("run", session = %session.id(), run, product = %product);
        self.run_phases(session, run, product, target)
            .instrument(span)
            .await
    }

    async fn run_phases(
        &self,
        session: &Session,
        run: u32,
        product: &ProductQuery,
        target: Target,
    ) -> Result<RunReport, DomainError> {
        let start = Instant::now();

        let intelligence = match target {
            Target::Resolve => self.resolve.execute(product).await?,
            Target::Manual(mi) => {
                info!(hs_code = %mi.hs_code, country = %mi.country_name, "Using supplied market target");
                mi
            }
        };

        let market_data = self.market_data.execute(&intelligence).await;

        let buyers = self
            .buyers
            .execute(product, &intelligence.country_name)
            .await;

        let (report, report_error) = match self
            .report
            .execute(
                product,
                &intelligence,
                &market_data,
                &buyers.leads,
                session.language(),
            )
            .await
        {
            Ok(text) => (Some(text), None),
            Err(e) => {
                warn!(error = %e, "Report synthesis failed");
                (None, Some(e.to_string()))
            }
        };

        info!(elapsed_ms = start.elapsed().as_millis() as u64, "Run complete");

        Ok(RunReport {
            session_id: session.id(),
            run,
            product: product.clone(),
            intelligence,
            market_data,
            buyers,
            language: session.language(),
            report,
            report_error,
            generated_at: Utc::now(),
        })
    }
}
