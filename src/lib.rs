pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::discover_buyers::DiscoverBuyersUseCase;
use crate::application::market_data::MarketDataUseCase;
use crate::application::pipeline::{PipelineUseCase, Target};
use crate::application::resolve_product::ResolveProductUseCase;
use crate::application::session::Session;
use crate::application::synthesize_report::SynthesizeReportUseCase;
use crate::config::Settings;
use crate::domain::entities::buyer_lead::{BuyerDiscovery, BuyerLead};
use crate::domain::entities::market_intelligence::MarketIntelligence;
use crate::domain::entities::market_stats::MarketData;
use crate::domain::entities::run_report::RunReport;
use crate::domain::error::DomainError;
use crate::domain::ports::email_lookup::EmailLookup;
use crate::domain::ports::language_model::LanguageModel;
use crate::domain::ports::trade_stats::TradeStatsSource;
use crate::domain::ports::web_search::WebSearch;
use crate::domain::values::credentials::{CredentialKind, Credentials};
use crate::domain::values::output_language::OutputLanguage;
use crate::domain::values::product_query::ProductQuery;
use crate::infrastructure::email::hunter::HunterLookup;
use crate::infrastructure::llm::gemini::GeminiModel;
use crate::infrastructure::search::google::GoogleSearch;
use crate::infrastructure::trade::comtrade::ComtradeSource;
use std::sync::Arc;

pub struct Growmarkt {
    resolve_uc: Arc<ResolveProductUseCase>,
    market_data_uc: Arc<MarketDataUseCase>,
    buyers_uc: Arc<DiscoverBuyersUseCase>,
    report_uc: Arc<SynthesizeReportUseCase>,
    pipeline_uc: PipelineUseCase,
}

impl Growmarkt {
    /// Builds the real API clients from the session's keys. Fails with one
    /// aggregate error if any required key is missing; the email-lookup key
    /// is optional.
    pub fn open(credentials: &Credentials, settings: &Settings) -> Result<Self, DomainError> {
        credentials.require_all()?;

        let key = |kind: CredentialKind| -> Result<String, DomainError> {
            credentials
                .get(kind)
                .map(|s| s.expose().to_string())
                .ok_or_else(|| DomainError::MissingCredentials(vec![kind]))
        };

        let endpoints = &settings.endpoints;
        let model: Arc<dyn LanguageModel> = Arc::new(GeminiModel::new(
            key(CredentialKind::LanguageModel)?,
            Some(settings.gemini_model.clone()),
            Some(endpoints.gemini.clone()),
        ));
        let trade: Arc<dyn TradeStatsSource> = Arc::new(ComtradeSource::new(
            key(CredentialKind::TradeData)?,
            Some(endpoints.comtrade.clone()),
        ));
        let search: Arc<dyn WebSearch> = Arc::new(GoogleSearch::new(
            key(CredentialKind::SearchKey)?,
            key(CredentialKind::SearchEngineId)?,
            Some(endpoints.google.clone()),
        ));
        let emails: Option<Arc<dyn EmailLookup>> = credentials
            .get(CredentialKind::EmailLookup)
            .map(|k| {
                Arc::new(HunterLookup::new(
                    k.expose().to_string(),
                    Some(endpoints.hunter.clone()),
                )) as Arc<dyn EmailLookup>
            });

        Ok(Self::with_providers(
            model,
            trade,
            search,
            emails,
            settings.trade_period,
        ))
    }

    pub fn with_providers(
        model: Arc<dyn LanguageModel>,
        trade: Arc<dyn TradeStatsSource>,
        search: Arc<dyn WebSearch>,
        emails: Option<Arc<dyn EmailLookup>>,
        trade_period: i32,
    ) -> Self {
        let resolve_uc = Arc::new(ResolveProductUseCase::new(model.clone()));
        let market_data_uc = Arc::new(MarketDataUseCase::new(trade, trade_period));
        let buyers_uc = Arc::new(DiscoverBuyersUseCase::new(search, emails));
        let report_uc = Arc::new(SynthesizeReportUseCase::new(model));

        Self {
            pipeline_uc: PipelineUseCase::new(
                resolve_uc.clone(),
                market_data_uc.clone(),
                buyers_uc.clone(),
                report_uc.clone(),
            ),
            resolve_uc,
            market_data_uc,
            buyers_uc,
            report_uc,
        }
    }

    // Delegating methods
    pub async fn resolve(&self, product: &ProductQuery) -> Result<MarketIntelligence, DomainError> {
        self.resolve_uc.execute(product).await
    }

    pub async fn market_data(&self, intelligence: &MarketIntelligence) -> MarketData {
        self.market_data_uc.execute(intelligence).await
    }

    pub fn trade_period(&self) -> i32 {
        self.market_data_uc.period()
    }

    pub async fn discover_buyers(&self, product: &ProductQuery, country_name: &str) -> BuyerDiscovery {
        self.buyers_uc.execute(product, country_name).await
    }

    pub async fn synthesize_report(
        &self,
        product: &ProductQuery,
        intelligence: &MarketIntelligence,
        market_data: &MarketData,
        leads: &[BuyerLead],
        language: OutputLanguage,
    ) -> Result<String, DomainError> {
        self.report_uc
            .execute(product, intelligence, market_data, leads, language)
            .await
    }

    pub async fn run(
        &self,
        session: &Session,
        product: &ProductQuery,
        target: Target,
    ) -> Result<RunReport, DomainError> {
        self.pipeline_uc.execute(session, product, target).await
    }
}
