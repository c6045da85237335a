use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::buyer_lead::BuyerDiscovery;
use crate::domain::entities::market_intelligence::MarketIntelligence;
use crate::domain::entities::market_stats::MarketData;
use crate::domain::values::output_language::OutputLanguage;
use crate::domain::values::product_query::ProductQuery;

/// Everything one pipeline run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub session_id: Uuid,
    pub run: u32,
    pub product: ProductQuery,
    pub intelligence: MarketIntelligence,
    pub market_data: MarketData,
    pub buyers: BuyerDiscovery,
    pub language: OutputLanguage,
    /// Model output, verbatim.
    pub report: Option<String>,
    /// Set instead of `report` when the final model call failed.
    pub report_error: Option<String>,
    pub generated_at: DateTime<Utc>,
}
