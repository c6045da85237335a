use crate::domain::error::ProviderError;
use async_trait::async_trait;

/// Annual import query for one reporter country and commodity, aggregated
/// over all partners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeQuery {
    pub reporter_code: String,
    pub commodity_code: String,
    pub period: i32,
}

/// One row of the result set. Missing cells arrive as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TradeRow {
    pub primary_value: f64,
    pub net_weight: f64,
}

#[async_trait]
pub trait TradeStatsSource: Send + Sync {
    fn name(&self) -> &str;

    /// An empty `Vec` means "no data for this query", not a failure.
    async fn imports(&self, query: &TradeQuery) -> Result<Vec<TradeRow>, ProviderError>;
}
