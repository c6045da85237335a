use crate::domain::entities::market_intelligence::MarketIntelligence;
use crate::domain::entities::market_stats::{MarketData, MarketStats};
use crate::domain::ports::trade_stats::{TradeQuery, TradeStatsSource};
use std::sync::Arc;
use tracing::{info, warn};

pub struct MarketDataUseCase {
    source: Arc<dyn TradeStatsSource>,
    period: i32,
}

impl MarketDataUseCase {
    pub fn new(source: Arc<dyn TradeStatsSource>, period: i32) -> Self {
        Self { source, period }
    }

    pub fn period(&self) -> i32 {
        self.period
    }

    /// Never fails: an empty result set and a failed call are both
    /// reported through `MarketData` so the run can continue.
    pub async fn execute(&self, intelligence: &MarketIntelligence) -> MarketData {
        let query = TradeQuery {
            reporter_code: intelligence.target_country_iso.clone(),
            commodity_code: intelligence.hs_code.clone(),
            period: self.period,
        };

        let rows = match self.source.imports(&query).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(source = self.source.name(), hs_code = %query.commodity_code, error = %e, "Trade data fetch failed");
                let reason = if e.is_auth() {
                    format!("{e} (check the trade-data key)")
                } else {
                    e.to_string()
                };
                return MarketData::Failed { reason };
            }
        };

        if rows.is_empty() {
            info!(
                hs_code = %query.commodity_code,
                reporter = %query.reporter_code,
                period = query.period,
                "No trade data reported"
            );
            return MarketData::Unavailable {
                reason: format!(
                    "{} has no import records for HS {} in {} ({})",
                    self.source.name(),
                    query.commodity_code,
                    intelligence.country_name,
                    query.period
                ),
            };
        }

        let (value, weight) = rows.iter().fold((0.0, 0.0), |(v, w), row| {
            (v + row.primary_value, w + row.net_weight)
        });
        let stats = MarketStats::new(value, weight);

        info!(
            rows = rows.len(),
            total_import_value = stats.total_import_value,
            unit_price = stats.unit_price,
            "Market data retrieved"
        );

        MarketData::Available {
            stats,
            period: self.period,
        }
    }
}
