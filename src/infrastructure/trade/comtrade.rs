use crate::domain::error::ProviderError;
use crate::domain::ports::trade_stats::{TradeQuery, TradeRow, TradeStatsSource};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// UN Comtrade final data, commodities / annual / HS, imports only.
pub struct ComtradeSource {
    client: Client,
    subscription_key: String,
    base_url: String,
}

impl ComtradeSource {
    pub fn new(subscription_key: String, base_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            subscription_key,
            base_url: base_url.unwrap_or_else(|| "https://comtradeapi.un.org".to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ComtradeResponse {
    #[serde(default)]
    data: Option<Vec<ComtradeRow>>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComtradeRow {
    #[serde(default)]
    primary_value: Option<f64>,
    #[serde(default)]
    net_wgt: Option<f64>,
}

fn into_rows(resp: ComtradeResponse) -> Result<Vec<TradeRow>, ProviderError> {
    if let Some(err) = resp.error.filter(|e| !e.trim().is_empty()) {
        return Err(ProviderError::Parse(format!("Comtrade error: {err}")));
    }

    Ok(resp
        .data
        .unwrap_or_default()
        .into_iter()
        .map(|r| TradeRow {
            primary_value: r.primary_value.unwrap_or(0.0),
            net_weight: r.net_wgt.unwrap_or(0.0),
        })
        .collect())
}

#[async_trait]
impl TradeStatsSource for ComtradeSource {
    fn name(&self) -> &str {
        "UN Comtrade"
    }

    async fn imports(&self, query: &TradeQuery) -> Result<Vec<TradeRow>, ProviderError> {
        let period = query.period.to_string();
        let resp = self
            .client
            .get(format!("{}/data/v1/get/C/A/HS", self.base_url))
            .header("Ocp-Apim-Subscription-Key", &self.subscription_key)
            .query(&[
                ("reporterCode", query.reporter_code.as_str()),
                ("period", period.as_str()),
                ("cmdCode", query.commodity_code.as_str()),
                ("flowCode", "M"),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.without_url().to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                service: "UN Comtrade",
                status: status.as_u16(),
                body,
            });
        }

        let data: ComtradeResponse = resp
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.without_url().to_string()))?;

        into_rows(data)
    }
}
