use crate::domain::error::ProviderError;
use crate::domain::ports::web_search::{SearchHit, WebSearch};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Google Custom Search JSON API.
pub struct GoogleSearch {
    client: Client,
    api_key: String,
    engine_id: String,
    base_url: String,
}

impl GoogleSearch {
    pub fn new(api_key: String, engine_id: String, base_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            engine_id,
            base_url: base_url.unwrap_or_else(|| "https://www.googleapis.com".to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    // Absent entirely when there are no results.
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    display_link: String,
}

fn into_hits(resp: SearchResponse) -> Vec<SearchHit> {
    resp.items
        .into_iter()
        .map(|i| SearchHit {
            title: i.title,
            display_link: i.display_link,
        })
        .collect()
}

#[async_trait]
impl WebSearch for GoogleSearch {
    fn name(&self) -> &str {
        "Google Custom Search"
    }

    async fn search(&self, query: &str, num: usize) -> Result<Vec<SearchHit>, ProviderError> {
        // The API accepts 1..=10.
        let num = num.clamp(1, 10).to_string();
        let resp = self
            .client
            .get(format!("{}/customsearch/v1", self.base_url))
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
                ("q", query),
                ("num", num.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.without_url().to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                service: "Google Custom Search",
                status: status.as_u16(),
                body,
            });
        }

        let data: SearchResponse = resp
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.without_url().to_string()))?;

        Ok(into_hits(data))
    }
}
