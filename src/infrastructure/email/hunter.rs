use crate::domain::error::ProviderError;
use crate::domain::ports::email_lookup::EmailLookup;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Hunter.io domain search, first address only.
pub struct HunterLookup {
    client: Client,
    api_key: String,
    base_url: String,
}

impl HunterLookup {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.hunter.io".to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DomainSearchResponse {
    #[serde(default)]
    data: Option<DomainData>,
}

#[derive(Debug, Deserialize)]
struct DomainData {
    #[serde(default)]
    emails: Vec<EmailRecord>,
}

#[derive(Debug, Deserialize)]
struct EmailRecord {
    #[serde(default)]
    value: Option<String>,
}

fn first_value(resp: DomainSearchResponse) -> Option<String> {
    resp.data?
        .emails
        .into_iter()
        .find_map(|e| e.value)
}

#[async_trait]
impl EmailLookup for HunterLookup {
    fn name(&self) -> &str {
        "Hunter.io"
    }

    async fn first_email(&self, domain: &str) -> Result<Option<String>, ProviderError> {
        let resp = self
            .client
            .get(format!("{}/v2/domain-search", self.base_url))
            .query(&[
                ("domain", domain),
                ("api_key", self.api_key.as_str()),
                ("limit", "1"),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.without_url().to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                service: "Hunter.io",
                status: status.as_u16(),
                body,
            });
        }

        let data: DomainSearchResponse = resp
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.without_url().to_string()))?;

        Ok(first_value(data))
    }
}
