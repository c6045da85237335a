use crate::domain::error::ProviderError;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub display_link: String,
}

#[async_trait]
pub trait WebSearch: Send + Sync {
    fn name(&self) -> &str;

    /// Ranked hits, at most `num`.
    async fn search(&self, query: &str, num: usize) -> Result<Vec<SearchHit>, ProviderError>;
}
