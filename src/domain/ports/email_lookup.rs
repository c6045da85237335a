use crate::domain::error::ProviderError;
use async_trait::async_trait;

#[async_trait]
pub trait EmailLookup: Send + Sync {
    fn name(&self) -> &str;

    /// First known address at `domain`, if the service has one.
    async fn first_email(&self, domain: &str) -> Result<Option<String>, ProviderError>;
}
