use crate::domain::error::ProviderError;

/// A generative text model: prompt in, free text out.
#[async_trait::async_trait]
pub trait LanguageModel: Send + Sync {
    fn name(&self) -> &str;
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
