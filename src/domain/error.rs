use thiserror::Error;

use crate::domain::values::credentials::CredentialKind;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Missing API keys: {}", format_missing(.0))]
    MissingCredentials(Vec<CredentialKind>),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Could not identify product: {0}")]
    Resolution(String),

    #[error("AI error: {0}")]
    LanguageModel(String),
}

fn format_missing(kinds: &[CredentialKind]) -> String {
    kinds
        .iter()
        .map(|k| k.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure of a single call to an external API.
///
/// Kept separate from "the call succeeded but returned nothing", which
/// adapters report as an empty `Ok` value.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport failure: DNS, TLS, connection reset.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status, including auth rejections.
    #[error("{service} returned {status}: {body}")]
    Api {
        service: &'static str,
        status: u16,
        body: String,
    },

    /// The response arrived but did not have the expected shape.
    #[error("Malformed response: {0}")]
    Parse(String),
}

impl ProviderError {
    pub fn is_auth(&self) -> bool {
        matches!(self, ProviderError::Api { status: 401 | 403, .. })
    }
}
