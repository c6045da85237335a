use serde::Serialize;
use std::fmt;

use crate::domain::error::DomainError;

/// The five API keys a session may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialKind {
    LanguageModel,
    TradeData,
    SearchKey,
    SearchEngineId,
    EmailLookup,
}

impl CredentialKind {
    /// Keys without which no run starts. The email-lookup key is optional.
    pub const REQUIRED: [CredentialKind; 4] = [
        CredentialKind::LanguageModel,
        CredentialKind::TradeData,
        CredentialKind::SearchKey,
        CredentialKind::SearchEngineId,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CredentialKind::LanguageModel => "Gemini API key",
            CredentialKind::TradeData => "UN Comtrade key",
            CredentialKind::SearchKey => "Google API key",
            CredentialKind::SearchEngineId => "Google search engine ID",
            CredentialKind::EmailLookup => "Hunter.io API key",
        }
    }
}

impl fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An API key. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Blank input counts as absent.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Secret(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret(***)")
    }
}

#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub language_model: Option<Secret>,
    pub trade_data: Option<Secret>,
    pub search_key: Option<Secret>,
    pub search_engine_id: Option<Secret>,
    pub email_lookup: Option<Secret>,
}

impl Credentials {
    pub fn new(
        language_model: Option<String>,
        trade_data: Option<String>,
        search_key: Option<String>,
        search_engine_id: Option<String>,
        email_lookup: Option<String>,
    ) -> Self {
        Self {
            language_model: language_model.and_then(Secret::new),
            trade_data: trade_data.and_then(Secret::new),
            search_key: search_key.and_then(Secret::new),
            search_engine_id: search_engine_id.and_then(Secret::new),
            email_lookup: email_lookup.and_then(Secret::new),
        }
    }

    pub fn get(&self, kind: CredentialKind) -> Option<&Secret> {
        match kind {
            CredentialKind::LanguageModel => self.language_model.as_ref(),
            CredentialKind::TradeData => self.trade_data.as_ref(),
            CredentialKind::SearchKey => self.search_key.as_ref(),
            CredentialKind::SearchEngineId => self.search_engine_id.as_ref(),
            CredentialKind::EmailLookup => self.email_lookup.as_ref(),
        }
    }

    pub fn missing(&self, kinds: &[CredentialKind]) -> Vec<CredentialKind> {
        kinds
            .iter()
            .copied()
            .filter(|k| self.get(*k).is_none())
            .collect()
    }

    /// Checks all required keys at once so the user sees one message
    /// listing everything that is absent.
    pub fn require_all(&self) -> Result<(), DomainError> {
        let missing = self.missing(&CredentialKind::REQUIRED);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::MissingCredentials(missing))
        }
    }
}
