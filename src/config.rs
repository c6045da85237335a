use chrono::{Datelike, Utc};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Base URLs of the four external services. Overridable through
/// `GROWMARKT_*_URL` for proxies and local stubs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub gemini: String,
    pub comtrade: String,
    pub google: String,
    pub hunter: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            gemini: "https://generativelanguage.googleapis.com".into(),
            comtrade: "https://comtradeapi.un.org".into(),
            google: "https://www.googleapis.com".into(),
            hunter: "https://api.hunter.io".into(),
        }
    }
}

impl Endpoints {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            gemini: std::env::var("GROWMARKT_GEMINI_URL").unwrap_or(defaults.gemini),
            comtrade: std::env::var("GROWMARKT_COMTRADE_URL").unwrap_or(defaults.comtrade),
            google: std::env::var("GROWMARKT_GOOGLE_URL").unwrap_or(defaults.google),
            hunter: std::env::var("GROWMARKT_HUNTER_URL").unwrap_or(defaults.hunter),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub gemini_model: String,
    /// Annual trade period queried from Comtrade.
    pub trade_period: i32,
    pub endpoints: Endpoints,
}

impl Settings {
    pub fn new(gemini_model: Option<String>, trade_period: Option<i32>, endpoints: Endpoints) -> Self {
        Self {
            gemini_model: gemini_model
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            trade_period: trade_period.unwrap_or_else(default_trade_period),
            endpoints,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(None, None, Endpoints::default())
    }
}

/// Comtrade finalizes annual figures with roughly an 18 month lag, so two
/// years back is the latest period most reporters have published.
pub fn default_trade_period() -> i32 {
    Utc::now().year() - 2
}
