use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language the strategy report is written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputLanguage {
    #[default]
    English,
    Turkish,
}

impl OutputLanguage {
    /// Language name as it appears in the model instruction.
    pub fn instruction_name(&self) -> &'static str {
        match self {
            OutputLanguage::English => "English",
            OutputLanguage::Turkish => "Turkish",
        }
    }
}

impl fmt::Display for OutputLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputLanguage::English => write!(f, "en"),
            OutputLanguage::Turkish => write!(f, "tr"),
        }
    }
}

impl FromStr for OutputLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(OutputLanguage::English),
            "tr" | "turkish" | "türkçe" => Ok(OutputLanguage::Turkish),
            _ => Err(format!("Unknown language: {s} (use en or tr)")),
        }
    }
}
