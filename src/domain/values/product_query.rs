use serde::Serialize;
use std::fmt;

use crate::domain::error::DomainError;

/// Free-text product name as submitted by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProductQuery(String);

impl ProductQuery {
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidInput("product name is empty".into()));
        }
        Ok(ProductQuery(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims() {
        assert_eq!(ProductQuery::new("  Hazelnuts\n").unwrap().as_str(), "Hazelnuts");
    }

    #[test]
    fn test_rejects_blank() {
        assert!(matches!(
            ProductQuery::new(" \t"),
            Err(DomainError::InvalidInput(_))
        ));
    }
}
