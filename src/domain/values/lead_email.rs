use serde::{Serialize, Serializer};
use std::fmt;

/// Displayed in place of an address whenever none could be found.
pub const NOT_FOUND: &str = "not found";

/// Contact email of a buyer lead. Always safely displayable: either a
/// plausible address or the `"not found"` sentinel, never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LeadEmail {
    Address(String),
    #[default]
    NotFound,
}

impl LeadEmail {
    /// Accepts a raw lookup result; anything that does not look like an
    /// address collapses to `NotFound`.
    pub fn from_lookup(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(addr) if is_plausible_address(addr) => LeadEmail::Address(addr.to_string()),
            _ => LeadEmail::NotFound,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LeadEmail::Address(a) => a,
            LeadEmail::NotFound => NOT_FOUND,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, LeadEmail::Address(_))
    }
}

impl fmt::Display for LeadEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for LeadEmail {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

fn is_plausible_address(addr: &str) -> bool {
    if addr.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = addr.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
