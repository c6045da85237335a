//! Strict parsing of the resolver's model output.
//!
//! Accepted grammar, after markdown fences are removed:
//!
//! ```text
//! response  := pipe-line | json-object
//! pipe-line := HS "|" ISO "|" NAME        (first '|' line led by a code)
//! json      := {"hs_code": "<HS>", "iso": "<ISO>" | <int>, "country": "<NAME>"}
//! ```
//!
//! Anything else, including a pipe line with more or fewer than three
//! fields, is a resolution failure. Partial records are never returned.

use serde::Deserialize;

use crate::domain::entities::market_intelligence::MarketIntelligence;
use crate::domain::error::DomainError;

/// Removes markdown fences, including ones that open and close on the same
/// line as the answer (```` ```0802|276|Germany``` ````). An opening fence
/// may carry a language tag such as `json`.
pub fn strip_code_fences(text: &str) -> String {
    text.lines()
        .map(unfence_line)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn unfence_line(line: &str) -> &str {
    let mut line = line.trim();
    if let Some(rest) = line.strip_prefix("```") {
        line = rest.trim_start_matches(|c: char| c.is_ascii_alphabetic());
    }
    if let Some(rest) = line.strip_suffix("```") {
        line = rest;
    }
    line.trim()
}

pub fn parse_intelligence(raw: &str) -> Result<MarketIntelligence, DomainError> {
    let body = strip_code_fences(raw);
    if body.is_empty() {
        return Err(DomainError::Resolution("empty model response".into()));
    }

    if body.starts_with('{') {
        parse_json(&body)
    } else {
        parse_pipe_line(&body)
    }
}

fn parse_pipe_line(body: &str) -> Result<MarketIntelligence, DomainError> {
    let candidates: Vec<&str> = body
        .lines()
        .map(|l| l.trim().trim_matches('`'))
        .filter(|l| l.contains('|'))
        .collect();

    // An echoed `HS_CODE|ISO_NUMERIC|COUNTRY_NAME` header is skipped.
    let line = candidates
        .iter()
        .find(|l| starts_with_code(l))
        .or_else(|| candidates.first())
        .copied()
        .ok_or_else(|| {
            DomainError::Resolution(format!(
                "no CODE|ISO|NAME line in model response (length={})",
                body.len()
            ))
        })?;

    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(DomainError::Resolution(format!(
            "expected 3 pipe-separated fields, got {}: {line:?}",
            fields.len()
        )));
    }
    if let Some(pos) = fields.iter().position(|f| f.is_empty()) {
        return Err(DomainError::Resolution(format!(
            "field {} is empty in {line:?}",
            pos + 1
        )));
    }

    MarketIntelligence::new(fields[0], fields[1], fields[2])
}

fn starts_with_code(line: &str) -> bool {
    let first = line.split('|').next().unwrap_or_default().trim();
    !first.is_empty() && first.chars().all(|c| c.is_ascii_digit() || c == '.')
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ResolverJson {
    hs_code: String,
    iso: IsoField,
    country: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IsoField {
    Text(String),
    Number(u32),
}

fn parse_json(body: &str) -> Result<MarketIntelligence, DomainError> {
    let parsed: ResolverJson = serde_json::from_str(body)
        .map_err(|e| DomainError::Resolution(format!("invalid resolver JSON: {e}")))?;

    let iso = match parsed.iso {
        IsoField::Text(s) => s,
        IsoField::Number(n) => n.to_string(),
    };

    MarketIntelligence::new(&parsed.hs_code, &iso, &parsed.country)
}
