use serde::Serialize;

/// Aggregated annual import figures for one reporter country and HS code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketStats {
    /// Import value in USD.
    pub total_import_value: f64,
    /// Net weight in kg.
    pub total_net_weight: f64,
    /// USD per kg; 0 when no weight was reported.
    pub unit_price: f64,
}

impl MarketStats {
    pub fn new(total_import_value: f64, total_net_weight: f64) -> Self {
        let unit_price = if total_net_weight > 0.0 {
            total_import_value / total_net_weight
        } else {
            0.0
        };
        Self {
            total_import_value,
            total_net_weight,
            unit_price,
        }
    }
}

/// Outcome of the market data step. Only `Available` carries numbers; the
/// other two are normal results that the rest of the pipeline works with.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MarketData {
    Available { stats: MarketStats, period: i32 },
    /// The query succeeded but returned no rows.
    Unavailable { reason: String },
    /// The call itself failed (network, auth, malformed response).
    Failed { reason: String },
}

impl MarketData {
    pub fn stats(&self) -> Option<&MarketStats> {
        match self {
            MarketData::Available { stats, .. } => Some(stats),
            _ => None,
        }
    }

    /// One-line rendering used both on screen and inside the report prompt.
    pub fn display(&self) -> String {
        match self {
            MarketData::Available { stats, period } => format!(
                "Total import ({period}): ${}. Net weight: {} kg. Unit price: ${:.2}/kg.",
                group_thousands(stats.total_import_value),
                group_thousands(stats.total_net_weight),
                stats.unit_price
            ),
            MarketData::Unavailable { reason } => format!("Data unavailable: {reason}"),
            MarketData::Failed { reason } => format!("Data connection failed: {reason}"),
        }
    }
}

fn group_thousands(v: f64) -> String {
    let digits = format!("{:.0}", v.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if v < 0.0 && digits != "0" {
        out.insert(0, '-');
    }
    out
}
