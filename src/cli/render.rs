use crate::domain::entities::buyer_lead::BuyerDiscovery;
use crate::domain::entities::market_intelligence::MarketIntelligence;
use crate::domain::entities::market_stats::MarketData;
use crate::domain::entities::run_report::RunReport;

pub fn intelligence(mi: &MarketIntelligence) -> String {
    format!(
        "HS code: {}\nTarget country: {} ({})",
        mi.hs_code, mi.country_name, mi.target_country_iso
    )
}

pub fn market_data(data: &MarketData) -> String {
    match data {
        MarketData::Available { stats, period } => format!(
            "✅ Market data retrieved ({period})\nImport volume: ${:.0}\nUnit price: ${:.2}/kg",
            stats.total_import_value, stats.unit_price
        ),
        MarketData::Unavailable { .. } => format!("⚠️  {}", data.display()),
        MarketData::Failed { .. } => format!("❌ {}", data.display()),
    }
}

/// Fixed-width table of leads, or a note when there are none.
pub fn buyers(discovery: &BuyerDiscovery) -> String {
    if let Some(diag) = &discovery.diagnostic {
        return format!("❌ {diag}");
    }
    if discovery.leads.is_empty() {
        return "No buyers found.".to_string();
    }

    let rows: Vec<[&str; 3]> = discovery
        .leads
        .iter()
        .map(|l| [l.company_name.as_str(), l.domain.as_str(), l.email.as_str()])
        .collect();
    let header = ["Company", "Website", "Email"];

    let mut widths = header.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: [&str; 3]| -> String {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(c, &w)| format!("{c:<w$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![line(header)];
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    out.extend(rows.into_iter().map(line));
    out.join("\n")
}

pub fn run_report(report: &RunReport) -> String {
    let mut sections = vec![
        format!("🔎 Product: {}\n{}", report.product, intelligence(&report.intelligence)),
        format!("📊 Phase 1: Market Validation\n{}", market_data(&report.market_data)),
        format!("🏢 Phase 2: Buyer Discovery\n{}", buyers(&report.buyers)),
    ];
    let body = match (&report.report, &report.report_error) {
        (Some(text), _) => text.clone(),
        (None, Some(err)) => format!("❌ {err}"),
        (None, None) => String::new(),
    };
    sections.push(format!("🧠 Phase 3: Strategic AI Report\n{body}"));
    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::buyer_lead::BuyerLead;

    #[test]
    fn test_buyers_table_aligned() {
        let d = BuyerDiscovery::found(vec![
            BuyerLead::new("Alpha GmbH", "www.alpha.de"),
            BuyerLead::new("B", "b.com"),
        ]);
        let table = buyers(&d);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Company     Website   Email"));
        assert!(lines[2].contains("alpha.de"));
        assert!(lines[3].ends_with("not found"));
    }

    #[test]
    fn test_buyers_empty_and_failed() {
        assert_eq!(buyers(&BuyerDiscovery::found(vec![])), "No buyers found.");
        let failed = BuyerDiscovery::failed("Search error: 403".into());
        assert!(buyers(&failed).contains("Search error: 403"));
    }
}
