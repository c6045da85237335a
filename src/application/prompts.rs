use crate::domain::entities::buyer_lead::BuyerLead;
use crate::domain::entities::market_intelligence::MarketIntelligence;
use crate::domain::values::output_language::OutputLanguage;

/// Shown in the report prompt when discovery produced no leads.
pub const NO_LEADS: &str = "none found";

pub fn resolver_prompt(product: &str) -> String {
    format!(
        "You are an international trade classification expert.\n\n\
         Product: \"{product}\"\n\n\
         1. Choose the most specific Harmonized System (HS) code that applies to this \
         product (4 or 6 digits, no dots).\n\
         2. Identify the single largest global importing country for that product class.\n\
         3. Give that country's ISO 3166-1 numeric code (e.g. 276 for Germany) and its \
         English name.\n\n\
         Respond with exactly one line and nothing else, in this format:\n\
         HS_CODE|ISO_NUMERIC|COUNTRY_NAME\n\n\
         Example: 0802|276|Germany"
    )
}

/// Renders leads as a numbered list for the report prompt.
pub fn format_leads(leads: &[BuyerLead]) -> String {
    if leads.is_empty() {
        return NO_LEADS.to_string();
    }
    leads
        .iter()
        .enumerate()
        .map(|(i, l)| {
            format!(
                "{}. {} (website: {}, email: {})",
                i + 1,
                l.company_name,
                l.domain,
                l.email
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn report_prompt(
    product: &str,
    intelligence: &MarketIntelligence,
    market_data: &str,
    leads: &[BuyerLead],
    language: OutputLanguage,
) -> String {
    let language = language.instruction_name();
    let country = &intelligence.country_name;
    format!(
        "ACT AS: Senior foreign trade consultant.\n\
         LANGUAGE: Respond STRICTLY in {language}.\n\
         TASK: Analyze the export market potential for {product} (HS {hs}) in {country}.\n\n\
         MARKET DATA: {market_data}\n\n\
         POTENTIAL BUYERS FOUND:\n{buyers}\n\n\
         OUTPUT FORMAT: exactly these four labeled sections, in this order.\n\
         1. Verdict: Go or No-Go, with a one-paragraph justification.\n\
         2. Market Data Interpretation: what the import volume and unit price say \
         (premium vs mass market positioning). If data is unavailable, say so and reason \
         from general knowledge.\n\
         3. Buyer Approach Strategy: how to approach the specific companies listed above. \
         If none were found, explain where to look for buyers in {country}.\n\
         4. Cold Outreach Email: a complete draft email (subject line and body) addressed \
         to one of the companies listed above, or to a generic importer in {country} if \
         none were found.",
        hs = intelligence.hs_code,
        buyers = format_leads(leads),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::lead_email::LeadEmail;

    fn germany() -> MarketIntelligence {
        MarketIntelligence::new("0802", "276", "Germany").unwrap()
    }

    #[test]
    fn test_resolver_prompt_names_product_and_format() {
        let p = resolver_prompt("Hazelnuts");
        assert!(p.contains("\"Hazelnuts\""));
        assert!(p.contains("HS_CODE|ISO_NUMERIC|COUNTRY_NAME"));
    }

    #[test]
    fn test_empty_leads_render_none_found() {
        assert_eq!(format_leads(&[]), "none found");
        let p = report_prompt("Hazelnuts", &germany(), "Data unavailable", &[], OutputLanguage::English);
        assert!(p.contains("POTENTIAL BUYERS FOUND:\nnone found"));
    }

    #[test]
    fn test_leads_listed_in_order() {
        let leads = vec![
            BuyerLead::new("Alpha GmbH", "www.alpha.de")
                .with_email(LeadEmail::from_lookup(Some("sales@alpha.de"))),
            BuyerLead::new("Beta AG", "beta.de"),
        ];
        let s = format_leads(&leads);
        assert_eq!(
            s,
            "1. Alpha GmbH (website: alpha.de, email: sales@alpha.de)\n\
             2. Beta AG (website: beta.de, email: not found)"
        );
    }

    #[test]
    fn test_report_prompt_has_four_sections_and_language() {
        let p = report_prompt("Hazelnuts", &germany(), "Total import", &[], OutputLanguage::Turkish);
        assert!(p.contains("Respond STRICTLY in Turkish"));
        for section in [
            "1. Verdict",
            "2. Market Data Interpretation",
            "3. Buyer Approach Strategy",
            "4. Cold Outreach Email",
        ] {
            assert!(p.contains(section), "missing {section}");
        }
        assert!(p.contains("HS 0802"));
        assert!(p.contains("in Germany"));
    }
}
