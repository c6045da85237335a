pub mod buyer_lead;
pub mod market_intelligence;
pub mod market_stats;
pub mod run_report;
