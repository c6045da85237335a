pub mod discover_buyers;
pub mod market_data;
pub mod parser;
pub mod pipeline;
pub mod prompts;
pub mod resolve_product;
pub mod session;
pub mod synthesize_report;
