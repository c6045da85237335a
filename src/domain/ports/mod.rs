pub mod email_lookup;
pub mod language_model;
pub mod trade_stats;
pub mod web_search;
