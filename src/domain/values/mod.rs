pub mod credentials;
pub mod lead_email;
pub mod output_language;
pub mod product_query;
