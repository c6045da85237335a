use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "growmarkt",
    about = "Export market research: trade statistics, buyer leads and an AI strategy report"
)]
pub struct Cli {
    #[command(flatten)]
    pub keys: KeyArgs,

    /// Gemini model name
    #[arg(long, env = "GROWMARKT_GEMINI_MODEL", global = true)]
    pub model: Option<String>,

    /// Annual trade period to query (default: two years back)
    #[arg(long, env = "GROWMARKT_TRADE_PERIOD", global = true)]
    pub period: Option<i32>,

    /// Report language (en, tr)
    #[arg(long, env = "GROWMARKT_LANG", default_value = "en", global = true)]
    pub lang: String,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// API keys. Read from flags or the environment (including `.env`), never
/// written anywhere.
#[derive(Args)]
pub struct KeyArgs {
    #[arg(long, env = "GROWMARKT_GEMINI_KEY", hide_env_values = true, global = true)]
    pub gemini_key: Option<String>,

    #[arg(long, env = "GROWMARKT_COMTRADE_KEY", hide_env_values = true, global = true)]
    pub comtrade_key: Option<String>,

    #[arg(long, env = "GROWMARKT_GOOGLE_KEY", hide_env_values = true, global = true)]
    pub google_key: Option<String>,

    /// Google Programmable Search engine ID (cx)
    #[arg(long, env = "GROWMARKT_GOOGLE_CX", hide_env_values = true, global = true)]
    pub google_cx: Option<String>,

    /// Optional; without it every lead's email is "not found"
    #[arg(long, env = "GROWMARKT_HUNTER_KEY", hide_env_values = true, global = true)]
    pub hunter_key: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full pipeline: resolve, market data, buyers, report
    Report {
        /// Product name (e.g. Hazelnuts)
        product: String,
        /// HS code; with --country-code and --country-name skips AI resolution
        #[arg(long)]
        hs_code: Option<String>,
        /// ISO 3166-1 numeric code of the target country (e.g. 276)
        #[arg(long)]
        country_code: Option<String>,
        /// Target country name (e.g. Germany)
        #[arg(long)]
        country_name: Option<String>,
    },
    /// Identify HS code and largest importer for a product
    Resolve {
        product: String,
    },
    /// Fetch import statistics for an HS code and reporter country
    Stats {
        hs_code: String,
        country_code: String,
        #[arg(long)]
        country_name: Option<String>,
    },
    /// Search for importers and distributors
    Buyers {
        product: String,
        country_name: String,
    },
    /// Interactive session: one product per line, `exit` to quit
    Shell,
}
