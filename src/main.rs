use clap::Parser;
use growmarkt::application::pipeline::Target;
use growmarkt::application::session::Session;
use growmarkt::cli::commands::{Cli, Commands};
use growmarkt::cli::render;
use growmarkt::config::{Endpoints, Settings};
use growmarkt::domain::entities::market_intelligence::MarketIntelligence;
use growmarkt::domain::values::credentials::Credentials;
use growmarkt::domain::values::output_language::OutputLanguage;
use growmarkt::domain::values::product_query::ProductQuery;
use growmarkt::Growmarkt;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let language: OutputLanguage = match cli.lang.parse() {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let credentials = Credentials::new(
        cli.keys.gemini_key,
        cli.keys.comtrade_key,
        cli.keys.google_key,
        cli.keys.google_cx,
        cli.keys.hunter_key,
    );
    let settings = Settings::new(cli.model, cli.period, Endpoints::from_env());

    let session = Session::start(credentials, language);

    let gm = match Growmarkt::open(session.credentials(), &settings) {
        Ok(gm) => gm,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let interactive = matches!(cli.command, Commands::Shell);
    let result = run_command(&gm, &session, cli.command, cli.json).await;
    let summary = session.end();
    info!(
        session = %summary.id,
        runs = summary.runs,
        elapsed_ms = (summary.ended_at - summary.started_at).num_milliseconds(),
        "Session ended"
    );
    if interactive {
        if cli.json {
            match serde_json::to_string_pretty(&summary) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("Error: {e}"),
            }
        } else {
            println!("Session ended after {} run(s).", summary.runs);
        }
    }

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(
    gm: &Growmarkt,
    session: &Session,
    cmd: Commands,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Report {
            product,
            hs_code,
            country_code,
            country_name,
        } => {
            let product = ProductQuery::new(&product)?;
            let target = Target::from_parts(hs_code, country_code, country_name)?;
            let report = gm.run(session, &product, target).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", render::run_report(&report));
            }
        }
        Commands::Resolve { product } => {
            let product = ProductQuery::new(&product)?;
            let mi = gm.resolve(&product).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&mi)?);
            } else {
                println!("{}", render::intelligence(&mi));
            }
        }
        Commands::Stats {
            hs_code,
            country_code,
            country_name,
        } => {
            let name = country_name.unwrap_or_else(|| country_code.clone());
            let mi = MarketIntelligence::supplied(&hs_code, &country_code, &name)?;
            let data = gm.market_data(&mi).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                println!("{}", render::market_data(&data));
            }
        }
        Commands::Buyers {
            product,
            country_name,
        } => {
            let product = ProductQuery::new(&product)?;
            let discovery = gm.discover_buyers(&product, country_name.trim()).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&discovery)?);
            } else {
                println!("{}", render::buyers(&discovery));
            }
        }
        Commands::Shell => shell(gm, session, json).await?,
    }
    Ok(())
}

async fn shell(gm: &Growmarkt, session: &Session, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    println!("Growmarkt session {}. Enter a product name, or `exit` to quit.", session.id());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("\nproduct> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }
        if line.is_empty() {
            continue;
        }

        let product = match ProductQuery::new(line) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("❌ {e}");
                continue;
            }
        };

        match gm.run(session, &product, Target::Resolve).await {
            Ok(report) if json => println!("{}", serde_json::to_string_pretty(&report)?),
            Ok(report) => println!("{}", render::run_report(&report)),
            Err(e) => eprintln!("❌ {e}"),
        }
    }

    Ok(())
}
