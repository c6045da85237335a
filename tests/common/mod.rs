//! Shared test helpers: in-memory stand-ins for the four external APIs.
#![allow(dead_code)]

use async_trait::async_trait;
use growmarkt::application::session::Session;
use growmarkt::domain::error::ProviderError;
use growmarkt::domain::ports::email_lookup::EmailLookup;
use growmarkt::domain::ports::language_model::LanguageModel;
use growmarkt::domain::ports::trade_stats::{TradeQuery, TradeRow, TradeStatsSource};
use growmarkt::domain::ports::web_search::{SearchHit, WebSearch};
use growmarkt::domain::values::credentials::Credentials;
use growmarkt::domain::values::output_language::OutputLanguage;
use growmarkt::Growmarkt;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const PERIOD: i32 = 2023;

/// Replies with queued answers in order; an `Err` entry fails that call.
/// Records every prompt it receives.
#[derive(Default)]
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String, String>>>,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn new(replies: Vec<Result<&str, &str>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(
                replies
                    .into_iter()
                    .map(|r| r.map(String::from).map_err(String::from))
                    .collect(),
            ),
            prompts: Mutex::new(vec![]),
        })
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompt(&self, i: usize) -> String {
        self.prompts.lock().unwrap()[i].clone()
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(msg)) => Err(ProviderError::Network(msg)),
            None => Err(ProviderError::Parse("no scripted reply left".into())),
        }
    }
}

pub struct FakeTrade {
    rows: Vec<TradeRow>,
    fail_status: Option<u16>,
    pub queries: Mutex<Vec<TradeQuery>>,
}

impl FakeTrade {
    pub fn rows(rows: Vec<(f64, f64)>) -> Arc<Self> {
        Arc::new(Self {
            rows: rows
                .into_iter()
                .map(|(v, w)| TradeRow {
                    primary_value: v,
                    net_weight: w,
                })
                .collect(),
            fail_status: None,
            queries: Mutex::new(vec![]),
        })
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            rows: vec![],
            fail_status: Some(status),
            queries: Mutex::new(vec![]),
        })
    }

    pub fn calls(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl TradeStatsSource for FakeTrade {
    fn name(&self) -> &str {
        "fake trade"
    }

    async fn imports(&self, query: &TradeQuery) -> Result<Vec<TradeRow>, ProviderError> {
        self.queries.lock().unwrap().push(query.clone());
        match self.fail_status {
            Some(status) => Err(ProviderError::Api {
                service: "fake trade",
                status,
                body: "denied".into(),
            }),
            None => Ok(self.rows.clone()),
        }
    }
}

pub struct FakeSearch {
    hits: Vec<SearchHit>,
    fail: bool,
    pub queries: Mutex<Vec<(String, usize)>>,
}

impl FakeSearch {
    /// `n` hits titled "Company i" at "www.company{i}.com".
    pub fn with_hits(n: usize) -> Arc<Self> {
        Arc::new(Self {
            hits: (1..=n)
                .map(|i| SearchHit {
                    title: format!("Company {i}"),
                    display_link: format!("www.company{i}.com"),
                })
                .collect(),
            fail: false,
            queries: Mutex::new(vec![]),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            hits: vec![],
            fail: true,
            queries: Mutex::new(vec![]),
        })
    }

    pub fn calls(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl WebSearch for FakeSearch {
    fn name(&self) -> &str {
        "fake search"
    }

    // Deliberately ignores `num` so tests can check the caller's own cap.
    async fn search(&self, query: &str, num: usize) -> Result<Vec<SearchHit>, ProviderError> {
        self.queries.lock().unwrap().push((query.to_string(), num));
        if self.fail {
            return Err(ProviderError::Network("connection refused".into()));
        }
        Ok(self.hits.clone())
    }
}

/// Known addresses per domain; domains in `failing` return an error.
#[derive(Default)]
pub struct FakeEmails {
    pub addresses: HashMap<String, String>,
    pub failing: HashSet<String>,
    pub lookups: AtomicUsize,
}

impl FakeEmails {
    pub fn new(addresses: &[(&str, &str)], failing: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            addresses: addresses
                .iter()
                .map(|(d, a)| (d.to_string(), a.to_string()))
                .collect(),
            failing: failing.iter().map(|d| d.to_string()).collect(),
            lookups: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailLookup for FakeEmails {
    fn name(&self) -> &str {
        "fake emails"
    }

    async fn first_email(&self, domain: &str) -> Result<Option<String>, ProviderError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(domain) {
            return Err(ProviderError::Api {
                service: "fake emails",
                status: 429,
                body: "rate limited".into(),
            });
        }
        Ok(self.addresses.get(domain).cloned())
    }
}

pub fn setup(
    model: Arc<ScriptedModel>,
    trade: Arc<FakeTrade>,
    search: Arc<FakeSearch>,
    emails: Option<Arc<FakeEmails>>,
) -> Growmarkt {
    Growmarkt::with_providers(
        model,
        trade,
        search,
        emails.map(|e| e as Arc<dyn EmailLookup>),
        PERIOD,
    )
}

pub fn full_credentials() -> Credentials {
    Credentials::new(
        Some("gemini".into()),
        Some("comtrade".into()),
        Some("google".into()),
        Some("cx".into()),
        Some("hunter".into()),
    )
}

pub fn session(language: OutputLanguage) -> Session {
    Session::start(full_credentials(), language)
}
