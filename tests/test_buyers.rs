mod common;

use common::{setup, FakeEmails, FakeSearch, FakeTrade, ScriptedModel};
use growmarkt::application::discover_buyers::MAX_LEADS;
use growmarkt::domain::values::lead_email::{LeadEmail, NOT_FOUND};
use growmarkt::domain::values::product_query::ProductQuery;

fn hazelnuts() -> ProductQuery {
    ProductQuery::new("Hazelnuts").unwrap()
}

#[tokio::test]
async fn test_at_most_five_leads() {
    let search = FakeSearch::with_hits(8);
    let emails = FakeEmails::new(&[], &[]);
    let gm = setup(
        ScriptedModel::new(vec![]),
        FakeTrade::rows(vec![]),
        search.clone(),
        Some(emails.clone()),
    );

    let d = gm.discover_buyers(&hazelnuts(), "Germany").await;
    assert_eq!(d.leads.len(), MAX_LEADS);
    assert_eq!(d.leads[0].company_name, "Company 1");
    assert_eq!(d.leads[4].company_name, "Company 5");
    // Only kept leads are looked up.
    assert_eq!(emails.calls(), MAX_LEADS);

    let queries = search.queries.lock().unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].1, 5);
    assert!(queries[0].0.contains("Hazelnuts importers distributors Germany"));
    assert!(queries[0].0.contains("-site:pinterest.*"));
}

#[tokio::test]
async fn test_domains_normalized_and_emails_attached() {
    let emails = FakeEmails::new(&[("company2.com", "sales@company2.com")], &[]);
    let gm = setup(
        ScriptedModel::new(vec![]),
        FakeTrade::rows(vec![]),
        FakeSearch::with_hits(3),
        Some(emails),
    );

    let d = gm.discover_buyers(&hazelnuts(), "Germany").await;
    assert_eq!(d.leads[0].domain, "company1.com");
    assert_eq!(d.leads[0].email, LeadEmail::NotFound);
    assert_eq!(d.leads[1].email.as_str(), "sales@company2.com");
    assert!(d.diagnostic.is_none());
}

#[tokio::test]
async fn test_failing_lookup_does_not_drop_leads() {
    let without = setup(
        ScriptedModel::new(vec![]),
        FakeTrade::rows(vec![]),
        FakeSearch::with_hits(4),
        None,
    )
    .discover_buyers(&hazelnuts(), "Germany")
    .await;

    let emails = FakeEmails::new(
        &[("company3.com", "info@company3.com")],
        &["company1.com", "company2.com"],
    );
    let with = setup(
        ScriptedModel::new(vec![]),
        FakeTrade::rows(vec![]),
        FakeSearch::with_hits(4),
        Some(emails.clone()),
    )
    .discover_buyers(&hazelnuts(), "Germany")
    .await;

    assert_eq!(with.leads.len(), without.leads.len());
    assert_eq!(emails.calls(), 4);
    assert_eq!(with.leads[0].email.as_str(), NOT_FOUND);
    assert_eq!(with.leads[1].email.as_str(), NOT_FOUND);
    assert_eq!(with.leads[2].email.as_str(), "info@company3.com");
}

#[tokio::test]
async fn test_implausible_address_becomes_sentinel() {
    let emails = FakeEmails::new(&[("company1.com", "   "), ("company2.com", "not-an-email")], &[]);
    let gm = setup(
        ScriptedModel::new(vec![]),
        FakeTrade::rows(vec![]),
        FakeSearch::with_hits(2),
        Some(emails),
    );

    let d = gm.discover_buyers(&hazelnuts(), "Germany").await;
    for lead in &d.leads {
        assert_eq!(lead.email.as_str(), NOT_FOUND);
        assert!(!lead.email.as_str().is_empty());
    }
}

#[tokio::test]
async fn test_no_email_client_means_not_found() {
    let gm = setup(
        ScriptedModel::new(vec![]),
        FakeTrade::rows(vec![]),
        FakeSearch::with_hits(2),
        None,
    );

    let d = gm.discover_buyers(&hazelnuts(), "Germany").await;
    assert_eq!(d.leads.len(), 2);
    assert!(d.leads.iter().all(|l| l.email == LeadEmail::NotFound));
}

#[tokio::test]
async fn test_search_failure_gives_diagnostic() {
    let emails = FakeEmails::new(&[], &[]);
    let gm = setup(
        ScriptedModel::new(vec![]),
        FakeTrade::rows(vec![]),
        FakeSearch::failing(),
        Some(emails.clone()),
    );

    let d = gm.discover_buyers(&hazelnuts(), "Germany").await;
    assert!(d.leads.is_empty());
    assert!(d.diagnostic.unwrap().contains("connection refused"));
    assert_eq!(emails.calls(), 0);
}
