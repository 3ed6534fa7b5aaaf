use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use lighthouse_batch::budget::{check_budgets, evaluate_all};
use lighthouse_batch::engine::{AuditEngine, AuditOutcome};
use lighthouse_batch::models::{AuditMode, BudgetConfig, SiteTarget};
use lighthouse_batch::pipeline::{BatchEvent, BatchOptions, BatchOrchestrator};
use lighthouse_batch::reporting::{load_summary, write_summary};
use tokio::sync::mpsc;

/// Engine with a canned outcome per normalized URL.
struct CannedEngine {
    outcomes: HashMap<String, AuditOutcome>,
}

#[async_trait]
impl AuditEngine for CannedEngine {
    async fn run(&self, site: &SiteTarget, _mode: AuditMode) -> AuditOutcome {
        self.outcomes
            .get(&site.url)
            .cloned()
            .unwrap_or_else(|| AuditOutcome::Failed { error: format!("no outcome for {}", site.url) })
    }

    fn engine_name(&self) -> &str {
        "canned"
    }
}

fn report(performance: f64, seo: f64) -> AuditOutcome {
    AuditOutcome::Succeeded {
        report: json!({
            "categories": [
                {"id": "performance", "score": performance},
                {"id": "seo", "score": seo}
            ]
        })
        .to_string(),
    }
}

fn engine() -> Arc<CannedEngine> {
    let mut outcomes = HashMap::new();
    outcomes.insert("https://a.com".to_string(), report(0.9, 1.0));
    outcomes.insert(
        "https://b.com".to_string(),
        AuditOutcome::Failed { error: "net::ERR_NAME_NOT_RESOLVED".to_string() },
    );
    outcomes.insert("https://c.com".to_string(), report(0.4, 0.8));
    Arc::new(CannedEngine { outcomes })
}

#[tokio::test]
async fn test_batch_continues_past_failure() {
    let orchestrator = BatchOrchestrator::new(engine(), BatchOptions::default());
    let summaries = orchestrator.run(&["a.com", "b.com", "c.com"]).await;

    assert_eq!(summaries.len(), 3);
    let urls: Vec<&str> = summaries.iter().map(|s| s.url.as_str()).collect();
    assert_eq!(urls, vec!["https://a.com", "https://b.com", "https://c.com"]);

    assert_eq!(summaries[0].score, Some(0.95));
    assert!(summaries[1].is_failed());
    assert_eq!(summaries[1].score, Some(0.0));
    assert_eq!(summaries[1].error.as_deref(), Some("net::ERR_NAME_NOT_RESOLVED"));
    assert_eq!(summaries[2].score, Some(0.6));
}

#[tokio::test]
async fn test_batch_events_streamed() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let orchestrator = BatchOrchestrator::new(engine(), BatchOptions::default()).with_event_channel(tx);
    orchestrator.run(&["a.com", "b.com", "c.com"]).await;
    drop(orchestrator);

    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }

    assert!(matches!(events.first(), Some(BatchEvent::BatchStarted { total: 3 })));
    assert!(matches!(
        events.last(),
        Some(BatchEvent::BatchCompleted { audited: 3, failed: 1, .. })
    ));
    let failures = events
        .iter()
        .filter(|e| matches!(e, BatchEvent::SiteFailed { .. }))
        .count();
    assert_eq!(failures, 1);
}

#[tokio::test]
async fn test_budgets_over_batch() {
    let orchestrator = BatchOrchestrator::new(engine(), BatchOptions::default());
    let summaries = orchestrator.run(&["a.com", "b.com", "c.com"]).await;

    let budgets = BudgetConfig {
        performance: Some(50.0),
        ..Default::default()
    };
    let violations = evaluate_all(&summaries, &budgets);

    // b.com has no category detail, so only c.com is checked and fails.
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].url, "https://c.com");
    assert_eq!(violations[0].to_string(), "performance score 40 < 50 for https://c.com");

    assert!(check_budgets(&summaries[0], &budgets).is_none());

    let overall = BudgetConfig { score: Some(90.0), ..Default::default() };
    let messages = check_budgets(&summaries[1], &overall).unwrap();
    assert_eq!(messages, vec!["average score 0 < 90 for https://b.com".to_string()]);
}

#[tokio::test]
async fn test_summary_file_survives_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let orchestrator = BatchOrchestrator::new(engine(), BatchOptions::default());
    let summaries = orchestrator.run(&["a.com", "b.com", "c.com"]).await;

    let path = write_summary(dir.path(), &summaries).await.unwrap();
    assert!(path.ends_with("summary.json"));

    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw[1]["error"], "net::ERR_NAME_NOT_RESOLVED");
    assert!(raw[1].get("detail").is_none());
    assert!(raw[0].get("html").is_none());

    let loaded = load_summary(&path).await.unwrap();
    assert_eq!(loaded, summaries);
}
