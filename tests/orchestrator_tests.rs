//! Tests for the per-resource fetch orchestrator: trigger rules, error
//! handling, and the out-of-order completion guard.

use std::sync::Arc;

use shelfsense::error::RemoteError;
use shelfsense::sync::FetchOrchestrator;
use shelfsense::testkit::fetcher::ScriptedFetcher;

type Fetcher = ScriptedFetcher<String, Vec<u32>>;

fn orchestrator(fetcher: &Fetcher) -> Arc<FetchOrchestrator<Fetcher>> {
    Arc::new(FetchOrchestrator::new(fetcher.clone()))
}

#[tokio::test]
async fn initial_input_triggers_a_fetch() {
    let fetcher = Fetcher::new("inventory");
    fetcher.push_ok(vec![1, 2, 3]);
    let orch = orchestrator(&fetcher);

    orch.set_input("all".to_string()).await;

    assert_eq!(fetcher.call_count(), 1);
    let state = orch.snapshot();
    assert_eq!(state.data, Some(vec![1, 2, 3]));
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn unchanged_input_does_not_refetch() {
    let fetcher = Fetcher::new("inventory");
    fetcher.push_ok(vec![1]);
    let orch = orchestrator(&fetcher);

    orch.set_input("dairy".to_string()).await;
    orch.set_input("dairy".to_string()).await;

    assert_eq!(fetcher.call_count(), 1);
}

#[tokio::test]
async fn changed_input_refetches_with_new_key() {
    let fetcher = Fetcher::new("inventory");
    fetcher.push_ok(vec![1]);
    fetcher.push_ok(vec![2]);
    let orch = orchestrator(&fetcher);

    orch.set_input("dairy".to_string()).await;
    orch.set_input("bakery".to_string()).await;

    assert_eq!(fetcher.call_count(), 2);
    assert_eq!(fetcher.keys(), vec!["dairy".to_string(), "bakery".to_string()]);
    assert_eq!(orch.data(), Some(vec![2]));
}

#[tokio::test]
async fn refresh_reuses_the_current_key() {
    let fetcher = Fetcher::new("inventory");
    fetcher.push_ok(vec![1]);
    fetcher.push_ok(vec![9]);
    let orch = orchestrator(&fetcher);

    orch.set_input("dairy".to_string()).await;
    orch.refresh().await;

    assert_eq!(fetcher.call_count(), 2);
    assert_eq!(fetcher.keys(), vec!["dairy".to_string(), "dairy".to_string()]);
    assert_eq!(orch.data(), Some(vec![9]));
}

#[tokio::test]
async fn refresh_before_any_input_is_a_no_op() {
    let fetcher = Fetcher::new("inventory");
    let orch = orchestrator(&fetcher);

    orch.refresh().await;

    assert_eq!(fetcher.call_count(), 0);
    assert_eq!(orch.snapshot().data, None);
}

#[tokio::test]
async fn failed_refresh_keeps_last_known_data() {
    let fetcher = Fetcher::new("inventory");
    fetcher.push_ok(vec![1, 2]);
    fetcher.push_err(RemoteError::Transport("connection refused".into()));
    let orch = orchestrator(&fetcher);

    orch.set_input("all".to_string()).await;
    orch.refresh().await;

    let state = orch.snapshot();
    assert_eq!(state.data, Some(vec![1, 2]), "data must survive the failure");
    assert!(state.error.unwrap().contains("connection refused"));
    assert!(!state.loading);
}

#[tokio::test]
async fn success_after_failure_clears_the_error() {
    let fetcher = Fetcher::new("inventory");
    fetcher.push_err(RemoteError::from_status(500));
    fetcher.push_ok(vec![4]);
    let orch = orchestrator(&fetcher);

    orch.set_input("all".to_string()).await;
    assert!(orch.error().is_some());

    orch.refresh().await;
    let state = orch.snapshot();
    assert_eq!(state.data, Some(vec![4]));
    assert!(state.error.is_none());
}

#[tokio::test]
async fn loading_is_true_strictly_between_trigger_and_settlement() {
    let fetcher = Fetcher::new("inventory");
    let gate = fetcher.push_gated_ok(vec![1]);
    let orch = orchestrator(&fetcher);

    assert!(!orch.is_loading());

    let in_flight = {
        let orch = Arc::clone(&orch);
        tokio::spawn(async move { orch.set_input("all".to_string()).await })
    };
    tokio::task::yield_now().await;

    assert!(orch.is_loading(), "loading while the fetch is in flight");

    gate.send(()).unwrap();
    in_flight.await.unwrap();

    assert!(!orch.is_loading(), "settled fetch clears loading");
}

#[tokio::test]
async fn superseded_completion_is_discarded() {
    let fetcher = Fetcher::new("inventory");
    let old_gate = fetcher.push_gated_ok(vec![1]);
    let new_gate = fetcher.push_gated_ok(vec![2]);
    let orch = orchestrator(&fetcher);

    let old_fetch = {
        let orch = Arc::clone(&orch);
        tokio::spawn(async move { orch.set_input("old".to_string()).await })
    };
    tokio::task::yield_now().await;

    let new_fetch = {
        let orch = Arc::clone(&orch);
        tokio::spawn(async move { orch.set_input("new".to_string()).await })
    };
    tokio::task::yield_now().await;

    assert_eq!(fetcher.call_count(), 2, "both fetches in flight");

    // The newer response lands first, then the stale one limps home.
    new_gate.send(()).unwrap();
    new_fetch.await.unwrap();
    old_gate.send(()).unwrap();
    old_fetch.await.unwrap();

    let state = orch.snapshot();
    assert_eq!(
        state.data,
        Some(vec![2]),
        "stale completion must not overwrite fresher state"
    );
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn superseded_failure_does_not_taint_fresh_state() {
    let fetcher = Fetcher::new("inventory");
    let old_gate = fetcher.push_gated_err(RemoteError::from_status(504));
    let new_gate = fetcher.push_gated_ok(vec![7]);
    let orch = orchestrator(&fetcher);

    let old_fetch = {
        let orch = Arc::clone(&orch);
        tokio::spawn(async move { orch.set_input("old".to_string()).await })
    };
    tokio::task::yield_now().await;

    let new_fetch = {
        let orch = Arc::clone(&orch);
        tokio::spawn(async move { orch.set_input("new".to_string()).await })
    };
    tokio::task::yield_now().await;

    new_gate.send(()).unwrap();
    new_fetch.await.unwrap();
    old_gate.send(()).unwrap();
    old_fetch.await.unwrap();

    let state = orch.snapshot();
    assert_eq!(state.data, Some(vec![7]));
    assert!(
        state.error.is_none(),
        "stale failure must not set an error on fresher state"
    );
}
