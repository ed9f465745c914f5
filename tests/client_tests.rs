use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_test::assert_ok;

use livestack_api::api::{create_router, AppState};
use livestack_api::client::LiveStackClient;
use livestack_api::config::Config;
use livestack_api::models::{RatingStatus, RatingValue};
use livestack_api::services::{MemorySink, SeededRandom};

/// Serves the router on an ephemeral port and returns its base URL
async fn spawn_server(sink: Arc<MemorySink>) -> String {
    let state = AppState::build(
        &Config::default(),
        Arc::new(SeededRandom::with_seed(5)),
        sink,
    )
    .unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, create_router(state)).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_fetch_recommendation_with_hint() {
    let base_url = spawn_server(Arc::new(MemorySink::new())).await;
    let client = LiveStackClient::new(base_url).unwrap();

    let fetched = assert_ok!(client.fetch_recommendation(Some("edge-apac-1")).await);
    assert_eq!(fetched.recommendation.server_id, "edge-apac-1");
    assert_eq!(fetched.recommendation.server_region, "edge-apac-1");
    assert!(fetched.latency_ms >= 0.0);
}

#[tokio::test]
async fn test_fetch_recommendation_auto_edge() {
    let base_url = spawn_server(Arc::new(MemorySink::new())).await;
    let client = LiveStackClient::new(base_url).unwrap();

    let fetched = assert_ok!(client.fetch_recommendation(None).await);
    assert!(["edge-us-1", "edge-eu-1", "edge-apac-1"]
        .contains(&fetched.recommendation.server_id.as_str()));
}

#[tokio::test]
async fn test_recommend_then_rate() {
    let sink = Arc::new(MemorySink::new());
    let base_url = spawn_server(sink.clone()).await;
    let client = LiveStackClient::new(base_url).unwrap();

    let fetched = assert_ok!(client.fetch_recommendation(None).await);
    let content_id = fetched.recommendation.content_id.to_string();

    let outcome = assert_ok!(client.send_rating(&content_id, 5).await);
    assert_eq!(outcome.status, RatingStatus::Ok);

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].content_id, content_id);
    assert_eq!(events[0].rating, RatingValue::from(5));
}

#[tokio::test]
async fn test_send_rating_validation_failure_is_an_outcome() {
    let sink = Arc::new(MemorySink::new());
    let base_url = spawn_server(sink.clone()).await;
    let client = LiveStackClient::new(base_url).unwrap();

    let outcome = assert_ok!(client.send_rating("", 3).await);
    assert_eq!(outcome.status, RatingStatus::Error);
    assert_eq!(outcome.message.as_deref(), Some("Invalid payload"));
    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_unreachable_backend_is_an_error() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = LiveStackClient::new(format!("http://{}", addr)).unwrap();
    assert!(client.fetch_recommendation(None).await.is_err());
}
