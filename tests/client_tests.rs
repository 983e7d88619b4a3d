//! Tests for the provider gateway against a fake HTTP provider.

mod support;

use serde_json::json;
use shelfsense::api::{InventoryQuery, ProviderClient};
use shelfsense::domain::{ProductId, StockStatus};
use shelfsense::error::RemoteError;
use support::{dead_provider, envelope_err, envelope_ok, spawn_provider, Route};

fn inventory_json() -> serde_json::Value {
    json!([
        {
            "productId": "P001",
            "productName": "Whole Milk 1L",
            "category": "Dairy",
            "stock": 120,
            "expiryDate": "2025-06-21",
            "currentPrice": 1.99,
            "daysUntilExpiry": 1,
            "status": "expiring"
        },
        {
            "productId": "P002",
            "productName": "Sourdough Loaf",
            "category": "Bakery",
            "stock": 40,
            "expiryDate": "2025-06-30",
            "currentPrice": 3.50,
            "daysUntilExpiry": 10,
            "status": "safe"
        }
    ])
}

#[tokio::test]
async fn inventory_unwraps_the_envelope() {
    let (base_url, _) = spawn_provider(vec![Route::get(
        "/inventory",
        200,
        envelope_ok(inventory_json()),
    )])
    .await;

    let client = ProviderClient::new(base_url);
    let items = client.inventory(&InventoryQuery::default()).await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].product_id.as_str(), "P001");
    assert_eq!(items[0].status, StockStatus::Expiring);
    assert_eq!(items[1].stock, 40);
}

#[tokio::test]
async fn provider_failure_surfaces_its_error_text() {
    let (base_url, _) = spawn_provider(vec![Route::get(
        "/markdown/P999",
        404,
        envelope_err("Not found"),
    )])
    .await;

    let client = ProviderClient::new(base_url);
    let err = client
        .markdown_suggestion(&ProductId::new("P999"))
        .await
        .unwrap_err();

    assert!(
        matches!(err, RemoteError::Provider { status: 404, ref message } if message == "Not found"),
        "expected the provider's own error text, got {err:?}"
    );
}

#[tokio::test]
async fn failure_without_error_text_gets_a_status_message() {
    let body = json!({"success": false, "timestamp": "2025-06-20T10:00:00"}).to_string();
    let (base_url, _) = spawn_provider(vec![Route::get("/analytics/summary", 500, body)]).await;

    let client = ProviderClient::new(base_url);
    let err = client.analytics_summary().await.unwrap_err();

    assert_eq!(err.to_string(), "provider returned HTTP 500");
}

#[tokio::test]
async fn enveloped_failure_on_a_2xx_status_is_still_an_error() {
    let (base_url, _) = spawn_provider(vec![Route::get(
        "/health",
        200,
        envelope_err("database unavailable"),
    )])
    .await;

    let client = ProviderClient::new(base_url);
    let err = client.health().await.unwrap_err();

    assert!(
        matches!(err, RemoteError::Provider { ref message, .. } if message == "database unavailable")
    );
}

#[tokio::test]
async fn unreachable_provider_is_a_transport_error() {
    let base_url = dead_provider().await;

    let client = ProviderClient::new(base_url);
    let err = client.health().await.unwrap_err();

    assert!(matches!(err, RemoteError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let (base_url, _) = spawn_provider(vec![Route::get(
        "/health",
        200,
        "<html>gateway timeout</html>".to_string(),
    )])
    .await;

    let client = ProviderClient::new(base_url);
    let err = client.health().await.unwrap_err();

    assert!(matches!(err, RemoteError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn forecast_parses_series_and_metrics() {
    let payload = json!({
        "product_id": "P001",
        "forecast": [
            {"date": "2025-06-21", "predicted": 14.0, "confidence_lower": 10.0, "confidence_upper": 18.0},
            {"date": "2025-06-22", "predicted": 12.0, "confidence_lower": 9.0, "confidence_upper": 15.0}
        ],
        "chart_data": [
            {"date": "2025-06-20", "actual": 13.0, "predicted": null},
            {"date": "2025-06-21", "actual": null, "predicted": 14.0,
             "confidence_lower": 10.0, "confidence_upper": 18.0}
        ],
        "accuracy_metrics": {"mae": 1.4, "mape": 9.5, "accuracy": 90.5},
        "forecast_horizon_days": 7
    });
    let (base_url, _) = spawn_provider(vec![Route::get(
        "/forecast/P001",
        200,
        envelope_ok(payload),
    )])
    .await;

    let client = ProviderClient::new(base_url);
    let series = client.forecast(&ProductId::new("P001"), 7).await.unwrap();

    assert_eq!(series.forecast.len(), 2);
    assert_eq!(series.chart_data.len(), 2);
    assert_eq!(series.forecast_horizon_days, 7);
    let metrics = series.accuracy_metrics.unwrap();
    assert!((metrics.accuracy - 90.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn sales_history_parses_aggregates() {
    let payload = json!({
        "product_id": "P001",
        "sales_history": [
            {"date": "2025-06-18", "units_sold": 14, "price": 1.99}
        ],
        "total_units": 14,
        "average_daily_sales": 14.0,
        "days_covered": 1
    });
    let (base_url, _) = spawn_provider(vec![Route::get(
        "/products/P001/sales-history",
        200,
        envelope_ok(payload),
    )])
    .await;

    let client = ProviderClient::new(base_url);
    let history = client
        .sales_history(&ProductId::new("P001"), 30)
        .await
        .unwrap();

    assert_eq!(history.sales_history.len(), 1);
    assert_eq!(history.days_covered, 1);
}
