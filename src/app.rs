//! App orchestration module.
//!
//! Wires the provider client into one orchestrator per resource, runs the
//! decision-support pass (inventory → markdown candidates → plan → forecast
//! checks → analytics), and keeps the pass fresh on a fixed period until
//! shutdown.

use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::api::{InventoryQuery, ProviderClient};
use crate::config::Config;
use crate::domain::{
    build_plan, count_statuses, recommend, summarize, InventoryItem, MarkdownPlan, ProductId,
};
use crate::error::Result;
use crate::sync::{
    AnalyticsFetcher, FetchOrchestrator, ForecastFetcher, ForecastRequest, HealthMonitor,
    InventoryFetcher, MarkdownBoard,
};

/// Main application struct.
pub struct App;

impl App {
    /// Run the decision-support loop until interrupted.
    pub async fn run(config: Config) -> Result<()> {
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        Self::run_with_shutdown(config, shutdown_rx).await
    }

    pub async fn run_with_shutdown(
        config: Config,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<()> {
        info!(api_url = %config.network.api_url, "Starting shelfsense");

        let client = ProviderClient::new(config.network.api_url.clone());

        let health = HealthMonitor::for_provider(
            client.clone(),
            Duration::from_secs(config.poll.health_interval_secs),
        );
        let health_handle = health.start();

        let inventory = FetchOrchestrator::new(InventoryFetcher::new(client.clone()));
        let markdown = MarkdownBoard::new(client.clone());
        let forecast = FetchOrchestrator::new(ForecastFetcher::new(client.clone()));
        let analytics = FetchOrchestrator::new(AnalyticsFetcher::new(client));

        run_pass(&config, &inventory, &markdown, &forecast, &analytics).await;

        let mut refresh_ticker = tokio::time::interval(Duration::from_secs(
            config.poll.refresh_interval_secs,
        ));
        refresh_ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        refresh_ticker.tick().await;

        loop {
            tokio::select! {
                result = shutdown.changed() => {
                    match result {
                        Ok(_) => {
                            if *shutdown.borrow() {
                                info!("Shutdown signal received");
                                break;
                            }
                        }
                        Err(_) => {
                            info!("Shutdown channel closed");
                            break;
                        }
                    }
                }
                _ = refresh_ticker.tick() => {
                    if health.is_healthy() == Some(false) {
                        warn!("Provider unhealthy; refreshing anyway with last-known data on failure");
                    }
                    inventory.refresh().await;
                    markdown.refresh().await;
                    run_pass(&config, &inventory, &markdown, &forecast, &analytics).await;
                }
            }
        }

        health_handle.shutdown().await;
        info!("shelfsense stopped");

        Ok(())
    }
}

/// One full decision-support pass over the current provider state.
async fn run_pass(
    config: &Config,
    inventory: &FetchOrchestrator<InventoryFetcher>,
    markdown: &MarkdownBoard,
    forecast: &FetchOrchestrator<ForecastFetcher>,
    analytics: &FetchOrchestrator<AnalyticsFetcher>,
) {
    inventory.set_input(InventoryQuery::default()).await;

    let snapshot = inventory.snapshot();
    let Some(items) = snapshot.data else {
        warn!(error = ?snapshot.error, "Inventory unavailable; skipping pass");
        return;
    };
    if let Some(error) = &snapshot.error {
        warn!(%error, "Inventory refresh failed; using last-known snapshot");
    }

    let counts = count_statuses(items.iter());
    info!(
        total = counts.total,
        expiring = counts.expiring,
        overstock = counts.overstock,
        safe = counts.safe,
        "Inventory snapshot"
    );

    let candidates: Vec<ProductId> = items
        .iter()
        .filter(|item| item.expires_within(config.policy.expiry_window_days))
        .map(|item| item.product_id.clone())
        .collect();

    if candidates.is_empty() {
        info!("No markdown candidates within the expiry window");
    } else {
        markdown.set_products(candidates).await;
        if let Some(error) = markdown.error() {
            warn!(%error, "Markdown suggestions unavailable");
        }

        let plan = build_plan(&items, &markdown.suggestions(), &config.policy.elasticity);
        log_plan(&plan);

        check_forecasts(config, &items, &plan, forecast).await;
    }

    analytics.trigger(()).await;
    match analytics.data() {
        Some(summary) => {
            info!(
                total_items = summary.inventory_overview.total_items,
                total_value = %summary.inventory_overview.total_value,
                expiring_items = summary.inventory_overview.expiring_items,
                potential_waste_value = %summary.waste_prevention.potential_waste_value,
                savings_opportunity = %summary.waste_prevention.estimated_savings_opportunity,
                "Catalog analytics"
            );
        }
        None => warn!(error = ?analytics.error(), "Analytics summary unavailable"),
    }
}

fn log_plan(plan: &MarkdownPlan) {
    info!(
        eligible = plan.totals.eligible,
        potential_savings = %plan.totals.total_potential_savings,
        average_discount = %plan.totals.average_discount,
        average_confidence = plan.totals.average_confidence,
        "Markdown plan"
    );

    for row in &plan.rows {
        info!(
            product = %row.product_id,
            name = %row.product_name,
            expires = %row.expiry_date,
            discount = %row.suggested_discount,
            new_price = %row.impact.discounted_price,
            projected_units = %row.impact.projected_units_sold,
            revenue = %row.impact.potential_revenue,
            savings = %row.estimated_savings,
            "Markdown candidate"
        );
    }
}

/// Sanity-check the top candidates' stock position against their demand
/// forecast.
async fn check_forecasts(
    config: &Config,
    items: &[InventoryItem],
    plan: &MarkdownPlan,
    forecast: &FetchOrchestrator<ForecastFetcher>,
) {
    for row in plan.rows.iter().take(3) {
        forecast
            .set_input(ForecastRequest {
                product_id: row.product_id.clone(),
                days: config.policy.forecast_horizon_days,
            })
            .await;

        let Some(series) = forecast.data() else {
            warn!(product = %row.product_id, error = ?forecast.error(), "Forecast unavailable");
            continue;
        };

        let summary = summarize(&series.forecast, series.forecast_horizon_days);
        let stock = items
            .iter()
            .find(|item| item.product_id == row.product_id)
            .map(|item| item.stock)
            .unwrap_or_default();
        let action = recommend(stock, summary.total_predicted_demand, &config.policy.stock);

        info!(
            product = %row.product_id,
            stock,
            predicted_demand = summary.total_predicted_demand,
            daily = summary.average_daily_demand,
            confidence_half_width = summary.confidence_half_width,
            action = action.as_str(),
            "Forecast check"
        );
    }
}
