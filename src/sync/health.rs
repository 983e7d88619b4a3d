//! Periodic provider health monitoring.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::info;

use super::fetcher::ResourceFetcher;
use super::orchestrator::FetchOrchestrator;
use super::resources::HealthFetcher;
use super::state::RequestState;
use crate::api::ProviderClient;

/// Handle for stopping a running health monitor.
///
/// Dropping the handle without calling [`shutdown`](Self::shutdown) also
/// stops the poll loop: the loop exits when the channel closes, releasing
/// the timer. An in-flight probe finishing afterwards settles against state
/// nobody observes any more.
pub struct HealthHandle {
    shutdown_tx: mpsc::Sender<()>,
}

impl HealthHandle {
    /// Signal the monitor to shut down gracefully.
    pub async fn shutdown(&self) {
        let _ = self.shutdown_tx.send(()).await;
    }
}

/// Polls the provider health endpoint on a fixed period, in addition to
/// on-demand probes.
pub struct HealthMonitor<F: ResourceFetcher<Key = ()>> {
    orchestrator: Arc<FetchOrchestrator<F>>,
    period: Duration,
}

impl HealthMonitor<HealthFetcher> {
    /// Monitor the given provider.
    pub fn for_provider(client: ProviderClient, period: Duration) -> Self {
        Self::new(HealthFetcher::new(client), period)
    }
}

impl<F> HealthMonitor<F>
where
    F: ResourceFetcher<Key = ()> + 'static,
    F::Output: 'static,
{
    pub fn new(fetcher: F, period: Duration) -> Self {
        Self {
            orchestrator: Arc::new(FetchOrchestrator::new(fetcher)),
            period,
        }
    }

    pub fn snapshot(&self) -> RequestState<F::Output> {
        self.orchestrator.snapshot()
    }

    /// `None` until the first probe settles, then whether the latest probe
    /// succeeded.
    pub fn is_healthy(&self) -> Option<bool> {
        let state = self.orchestrator.snapshot();
        if state.error.is_some() {
            Some(false)
        } else {
            state.data.as_ref().map(|_| true)
        }
    }

    /// Probe immediately, outside the periodic schedule.
    pub async fn check_now(&self) {
        self.orchestrator.trigger(()).await;
    }

    /// Probe once, then keep probing every period until shut down.
    pub fn start(&self) -> HealthHandle {
        let orchestrator = Arc::clone(&self.orchestrator);
        let period = self.period;
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately and doubles as the
            // initial probe.
            loop {
                tokio::select! {
                    result = shutdown_rx.recv() => {
                        if result.is_some() {
                            info!("Health monitor shutting down");
                        }
                        break;
                    }
                    _ = ticker.tick() => {
                        orchestrator.trigger(()).await;
                    }
                }
            }
        });

        HealthHandle { shutdown_tx }
    }
}
