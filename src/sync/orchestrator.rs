//! Per-resource fetch orchestration.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Mutex, RwLock};
use tracing::{debug, warn};

use super::fetcher::ResourceFetcher;
use super::state::RequestState;

/// Owns the [`RequestState`] of one remote resource and drives its fetch
/// lifecycle.
///
/// Re-fetches are triggered by input-key changes (value equality, not
/// identity) and by explicit [`refresh`](Self::refresh). Triggers never
/// cancel an in-flight fetch; instead every fetch is tagged with a sequence
/// number at trigger time and a completion is applied only while it is still
/// the most recently triggered fetch. A slow, superseded response is
/// silently discarded, so held state always reflects the newest trigger
/// regardless of completion order.
pub struct FetchOrchestrator<F: ResourceFetcher> {
    fetcher: F,
    state: RwLock<RequestState<F::Output>>,
    input: Mutex<Option<F::Key>>,
    seq: AtomicU64,
}

impl<F: ResourceFetcher> FetchOrchestrator<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            state: RwLock::new(RequestState::empty()),
            input: Mutex::new(None),
            seq: AtomicU64::new(0),
        }
    }

    /// Cloned snapshot of the current lifecycle state.
    pub fn snapshot(&self) -> RequestState<F::Output> {
        self.state.read().clone()
    }

    /// Last successfully fetched data, if any.
    pub fn data(&self) -> Option<F::Output> {
        self.state.read().data.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    /// Update the input key, re-fetching only if its value changed.
    pub async fn set_input(&self, key: F::Key) {
        {
            let input = self.input.lock();
            if input.as_ref() == Some(&key) {
                return;
            }
        }
        self.trigger(key).await;
    }

    /// Re-fetch with the current input key, if one was ever set.
    pub async fn refresh(&self) {
        let key = self.input.lock().clone();
        if let Some(key) = key {
            self.trigger(key).await;
        }
    }

    /// Store the key and fetch unconditionally.
    pub async fn trigger(&self, key: F::Key) {
        *self.input.lock() = Some(key.clone());

        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.write();
            if self.seq.load(Ordering::SeqCst) != seq {
                // Superseded before it even started; the newer trigger owns
                // the lifecycle from here.
                return;
            }
            state.begin();
        }
        debug!(
            resource = self.fetcher.resource_name(),
            seq, "Fetch triggered"
        );

        let result = self.fetcher.fetch(&key).await;

        let mut state = self.state.write();
        if self.seq.load(Ordering::SeqCst) != seq {
            debug!(
                resource = self.fetcher.resource_name(),
                seq, "Discarding superseded fetch result"
            );
            return;
        }

        match result {
            Ok(data) => {
                debug!(resource = self.fetcher.resource_name(), seq, "Fetch settled");
                state.succeed(data);
            }
            Err(err) => {
                warn!(
                    resource = self.fetcher.resource_name(),
                    seq,
                    error = %err,
                    "Fetch failed"
                );
                state.fail(err.to_string());
            }
        }
    }

    /// Mutate the held state in place, bypassing the fetch lifecycle.
    ///
    /// Reserved for resource-specific merge rules (single-item markdown).
    pub(crate) fn apply<R>(&self, f: impl FnOnce(&mut RequestState<F::Output>) -> R) -> R {
        f(&mut self.state.write())
    }
}
