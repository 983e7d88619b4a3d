//! Mock fetcher with a scripted response queue.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::error::RemoteError;
use crate::sync::ResourceFetcher;

struct Scripted<T> {
    result: Result<T, RemoteError>,
    gate: Option<oneshot::Receiver<()>>,
}

struct Inner<K, T> {
    name: &'static str,
    script: Mutex<VecDeque<Scripted<T>>>,
    calls: AtomicU32,
    keys: Mutex<Vec<K>>,
}

/// Fetcher that pops pre-scripted results in order.
///
/// Clones share the script, so a test can keep a handle while the
/// orchestrator owns another. Gated entries block until the test releases
/// them, which lets a test complete fetches in any order it likes. An
/// exhausted script answers with a transport error.
pub struct ScriptedFetcher<K, T> {
    inner: Arc<Inner<K, T>>,
}

impl<K, T> Clone for ScriptedFetcher<K, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, T> ScriptedFetcher<K, T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            inner: Arc::new(Inner {
                name,
                script: Mutex::new(VecDeque::new()),
                calls: AtomicU32::new(0),
                keys: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn push_ok(&self, value: T) {
        self.inner.script.lock().push_back(Scripted {
            result: Ok(value),
            gate: None,
        });
    }

    pub fn push_err(&self, error: RemoteError) {
        self.inner.script.lock().push_back(Scripted {
            result: Err(error),
            gate: None,
        });
    }

    /// Queue a success that completes only once the returned sender fires
    /// (or is dropped).
    pub fn push_gated_ok(&self, value: T) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.inner.script.lock().push_back(Scripted {
            result: Ok(value),
            gate: Some(rx),
        });
        tx
    }

    /// Queue a failure that completes only once the returned sender fires
    /// (or is dropped).
    pub fn push_gated_err(&self, error: RemoteError) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.inner.script.lock().push_back(Scripted {
            result: Err(error),
            gate: Some(rx),
        });
        tx
    }

    pub fn call_count(&self) -> u32 {
        self.inner.calls.load(Ordering::SeqCst)
    }
}

impl<K: Clone, T> ScriptedFetcher<K, T> {
    /// Keys seen so far, in call order.
    pub fn keys(&self) -> Vec<K> {
        self.inner.keys.lock().clone()
    }
}

#[async_trait]
impl<K, T> ResourceFetcher for ScriptedFetcher<K, T>
where
    K: Clone + PartialEq + Send + Sync,
    T: Clone + Send + Sync,
{
    type Key = K;
    type Output = T;

    async fn fetch(&self, key: &K) -> Result<T, RemoteError> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.keys.lock().push(key.clone());

        let entry = self.inner.script.lock().pop_front();
        match entry {
            Some(Scripted { result, gate }) => {
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                result
            }
            None => Err(RemoteError::Transport("scripted fetcher exhausted".into())),
        }
    }

    fn resource_name(&self) -> &'static str {
        self.inner.name
    }
}
