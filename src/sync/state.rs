//! Per-resource request lifecycle state.

/// Snapshot of one remote resource's fetch lifecycle.
///
/// Lifecycle: created empty, `loading` set on every trigger, then settled by
/// exactly one completion. A failed fetch records its message in `error` and
/// leaves `data` at the last known good value (stale-but-available); it is
/// never cleared just because a later fetch failed.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> RequestState<T> {
    pub fn empty() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }

    /// Last known data survived a failed refresh.
    pub fn is_stale(&self) -> bool {
        self.data.is_some() && self.error.is_some()
    }

    pub(crate) fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub(crate) fn succeed(&mut self, data: T) {
        self.data = Some(data);
        self.error = None;
        self.loading = false;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self::empty()
    }
}
