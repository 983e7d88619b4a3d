//! Port trait between orchestrators and the data source.

use async_trait::async_trait;

use crate::error::RemoteError;

/// One fetchable remote resource.
///
/// The `Key` carries everything that determines what a fetch retrieves
/// (filters, identifiers); orchestrators compare keys by value to decide
/// whether an input change warrants a re-fetch. Keyless resources use `()`.
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    type Key: Clone + PartialEq + Send + Sync;
    type Output: Clone + Send + Sync;

    async fn fetch(&self, key: &Self::Key) -> Result<Self::Output, RemoteError>;

    /// Resource name for logging/debugging.
    fn resource_name(&self) -> &'static str;
}
