//! Uniform provider response envelope.

use serde::{Deserialize, Serialize};

use crate::error::RemoteError;

/// Wrapper around every provider response:
/// `{success, data?, error?, timestamp}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ResponseEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Provider-stamped ISO-8601 time, carried opaquely.
    pub timestamp: String,
}

impl<T> ResponseEnvelope<T> {
    /// Unwrap the envelope against the HTTP status it arrived with.
    ///
    /// A non-2xx status or `success=false` yields a provider error carrying
    /// the envelope's `error` text when present, else a generic
    /// status-derived message.
    pub fn into_result(self, status: u16) -> Result<T, RemoteError> {
        let status_ok = (200..300).contains(&status);
        if !status_ok || !self.success {
            return Err(match self.error {
                Some(message) => RemoteError::Provider { status, message },
                None => RemoteError::from_status(status),
            });
        }

        self.data.ok_or_else(|| {
            RemoteError::Decode("envelope marked success but carried no data".into())
        })
    }
}
