use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures surfaced while talking to the inventory intelligence provider.
///
/// `Transport` means the request never produced a usable response.
/// `Provider` means the provider answered and reported a failure, either as
/// a structured `{success: false, error}` envelope or a non-2xx status.
#[derive(Error, Debug, Clone)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("{message}")]
    Provider { status: u16, message: String },

    #[error("malformed response body: {0}")]
    Decode(String),
}

impl RemoteError {
    /// Provider error with the generic status-derived message, used when the
    /// envelope carries no error text.
    pub fn from_status(status: u16) -> Self {
        RemoteError::Provider {
            status,
            message: format!("provider returned HTTP {status}"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

pub type Result<T> = std::result::Result<T, Error>;
