//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file. Tunable decision-policy
//! constants (elasticity shape, stock thresholds) live in their own section
//! so the heuristics can be adjusted without touching orchestration code.

use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::{ElasticityPolicy, StockPolicy};
use crate::error::{ConfigError, Result};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub poll: PollConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
}

#[derive(Debug, Deserialize)]
pub struct NetworkConfig {
    /// Base URL of the inventory intelligence provider
    /// (e.g., `http://localhost:5000`).
    pub api_url: String,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Background polling configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PollConfig {
    /// Provider health check period in seconds.
    #[serde(default = "default_health_interval_secs")]
    pub health_interval_secs: u64,

    /// Catalog refresh period in seconds for the foreground run loop.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

const fn default_health_interval_secs() -> u64 {
    30
}

const fn default_refresh_interval_secs() -> u64 {
    300
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            health_interval_secs: default_health_interval_secs(),
            refresh_interval_secs: default_refresh_interval_secs(),
        }
    }
}

/// Decision-policy configuration for the derived analytics.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Elasticity heuristic shape for the markdown what-if model.
    #[serde(default)]
    pub elasticity: ElasticityPolicy,

    /// Stock-vs-demand thresholds for forecast recommendations.
    #[serde(default)]
    pub stock: StockPolicy,

    /// Products within this many days of expiry are markdown candidates.
    #[serde(default = "default_expiry_window_days")]
    pub expiry_window_days: i32,

    /// Forecast horizon requested from the provider.
    #[serde(default = "default_forecast_horizon_days")]
    pub forecast_horizon_days: u32,

    /// Sales-history window requested from the provider.
    #[serde(default = "default_sales_history_days")]
    pub sales_history_days: u32,
}

const fn default_expiry_window_days() -> i32 {
    5
}

const fn default_forecast_horizon_days() -> u32 {
    7
}

const fn default_sales_history_days() -> u32 {
    30
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            elasticity: ElasticityPolicy::default(),
            stock: StockPolicy::default(),
            expiry_window_days: default_expiry_window_days(),
            forecast_horizon_days: default_forecast_horizon_days(),
            sales_history_days: default_sales_history_days(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.network.api_url.is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        if self.poll.health_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "health_interval_secs",
                reason: "must be greater than zero".into(),
            }
            .into());
        }
        if self.poll.refresh_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "refresh_interval_secs",
                reason: "must be greater than zero".into(),
            }
            .into());
        }
        if self.policy.expiry_window_days < 0 {
            return Err(ConfigError::InvalidValue {
                field: "expiry_window_days",
                reason: "must not be negative".into(),
            }
            .into());
        }
        if self.policy.forecast_horizon_days == 0 {
            return Err(ConfigError::InvalidValue {
                field: "forecast_horizon_days",
                reason: "must be greater than zero".into(),
            }
            .into());
        }
        Ok(())
    }

    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig {
                api_url: "http://localhost:5000".into(),
            },
            logging: LoggingConfig {
                level: "info".into(),
                format: "pretty".into(),
            },
            poll: PollConfig::default(),
            policy: PolicyConfig::default(),
        }
    }
}
