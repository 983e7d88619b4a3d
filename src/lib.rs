//! Shelfsense - perishable inventory markdown decision support.
//!
//! This crate keeps client-held views of a remote inventory-intelligence
//! provider consistent as inputs change, and computes decision-support
//! numbers (markdown impact, forecast summaries, stock-health counts) on
//! demand from the fetched data.
//!
//! # Architecture
//!
//! Data flows one way: the [`api`] gateway fetches enveloped JSON from the
//! provider, one [`sync`] orchestrator per resource owns that resource's
//! request state, and the pure functions in [`domain`] derive numbers from
//! snapshots without holding any state of their own.
//!
//! - **`sync::FetchOrchestrator`** - per-resource loading/error/data state
//!   machine with input-key change detection and an ordering guard that
//!   discards superseded completions
//! - **`sync::MarkdownBoard`** - markdown collection with single-item merge
//! - **`sync::HealthMonitor`** - periodic provider health polling
//! - **`domain::elasticity`** - what-if markdown impact heuristic
//! - **`domain::demand`** - forecast summaries and stock recommendations
//!
//! # Modules
//!
//! - [`api`] - provider gateway: response envelope and REST client
//! - [`app`] - application orchestration for the foreground run loop
//! - [`cli`] - command-line interface
//! - [`config`] - configuration loading from TOML files with policy settings
//! - [`domain`] - wire models and pure derived analytics
//! - [`error`] - error types for the crate
//! - [`sync`] - per-resource fetch orchestration
//!
//! # Example
//!
//! ```no_run
//! use shelfsense::api::ProviderClient;
//! use shelfsense::sync::{FetchOrchestrator, InventoryFetcher};
//!
//! # async fn demo() {
//! let client = ProviderClient::new("http://localhost:5000");
//! let inventory = FetchOrchestrator::new(InventoryFetcher::new(client));
//! inventory.set_input(Default::default()).await;
//! # }
//! ```

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod sync;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
