//! Remote provider gateway: envelope contract and REST client.

mod client;
mod envelope;
mod types;

pub use client::ProviderClient;
pub use envelope::ResponseEnvelope;
pub use types::{BatchMarkdownRequest, InventoryQuery, ServiceHealth};
