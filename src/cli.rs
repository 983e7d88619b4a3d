//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tabled::{Table, Tabled};

use crate::api::{InventoryQuery, ProviderClient};
use crate::config::Config;
use crate::domain::{
    build_plan, count_statuses, filter_items, InventoryFilter, ProductId, StockStatus,
};
use crate::error::Result;

/// Shelfsense - perishable inventory markdown decision support.
#[derive(Parser, Debug)]
#[command(name = "shelfsense")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the decision-support loop (foreground)
    Run(ConfigPathArg),

    /// Print the current markdown plan and exit
    Plan(ConfigPathArg),

    /// List inventory with optional filters
    Inventory(InventoryArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `shelfsense check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
    /// Probe the provider health endpoint
    Health(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(long, default_value = "config.toml")]
    pub config: PathBuf,
}

#[derive(Parser, Debug)]
pub struct InventoryArgs {
    /// Path to configuration file
    #[arg(long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Filter by provider-assigned status
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,

    /// Filter by exact category
    #[arg(long)]
    pub category: Option<String>,

    /// Case-insensitive name substring match
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Safe,
    Overstock,
    Expiring,
    Expired,
}

impl From<StatusArg> for StockStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Safe => StockStatus::Safe,
            StatusArg::Overstock => StockStatus::Overstock,
            StatusArg::Expiring => StockStatus::Expiring,
            StatusArg::Expired => StockStatus::Expired,
        }
    }
}

#[derive(Tabled)]
struct PlanTableRow {
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "Expires")]
    expires: String,
    #[tabled(rename = "Stock")]
    stock: u32,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Discount")]
    discount: String,
    #[tabled(rename = "New Price")]
    new_price: String,
    #[tabled(rename = "Proj. Units")]
    projected_units: String,
    #[tabled(rename = "Revenue")]
    revenue: String,
    #[tabled(rename = "Savings")]
    savings: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
}

/// Fetch the current snapshot and print the markdown plan.
pub async fn plan(config: Config) -> Result<()> {
    let client = ProviderClient::new(config.network.api_url.clone());

    let items = client.inventory(&InventoryQuery::default()).await?;
    let candidates: Vec<ProductId> = items
        .iter()
        .filter(|item| item.expires_within(config.policy.expiry_window_days))
        .map(|item| item.product_id.clone())
        .collect();

    if candidates.is_empty() {
        println!(
            "No markdown candidates within {} days of expiry.",
            config.policy.expiry_window_days
        );
        return Ok(());
    }

    let suggestions = client.batch_markdown(&candidates).await?;
    let plan = build_plan(&items, &suggestions, &config.policy.elasticity);

    let rows: Vec<PlanTableRow> = plan
        .rows
        .iter()
        .map(|row| PlanTableRow {
            product: format!("{} ({})", row.product_name, row.product_id),
            expires: row.expiry_date.to_string(),
            stock: row.stock,
            price: format!("${:.2}", row.current_price),
            discount: format!("{}%", row.suggested_discount),
            new_price: format!("${:.2}", row.impact.discounted_price),
            projected_units: format!("{:.0}", row.impact.projected_units_sold),
            revenue: format!("${:.2}", row.impact.potential_revenue),
            savings: format!("${:.2}", row.estimated_savings),
            confidence: format!("{:.0}%", row.confidence_score * 100.0),
        })
        .collect();

    println!("{}", Table::new(rows));
    println!(
        "{} candidates | potential savings ${:.2} | avg discount {:.0}% | avg confidence {:.0}%",
        plan.totals.eligible,
        plan.totals.total_potential_savings,
        plan.totals.average_discount,
        plan.totals.average_confidence * 100.0,
    );

    Ok(())
}

#[derive(Tabled)]
struct InventoryTableRow {
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Stock")]
    stock: u32,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Expires")]
    expires: String,
    #[tabled(rename = "Days Left")]
    days_left: i32,
    #[tabled(rename = "Status")]
    status: String,
}

/// Fetch the inventory snapshot and print it, filtered client-side.
pub async fn inventory(config: Config, args: &InventoryArgs) -> Result<()> {
    let client = ProviderClient::new(config.network.api_url.clone());
    let items = client.inventory(&InventoryQuery::default()).await?;

    let filter = InventoryFilter {
        status: args.status.map(Into::into),
        category: args.category.clone(),
        search: args.search.clone(),
    };
    let filtered = filter_items(&items, &filter);

    let rows: Vec<InventoryTableRow> = filtered
        .iter()
        .map(|item| InventoryTableRow {
            product: format!("{} ({})", item.product_name, item.product_id),
            category: item.category.clone(),
            stock: item.stock,
            price: format!("${:.2}", item.current_price),
            expires: item.expiry_date.to_string(),
            days_left: item.days_until_expiry,
            status: item.status.to_string(),
        })
        .collect();

    if rows.is_empty() {
        println!("No items match the current filters.");
        return Ok(());
    }

    println!("{}", Table::new(rows));

    let counts = count_statuses(filtered.iter().copied());
    println!(
        "{} items | {} expiring | {} overstock | {} safe",
        counts.total, counts.expiring, counts.overstock, counts.safe
    );

    Ok(())
}

/// Probe the provider and report its health.
pub async fn check_health(config: Config) -> Result<()> {
    let client = ProviderClient::new(config.network.api_url.clone());
    let health = client.health().await?;
    println!("provider {} (version {})", health.status, health.version);
    Ok(())
}
