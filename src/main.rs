use clap::Parser;
use shelfsense::app::App;
use shelfsense::cli::{self, CheckCommand, Cli, Commands};
use shelfsense::config::Config;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let args = Cli::parse();

    match args.command {
        Commands::Run(path) => {
            let config = load_or_exit(&path.config);
            config.init_logging();
            info!("shelfsense starting");

            tokio::select! {
                result = App::run(config) => {
                    if let Err(e) = result {
                        error!(error = %e, "Fatal error");
                        std::process::exit(1);
                    }
                }
                _ = signal::ctrl_c() => {
                    info!("Shutdown signal received");
                }
            }

            info!("shelfsense stopped");
        }
        Commands::Plan(path) => {
            let config = load_or_exit(&path.config);
            config.init_logging();

            if let Err(e) = cli::plan(config).await {
                eprintln!("Plan failed: {e}");
                std::process::exit(1);
            }
        }
        Commands::Inventory(inventory_args) => {
            let config = load_or_exit(&inventory_args.config);
            config.init_logging();

            if let Err(e) = cli::inventory(config, &inventory_args).await {
                eprintln!("Inventory listing failed: {e}");
                std::process::exit(1);
            }
        }
        Commands::Check(CheckCommand::Config(path)) => match Config::load(&path.config) {
            Ok(_) => println!("Configuration OK"),
            Err(e) => {
                eprintln!("Configuration invalid: {e}");
                std::process::exit(1);
            }
        },
        Commands::Check(CheckCommand::Health(path)) => {
            let config = load_or_exit(&path.config);

            if let Err(e) = cli::check_health(config).await {
                eprintln!("Provider unhealthy: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn load_or_exit(path: &std::path::Path) -> Config {
    match Config::load(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    }
}
