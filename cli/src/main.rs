//! Fare service CLI server
//!
//! ```sh
//! # Run with default config (~/.config/fare-service/config.toml)
//! fare-service
//!
//! # Custom config path
//! fare-service --config /etc/fare-service/config.toml
//!
//! # Override the API port
//! fare-service --api-port 8080
//!
//! # Validate config without starting
//! fare-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use fare_service::config::AppConfig;
use fare_service::server::{init_tracing, ServerHandle, ServerOptions};

/// Fare service: fares for flights and subfleets over a REST API.
#[derive(Parser, Debug)]
#[command(
    name = "fare-service",
    version,
    about = "Fare management for flights and subfleets",
    long_about = "REST API server for fares, with absolute and percentage \
                  overrides per flight and per subfleet.\n\n\
                  Default config: ~/.config/fare-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "FARE_SERVICE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(long)]
    api_port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .unwrap_or_else(fare_service::default_config_path);

    let loaded = AppConfig::load(&config_path);
    if cli.check {
        let config = loaded?;
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.api_addr());
        println!("   Database    : {}", config.database.connection_url());
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    let (mut config, load_error) = match loaded {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // CLI overrides win over the file, and must land before tracing starts
    if let Some(port) = cli.api_port {
        config.server.api_port = port;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
