// Copyright (c) 2025 - Cowboy AI, Inc.
//! Restaurant Registry CLI
//!
//! ```text
//! restaurant-registry import <file.json>
//! restaurant-registry show <id>
//! restaurant-registry search [--name N] [--location L] [--cuisine C]...
//! ```
//!
//! `import` reads a JSON array of registration commands and keeps going when
//! one of them fails; the exit status is non-zero if any failed.
//!
//! Storage is chosen with `REGISTRY_BACKEND` (`memory` or `nats`); see
//! `restaurant_registry::config` for the other variables. With the memory
//! backend nothing outlives the process.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use restaurant_registry::{
    config::{RegistryConfig, StorageBackend},
    repository::{InMemoryRestaurantRepository, NatsKvRestaurantRepository, RestaurantRepository},
    service::{RegisterRestaurant, RegistryService, RestaurantQuery, RestaurantService},
    NatsClient,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "restaurant-registry")]
#[command(about = "Register, look up and search restaurants")]
struct CommandLine {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Register every restaurant listed in a JSON file
    Import { path: PathBuf },
    /// Print one restaurant by id
    Show { id: String },
    /// Print the restaurants matching all given filters
    Search {
        /// Part of the restaurant name
        #[arg(long)]
        name: Option<String>,
        /// Part of the street, neighbourhood, city or state
        #[arg(long)]
        location: Option<String>,
        /// Cuisine code; repeat to require several
        #[arg(long = "cuisine")]
        cuisines: Vec<String>,
    },
}

impl Commands {
    fn query(name: Option<String>, location: Option<String>, cuisines: Vec<String>) -> RestaurantQuery {
        RestaurantQuery {
            name,
            location,
            cuisines,
        }
    }
}

async fn open_repository(config: &RegistryConfig) -> Result<Arc<dyn RestaurantRepository>> {
    match config.backend {
        StorageBackend::Memory => Ok(Arc::new(InMemoryRestaurantRepository::new())),
        StorageBackend::Nats => {
            let client = NatsClient::new(config.nats.clone())
                .await
                .context("Failed to connect to NATS")?;
            let repository = NatsKvRestaurantRepository::connect(&client, &config.bucket)
                .await
                .context("Failed to open restaurant bucket")?;
            Ok(Arc::new(repository))
        }
    }
}

async fn import<S: RestaurantService>(service: &S, path: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let commands: Vec<RegisterRestaurant> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a list of restaurants", path.display()))?;

    let total = commands.len();
    let mut failed = 0usize;

    for (position, command) in commands.into_iter().enumerate() {
        let name = command.name.clone();
        let outcome = match command.into_details() {
            Ok(details) => service.create(details).await.map_err(anyhow::Error::from),
            Err(e) => Err(anyhow::Error::from(e)),
        };

        match outcome {
            Ok(id) => info!(position, restaurant_id = %id, name = %name, "Imported restaurant"),
            Err(e) => {
                failed += 1;
                error!(position, name = %name, error = %e, "Import failed");
            }
        }
    }

    info!(total, failed, "Import finished");
    if failed > 0 {
        bail!("{failed} of {total} restaurants could not be imported");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = CommandLine::parse();

    let config = RegistryConfig::from_env().context("Invalid configuration")?;
    info!(backend = %config.backend, bucket = %config.bucket, "Configuration loaded");

    let service = RegistryService::new(open_repository(&config).await?);

    match cli.command {
        Commands::Import { path } => import(&service, &path).await?,
        Commands::Show { id } => {
            let restaurant = service.find_by_id(&id).await?;
            println!("{}", serde_json::to_string_pretty(&restaurant)?);
        }
        Commands::Search {
            name,
            location,
            cuisines,
        } => {
            let found = service
                .find_all_by(Commands::query(name, location, cuisines))
                .await?;
            println!("{}", serde_json::to_string_pretty(&found)?);
        }
    }

    Ok(())
}
