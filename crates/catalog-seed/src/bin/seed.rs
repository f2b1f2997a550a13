//! Seeds the course catalog and prints a summary.
//!
//! Run with:
//! ```
//! cargo run -p catalog-seed --bin seed
//! ```

use std::process::ExitCode;

use anyhow::Context;
use catalog_seed::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config = SeedConfig::from_env().context("Failed to load configuration")?;
    let catalog = Catalog::builtin();
    catalog.validate().context("Builtin catalog is inconsistent")?;

    tracing::info!("Connecting to database at {}", config.redacted_url());
    let mut seeder = Seeder::connect(&config)
        .await
        .context("Failed to connect to database")?;

    let result = seeder.seed(&catalog).await;
    if let Err(e) = seeder.close().await {
        tracing::warn!(
            "Failed to close database connection: {:#}",
            anyhow::Error::from(e)
        );
    }
    let summary = result.context("Seeding failed")?;

    for line in summary.to_string().lines() {
        tracing::info!("{line}");
    }

    Ok(())
}
