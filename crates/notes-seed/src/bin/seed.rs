//! Seed script - initializes the Mediscreen notes database
//!
//! Run with:
//! ```
//! cargo run -p notes-seed --bin seed
//! ```

use mongodb::Client;
use notes_seed::config::SeedConfig;
use notes_seed::db::Seeder;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mongodb_url = std::env::var("MONGODB_URL")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

    let client = Client::with_uri_str(&mongodb_url).await?;

    tracing::info!("Connected to database");

    let report = Seeder::new(client).seed(&SeedConfig::default()).await?;

    // Summary output
    tracing::info!("MongoDB database initialized successfully!");
    tracing::info!("Number of notes inserted: {}", report.document_count);

    Ok(())
}
