//! Brain dashboard: head size vs. brain weight by gender, per age group.
//!
//! Run with: `cargo run --bin brain-dashboard`
//! Set DATASET to point at another copy of brainheadclean.csv; HOST, PORT and
//! RUST_LOG behave as for the gapminder dashboard.

use dashboard::{run_server, DashboardApp, DataSource, DatasetLoader, ServerConfig, ViewSpec, BRAIN_PATH};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let config = ServerConfig::from_env();
    let source = DataSource::parse(&std::env::var("DATASET").unwrap_or_else(|_| BRAIN_PATH.to_string()));

    let dataset = DatasetLoader::new()?.load(&source).await?;
    let app = DashboardApp::brain(ViewSpec::brain().bind(Arc::new(dataset))?)?;

    tracing::info!(source = %source, "Dashboard ready at http://{}", config.addr());

    run_server(config, app).await
}
