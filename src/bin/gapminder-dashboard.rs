//! Gapminder dashboard: GDP per capita vs. life expectancy by continent, per year.
//!
//! Run with: `cargo run --bin gapminder-dashboard`
//!
//! Environment:
//!   HOST     bind address (default 127.0.0.1)
//!   PORT     bind port (default 8050)
//!   DATASET  CSV path or URL (default: plotly's gapminderDataFiveYear.csv)
//!   RUST_LOG log filter (default info)

use dashboard::{
    run_server, DashboardApp, DataSource, DatasetLoader, ServerConfig, ViewSpec, GAPMINDER_URL,
};
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
    let source = DataSource::parse(
        &std::env::var("DATASET").unwrap_or_else(|_| GAPMINDER_URL.to_string()),
    );

    let dataset = DatasetLoader::new()?.load(&source).await?;
    let context = ViewSpec::gapminder().bind(Arc::new(dataset))?;
    let app = DashboardApp::gapminder(context)?;

    tracing::info!(
        source = %source,
        stops = app.slider().marks.len(),
        "Dashboard ready at http://{}",
        config.addr()
    );

    run_server(config, app).await
}
