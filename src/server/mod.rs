//! HTTP server exposing the dashboard page, its layout and the callback endpoint

mod error;
mod handlers;
mod page;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;

use crate::app::DashboardApp;
use std::sync::Arc;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server host address (default: "127.0.0.1")
    pub host: String,
    /// Server port (default: 8050)
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8050,
        }
    }
}

impl ServerConfig {
    /// Creates a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        ServerConfig {
            host: host.into(),
            port,
        }
    }

    /// Reads `HOST` and `PORT` from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = ServerConfig::default();
        let host = std::env::var("HOST").unwrap_or(defaults.host);
        let port = std::env::var("PORT")
            .ok()
            .and_then(|port| port.parse::<u16>().ok())
            .unwrap_or(defaults.port);
        ServerConfig { host, port }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Runs the dashboard server until it fails
///
/// The dashboard must already hold its loaded dataset; nothing is read from
/// disk or network after the listener binds.
///
/// # Example
/// ```rust,no_run
/// use dashboard::{run_server, DashboardApp, Dataset, ServerConfig, ViewSpec};
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let dataset = Arc::new(Dataset::from_csv_str("gender,age,headsize,brainwgt\n1,1,4512,1530\n")?);
///     let app = DashboardApp::brain(ViewSpec::brain().bind(dataset)?)?;
///     run_server(ServerConfig::default(), app).await?;
///     Ok(())
/// }
/// ```
pub async fn run_server(
    config: ServerConfig,
    app: DashboardApp,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::new(app));
    let router = create_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
