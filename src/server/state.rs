//! Shared application state for the dashboard server

use crate::app::DashboardApp;
use std::sync::Arc;

/// Shared application state
///
/// The dashboard (dataset, slider, callback table) is built before the
/// server starts and only read afterwards, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub app: Arc<DashboardApp>,
}

impl AppState {
    /// Creates a new application state
    pub fn new(app: DashboardApp) -> Self {
        AppState { app: Arc::new(app) }
    }
}
