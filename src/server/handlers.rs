//! HTTP request handlers for dashboard endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

use super::error::ApiError;
use super::page;
use super::state::AppState;
use crate::callbacks::{Dependency, UpdateRequest, UpdateResponse};
use crate::components::Component;
use crate::figure::Figure;

/// Health check endpoint
///
/// Returns a simple status response to verify the server is running
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}

/// GET / - Dashboard page
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(page::render(&state.app.title))
}

/// Response for the layout endpoint
#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub title: String,
    pub layout: Component,
}

/// GET /_dash-layout - Component tree for the page
pub async fn get_layout(State(state): State<Arc<AppState>>) -> Json<LayoutResponse> {
    Json(LayoutResponse {
        title: state.app.title.clone(),
        layout: state.app.layout(),
    })
}

/// GET /_dash-dependencies - Registered callbacks
pub async fn get_dependencies(State(state): State<Arc<AppState>>) -> Json<Vec<Dependency>> {
    Json(state.app.registry().dependencies())
}

/// POST /_dash-update-component - Run the callback for an output
pub async fn update_component(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UpdateRequest>, JsonRejection>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let Json(request) = payload?;
    debug!(output = %request.output, inputs = request.inputs.len(), "update-component");

    let response = state.app.registry().dispatch(&request)?;
    Ok(Json(response))
}

/// Query parameters for the figure endpoint
#[derive(Debug, Deserialize)]
pub struct FigureQueryParams {
    /// Slider value; defaults to the slider's initial position
    pub value: Option<f64>,
}

/// GET /figure?value=<f64> - Figure for a slider value
pub async fn get_figure(
    State(state): State<Arc<AppState>>,
    query: Result<Query<FigureQueryParams>, QueryRejection>,
) -> Result<Json<Figure>, ApiError> {
    let Query(params) = query?;
    let selected = params.value.unwrap_or(state.app.slider().value);
    if !selected.is_finite() {
        return Err(ApiError::InvalidParameter(format!(
            "Slider value must be finite, got {}",
            selected
        )));
    }

    Ok(Json(state.app.context().update_figure(selected)))
}
