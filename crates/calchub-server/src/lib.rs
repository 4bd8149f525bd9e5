#![deny(warnings)]
//! Thin JSON boundary over the calculator registry and dispatcher.
//!
//! One logical call: `POST /calculate` takes `{calc_id, data}` and
//! returns `{result}`. Formula failures are part of the result string,
//! never HTTP errors, so a bad input can never take the service down or
//! leak state into the next request.

pub mod error;
pub mod types;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;

use calchub_calculator::{Dispatcher, InputBag};
use calchub_registry::CalculatorDescriptor;

use crate::error::ApiError;
use crate::types::{EvaluateRequest, EvaluateResponse};

/// Shared application state. The dispatcher is read-only after
/// startup, so a single instance serves concurrent requests without
/// locking.
pub struct AppState {
    pub dispatcher: Dispatcher,
}

const MAX_BODY_BYTES: usize = 64 * 1024;

pub fn create_app() -> Router {
    let state = Arc::new(AppState { dispatcher: Dispatcher::new() });
    info!(calculators = calchub_registry::catalog().len(), "calculator registry loaded");

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/calculators", get(list_calculators))
        .route("/calculators/{id}", get(find_calculator))
        .route("/calculate", post(calculate))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}

async fn list_calculators() -> Json<&'static [CalculatorDescriptor]> {
    Json(calchub_registry::catalog())
}

async fn find_calculator(
    Path(id): Path<String>,
) -> Result<Json<&'static CalculatorDescriptor>, ApiError> {
    calchub_registry::find(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound { resource: format!("calculator '{id}'") })
}

async fn calculate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EvaluateRequest>,
) -> Json<EvaluateResponse> {
    let inputs = InputBag::new(request.data);
    let result = state.dispatcher.evaluate(&request.calc_id, &inputs);
    Json(EvaluateResponse { result })
}
