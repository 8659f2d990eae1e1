//! Debt-equity swap simulation endpoint.

use axum::{routing::post, Json, Router};

use sme_debt_core::debt_equity::{simulate_swap, SwapInput, SwapResult};

use crate::error::ApiError;
use crate::AppState;

async fn simulate(Json(payload): Json<SwapInput>) -> Result<Json<SwapResult>, ApiError> {
    let result = simulate_swap(&payload)?;
    Ok(Json(result))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/debt-equity", post(simulate))
}
