//! Debt prioritization endpoint.

use axum::{routing::post, Json, Router};

use sme_debt_core::debt_snowball::{prioritize_debts, SnowballInput, SnowballOutput};

use crate::error::ApiError;
use crate::AppState;

async fn calculate(Json(payload): Json<SnowballInput>) -> Result<Json<SnowballOutput>, ApiError> {
    let output = prioritize_debts(&payload)?;
    Ok(Json(output))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/debt-snowball", post(calculate))
}
