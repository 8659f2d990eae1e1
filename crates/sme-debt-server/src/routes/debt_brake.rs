//! Debt brake limit endpoint.

use axum::{routing::post, Json, Router};

use sme_debt_core::debt_brake::{debt_brake_limit, DebtBrakeInput, DebtBrakeResult};

use crate::error::ApiError;
use crate::AppState;

async fn calculate(Json(payload): Json<DebtBrakeInput>) -> Result<Json<DebtBrakeResult>, ApiError> {
    let result = debt_brake_limit(&payload)?;
    Ok(Json(result))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/debt-brake", post(calculate))
}
