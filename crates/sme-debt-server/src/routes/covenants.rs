//! Covenant compliance endpoint.

use axum::{routing::post, Json, Router};

use sme_debt_core::covenants::{check_covenants, CovenantInput, CovenantReport};

use crate::error::ApiError;
use crate::AppState;

async fn track(Json(payload): Json<CovenantInput>) -> Result<Json<CovenantReport>, ApiError> {
    let report = check_covenants(&payload)?;
    Ok(Json(report))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/covenant-tracking", post(track))
}
