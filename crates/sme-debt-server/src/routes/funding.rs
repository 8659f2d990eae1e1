//! Funding program guidance endpoint.

use axum::{routing::post, Json, Router};

use sme_debt_core::funding::{match_programs, FundingMatches, FundingQuery};

use crate::error::ApiError;
use crate::AppState;

async fn recommend(Json(payload): Json<FundingQuery>) -> Result<Json<FundingMatches>, ApiError> {
    let matches = match_programs(&payload)?;
    Ok(Json(matches))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/funding-guidance", post(recommend))
}
