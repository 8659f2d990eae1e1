//! Loan cost analysis endpoint.

use axum::{routing::post, Json, Router};

use sme_debt_core::cost_of_debt::{analyze_loan_cost, LoanAnalysis, LoanInput};

use crate::error::ApiError;
use crate::AppState;

async fn calculate(Json(payload): Json<LoanInput>) -> Result<Json<LoanAnalysis>, ApiError> {
    let analysis = analyze_loan_cost(&payload)?;
    Ok(Json(analysis))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/cost-analysis", post(calculate))
}
