//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod covenants;
pub mod cost_analysis;
pub mod debt_brake;
pub mod debt_equity;
pub mod debt_snowball;
pub mod funding;
pub mod health;
pub mod language;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(debt_brake::routes())
        .merge(cost_analysis::routes())
        .merge(debt_snowball::routes())
        .merge(funding::routes())
        .merge(covenants::routes())
        .merge(debt_equity::routes())
        .merge(language::routes())
}
