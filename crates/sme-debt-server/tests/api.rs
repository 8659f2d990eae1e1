//! Router-level integration tests, driven with `tower::ServiceExt::oneshot`.

use std::str::FromStr;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;

use sme_debt_server::{create_router, AppState};

fn app() -> axum::Router {
    create_router(AppState::new())
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_json(path: &str, payload: Value) -> (StatusCode, Value) {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

async fn get(path: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

/// Responses carry decimals as strings; parse them back for comparison.
fn decimal(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("expected a decimal string")).unwrap()
}

fn assert_close(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

#[tokio::test]
async fn health_reports_status_and_version() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).unwrap();
}

#[tokio::test]
async fn debt_brake_caps_a_million_at_3500() {
    let (status, body) = post_json("/api/debt-brake", json!({"revenue": 1_000_000})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&body["debt_limit"]), dec!(3500));
    assert_eq!(decimal(&body["percentage"]), dec!(0.35));
}

#[tokio::test]
async fn debt_brake_tolerates_an_empty_payload() {
    let (status, body) = post_json("/api/debt-brake", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&body["debt_limit"]), dec!(0));
}

#[tokio::test]
async fn cost_analysis_matches_reference_loan() {
    let (status, body) = post_json(
        "/api/cost-analysis",
        json!({
            "principal": 100_000,
            "interest_rate": 5.0,
            "term_years": 5,
            "tax_rate": 30
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_close(decimal(&body["monthly_payment"]), dec!(1887.12), dec!(0.01));
    assert_close(decimal(&body["total_interest"]), dec!(13227.40), dec!(0.01));
}

#[tokio::test]
async fn cost_analysis_rejects_zero_term() {
    let (status, body) = post_json(
        "/api/cost-analysis",
        json!({
            "principal": 100_000,
            "interest_rate": 5.0,
            "term_years": 0,
            "tax_rate": 30
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_input");
}

#[tokio::test]
async fn debt_snowball_orders_by_rate() {
    let (status, body) = post_json(
        "/api/debt-snowball",
        json!({
            "debts": [
                {"principal": 50_000, "interest_rate": 8.0, "minimum_payment": 1000},
                {"principal": 30_000, "interest_rate": 6.0, "minimum_payment": 800}
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let debts = body["prioritized_debts"].as_array().unwrap();
    assert_eq!(debts.len(), 2);
    assert_eq!(decimal(&debts[0]["interest_rate"]), dec!(8.0));
    assert_eq!(debts[0]["priority"], 1);
    assert_eq!(debts[1]["priority"], 2);
    assert!(decimal(&body["total_interest_saved"]) > dec!(0));
}

#[tokio::test]
async fn debt_snowball_flags_insufficient_payments() {
    let (status, body) = post_json(
        "/api/debt-snowball",
        json!({
            "debts": [
                {"principal": 10_000, "interest_rate": 12.0, "minimum_payment": 100}
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "insufficient_payment");
}

#[tokio::test]
async fn funding_filters_by_company_size() {
    let (status, body) = post_json(
        "/api/funding-guidance",
        json!({"company_size": "small", "industry": "technology", "purpose": "innovation"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_programs"], 1);
    assert_eq!(
        body["recommended_programs"][0]["name"],
        "Digital Innovation Fund"
    );

    let (status, body) = post_json("/api/funding-guidance", json!({"company_size": "large"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_programs"], 3);
}

#[tokio::test]
async fn funding_returns_empty_for_unknown_size() {
    let (status, body) =
        post_json("/api/funding-guidance", json!({"company_size": "gigantic"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_programs"], 0);
}

#[tokio::test]
async fn covenant_tracking_matches_reference_scenario() {
    let (status, body) = post_json(
        "/api/covenant-tracking",
        json!({
            "total_debt": 200_000,
            "ebitda": 100_000,
            "current_assets": 150_000,
            "current_liabilities": 100_000,
            "net_worth": 200_000
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&body["covenants"]["debt_to_ebitda"]["value"]), dec!(2));
    assert_eq!(decimal(&body["covenants"]["current_ratio"]["value"]), dec!(1.5));
    assert_eq!(decimal(&body["covenants"]["debt_to_equity"]["value"]), dec!(1));
    assert_eq!(body["overall_compliant"], true);
}

#[tokio::test]
async fn debt_equity_simulates_a_par_swap() {
    let (status, body) = post_json(
        "/api/debt-equity",
        json!({
            "debt_amount": 200_000,
            "company_valuation": 1_000_000,
            "existing_shares": 100_000,
            "conversion_ratio": 1.0
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&body["share_price"]), dec!(10));
    assert_eq!(decimal(&body["new_shares"]), dec!(20_000));
    assert_eq!(decimal(&body["total_shares_after"]), dec!(120_000));
}

#[tokio::test]
async fn debt_equity_with_zero_shares_maps_to_undefined_ratio() {
    let (status, body) = post_json(
        "/api/debt-equity",
        json!({
            "debt_amount": 200_000,
            "company_valuation": 1_000_000,
            "existing_shares": 0,
            "conversion_ratio": 1.0
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "undefined_ratio");
}

#[tokio::test]
async fn set_language_sets_cookie_and_redirects_back() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/set_language/de")
                .header(header::REFERER, "/cost-analysis")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/cost-analysis");
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("lang=de"));
}

#[tokio::test]
async fn set_language_ignores_unsupported_codes() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/set_language/fr")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn translations_serve_both_locales() {
    let (status, body) = get("/api/translations/de").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["debt_brake.title"], "Schuldenbremse-Rechner");

    let (status, body) = get("/api/translations/en").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["debt_brake.title"], "Debt Brake Calculator");

    let (status, body) = get("/api/translations/xx").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_input");
}
