use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

#[napi]
pub fn debt_brake_limit(input_json: String) -> NapiResult<String> {
    let input: sme_debt_core::debt_brake::DebtBrakeInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        sme_debt_core::debt_brake::debt_brake_limit(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn analyze_loan_cost(input_json: String) -> NapiResult<String> {
    let input: sme_debt_core::cost_of_debt::LoanInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        sme_debt_core::cost_of_debt::analyze_loan_cost(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn prioritize_debts(input_json: String) -> NapiResult<String> {
    let input: sme_debt_core::debt_snowball::SnowballInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        sme_debt_core::debt_snowball::prioritize_debts(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn match_funding_programs(input_json: String) -> NapiResult<String> {
    let input: sme_debt_core::funding::FundingQuery =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = sme_debt_core::funding::match_programs(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn check_covenants(input_json: String) -> NapiResult<String> {
    let input: sme_debt_core::covenants::CovenantInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = sme_debt_core::covenants::check_covenants(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn simulate_debt_equity_swap(input_json: String) -> NapiResult<String> {
    let input: sme_debt_core::debt_equity::SwapInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = sme_debt_core::debt_equity::simulate_swap(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
