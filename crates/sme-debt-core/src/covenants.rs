use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Ratio};
use crate::SmeDebtResult;

// Thresholds typical for German SME loan agreements.
const MAX_DEBT_TO_EBITDA: Decimal = dec!(3.0);
const MIN_CURRENT_RATIO: Decimal = dec!(1.2);
const MAX_DEBT_TO_EQUITY: Decimal = dec!(2.0);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CovenantInput {
    #[serde(default)]
    pub total_debt: Money,
    #[serde(default)]
    pub ebitda: Money,
    #[serde(default)]
    pub current_assets: Money,
    #[serde(default)]
    pub current_liabilities: Money,
    #[serde(default)]
    pub net_worth: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CovenantCheck {
    pub value: Ratio,
    pub threshold: Ratio,
    pub compliant: bool,
    pub description: String,
}

/// The three standard checks, keyed the way the API exposes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CovenantChecks {
    pub debt_to_ebitda: CovenantCheck,
    pub current_ratio: CovenantCheck,
    pub debt_to_equity: CovenantCheck,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CovenantReport {
    pub covenants: CovenantChecks,
    pub overall_compliant: bool,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Test the three standard SME covenants. Ratios with a non-positive
/// denominator report as 0 rather than erroring, preserving the reference
/// guard semantics.
pub fn check_covenants(input: &CovenantInput) -> SmeDebtResult<CovenantReport> {
    let debt_to_ebitda = guarded_ratio(input.total_debt, input.ebitda);
    let current_ratio = guarded_ratio(input.current_assets, input.current_liabilities);
    let debt_to_equity = guarded_ratio(input.total_debt, input.net_worth);

    let covenants = CovenantChecks {
        debt_to_ebitda: CovenantCheck {
            value: debt_to_ebitda,
            threshold: MAX_DEBT_TO_EBITDA,
            compliant: debt_to_ebitda <= MAX_DEBT_TO_EBITDA,
            description: "Debt-to-EBITDA Ratio".into(),
        },
        current_ratio: CovenantCheck {
            value: current_ratio,
            threshold: MIN_CURRENT_RATIO,
            compliant: current_ratio >= MIN_CURRENT_RATIO,
            description: "Current Ratio".into(),
        },
        debt_to_equity: CovenantCheck {
            value: debt_to_equity,
            threshold: MAX_DEBT_TO_EQUITY,
            compliant: debt_to_equity <= MAX_DEBT_TO_EQUITY,
            description: "Debt-to-Equity Ratio".into(),
        },
    };

    let overall_compliant = covenants.debt_to_ebitda.compliant
        && covenants.current_ratio.compliant
        && covenants.debt_to_equity.compliant;

    Ok(CovenantReport {
        covenants,
        overall_compliant,
    })
}

fn guarded_ratio(numerator: Money, denominator: Money) -> Ratio {
    if denominator > Decimal::ZERO {
        numerator / denominator
    } else {
        Decimal::ZERO
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
