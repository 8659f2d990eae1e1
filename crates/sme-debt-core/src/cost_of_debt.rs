use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::SmeDebtError;
use crate::types::{Money, Percent};
use crate::SmeDebtResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: Money,
    /// Annual interest rate as a percentage (5.0 = 5%).
    #[serde(default)]
    pub interest_rate: Percent,
    pub term_years: Decimal,
    /// Corporate tax rate as a percentage.
    #[serde(default)]
    pub tax_rate: Percent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanAnalysis {
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub after_tax_interest: Money,
    pub after_tax_cost: Money,
    /// After-tax effective interest rate over the life of the loan, in percent.
    pub effective_rate: Percent,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Pre- and after-tax cost of a fixed-rate loan via the annuity formula.
pub fn analyze_loan_cost(input: &LoanInput) -> SmeDebtResult<LoanAnalysis> {
    if input.principal <= Decimal::ZERO {
        return Err(SmeDebtError::InvalidInput {
            field: "principal".into(),
            reason: "principal must be greater than zero".into(),
        });
    }
    if input.interest_rate < Decimal::ZERO {
        return Err(SmeDebtError::InvalidInput {
            field: "interest_rate".into(),
            reason: "interest rate cannot be negative".into(),
        });
    }
    if input.term_years <= Decimal::ZERO {
        return Err(SmeDebtError::InvalidInput {
            field: "term_years".into(),
            reason: "loan term must be greater than zero".into(),
        });
    }
    if input.tax_rate < Decimal::ZERO || input.tax_rate >= dec!(100) {
        return Err(SmeDebtError::InvalidInput {
            field: "tax_rate".into(),
            reason: "tax rate must be at least 0% and below 100%".into(),
        });
    }

    let monthly_rate = input.interest_rate / dec!(12) / dec!(100);
    let num_payments = input.term_years * dec!(12);

    let monthly_payment = if monthly_rate > Decimal::ZERO {
        let growth = (Decimal::ONE + monthly_rate).powd(num_payments);
        input.principal * (monthly_rate * growth) / (growth - Decimal::ONE)
    } else {
        input.principal / num_payments
    };

    let total_payment = monthly_payment * num_payments;
    let total_interest = total_payment - input.principal;

    let after_tax_interest = total_interest * (Decimal::ONE - input.tax_rate / dec!(100));
    let after_tax_cost = input.principal + after_tax_interest;
    let effective_rate = after_tax_interest / input.principal * dec!(100);

    Ok(LoanAnalysis {
        monthly_payment,
        total_payment,
        total_interest,
        after_tax_interest,
        after_tax_cost,
        effective_rate,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
