use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::SmeDebtError;
use crate::types::{Money, Ratio};
use crate::SmeDebtResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapInput {
    pub debt_amount: Money,
    pub company_valuation: Money,
    pub existing_shares: Decimal,
    /// Euros of equity issued per euro of debt converted (1.0 = at par).
    pub conversion_ratio: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapResult {
    pub share_price: Money,
    pub new_shares: Decimal,
    pub total_shares_after: Decimal,
    /// New shares as a fraction of the post-swap share count.
    pub dilution: Ratio,
    pub new_share_price: Money,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Simulate converting debt into equity at the pre-swap share price.
pub fn simulate_swap(input: &SwapInput) -> SmeDebtResult<SwapResult> {
    if input.debt_amount <= Decimal::ZERO {
        return Err(SmeDebtError::InvalidInput {
            field: "debt_amount".into(),
            reason: "debt amount must be greater than zero".into(),
        });
    }
    if input.company_valuation <= Decimal::ZERO {
        return Err(SmeDebtError::InvalidInput {
            field: "company_valuation".into(),
            reason: "valuation must be greater than zero".into(),
        });
    }
    // With no shares outstanding there is no share price to convert at.
    if input.existing_shares.is_zero() {
        return Err(SmeDebtError::DivisionByZero {
            context: "share price over zero existing shares".into(),
        });
    }
    if input.existing_shares < Decimal::ZERO {
        return Err(SmeDebtError::InvalidInput {
            field: "existing_shares".into(),
            reason: "existing share count cannot be negative".into(),
        });
    }
    if input.conversion_ratio <= Decimal::ZERO {
        return Err(SmeDebtError::InvalidInput {
            field: "conversion_ratio".into(),
            reason: "conversion ratio must be greater than zero".into(),
        });
    }

    let share_price = input.company_valuation / input.existing_shares;
    let new_shares = input.debt_amount * input.conversion_ratio / share_price;
    let total_shares_after = input.existing_shares + new_shares;
    let dilution = new_shares / total_shares_after;
    let new_share_price = input.company_valuation / total_shares_after;

    Ok(SwapResult {
        share_price,
        new_shares,
        total_shares_after,
        dilution,
        new_share_price,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_par_conversion() {
        // 1m valuation over 100k shares: 10/share. 200k of debt buys 20k shares.
        let result = simulate_swap(&SwapInput {
            debt_amount: dec!(200_000),
            company_valuation: dec!(1_000_000),
            existing_shares: dec!(100_000),
            conversion_ratio: dec!(1.0),
        })
        .unwrap();

        assert_eq!(result.share_price, dec!(10));
        assert_eq!(result.new_shares, dec!(20_000));
        assert_eq!(result.total_shares_after, dec!(120_000));
        assert_eq!(result.dilution, dec!(20_000) / dec!(120_000));
        assert_eq!(result.new_share_price, dec!(1_000_000) / dec!(120_000));
    }

    #[test]
    fn test_discounted_conversion_dilutes_more() {
        let at_par = simulate_swap(&SwapInput {
            debt_amount: dec!(200_000),
            company_valuation: dec!(1_000_000),
            existing_shares: dec!(100_000),
            conversion_ratio: dec!(1.0),
        })
        .unwrap();

        let sweetened = simulate_swap(&SwapInput {
            debt_amount: dec!(200_000),
            company_valuation: dec!(1_000_000),
            existing_shares: dec!(100_000),
            conversion_ratio: dec!(1.25),
        })
        .unwrap();

        assert!(sweetened.dilution > at_par.dilution);
        assert!(sweetened.new_share_price < at_par.new_share_price);
    }

    #[test]
    fn test_zero_shares_has_no_share_price() {
        let err = simulate_swap(&SwapInput {
            debt_amount: dec!(200_000),
            company_valuation: dec!(1_000_000),
            existing_shares: Decimal::ZERO,
            conversion_ratio: dec!(1.0),
        })
        .unwrap_err();

        assert!(matches!(err, SmeDebtError::DivisionByZero { .. }));
    }

    #[test]
    fn test_negative_shares_are_rejected() {
        let err = simulate_swap(&SwapInput {
            debt_amount: dec!(200_000),
            company_valuation: dec!(1_000_000),
            existing_shares: dec!(-100),
            conversion_ratio: dec!(1.0),
        })
        .unwrap_err();

        assert!(matches!(
            err,
            SmeDebtError::InvalidInput { ref field, .. } if field == "existing_shares"
        ));
    }
}
