use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Percent};
use crate::SmeDebtResult;

/// 0.35% of revenue, the conservative borrowing ceiling modeled on
/// Germany's constitutional debt brake.
const DEBT_BRAKE_PCT: Decimal = dec!(0.35);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtBrakeInput {
    /// Annual revenue. Missing fields coerce to zero, matching the wire contract.
    #[serde(default)]
    pub revenue: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtBrakeResult {
    pub debt_limit: Money,
    pub revenue: Money,
    pub percentage: Percent,
}

/// Conservative borrowing ceiling at 0.35% of annual revenue.
///
/// Negative revenue is passed through rather than rejected; the limit simply
/// goes negative with it.
pub fn debt_brake_limit(input: &DebtBrakeInput) -> SmeDebtResult<DebtBrakeResult> {
    let debt_limit = input.revenue * DEBT_BRAKE_PCT / dec!(100);

    Ok(DebtBrakeResult {
        debt_limit,
        revenue: input.revenue,
        percentage: DEBT_BRAKE_PCT,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_one_million_revenue_caps_at_3500() {
        let result = debt_brake_limit(&DebtBrakeInput {
            revenue: dec!(1_000_000),
        })
        .unwrap();

        assert_eq!(result.debt_limit, dec!(3500));
        assert_eq!(result.revenue, dec!(1_000_000));
        assert_eq!(result.percentage, dec!(0.35));
    }

    #[test]
    fn test_zero_revenue_yields_zero_limit() {
        let result = debt_brake_limit(&DebtBrakeInput {
            revenue: Decimal::ZERO,
        })
        .unwrap();
        assert_eq!(result.debt_limit, Decimal::ZERO);
    }

    #[test]
    fn test_negative_revenue_is_passed_through() {
        let result = debt_brake_limit(&DebtBrakeInput {
            revenue: dec!(-100_000),
        })
        .unwrap();
        assert_eq!(result.debt_limit, dec!(-350));
    }

    #[test]
    fn test_missing_revenue_defaults_to_zero() {
        let input: DebtBrakeInput = serde_json::from_str("{}").unwrap();
        let result = debt_brake_limit(&input).unwrap();
        assert_eq!(result.debt_limit, Decimal::ZERO);
    }
}
