use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::SmeDebtError;
use crate::types::{Money, Months, Percent};
use crate::SmeDebtResult;

/// Hard ceiling on simulated schedule length. Insufficiency validation keeps
/// real payoffs far below this; it only bounds pathological near-zero
/// amortization inputs.
const MAX_SCHEDULE_MONTHS: u32 = 1200;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Order in which debts are attacked once minimums are covered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoffStrategy {
    /// Avalanche ordering: highest interest rate first.
    #[default]
    HighestRateFirst,
    /// Conventional snowball ordering: smallest balance first.
    SmallestBalanceFirst,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtItem {
    pub principal: Money,
    /// Annual interest rate as a percentage.
    #[serde(default)]
    pub interest_rate: Percent,
    pub minimum_payment: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnowballInput {
    pub debts: Vec<DebtItem>,
    #[serde(default)]
    pub strategy: PayoffStrategy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrioritizedDebt {
    /// Rank-based identifier, 1 = attack first.
    pub debt_id: usize,
    pub principal: Money,
    pub interest_rate: Percent,
    pub minimum_payment: Money,
    /// Months to clear the debt paying only its own minimum.
    pub payoff_months: Months,
    pub priority: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnowballOutput {
    pub prioritized_debts: Vec<PrioritizedDebt>,
    /// Interest avoided by rolling freed minimums into the priority debt,
    /// versus paying every minimum until each debt clears on its own.
    pub total_interest_saved: Money,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Rank debts by payoff priority and estimate per-debt payoff time and the
/// interest saved by the rollover schedule.
pub fn prioritize_debts(input: &SnowballInput) -> SmeDebtResult<SnowballOutput> {
    for (i, debt) in input.debts.iter().enumerate() {
        validate_debt(i, debt)?;
    }

    // Stable sort: ties keep their submitted order.
    let mut ordered: Vec<&DebtItem> = input.debts.iter().collect();
    match input.strategy {
        PayoffStrategy::HighestRateFirst => {
            ordered.sort_by(|a, b| b.interest_rate.cmp(&a.interest_rate));
        }
        PayoffStrategy::SmallestBalanceFirst => {
            ordered.sort_by(|a, b| a.principal.cmp(&b.principal));
        }
    }

    let mut prioritized = Vec::with_capacity(ordered.len());
    for (rank, debt) in ordered.iter().enumerate() {
        prioritized.push(PrioritizedDebt {
            debt_id: rank + 1,
            principal: debt.principal,
            interest_rate: debt.interest_rate,
            minimum_payment: debt.minimum_payment,
            payoff_months: payoff_months(debt),
            priority: rank + 1,
        });
    }

    let baseline = schedule_interest(&ordered, false);
    let rolled = schedule_interest(&ordered, true);

    Ok(SnowballOutput {
        prioritized_debts: prioritized,
        total_interest_saved: baseline - rolled,
    })
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn validate_debt(index: usize, debt: &DebtItem) -> SmeDebtResult<()> {
    if debt.principal <= Decimal::ZERO {
        return Err(SmeDebtError::InvalidInput {
            field: format!("debts[{index}].principal"),
            reason: "principal must be greater than zero".into(),
        });
    }
    if debt.interest_rate < Decimal::ZERO {
        return Err(SmeDebtError::InvalidInput {
            field: format!("debts[{index}].interest_rate"),
            reason: "interest rate cannot be negative".into(),
        });
    }
    if debt.minimum_payment <= Decimal::ZERO {
        return Err(SmeDebtError::InvalidInput {
            field: format!("debts[{index}].minimum_payment"),
            reason: "minimum payment must be greater than zero".into(),
        });
    }
    // A payment at or below the monthly interest accrual never amortizes.
    let rate = monthly_rate(debt);
    if rate > Decimal::ZERO && debt.minimum_payment <= debt.principal * rate {
        return Err(SmeDebtError::InsufficientPayment { debt_index: index });
    }
    Ok(())
}

fn monthly_rate(debt: &DebtItem) -> Decimal {
    debt.interest_rate / dec!(12) / dec!(100)
}

/// Level-payment payoff term: n = -ln(1 - i·P/M) / ln(1 + i).
///
/// Validation has already ruled out M <= i·P, so both logarithm arguments
/// are strictly positive.
fn payoff_months(debt: &DebtItem) -> Months {
    let rate = monthly_rate(debt);
    if rate.is_zero() {
        return debt.principal / debt.minimum_payment;
    }
    let utilization = rate * debt.principal / debt.minimum_payment;
    -(Decimal::ONE - utilization).ln() / (Decimal::ONE + rate).ln()
}

/// Total interest paid over a month-by-month schedule. With `rollover`,
/// minimums freed by settled debts are redirected to the first open debt in
/// priority order; without it every debt services only its own minimum.
fn schedule_interest(ordered: &[&DebtItem], rollover: bool) -> Money {
    let mut balances: Vec<Decimal> = ordered.iter().map(|d| d.principal).collect();
    let mut interest_paid = Decimal::ZERO;

    for _ in 0..MAX_SCHEDULE_MONTHS {
        let target = balances.iter().position(|b| *b > Decimal::ZERO);
        let Some(target) = target else {
            break;
        };

        let mut freed = Decimal::ZERO;
        if rollover {
            for (debt, balance) in ordered.iter().zip(&balances) {
                if balance.is_zero() {
                    freed += debt.minimum_payment;
                }
            }
        }

        for (idx, debt) in ordered.iter().enumerate() {
            if balances[idx].is_zero() {
                continue;
            }
            let interest = balances[idx] * monthly_rate(debt);
            interest_paid += interest;

            let mut payment = debt.minimum_payment;
            if rollover && idx == target {
                payment += freed;
            }

            let owed = balances[idx] + interest;
            balances[idx] = if payment >= owed {
                Decimal::ZERO
            } else {
                owed - payment
            };
        }
    }

    interest_paid
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
