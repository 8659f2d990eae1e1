use rust_decimal::Decimal;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates as they appear on the wire: percentages (5.0 = 5%), not fractions.
pub type Percent = Decimal;

/// Dimensionless ratios (e.g. 2.1x debt/EBITDA).
pub type Ratio = Decimal;

/// Months round-trip through the payoff formulas as decimals, not integers.
pub type Months = Decimal;
