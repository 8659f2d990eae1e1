use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use sme_debt_core::covenants::{check_covenants, CovenantInput};

use crate::input;

/// Arguments for covenant compliance checks
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct CovenantArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Total debt outstanding
    #[arg(long)]
    pub total_debt: Option<Decimal>,

    /// EBITDA
    #[arg(long)]
    pub ebitda: Option<Decimal>,

    /// Current assets
    #[arg(long)]
    pub current_assets: Option<Decimal>,

    /// Current liabilities
    #[arg(long)]
    pub current_liabilities: Option<Decimal>,

    /// Net worth
    #[arg(long)]
    pub net_worth: Option<Decimal>,
}

pub fn run(args: CovenantArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let covenant_input: CovenantInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        CovenantInput {
            total_debt: args
                .total_debt
                .ok_or("--total-debt is required (or provide --input)")?,
            ebitda: args
                .ebitda
                .ok_or("--ebitda is required (or provide --input)")?,
            current_assets: args
                .current_assets
                .ok_or("--current-assets is required (or provide --input)")?,
            current_liabilities: args
                .current_liabilities
                .ok_or("--current-liabilities is required (or provide --input)")?,
            net_worth: args
                .net_worth
                .ok_or("--net-worth is required (or provide --input)")?,
        }
    };

    let report = check_covenants(&covenant_input)?;
    Ok(serde_json::to_value(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_run_from_flags() {
        let value = run(CovenantArgs {
            input: None,
            total_debt: Some(dec!(200_000)),
            ebitda: Some(dec!(100_000)),
            current_assets: Some(dec!(150_000)),
            current_liabilities: Some(dec!(100_000)),
            net_worth: Some(dec!(200_000)),
        })
        .unwrap();

        assert_eq!(value["overall_compliant"], true);
    }
}
