use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use sme_debt_core::debt_equity::{simulate_swap, SwapInput};

use crate::input;

/// Arguments for debt-equity swap simulation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct DebtEquityArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Debt amount to convert
    #[arg(long)]
    pub debt_amount: Option<Decimal>,

    /// Company valuation
    #[arg(long, alias = "valuation")]
    pub company_valuation: Option<Decimal>,

    /// Shares outstanding before the swap
    #[arg(long)]
    pub existing_shares: Option<Decimal>,

    /// Equity issued per euro of debt (default 1.0 = at par)
    #[arg(long)]
    pub conversion_ratio: Option<Decimal>,
}

pub fn run(args: DebtEquityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let swap_input: SwapInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        SwapInput {
            debt_amount: args
                .debt_amount
                .ok_or("--debt-amount is required (or provide --input)")?,
            company_valuation: args
                .company_valuation
                .ok_or("--company-valuation is required (or provide --input)")?,
            existing_shares: args
                .existing_shares
                .ok_or("--existing-shares is required (or provide --input)")?,
            conversion_ratio: args.conversion_ratio.unwrap_or(Decimal::ONE),
        }
    };

    let result = simulate_swap(&swap_input)?;
    Ok(serde_json::to_value(result)?)
}
