use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use sme_debt_core::cost_of_debt::{analyze_loan_cost, LoanInput};

use crate::input;

/// Arguments for loan cost analysis
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct CostAnalysisArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long, alias = "rate")]
    pub interest_rate: Option<Decimal>,

    /// Loan term in years
    #[arg(long)]
    pub term_years: Option<Decimal>,

    /// Corporate tax rate in percent (default 0)
    #[arg(long)]
    pub tax_rate: Option<Decimal>,
}

pub fn run(args: CostAnalysisArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input: LoanInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LoanInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            interest_rate: args.interest_rate.unwrap_or(Decimal::ZERO),
            term_years: args
                .term_years
                .ok_or("--term-years is required (or provide --input)")?,
            tax_rate: args.tax_rate.unwrap_or(Decimal::ZERO),
        }
    };

    let analysis = analyze_loan_cost(&loan_input)?;
    Ok(serde_json::to_value(analysis)?)
}
