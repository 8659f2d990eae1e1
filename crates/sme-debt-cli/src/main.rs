mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::covenants::CovenantArgs;
use commands::debt_brake::DebtBrakeArgs;
use commands::debt_equity::DebtEquityArgs;
use commands::debt_snowball::SnowballArgs;
use commands::funding::FundingArgs;
use commands::loans::CostAnalysisArgs;

/// Debt management calculators for German SMEs
#[derive(Parser)]
#[command(
    name = "smedebt",
    version,
    about = "Debt management calculators for German SMEs",
    long_about = "Financial calculators for small and medium enterprises with decimal \
                  precision. Supports debt-brake borrowing limits, loan cost analysis, \
                  debt payoff prioritization, funding-program matching, covenant \
                  compliance checks, and debt-equity swap simulation."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Conservative borrowing ceiling at 0.35% of annual revenue
    DebtBrake(DebtBrakeArgs),
    /// Pre- and after-tax cost of a fixed-rate loan
    CostAnalysis(CostAnalysisArgs),
    /// Rank debts by payoff priority and estimate interest saved
    DebtSnowball(SnowballArgs),
    /// Match funding programs to a company profile
    FundingGuidance(FundingArgs),
    /// Test the standard SME covenant ratios
    CovenantCheck(CovenantArgs),
    /// Simulate converting debt into equity
    DebtEquity(DebtEquityArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::DebtBrake(args) => commands::debt_brake::run(args),
        Commands::CostAnalysis(args) => commands::loans::run(args),
        Commands::DebtSnowball(args) => commands::debt_snowball::run(args),
        Commands::FundingGuidance(args) => commands::funding::run(args),
        Commands::CovenantCheck(args) => commands::covenants::run(args),
        Commands::DebtEquity(args) => commands::debt_equity::run(args),
        Commands::Version => {
            println!("smedebt {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
