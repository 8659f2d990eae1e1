use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Percent};
use crate::SmeDebtResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanySize {
    Small,
    Medium,
    Large,
}

impl CompanySize {
    /// Unknown sizes are not an error; the matcher simply recommends nothing.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }

    /// Largest program a company of this size is matched against.
    fn max_program_amount(self) -> Option<Money> {
        match self {
            Self::Small => Some(dec!(500_000)),
            Self::Medium => Some(dec!(2_000_000)),
            Self::Large => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingQuery {
    #[serde(default)]
    pub company_size: String,
    /// Accepted for forward compatibility; not a filter criterion today.
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub purpose: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingProgram {
    pub name: String,
    pub description: String,
    pub max_amount: Money,
    pub interest_rate: Percent,
    pub eligibility: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingMatches {
    pub recommended_programs: Vec<FundingProgram>,
    pub total_programs: usize,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The fixed catalog of German SME funding programs.
pub fn program_catalog() -> Vec<FundingProgram> {
    vec![
        FundingProgram {
            name: "KfW SME Loan".into(),
            description: "Low-interest loans for small and medium enterprises".into(),
            max_amount: dec!(1_000_000),
            interest_rate: dec!(2.5),
            eligibility: "SMEs with less than 250 employees".into(),
        },
        FundingProgram {
            name: "EU Horizon Europe".into(),
            description: "Innovation and research funding".into(),
            max_amount: dec!(5_000_000),
            interest_rate: Decimal::ZERO,
            eligibility: "Innovation-focused companies".into(),
        },
        FundingProgram {
            name: "Digital Innovation Fund".into(),
            description: "Funding for digital transformation".into(),
            max_amount: dec!(500_000),
            interest_rate: dec!(1.5),
            eligibility: "Companies implementing digital solutions".into(),
        },
    ]
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Match funding programs against company size. Small companies see programs
/// up to 500k, medium up to 2m, large everything.
pub fn match_programs(query: &FundingQuery) -> SmeDebtResult<FundingMatches> {
    let recommended: Vec<FundingProgram> = match CompanySize::parse(&query.company_size) {
        Some(size) => match size.max_program_amount() {
            Some(ceiling) => program_catalog()
                .into_iter()
                .filter(|p| p.max_amount <= ceiling)
                .collect(),
            None => program_catalog(),
        },
        None => Vec::new(),
    };

    let total_programs = recommended.len();
    Ok(FundingMatches {
        recommended_programs: recommended,
        total_programs,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
